//! The club's content store.
//!
//! All page content lives here as compile-time constants. Nothing is ever
//! added, removed or edited at runtime.

use serde::Serialize;

use super::types::*;

/// Immutable collection of every record and copy block the page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentStore {
    pub club: ClubIdentity,
    pub nav: &'static [NavLink],
    pub schedule: &'static [ScheduleEntry],
    pub schedule_tip: &'static str,
    pub events: &'static [EventEntry],
    pub membership_season: &'static str,
    pub membership: &'static [MembershipTier],
    pub membership_notes: &'static [&'static str],
    pub routes: &'static [RouteEntry],
    pub contact: ContactDetails,
    pub partners: &'static [&'static str],
    pub safety_rules: &'static [&'static str],
    pub association_rules: &'static [&'static str],
}

impl ContentStore {
    /// Content of the Vélo Club Saint‑Léger‑les‑Vignes page.
    pub const fn velo_club_slv() -> Self {
        Self {
            club: CLUB,
            nav: NAV,
            schedule: SCHEDULE,
            schedule_tip: "Conseil : arrivez 10 min en avance, emportez eau, chambre à air et veste coupe‑vent.",
            events: EVENTS,
            membership_season: "Saison 2025",
            membership: MEMBERSHIP,
            membership_notes: MEMBERSHIP_NOTES,
            routes: ROUTES,
            contact: CONTACT,
            partners: PARTNERS,
            safety_rules: SAFETY_RULES,
            association_rules: ASSOCIATION_RULES,
        }
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::velo_club_slv()
    }
}

const CLUB: ClubIdentity = ClubIdentity {
    name: "Vélo Club Saint‑Léger‑les‑Vignes",
    pill: "Association locale • ~3 000 habitants",
    headline: "Pédalons ensemble à Saint‑Léger‑les‑Vignes",
    lead: "Le Vélo Club SLV rassemble les cyclistes de tous âges et de tous niveaux : route, gravel, VTC et VTT. Sorties hebdomadaires, événements conviviaux et entraide mécanique au cœur du bourg.",
    member_count: "60 adhérents",
    values: "Bénévole & ouvert à tous",
    meeting_point: "Place du Marché",
    meeting_note: "Stationnement facile • Fontaine à eau",
};

const NAV: &[NavLink] = &[
    NavLink { href: "#accueil", label: "Accueil" },
    NavLink { href: "#sorties", label: "Sorties" },
    NavLink { href: "#evenements", label: "Événements" },
    NavLink { href: "#adhesion", label: "Adhésion" },
    NavLink { href: "#itineraire", label: "Itinéraires" },
    NavLink { href: "#galerie", label: "Galerie" },
    NavLink { href: "#contact", label: "Contact" },
];

const SCHEDULE: &[ScheduleEntry] = &[
    ScheduleEntry {
        weekday: "Mercredi",
        time: "18:30",
        ride_type: "Route tranquille",
        level: SkillLevel::Beginner,
        meeting_point: "Mairie",
    },
    ScheduleEntry {
        weekday: "Samedi",
        time: "09:00",
        ride_type: "Gravel / VTC",
        level: SkillLevel::Intermediate,
        meeting_point: "Place du Marché",
    },
    ScheduleEntry {
        weekday: "Dimanche",
        time: "08:30",
        ride_type: "Route sportive",
        level: SkillLevel::Advanced,
        meeting_point: "Salle des Fêtes",
    },
];

const EVENTS: &[EventEntry] = &[
    EventEntry {
        date_label: "12 oct.",
        title: "Randonnée des Vignes",
        description: "Boucles 25/45/70 km • ravitos",
    },
    EventEntry {
        date_label: "9 nov.",
        title: "Atelier réparation",
        description: "Freins & réglages dérailleur",
    },
    EventEntry {
        date_label: "7 déc.",
        title: "Téléthon à vélo",
        description: "Tour solidaire autour du bourg",
    },
];

const MEMBERSHIP: &[MembershipTier] = &[
    MembershipTier { name: "Jeune (-18)", price: "10€", details: "Assurance comprise" },
    MembershipTier { name: "Adulte", price: "25€", details: "Licence loisir incluse" },
    MembershipTier { name: "Famille", price: "40€", details: "Jusqu’à 4 personnes" },
];

const MEMBERSHIP_NOTES: &[&str] = &[
    "Certificat médical conseillé (moins d’un an) pour les sorties sportives.",
    "Casque et éclairages obligatoires de nuit.",
    "Assurance responsabilité civile requise (assurance club possible).",
];

const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        distance_km: 12,
        name: "Boucle familiale du bourg",
        surface: "majorité voies partagées",
        start_point: "Mairie",
    },
    RouteEntry {
        distance_km: 28,
        name: "Route des Coteaux",
        surface: "route",
        start_point: "Place du Marché",
    },
    RouteEntry {
        distance_km: 45,
        name: "Gravel des Vignes",
        surface: "chemins & petites routes",
        start_point: "Salle des Fêtes",
    },
];

const CONTACT: ContactDetails = ContactDetails {
    address: "44710 Saint‑Léger‑les‑Vignes",
    email: "contact@veloclub-slv.fr",
    phone: "06 00 00 00 00",
    facebook: "facebook.com/veloclubslv",
    instagram: "@veloclub_slv",
};

const PARTNERS: &[&str] = &[
    "Maison des Associations de Saint‑Léger‑les‑Vignes",
    "Commerçants du bourg",
    "Clubs voisins (route & VTT)",
];

const SAFETY_RULES: &[&str] = &[
    "Respect du code de la route et des autres usagers.",
    "Gilet haute visibilité dès la tombée de la nuit.",
    "Roulez à deux de front maximum, en file indienne si nécessaire.",
    "Prévenez les dangers et attendez au sommet des côtes.",
];

const ASSOCIATION_RULES: &[&str] = &[
    "Assemblée générale annuelle à l’automne.",
    "Bureau : président, secrétaire, trésorier, référents sorties.",
    "Communication via email et groupe messagerie.",
];
