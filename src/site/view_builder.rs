//! View Builder - Converts the content store to view models
//!
//! Pure mapping: the store is borrowed, nothing is mutated, and the footer
//! year is the only input that does not come from the store.

use crate::actions::{FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME};
use crate::content::ContentStore;
use crate::site::sections::SectionId;
use crate::site::view_models::*;

/// Build complete page data from the content store.
pub fn build_page_data(store: &ContentStore, year: i32) -> PageData<'_> {
    PageData {
        title: store.club.name,
        header: build_header(store),
        hero: build_hero(store),
        schedule: build_schedule(store),
        events: build_events(store),
        membership: build_membership(store),
        routes: build_routes(store),
        gallery: build_gallery(),
        contact: build_contact(store),
        practical: build_practical_info(store),
        footer: build_footer(store, year),
    }
}

/// `#anchor` href for a section that has an id.
fn href(section: SectionId) -> String {
    format!("#{}", section.anchor().unwrap_or_default())
}

fn heading<'a>(
    section: SectionId,
    eyebrow: Option<&'a str>,
    title: &'a str,
    subtitle: Option<&'a str>,
) -> SectionHeading<'a> {
    SectionHeading {
        id: section.anchor().unwrap_or_default(),
        eyebrow,
        title,
        subtitle,
    }
}

// ============================================================================
// Header & Hero
// ============================================================================

fn build_header(store: &ContentStore) -> HeaderView<'_> {
    HeaderView {
        brand: store.club.name,
        logo_label: "Logo du club",
        brand_href: href(SectionId::Hero),
        links: store.nav,
    }
}

fn build_hero(store: &ContentStore) -> HeroView<'_> {
    let club = &store.club;
    HeroView {
        id: SectionId::Hero.anchor().unwrap_or_default(),
        pill: club.pill,
        headline: club.headline,
        lead: club.lead,
        actions: vec![
            CallToAction {
                href: href(SectionId::Membership),
                label: "Adhérer au club",
                primary: true,
            },
            CallToAction {
                href: href(SectionId::Schedule),
                label: "Voir les sorties",
                primary: false,
            },
        ],
        highlights: vec![club.member_count, club.values],
        meeting_point: club.meeting_point,
        meeting_note: club.meeting_note,
    }
}

// ============================================================================
// Schedule, Events, Membership, Routes
// ============================================================================

fn build_schedule(store: &ContentStore) -> ScheduleView<'_> {
    let rows = store
        .schedule
        .iter()
        .map(|entry| ScheduleRow {
            day: entry.weekday,
            time: entry.time,
            ride_type: entry.ride_type,
            level: entry.level.label(),
            start_point: entry.meeting_point,
        })
        .collect();

    ScheduleView {
        heading: heading(
            SectionId::Schedule,
            Some("Chaque semaine"),
            "Sorties encadrées",
            Some("Trois rendez‑vous réguliers pour rouler en sécurité et à son rythme. Casque obligatoire."),
        ),
        headers: SCHEDULE_HEADERS,
        rows,
        tip: store.schedule_tip,
    }
}

fn build_events(store: &ContentStore) -> EventsView<'_> {
    let cards = store
        .events
        .iter()
        .map(|event| EventCard {
            date_label: event.date_label,
            title: event.title,
            description: event.description,
            action: CallToAction {
                href: href(SectionId::Contact),
                label: "Je participe",
                primary: false,
            },
        })
        .collect();

    EventsView {
        heading: heading(
            SectionId::Events,
            Some("Agenda local"),
            "Événements à venir",
            Some("Inscriptions ouvertes en ligne ou sur place."),
        ),
        cards,
    }
}

fn build_membership(store: &ContentStore) -> MembershipView<'_> {
    let cards = store
        .membership
        .iter()
        .map(|tier| MembershipCard {
            name: tier.name,
            price: tier.price,
            details: tier.details,
            action: CallToAction {
                href: href(SectionId::Contact),
                label: "Demander le bulletin",
                primary: true,
            },
        })
        .collect();

    MembershipView {
        heading: heading(
            SectionId::Membership,
            Some(store.membership_season),
            "Adhérer au club",
            Some("Tarifs accessibles pour favoriser la pratique. Réduction famille sur justificatif."),
        ),
        cards,
        notes: store.membership_notes,
    }
}

fn build_routes(store: &ContentStore) -> RoutesView<'_> {
    let cards = store
        .routes
        .iter()
        .map(|route| RouteCard {
            name: route.name,
            distance_label: format!("{} km", route.distance_km),
            surface: route.surface,
            start_point: route.start_point,
            download_label: "Télécharger GPX",
        })
        .collect();

    RoutesView {
        heading: heading(
            SectionId::Routes,
            Some("Autour des vignes"),
            "Idées d’itinéraires",
            Some("Partez découvrir les chemins viticoles et les petites routes autour de Saint‑Léger‑les‑Vignes."),
        ),
        cards,
    }
}

// ============================================================================
// Gallery, Contact, Practical info, Footer
// ============================================================================

fn build_gallery() -> GalleryView {
    GalleryView {
        heading: heading(
            SectionId::Gallery,
            Some("Souvenirs"),
            "Galerie",
            Some("Quelques moments de nos sorties. (Remplacez par vos propres photos)"),
        ),
        tiles: (1..=PHOTO_PLACEHOLDER_COUNT)
            .map(|position| PhotoTile { position })
            .collect(),
    }
}

fn build_contact(store: &ContentStore) -> ContactView<'_> {
    let contact = &store.contact;

    let fields = vec![
        FormField {
            name: FIELD_NAME,
            label: "Nom",
            kind: FieldKind::Text,
            placeholder: "Votre nom",
            required: true,
        },
        FormField {
            name: FIELD_EMAIL,
            label: "Email",
            kind: FieldKind::Email,
            placeholder: "vous@exemple.fr",
            required: true,
        },
        FormField {
            name: FIELD_MESSAGE,
            label: "Message",
            kind: FieldKind::TextArea,
            placeholder: "Dites‑nous tout…",
            required: true,
        },
    ];

    ContactView {
        heading: heading(
            SectionId::Contact,
            Some("On vous répond vite"),
            "Contact",
            Some("Pour toute question, inscription ou partenariat local."),
        ),
        form: ContactFormView {
            aria_label: "Formulaire de contact",
            fields,
            submit_label: "Envoyer",
            privacy_notice: "En soumettant ce formulaire, vous acceptez que vos données soient utilisées pour répondre à votre demande (RGPD).",
        },
        details: vec![
            ContactLine { label: "Adresse", value: contact.address },
            ContactLine { label: "Email", value: contact.email },
            ContactLine { label: "Téléphone", value: contact.phone },
            ContactLine { label: "Facebook", value: contact.facebook },
            ContactLine { label: "Instagram", value: contact.instagram },
        ],
        partners: store.partners,
    }
}

fn build_practical_info(store: &ContentStore) -> PracticalInfoView<'_> {
    PracticalInfoView {
        heading: heading(SectionId::PracticalInfo, Some("Sécurité & pratique"), "Infos utiles", None),
        blocks: vec![
            RuleBlock { title: "Règles de sécurité", rules: store.safety_rules },
            RuleBlock { title: "Fonctionnement de l’association", rules: store.association_rules },
        ],
    }
}

fn build_footer(store: &ContentStore, year: i32) -> FooterView<'_> {
    FooterView {
        year,
        club_name: store.club.name,
        links: vec![
            CallToAction { href: href(SectionId::Contact), label: "Mentions légales", primary: false },
            CallToAction { href: href(SectionId::Contact), label: "Politique RGPD", primary: false },
        ],
    }
}
