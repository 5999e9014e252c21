//! View Models for the club page
//!
//! One structured view per section, borrowed from the content store.
//! These feed the Askama section templates and the JSON export.

use serde::Serialize;

use crate::content::NavLink;

/// Number of empty photo tiles in the gallery.
pub const PHOTO_PLACEHOLDER_COUNT: usize = 6;

/// Column headers of the schedule table, in display order.
pub const SCHEDULE_HEADERS: [&str; 5] = ["Jour", "Heure", "Type", "Niveau", "Point de départ"];

/// Complete composed page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageData<'a> {
    pub title: &'a str,
    pub header: HeaderView<'a>,
    pub hero: HeroView<'a>,
    pub schedule: ScheduleView<'a>,
    pub events: EventsView<'a>,
    pub membership: MembershipView<'a>,
    pub routes: RoutesView<'a>,
    pub gallery: GalleryView,
    pub contact: ContactView<'a>,
    pub practical: PracticalInfoView<'a>,
    pub footer: FooterView<'a>,
}

/// Heading block shared by every content section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionHeading<'a> {
    pub id: &'a str,
    pub eyebrow: Option<&'a str>,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
}

impl SectionHeading<'_> {
    pub fn title_id(&self) -> String {
        format!("{}-title", self.id)
    }
}

/// In-page link styled as a button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallToAction<'a> {
    pub href: String,
    pub label: &'a str,
    pub primary: bool,
}

impl CallToAction<'_> {
    pub fn css_class(&self) -> &'static str {
        if self.primary {
            "btn btn-primary"
        } else {
            "btn btn-outline"
        }
    }
}

// ============================================================================
// Header & Hero
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView<'a> {
    pub brand: &'a str,
    /// Screen-reader label for the logo.
    pub logo_label: &'a str,
    pub brand_href: String,
    pub links: &'a [NavLink],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView<'a> {
    pub id: &'a str,
    pub pill: &'a str,
    pub headline: &'a str,
    pub lead: &'a str,
    pub actions: Vec<CallToAction<'a>>,
    pub highlights: Vec<&'a str>,
    pub meeting_point: &'a str,
    pub meeting_note: &'a str,
}

// ============================================================================
// Schedule
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleView<'a> {
    pub heading: SectionHeading<'a>,
    pub headers: [&'a str; 5],
    pub rows: Vec<ScheduleRow<'a>>,
    pub tip: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow<'a> {
    pub day: &'a str,
    pub time: &'a str,
    pub ride_type: &'a str,
    pub level: &'a str,
    pub start_point: &'a str,
}

impl<'a> ScheduleRow<'a> {
    /// Cell values in the same order as [`SCHEDULE_HEADERS`].
    pub fn cells(&self) -> [&'a str; 5] {
        [self.day, self.time, self.ride_type, self.level, self.start_point]
    }
}

// ============================================================================
// Events & Membership
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventsView<'a> {
    pub heading: SectionHeading<'a>,
    pub cards: Vec<EventCard<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventCard<'a> {
    pub date_label: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub action: CallToAction<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipView<'a> {
    pub heading: SectionHeading<'a>,
    pub cards: Vec<MembershipCard<'a>>,
    pub notes: &'a [&'a str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipCard<'a> {
    pub name: &'a str,
    pub price: &'a str,
    pub details: &'a str,
    pub action: CallToAction<'a>,
}

// ============================================================================
// Routes & Gallery
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutesView<'a> {
    pub heading: SectionHeading<'a>,
    pub cards: Vec<RouteCard<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteCard<'a> {
    pub name: &'a str,
    pub distance_label: String,
    pub surface: &'a str,
    pub start_point: &'a str,
    pub download_label: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryView {
    pub heading: SectionHeading<'static>,
    pub tiles: Vec<PhotoTile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhotoTile {
    pub position: usize,
}

// ============================================================================
// Contact & Practical info
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactView<'a> {
    pub heading: SectionHeading<'a>,
    pub form: ContactFormView<'a>,
    pub details: Vec<ContactLine<'a>>,
    pub partners: &'a [&'a str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactFormView<'a> {
    pub aria_label: &'a str,
    pub fields: Vec<FormField<'a>>,
    pub submit_label: &'a str,
    pub privacy_notice: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub kind: FieldKind,
    pub placeholder: &'a str,
    pub required: bool,
}

impl FormField<'_> {
    pub fn input_id(&self) -> String {
        format!("contact-{}", self.name)
    }

    pub fn is_textarea(&self) -> bool {
        self.kind == FieldKind::TextArea
    }

    pub fn input_type(&self) -> &'static str {
        match self.kind {
            FieldKind::Email => "email",
            FieldKind::Text | FieldKind::TextArea => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactLine<'a> {
    pub label: &'a str,
    pub value: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PracticalInfoView<'a> {
    pub heading: SectionHeading<'a>,
    pub blocks: Vec<RuleBlock<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleBlock<'a> {
    pub title: &'a str,
    pub rules: &'a [&'a str],
}

// ============================================================================
// Footer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterView<'a> {
    pub year: i32,
    pub club_name: &'a str,
    pub links: Vec<CallToAction<'a>>,
}

impl FooterView<'_> {
    pub fn copyright(&self) -> String {
        format!("© {} {} — Tous droits réservés.", self.year, self.club_name)
    }
}
