//! Record types held by the content store.
//!
//! Every field is a `&'static str` (or a plain number) so the whole store can be
//! built in `const` context and borrowed by the view composer without cloning.

use serde::Serialize;

/// Skill level advertised for a weekly ride
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Débutant",
            SkillLevel::Intermediate => "Intermédiaire",
            SkillLevel::Advanced => "Confirmé",
        }
    }
}

/// One weekly ride in the schedule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub weekday: &'static str,
    pub time: &'static str,
    pub ride_type: &'static str,
    pub level: SkillLevel,
    pub meeting_point: &'static str,
}

/// One upcoming event card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventEntry {
    pub date_label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// One membership pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MembershipTier {
    pub name: &'static str,
    pub price: &'static str,
    pub details: &'static str,
}

/// One suggested route around the village.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub distance_km: u32,
    pub name: &'static str,
    pub surface: &'static str,
    pub start_point: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Club name and hero copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClubIdentity {
    pub name: &'static str,
    pub pill: &'static str,
    pub headline: &'static str,
    pub lead: &'static str,
    pub member_count: &'static str,
    pub values: &'static str,
    pub meeting_point: &'static str,
    pub meeting_note: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub address: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub facebook: &'static str,
    pub instagram: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_labels() {
        assert_eq!(SkillLevel::Beginner.label(), "Débutant");
        assert_eq!(SkillLevel::Intermediate.label(), "Intermédiaire");
        assert_eq!(SkillLevel::Advanced.label(), "Confirmé");
    }

    #[test]
    fn test_skill_level_serializes_as_variant_name() {
        let json = serde_json::to_string(&SkillLevel::Intermediate).unwrap();
        assert_eq!(json, "\"Intermediate\"");
    }
}
