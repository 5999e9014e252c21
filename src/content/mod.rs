//! Content Store
//!
//! Literal records for every list the page renders: weekly rides, events,
//! membership tiers and routes, plus the static copy around them.

pub mod types;
pub mod store;

pub use types::{
    ClubIdentity, ContactDetails, EventEntry, MembershipTier, NavLink, RouteEntry, ScheduleEntry,
    SkillLevel,
};
pub use store::ContentStore;
