//! Site Integration Tests
//!
//! Renders the whole page from the club's content store and checks the
//! document-level guarantees: order, anchors, counts, year and repeatability.

use velo_club_site::actions::{request_gpx_download, DownloadOutcome};
use velo_club_site::content::{EventEntry, MembershipTier, ScheduleEntry, SkillLevel};
use velo_club_site::site::view_models::PHOTO_PLACEHOLDER_COUNT;
use velo_club_site::{
    build_page_data, submit_contact_form, ContactForm, ContentStore, JsonFormatter, SiteGenerator,
    SubmitOutcome,
};

fn render(store: &ContentStore, year: i32) -> String {
    SiteGenerator::new()
        .generate(store, year)
        .expect("page should render")
}

/// Values of every `attr="..."` occurrence in the document.
fn attribute_values<'a>(html: &'a str, attr: &str) -> Vec<&'a str> {
    let needle = format!(" {}=\"", attr);
    html.match_indices(&needle)
        .filter_map(|(start, _)| {
            let rest = &html[start + needle.len()..];
            rest.find('"').map(|end| &rest[..end])
        })
        .collect()
}

#[test]
fn test_every_in_page_link_resolves() {
    let html = render(&ContentStore::velo_club_slv(), 2025);
    let ids = attribute_values(&html, "id");
    let hrefs: Vec<&str> = attribute_values(&html, "href")
        .into_iter()
        .filter(|href| href.starts_with('#'))
        .collect();

    assert!(hrefs.len() >= 7 + 2 + 3 + 3 + 2, "expected nav, hero, card and footer links");
    for href in hrefs {
        assert!(ids.contains(&&href[1..]), "{} does not resolve to an element id", href);
    }
}

#[test]
fn test_no_external_navigation() {
    let html = render(&ContentStore::velo_club_slv(), 2025);
    for href in attribute_values(&html, "href") {
        assert!(href.starts_with('#'), "unexpected external link {}", href);
    }
}

#[test]
fn test_schedule_rows_follow_store_order() {
    let store = ContentStore::velo_club_slv();
    let html = render(&store, 2025);

    let mut last = 0;
    for entry in store.schedule {
        let row = format!(
            "<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
            entry.weekday,
            entry.time,
            entry.ride_type,
            entry.level.label(),
            entry.meeting_point
        );
        let pos = html
            .find(&row)
            .unwrap_or_else(|| panic!("missing row for {}", entry.weekday));
        assert!(pos >= last, "row for {} out of order", entry.weekday);
        last = pos;
        assert_eq!(html.matches(&format!("<td>{}</td>", entry.weekday)).count(), 1);
    }
}

#[test]
fn test_one_card_per_event_and_tier() {
    let store = ContentStore::velo_club_slv();
    let html = render(&store, 2025);

    assert_eq!(html.matches("<article class=\"card event\">").count(), store.events.len());
    for event in store.events {
        assert_eq!(html.matches(&format!("<h3>{}</h3>", event.title)).count(), 1);
        assert!(html.contains(&format!("<p class=\"event-date\">{}</p>", event.date_label)));
    }

    assert_eq!(html.matches("<article class=\"card tier\">").count(), store.membership.len());
    for tier in store.membership {
        assert!(html.contains(&format!("<p class=\"price\">{}</p>", tier.price)));
        assert!(html.contains(&format!("<p class=\"muted\">{}</p>", tier.details)));
    }
}

#[test]
fn test_custom_store_is_rendered() {
    const SCHEDULE: &[ScheduleEntry] = &[ScheduleEntry {
        weekday: "Lundi",
        time: "19:00",
        ride_type: "Nocturne",
        level: SkillLevel::Intermediate,
        meeting_point: "Gare",
    }];
    const EVENTS: &[EventEntry] = &[EventEntry {
        date_label: "1 janv.",
        title: "Sortie du nouvel an",
        description: "Galette au retour",
    }];
    const TIERS: &[MembershipTier] = &[MembershipTier {
        name: "Senior",
        price: "15€",
        details: "Plus de 65 ans",
    }];

    let store = ContentStore {
        schedule: SCHEDULE,
        events: EVENTS,
        membership: TIERS,
        ..ContentStore::velo_club_slv()
    };
    let html = render(&store, 2026);

    assert_eq!(html.matches("<tr class=\"ride\">").count(), 1);
    assert!(html.contains("<td>Lundi</td><td>19:00</td><td>Nocturne</td><td>Intermédiaire</td><td>Gare</td>"));
    assert!(html.contains("<h3>Sortie du nouvel an</h3>"));
    assert!(html.contains("<h3>Senior</h3>"));
    assert!(!html.contains("Mercredi"));
}

#[test]
fn test_empty_store_degrades_gracefully() {
    let store = ContentStore {
        nav: &[],
        schedule: &[],
        events: &[],
        membership: &[],
        membership_notes: &[],
        routes: &[],
        partners: &[],
        safety_rules: &[],
        association_rules: &[],
        ..ContentStore::velo_club_slv()
    };
    let html = render(&store, 2025);

    assert_eq!(html.matches("<tr class=\"ride\">").count(), 0);
    assert_eq!(html.matches("<article").count(), 0);
    assert_eq!(html.matches("class=\"photo-tile\"").count(), PHOTO_PLACEHOLDER_COUNT);
    assert!(html.contains("<section id=\"infos\""));
}

#[test]
fn test_gallery_tile_count_is_fixed() {
    let html = render(&ContentStore::velo_club_slv(), 2025);
    assert_eq!(html.matches("class=\"photo-tile\"").count(), 6);
}

#[test]
fn test_footer_year() {
    let html = render(&ContentStore::velo_club_slv(), 2025);
    assert!(html.contains("© 2025 Vélo Club Saint‑Léger‑les‑Vignes"));
}

#[test]
fn test_rendering_is_idempotent() {
    let store = ContentStore::velo_club_slv();
    assert_eq!(render(&store, 2025), render(&store, 2025));

    let first = JsonFormatter::format(&build_page_data(&store, 2025)).unwrap();
    let second = JsonFormatter::format(&build_page_data(&store, 2025)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_contact_submission_is_a_no_op() {
    let store = ContentStore::velo_club_slv();
    let before = render(&store, 2025);

    let form = ContactForm::new("Alice", "a@b.fr", "Bonjour");
    let outcome = submit_contact_form(&form).unwrap();
    assert_eq!(outcome, SubmitOutcome::Suppressed(form.clone()));
    assert_eq!(submit_contact_form(&form).unwrap(), outcome);

    assert_eq!(render(&store, 2025), before);
    assert!(before.contains("onsubmit=\"event.preventDefault();\""));
}

#[test]
fn test_slashes_render_unescaped() {
    let html = render(&ContentStore::velo_club_slv(), 2025);
    assert!(html.contains("<td>Gravel / VTC</td>"));
    assert!(html.contains("Boucles 25/45/70 km"));
}

#[test]
fn test_gpx_download_not_available() {
    let store = ContentStore::velo_club_slv();
    let route = &store.routes[0];
    assert_eq!(
        request_gpx_download(route),
        DownloadOutcome::Unavailable { route: "Boucle familiale du bourg" }
    );
}
