//! Activity Card Markup
//!
//! Pure rendering of a snapshot into escaped HTML. Cards are rebuilt
//! wholesale on every refresh, so the markup depends only on the snapshot.

use crate::state::snapshot::{ActivitiesSnapshot, ActivityDetails};

/// Placeholder shown in the activity selector
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Shown in place of the listing when the activities could not be loaded
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// Escape text for insertion into HTML content or a quoted attribute
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One rendered activity card
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub markup: String,
}

/// What the activities listing currently shows
#[derive(Clone, Debug, PartialEq)]
pub enum Listing {
    Loading,
    Failed,
    Cards(Vec<ActivityCard>),
}

impl Listing {
    pub fn from_snapshot(snapshot: &ActivitiesSnapshot) -> Self {
        Listing::Cards(
            snapshot
                .iter()
                .map(|activity| ActivityCard {
                    name: activity.name.clone(),
                    markup: activity_card_html(&activity.name, &activity.details),
                })
                .collect(),
        )
    }
}

/// Inner markup of an activity card
pub fn activity_card_html(name: &str, details: &ActivityDetails) -> String {
    let name = escape_html(name);

    format!(
        "<h4>{name}</h4>\
         <p>{description}</p>\
         <p><strong>Schedule:</strong> {schedule}</p>\
         <p><strong>Availability:</strong> {spots} spots left</p>\
         {participants}",
        description = escape_html(&details.description),
        schedule = escape_html(&details.schedule),
        spots = details.spots_left(),
        participants = participants_html(&name, &details.participants),
    )
}

fn participants_html(escaped_name: &str, participants: &[String]) -> String {
    if participants.is_empty() {
        return "<div class=\"participants\"><strong>Participants:</strong>\
                <p class=\"no-participants\">No participants yet.</p></div>"
            .to_string();
    }

    let items: String = participants
        .iter()
        .map(|email| {
            let email = escape_html(email);
            format!(
                "<li data-email=\"{email}\" data-activity=\"{escaped_name}\">{email} \
                 <button class=\"delete-btn\" aria-label=\"Unregister {email}\">🗑️</button></li>"
            )
        })
        .collect();

    format!("<div class=\"participants\"><strong>Participants:</strong><ul>{items}</ul></div>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(max: u32, participants: &[&str]) -> ActivityDetails {
        ActivityDetails {
            description: "Learn strategies".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        // Already-escaped input is escaped again, not passed through
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_card_shows_spots_left() {
        let html = activity_card_html("Chess Club", &details(12, &["a@x.edu", "b@x.edu"]));
        assert!(html.contains("<h4>Chess Club</h4>"));
        assert!(html.contains("<strong>Availability:</strong> 10 spots left"));
    }

    #[test]
    fn test_card_over_capacity_is_negative() {
        let html = activity_card_html("Chess", &details(1, &["a", "b", "c"]));
        assert!(html.contains("-2 spots left"));
    }

    #[test]
    fn test_card_without_participants() {
        let html = activity_card_html("Chess", &details(3, &[]));
        assert!(html.contains("No participants yet."));
        assert!(!html.contains("<ul>"));
        assert!(!html.contains("delete-btn"));
    }

    #[test]
    fn test_participants_in_order_with_delete_controls() {
        let html = activity_card_html("Chess", &details(5, &["z@x.edu", "a@x.edu"]));
        let first = html.find("z@x.edu").unwrap();
        let second = html.find("a@x.edu").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("class=\"delete-btn\"").count(), 2);
        assert!(html.contains("data-email=\"z@x.edu\" data-activity=\"Chess\""));
        assert!(html.contains("aria-label=\"Unregister a@x.edu\""));
    }

    #[test]
    fn test_hostile_text_is_escaped() {
        let html = activity_card_html(
            "<script>alert(1)</script>",
            &details(2, &["\"><img src=x onerror=alert(1)>"]),
        );
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("<h4>&lt;script&gt;alert(1)&lt;/script&gt;</h4>"));
        assert!(html.contains("data-email=\"&quot;&gt;&lt;img src=x onerror=alert(1)&gt;\""));
        assert!(html.contains("data-activity=\"&lt;script&gt;alert(1)&lt;/script&gt;\""));
    }

    #[test]
    fn test_listing_follows_snapshot_order() {
        let mut snapshot = ActivitiesSnapshot::new();
        snapshot.insert("Drama", details(2, &[]));
        snapshot.insert("Art", details(2, &[]));

        match Listing::from_snapshot(&snapshot) {
            Listing::Cards(cards) => {
                let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(names, vec!["Drama", "Art"]);
            }
            other => panic!("expected cards, got {:?}", other),
        }
    }
}
