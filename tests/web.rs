//! Browser tests: real-DOM escaping and delete-button delegation.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use activity_board::components::activity_list::unregister_target;
use activity_board::render::activity_card_html;
use activity_board::ActivityDetails;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn card_element(name: &str, participants: &[&str]) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let card = document.create_element("div").unwrap();
    let details = ActivityDetails {
        description: "Act in plays".to_string(),
        schedule: "Wednesdays".to_string(),
        max_participants: 20,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    };
    card.set_inner_html(&activity_card_html(name, &details));
    card
}

#[wasm_bindgen_test]
fn hostile_text_stays_literal() {
    let email = "<img src=x onerror=alert(1)>@x.edu";
    let card = card_element("Drama <b>Club</b>", &[email]);

    assert!(card.query_selector("img").unwrap().is_none());
    assert!(card.query_selector("b").unwrap().is_none());

    let heading = card.query_selector("h4").unwrap().unwrap();
    assert_eq!(heading.text_content().unwrap(), "Drama <b>Club</b>");

    let item = card.query_selector("li").unwrap().unwrap();
    assert_eq!(item.get_attribute("data-email").unwrap(), email);
    assert_eq!(item.get_attribute("data-activity").unwrap(), "Drama <b>Club</b>");
}

#[wasm_bindgen_test]
fn delete_button_resolves_participant() {
    let card = card_element("Drama Club", &["james@x.edu", "o'brien@x.edu"]);
    let buttons = card.query_selector_all(".delete-btn").unwrap();
    assert_eq!(buttons.length(), 2);

    let second: web_sys::Element = wasm_bindgen::JsCast::unchecked_into(buttons.item(1).unwrap());
    assert_eq!(
        unregister_target(&second),
        Some(("o'brien@x.edu".to_string(), "Drama Club".to_string()))
    );
}

#[wasm_bindgen_test]
fn clicks_outside_delete_buttons_are_ignored() {
    let card = card_element("Drama Club", &["james@x.edu"]);
    let heading = card.query_selector("h4").unwrap().unwrap();
    let item = card.query_selector("li").unwrap().unwrap();

    assert_eq!(unregister_target(&heading), None);
    assert_eq!(unregister_target(&item), None);
}
