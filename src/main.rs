//! Activity Board entry point

use activity_board::app::App;
use activity_board::config::BoardConfig;
use activity_board::logging;
use leptos::*;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = BoardConfig::load();
    logging::init(&config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
