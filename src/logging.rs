//! Browser Console Logging
//!
//! A `tracing-subscriber` layer that writes events to the browser console,
//! picking `console.error`/`warn`/`info`/`debug` by level.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Forwards formatted events to a console sink
pub struct ConsoleLayer {
    sink: fn(&Level, &str),
}

impl ConsoleLayer {
    pub fn new() -> Self {
        Self {
            sink: write_to_console,
        }
    }

    #[cfg(test)]
    fn with_sink(sink: fn(&Level, &str)) -> Self {
        Self { sink }
    }
}

impl Default for ConsoleLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut fields = EventFields::default();
        event.record(&mut fields);

        let line = format!(
            "{} {}: {}{}",
            metadata.level(),
            metadata.target(),
            fields.message,
            fields.rest
        );
        (self.sink)(metadata.level(), &line);
    }
}

#[derive(Default)]
struct EventFields {
    message: String,
    rest: String,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.rest, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.rest, " {}={:?}", field.name(), value);
        }
    }
}

fn write_to_console(level: &Level, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match *level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        _ => web_sys::console::debug_1(&line),
    }
}

/// Install the global subscriber with the given filter directive
pub fn init(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|e| {
        web_sys::console::warn_1(
            &format!("Invalid log level {:?} ({}), using info", log_level, e).into(),
        );
        EnvFilter::new("info")
    });

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer::new())
        .try_init()
    {
        web_sys::console::warn_1(&format!("Logging already initialised: {}", e).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static LINES: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
    }

    fn capture(level: &Level, line: &str) {
        LINES.with(|lines| lines.borrow_mut().push((*level, line.to_string())));
    }

    #[test]
    fn test_formats_message_and_fields() {
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::with_sink(capture));

        tracing::subscriber::with_default(subscriber, || {
            let email = "a@x.edu";
            tracing::error!(%email, activities = 3, "signup failed");
            tracing::debug!(target: "board", "quiet");
        });

        let lines = LINES.with(|lines| lines.borrow().clone());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, Level::ERROR);
        assert!(lines[0].1.starts_with("ERROR "));
        assert!(lines[0].1.ends_with("signup failed email=a@x.edu activities=3"));
        assert_eq!(lines[1], (Level::DEBUG, "DEBUG board: quiet".to_string()));
    }
}
