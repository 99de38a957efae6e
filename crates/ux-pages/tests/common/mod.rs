//! Shared helpers for the ux-pages integration tests.

use std::sync::{Arc, Mutex};
use tracing_subscriber::Layer as _;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use ux_pages::Document;

/// A tracing layer that captures warnings and errors to a `Vec<String>`
struct LogCapture {
	logs: Arc<Mutex<Vec<String>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		struct MessageVisitor {
			message: String,
		}

		impl tracing::field::Visit for MessageVisitor {
			fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
				if field.name() == "message" {
					self.message = format!("{:?}", value);
				}
			}
		}

		let mut visitor = MessageVisitor {
			message: String::new(),
		};
		event.record(&mut visitor);

		let mut logs = self.logs.lock().unwrap();
		logs.push(format!("[{}] {}", event.metadata().level(), visitor.message));
	}
}

/// Runs `f` and returns every warning or error it logged.
pub fn capture_warnings<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
	let logs = Arc::new(Mutex::new(Vec::new()));
	let capture = LogCapture { logs: logs.clone() };
	let result = {
		let _guard = tracing_subscriber::registry()
			.with(capture.with_filter(tracing_subscriber::filter::LevelFilter::WARN))
			.set_default();
		f()
	};
	let logs = logs.lock().unwrap().clone();
	(result, logs)
}

/// Installs a fresh global document for the current test thread and returns it.
pub fn fresh_document() -> Document {
	let document = Document::new();
	Document::install(document.clone());
	document
}
