//! Test helpers shared by the unit tests of this crate.

use std::sync::{Arc, Mutex};
use tracing_subscriber::Layer as _;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// A tracing layer that captures log messages to a `Vec<String>`
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

/// Runs `f` with a thread-local subscriber and returns every event it logged.
///
/// Only `DEBUG` and more severe events are kept, so `trace!` noise from
/// `ux-core` does not show up.
pub(crate) fn capture_logs(f: impl FnOnce()) -> Vec<String> {
	let logs = Arc::new(Mutex::new(Vec::new()));
	let capture = LogCapture { logs: logs.clone() };
	{
		let _guard = tracing_subscriber::registry()
			.with(capture.with_filter(tracing_subscriber::filter::LevelFilter::DEBUG))
			.set_default();
		f();
	}
	logs.lock().unwrap().clone()
}
