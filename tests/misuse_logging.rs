//! Builder misuse is ignored and reported through `tracing`

use std::sync::{Arc, Mutex};

use rstest::rstest;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use ward::prelude::*;

/// A tracing layer that captures `[LEVEL] message` lines
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

		self.logs.lock().unwrap().push(format!(
			"[{}] {}",
			event.metadata().level(),
			visitor.message
		));
	}
}

fn capture_logs(build: impl FnOnce()) -> Vec<String> {
	let logs = Arc::new(Mutex::new(Vec::new()));
	let capture = LogCapture { logs: logs.clone() };
	{
		let _guard = tracing_subscriber::registry().with(capture).set_default();
		build();
	}
	let captured = logs.lock().unwrap().clone();
	captured
}

fn warnings(logs: &[String]) -> usize {
	logs.iter().filter(|line| line.starts_with("[WARN]")).count()
}

#[rstest]
fn test_child_of_void_element_warns() {
	// Arrange
	let generator = Generator::default();

	// Act
	let logs = capture_logs(|| {
		generator.root().br().div();
	});

	// Assert
	assert_eq!(warnings(&logs), 1);
	assert!(logs.iter().any(|line| line.contains("void elements cannot have children")));
	assert_eq!(generator.generate(), "<br />");
}

#[rstest]
fn test_text_on_void_element_warns() {
	// Arrange
	let generator = Generator::default();

	// Act
	let logs = capture_logs(|| {
		generator.root().input().add_text("value");
	});

	// Assert
	assert_eq!(warnings(&logs), 1);
	assert_eq!(generator.generate(), "<input />");
}

#[rstest]
fn test_malformed_attribute_name_warns() {
	// Arrange
	let generator = Generator::default();

	// Act
	let logs = capture_logs(|| {
		generator.root().div().attr("x onload", "alert(1)");
	});

	// Assert
	assert_eq!(warnings(&logs), 1);
	assert_eq!(generator.generate(), "<div></div>");
}

#[rstest]
fn test_malformed_tag_name_warns() {
	// Arrange
	let generator = Generator::default();

	// Act
	let logs = capture_logs(|| {
		generator.root().add("script src=x");
	});

	// Assert
	assert_eq!(warnings(&logs), 1);
	assert_eq!(generator.generate(), "");
}

#[rstest]
fn test_text_and_attribute_on_root_warn() {
	// Arrange
	let generator = Generator::default();

	// Act
	let logs = capture_logs(|| {
		generator.root().add_text("lost").attr("class", "lost");
	});

	// Assert
	assert_eq!(warnings(&logs), 2);
	assert!(logs.iter().any(|line| line.contains("document root has no text content")));
	assert!(logs.iter().any(|line| line.contains("document root has no attributes")));
	assert_eq!(generator.generate(), "");
}

#[rstest]
fn test_normal_use_does_not_warn() {
	// Arrange
	let generator = Generator::default();

	// Act
	let logs = capture_logs(|| {
		generator
			.root()
			.a()
			.attr("href", "javascript:alert(1)")
			.attr("onclick", "x")
			.add_text("link");
	});

	// Assert
	assert_eq!(warnings(&logs), 0);
	assert!(logs.iter().any(|line| line.starts_with("[DEBUG]")));
}
