//! Builds a small page from a mix of trusted and hostile input and prints
//! the sanitized markup.
//!
//! Run with `RUST_LOG=debug` to see each sanitization decision.

use tracing_subscriber::EnvFilter;
use ward::prelude::*;

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let generator = Generator::default();

	let outer = generator.root().div().with_attrs([
		kv("class", "container"),
		kv("id", "main"),
		kv("style", "color: red; background-color: #f0f0f0;"),
		// Not allowed: stored as data-onclick
		kv("onclick", "alert('Hello!')"),
	]);

	let inner = outer
		.div()
		.with_attrs([kv("class", "content"), kv("data-id", "inner")]);

	inner
		.br()
		.attr("class", "clearfix")
		.attr("class", "secondclass");

	inner.div().add_text("I AM THE CHILD CHILD");

	inner
		.a()
		.with_attrs([
			kv("href", "https://example.com?param=value&another=test"),
			kv("style", "color: blue; font-weight: bold;"),
		])
		.add_text("Click me");

	inner.img().with_attrs([
		kv("src", "https://example.com/image.jpg"),
		kv("alt", "Example Image"),
	]);

	inner
		.a()
		.attr("href", "javascript:alert('XSS')")
		.add_text("Don't click me");

	println!("{generator}");
}
