//! Whole-document building tests

use rstest::{fixture, rstest};
use ward_builder::{Generator, kv};

#[fixture]
fn generator() -> Generator {
	Generator::default()
}

#[rstest]
fn test_form_document(generator: Generator) {
	// Arrange
	let form = generator
		.root()
		.form()
		.attr("action", "/search")
		.attr("method", "get");
	form.label().attr("for", "q").add_text("Search");
	form.input().with_attrs([kv("id", "q")]);
	form.button().attr("type", "submit").add_text("Go");

	// Act
	let html = generator.generate();

	// Assert
	assert!(html.starts_with("<form "));
	assert!(html.contains(r#"action="/search""#));
	assert!(html.contains(r#"method="get""#));
	assert!(html.contains(r#"<label for="q">Search</label><input id="q" />"#));
	assert!(html.ends_with(r#"<button type="submit">Go</button></form>"#));
}

#[rstest]
fn test_void_element_ignores_everything(generator: Generator) {
	// Arrange
	let br = generator.root().br();

	// Act
	br.div().add_text("lost");
	br.add_void("hr");
	br.add_text("lost");

	// Assert
	assert_eq!(generator.generate(), "<br />");
}

#[rstest]
fn test_injection_through_text_and_attributes(generator: Generator) {
	// Arrange
	generator
		.root()
		.a()
		.attr("href", "javascript:alert(document.cookie)")
		.attr("title", r#"" onmouseover="alert(1)"#)
		.attr("onclick", "steal()")
		.add_text("<script>alert(1)</script>");

	// Act
	let html = generator.generate();

	// Assert
	assert!(!html.contains("<script>"));
	assert!(!html.contains(" onclick="));
	assert!(!html.contains("javascript:"));
	assert!(html.contains(r##"href="#""##));
	assert!(html.contains(r#"title="&quot; onmouseover=&quot;alert(1)""#));
	assert!(html.contains(r#"data-onclick="steal()""#));
	assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;</a>"));
}

#[rstest]
fn test_custom_elements_render_as_normal_tags(generator: Generator) {
	// Arrange
	generator.root().element("my-widget").add_text("w");

	// Act
	let html = generator.generate();

	// Assert
	assert_eq!(html, "<my-widget>w</my-widget>");
}
