//! Known HTML tags
//!
//! One table drives both [`HTML_TAGS`] and the named constructors on
//! [`Element`] (`div()`, `br()`, ...). Every named constructor delegates to
//! [`Element::element`].

use crate::element::Element;
use crate::tag::{TagKind, TagSpec};

macro_rules! html_tags {
	($($name:ident: $kind:ident),* $(,)?) => {
		/// Tag names with their kind, in alphabetical order.
		pub static HTML_TAGS: &[TagSpec] = &[
			$(TagSpec { name: stringify!($name), kind: TagKind::$kind },)*
		];

		impl Element {
			$(
				#[doc = concat!("Appends a `<", stringify!($name), ">` element and returns it.")]
				pub fn $name(&self) -> Element {
					self.element(stringify!($name))
				}
			)*
		}
	};
}

html_tags! {
	a: Normal,
	abbr: Normal,
	acronym: Normal,
	address: Normal,
	area: Void,
	article: Normal,
	aside: Normal,
	audio: Normal,
	b: Normal,
	base: Void,
	bdi: Normal,
	bdo: Normal,
	big: Normal,
	blockquote: Normal,
	body: Normal,
	br: Void,
	button: Normal,
	canvas: Normal,
	caption: Normal,
	center: Normal,
	cite: Normal,
	code: Normal,
	col: Void,
	colgroup: Normal,
	data: Normal,
	datalist: Normal,
	dd: Normal,
	del: Normal,
	details: Normal,
	dfn: Normal,
	dialog: Normal,
	dir: Normal,
	div: Normal,
	dl: Normal,
	dt: Normal,
	em: Normal,
	embed: Void,
	fencedframe: Normal,
	fieldset: Normal,
	figcaption: Normal,
	figure: Normal,
	font: Normal,
	footer: Normal,
	form: Normal,
	frame: Normal,
	frameset: Normal,
	h1: Normal,
	h2: Normal,
	h3: Normal,
	h4: Normal,
	h5: Normal,
	h6: Normal,
	head: Normal,
	header: Normal,
	hgroup: Normal,
	hr: Void,
	html: Normal,
	i: Normal,
	iframe: Normal,
	img: Void,
	input: Void,
	ins: Normal,
	kbd: Normal,
	label: Normal,
	legend: Normal,
	li: Normal,
	link: Void,
	main: Normal,
	map: Normal,
	mark: Normal,
	marquee: Normal,
	math: Normal,
	menu: Normal,
	meta: Void,
	meter: Normal,
	nav: Normal,
	nobr: Normal,
	noembed: Normal,
	noframes: Normal,
	noscript: Normal,
	object: Normal,
	ol: Normal,
	optgroup: Normal,
	option: Normal,
	output: Normal,
	p: Normal,
	param: Void,
	picture: Normal,
	plaintext: Normal,
	portal: Normal,
	pre: Normal,
	progress: Normal,
	q: Normal,
	rb: Normal,
	rp: Normal,
	rt: Normal,
	rtc: Normal,
	ruby: Normal,
	s: Normal,
	samp: Normal,
	script: Normal,
	search: Normal,
	section: Normal,
	select: Normal,
	slot: Normal,
	small: Normal,
	source: Void,
	span: Normal,
	strike: Normal,
	strong: Normal,
	style: Normal,
	sub: Normal,
	summary: Normal,
	sup: Normal,
	svg: Normal,
	table: Normal,
	tbody: Normal,
	td: Normal,
	template: Normal,
	textarea: Normal,
	tfoot: Normal,
	th: Normal,
	thead: Normal,
	time: Normal,
	title: Normal,
	tr: Normal,
	track: Void,
	tt: Normal,
	u: Normal,
	ul: Normal,
	var: Normal,
	video: Normal,
	wbr: Void,
	xmp: Normal,
}
