//! Integration tests for the `ux` facade
//!
//! The facade re-exports both member crates; these tests make sure a page can
//! be written against `ux::prelude` alone.

use insta::assert_snapshot;
use rstest::rstest;
use ux::prelude::*;

#[rstest]
fn test_prelude_builds_a_page() {
	let doc = Document::new();
	Document::install(doc.clone());
	set_title("Shop");

	let stock = Data::new(vec!["apple", "pear"]);
	let in_stock = Data::new(true);
	let banner = ux_if(true, "Open", "Closed");
	banner.bind(&in_stock);
	let list = ux_for(&stock, |fruit, index| {
		html::li().attr("data-index", index).text(fruit).build()
	});
	display_element([
		Node::from(heading(2, "Fruit", attrs! { "style" => "margin: 0;" })),
		banner.clone().into(),
		list.clone().into(),
	]);

	stock.set(vec!["plum"]).unwrap();
	in_stock.set(false).unwrap();

	assert_eq!(ux::document().title(), "Shop");
	assert_eq!(banner.visible_text(), "Closed");
	assert_snapshot!(
		doc.body().to_html(),
		@r#"<body><h2 style="margin: 0;">Fruit</h2><ux-if then="Open" else="Closed"><template shadowrootmode="open"><div>Closed</div></template></ux-if><ux-for><template shadowrootmode="open"><div><li data-index="0">plum</li></div></template></ux-for></body>"#
	);
}

#[rstest]
fn test_facade_modules_reexport_member_crates() {
	let cell = ux::core::Data::new(1);
	let same: ux::Data<i32> = cell.clone();
	assert!(same.ptr_eq(&cell));

	let el = ux::pages::builder::html::div().build();
	assert_eq!(el.tag_name(), "div");
}
