#![allow(missing_docs)]

use cfgtree::config::Configuration;

#[test]
fn nested_key_yields_subconfig_breadcrumb() {
	let mut root = Configuration::new();
	let a = root.edit_subconfig("a");
	let b = a.borrow_mut().edit_subconfig("b");
	b.borrow_mut().set("target", 7_i32);

	assert_eq!(root.find_value("target"), vec!["a", "b"]);
	assert!(root.find_value("missing").is_empty());
}

#[test]
fn local_values_are_checked_before_children() {
	let mut root = Configuration::new();
	root.set("dup", 1_i32);
	root.edit_subconfig("child").borrow_mut().set("dup", 2_i32);

	// Root-local hit: empty breadcrumb, never the child's name.
	assert!(root.find_value("dup").is_empty());
	assert!(root.has_value("dup"));
}

#[test]
fn sibling_order_is_deterministic() {
	let mut root = Configuration::new();
	root.edit_subconfig("zebra").borrow_mut().set("target", 1_i32);
	root.edit_subconfig("apple").borrow_mut().set("target", 2_i32);

	// Children iterate in lexicographic order, so "apple" wins every run.
	assert_eq!(root.find_value("target"), vec!["apple"]);
}

#[test]
fn breadcrumb_spans_multiple_levels() {
	let mut root = Configuration::new();
	let outer = root.edit_subconfig("outer");
	let mid = outer.borrow_mut().edit_subconfig("mid");
	let inner = mid.borrow_mut().edit_subconfig("inner");
	inner.borrow_mut().set("deep", true);

	assert_eq!(root.find_value("deep"), vec!["outer", "mid", "inner"]);
	assert_eq!(outer.borrow().find_value("deep"), vec!["mid", "inner"]);
}
