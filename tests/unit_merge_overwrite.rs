#![allow(missing_docs)]

use cfgtree::config::{Configuration, ValueKind};

#[test]
fn source_values_win_and_missing_keys_survive() {
	let mut base = Configuration::new();
	base.set("k", 1_i32);
	base.set("kept", "stay");

	let mut overlay = Configuration::new();
	overlay.set("k", 2_i32);
	overlay.set("added", true);

	base.overwrite_with(&overlay);

	assert_eq!(base.get::<i32>("k"), 2);
	assert_eq!(base.get::<String>("kept"), "stay");
	assert!(base.get::<bool>("added"));
}

#[test]
fn overwrite_may_change_a_keys_kind() {
	let mut base = Configuration::new();
	base.set("k", 1_i32);

	let mut overlay = Configuration::new();
	overlay.set("k", "now text");

	base.overwrite_with(&overlay);
	assert_eq!(base.value_type("k"), ValueKind::String);
}

#[test]
fn merge_recurses_and_creates_missing_subconfigs() {
	let mut base = Configuration::new();
	base.edit_subconfig("shared").borrow_mut().set("v", 1_i32);
	base.edit_subconfig("only_base").borrow_mut().set("b", 1_i32);

	let mut overlay = Configuration::new();
	overlay.edit_subconfig("shared").borrow_mut().set("v", 2_i32);
	overlay.edit_subconfig("only_overlay").borrow_mut().set("o", 3_i32);

	base.overwrite_with(&overlay);

	assert_eq!(base.subconfig_view("shared").borrow().get::<i32>("v"), 2);
	assert_eq!(base.subconfig_view("only_base").borrow().get::<i32>("b"), 1);
	assert_eq!(base.subconfig_view("only_overlay").borrow().get::<i32>("o"), 3);
}

#[test]
fn merging_an_empty_tree_is_a_no_op() {
	let mut base = Configuration::new();
	base.set("k", 1_i32);
	base.edit_subconfig("c").borrow_mut().set("v", 2_i32);
	let before = base.tree_num_entries();

	base.overwrite_with(&Configuration::new());

	assert_eq!(base.tree_num_entries(), before);
	assert_eq!(base.get::<i32>("k"), 1);
}

#[test]
fn merge_is_idempotent() {
	let mut overlay = Configuration::new();
	overlay.set("k", 2_i32);
	overlay.edit_subconfig("c").borrow_mut().set("v", true);

	let mut base = Configuration::new();
	base.overwrite_with(&overlay);
	let first = base.tree_num_entries();
	base.overwrite_with(&overlay);

	assert_eq!(base.tree_num_entries(), first);
	assert_eq!(base.get::<i32>("k"), 2);
}

#[test]
fn merge_tolerates_shared_child_handles() {
	let mut base = Configuration::new();
	let shared = base.edit_subconfig("c");
	shared.borrow_mut().set("v", 1_i32);

	// Overlay references the very same child node.
	let mut overlay = Configuration::new();
	overlay.set_subconfig("c", shared);
	overlay.set("k", 9_i32);

	base.overwrite_with(&overlay);

	assert_eq!(base.get::<i32>("k"), 9);
	assert_eq!(base.subconfig_view("c").borrow().get::<i32>("v"), 1);
}
