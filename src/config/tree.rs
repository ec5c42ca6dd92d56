use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use tracing::{error, warn};

use crate::config::kinds::ValueKind;
use crate::config::value::{ConfigStorable, ConfigValue};

/// Shared-ownership handle to a child configuration node.
///
/// Handles returned by [`Configuration::subconfig_view`] and
/// [`Configuration::edit_subconfig`] alias the live tree: edits through them
/// are visible to every other holder. [`Configuration::subconfig_copy`]
/// breaks the aliasing when isolation is needed. Single-threaded by
/// contract; callers needing concurrency work on independent deep copies.
pub type SharedConfig = Rc<RefCell<Configuration>>;

/// A configuration tree node: named tagged values plus named child nodes.
///
/// Value keys and subconfig names live in separate namespaces; the same name
/// may appear in both. Both maps iterate in lexicographic key order, so
/// traversal, search, and document write order are deterministic.
#[derive(Debug, Default)]
pub struct Configuration {
	pub(crate) values: BTreeMap<String, ConfigValue>,
	pub(crate) subconfigs: BTreeMap<String, SharedConfig>,
}

impl Clone for Configuration {
	/// Deep copy: values are cloned verbatim, every child is recursively
	/// copied into a fresh handle.
	fn clone(&self) -> Self {
		Self {
			values: self.values.clone(),
			subconfigs: self
				.subconfigs
				.iter()
				.map(|(name, child)| (name.clone(), Rc::new(RefCell::new(child.borrow().clone()))))
				.collect(),
		}
	}
}

impl Configuration {
	/// Create an empty node.
	pub fn new() -> Self {
		Self::default()
	}

	// ---- value accessors ----

	/// Tagged value stored at `key`, or an empty value with a warning when
	/// absent.
	pub fn value(&self, key: &str) -> ConfigValue {
		match self.values.get(key) {
			Some(value) => value.clone(),
			None => {
				warn!(key, "key not present in configuration");
				ConfigValue::Unknown
			}
		}
	}

	/// Payload of the value at `key`, expected to hold kind `T`.
	///
	/// Missing keys and kind mismatches yield `T::default()` with an
	/// error-level diagnostic, never a panic.
	pub fn get<T: ConfigStorable + Default>(&self, key: &str) -> T {
		match self.values.get(key) {
			Some(value) => match value.get::<T>() {
				Ok(payload) => payload,
				Err(err) => {
					error!(key, %err, "key not present in configuration with requested kind");
					T::default()
				}
			},
			None => {
				error!(key, expected = %T::KIND, "key not present in configuration");
				T::default()
			}
		}
	}

	/// Kind of the value at `key`, `Unknown` with a diagnostic when absent.
	pub fn value_type(&self, key: &str) -> ValueKind {
		match self.values.get(key) {
			Some(value) => value.kind(),
			None => {
				error!(key, "key not present in configuration");
				ValueKind::Unknown
			}
		}
	}

	/// Render the value at `key` as a string, or a not-found message with a
	/// warning.
	pub fn as_string(&self, key: &str) -> String {
		match self.values.get(key) {
			Some(value) => value.as_string(),
			None => {
				let message = format!("key {key} does not reference a value in this configuration");
				warn!(key, "key not present in configuration");
				message
			}
		}
	}

	/// Whether `key` holds a value in this node. Subconfigs are not checked.
	pub fn has_value(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	/// Whether `key` holds a value of exactly `kind`.
	pub fn has_key_of_type(&self, key: &str, kind: ValueKind) -> bool {
		self.values.get(key).is_some_and(|value| value.kind() == kind)
	}

	/// Value keys of this node, in map order. Subconfig names are not
	/// included.
	pub fn keys(&self) -> Vec<String> {
		self.values.keys().cloned().collect()
	}

	/// Value keys whose stored kind is `kind`, in map order.
	pub fn typed_keys(&self, kind: ValueKind) -> Vec<String> {
		self.values
			.iter()
			.filter(|(_, value)| value.kind() == kind)
			.map(|(key, _)| key.clone())
			.collect()
	}

	/// Map of every value key to its stored kind.
	pub fn value_types(&self) -> BTreeMap<String, ValueKind> {
		self.values.iter().map(|(key, value)| (key.clone(), value.kind())).collect()
	}

	/// Insert or overwrite the value at `key`.
	///
	/// Accepts any registered payload type; `&str` normalizes to the string
	/// kind and `f32` to the double kind.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
		self.values.insert(key.into(), value.into());
	}

	/// Remove and return the value at `key`, or an empty value with a
	/// warning when absent.
	pub fn remove(&mut self, key: &str) -> ConfigValue {
		match self.values.remove(key) {
			Some(value) => value,
			None => {
				warn!(key, "key not present in configuration");
				ConfigValue::Unknown
			}
		}
	}

	/// Remove the value at `key` when present with kind `T` and return its
	/// payload. On a missing key or kind mismatch the map is untouched and
	/// `T::default()` is returned with a warning.
	pub fn remove_as<T: ConfigStorable + Default>(&mut self, key: &str) -> T {
		let matches = self.has_key_of_type(key, T::KIND);
		if !matches {
			warn!(key, expected = %T::KIND, "key not present in configuration with requested kind");
			return T::default();
		}
		self.values.remove(key).and_then(|value| value.get::<T>().ok()).unwrap_or_default()
	}

	// ---- subconfig accessors ----

	/// Whether a child named `name` exists.
	pub fn has_subconfig(&self, name: &str) -> bool {
		self.subconfigs.contains_key(name)
	}

	/// Names of the direct children, in map order.
	pub fn subconfig_keys(&self) -> Vec<String> {
		self.subconfigs.keys().cloned().collect()
	}

	/// Independent deep copy of the child named `name`, or `None` when
	/// absent. Safe for callers to mutate without affecting this tree.
	pub fn subconfig_copy(&self, name: &str) -> Option<SharedConfig> {
		self.subconfigs.get(name).map(|child| Rc::new(RefCell::new(child.borrow().clone())))
	}

	/// Aliasing handle to the live child named `name`, for read-oriented
	/// access.
	///
	/// # Panics
	///
	/// Panics when no child named `name` exists; callers must check
	/// [`has_subconfig`](Self::has_subconfig) first.
	pub fn subconfig_view(&self, name: &str) -> SharedConfig {
		match self.subconfigs.get(name) {
			Some(child) => Rc::clone(child),
			None => panic!("subconfiguration {name} not found in configuration"),
		}
	}

	/// Aliasing handle to the child named `name`, creating an empty child
	/// first when absent. The mutation path for nested structure.
	pub fn edit_subconfig(&mut self, name: &str) -> SharedConfig {
		Rc::clone(self.subconfigs.entry(name.to_owned()).or_default())
	}

	/// Install `child` at `name`, silently replacing any existing child.
	pub fn set_subconfig(&mut self, name: impl Into<String>, child: SharedConfig) {
		self.subconfigs.insert(name.into(), child);
	}

	/// Remove and return the child named `name`, or `None` with a warning
	/// when absent.
	pub fn remove_subconfig(&mut self, name: &str) -> Option<SharedConfig> {
		let removed = self.subconfigs.remove(name);
		if removed.is_none() {
			warn!(name, "name not present in map of subconfigurations");
		}
		removed
	}

	// ---- aggregate queries ----

	/// Local value count plus local subconfig count.
	pub fn num_entries(&self) -> usize {
		self.values.len() + self.subconfigs.len()
	}

	/// Entry count across this node and every reachable child.
	pub fn tree_num_entries(&self) -> usize {
		self.num_entries() + self.subconfigs.values().map(|child| child.borrow().tree_num_entries()).sum::<usize>()
	}

	/// Local value count.
	pub fn num_values(&self) -> usize {
		self.values.len()
	}

	/// Value count across this node and every reachable child.
	pub fn tree_num_values(&self) -> usize {
		self.values.len() + self.subconfigs.values().map(|child| child.borrow().tree_num_values()).sum::<usize>()
	}

	/// Local subconfig count.
	pub fn num_subconfigs(&self) -> usize {
		self.subconfigs.len()
	}

	/// Subconfig count across the entire subtree.
	pub fn tree_num_subconfigs(&self) -> usize {
		self.subconfigs.len() + self.subconfigs.values().map(|child| child.borrow().tree_num_subconfigs()).sum::<usize>()
	}

	/// Entry count of the child named `name`, 0 with a warning when absent.
	pub fn subconfig_num_entries(&self, name: &str) -> usize {
		match self.subconfigs.get(name) {
			Some(child) => child.borrow().num_entries(),
			None => {
				warn!(name, "no subconfig found with name");
				0
			}
		}
	}

	/// Recursive entry count of the child named `name`, 0 with a warning
	/// when absent.
	pub fn subconfig_tree_num_entries(&self, name: &str) -> usize {
		match self.subconfigs.get(name) {
			Some(child) => child.borrow().tree_num_entries(),
			None => {
				warn!(name, "no subconfig found with name");
				0
			}
		}
	}

	/// Iterate over value entries, in map order.
	pub fn values(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
		self.values.iter()
	}

	/// Iterate over subconfig entries, in map order.
	pub fn subconfigs(&self) -> impl Iterator<Item = (&String, &SharedConfig)> {
		self.subconfigs.iter()
	}

	// ---- search ----

	/// Depth-first search for a value named `key` anywhere in the subtree.
	///
	/// Returns the subconfig names traversed from this node down to the node
	/// holding `key`, in order; empty when `key` was not found. A key held
	/// directly by this node also yields an empty breadcrumb, so callers
	/// distinguishing that case should check [`has_value`](Self::has_value)
	/// first. This node's values are checked before recursing into children
	/// in map order.
	pub fn find_value(&self, key: &str) -> Vec<String> {
		let mut breadcrumb = Vec::new();
		if !self.find_value_internal(key, &mut breadcrumb) {
			breadcrumb.clear();
		}
		breadcrumb
	}

	fn find_value_internal(&self, key: &str, breadcrumb: &mut Vec<String>) -> bool {
		if self.values.contains_key(key) {
			return true;
		}
		for (name, child) in &self.subconfigs {
			breadcrumb.push(name.clone());
			if child.borrow().find_value_internal(key, breadcrumb) {
				return true;
			}
			breadcrumb.pop();
		}
		false
	}

	// ---- merge ----

	/// Merge `src` into this node: every source value overwrites or inserts
	/// the same key here, and every source subconfig is recursively merged
	/// into a get-or-created child of the same name. Entries present only in
	/// this node are untouched.
	pub fn overwrite_with(&mut self, src: &Configuration) {
		if src.num_entries() == 0 {
			return;
		}
		for (key, value) in &src.values {
			self.values.insert(key.clone(), value.clone());
		}
		for (name, src_child) in &src.subconfigs {
			let dst_child = self.edit_subconfig(name);
			// Shared handle on both sides: the subtree is already identical.
			if Rc::ptr_eq(&dst_child, src_child) {
				continue;
			}
			dst_child.borrow_mut().overwrite_with(&src_child.borrow());
		}
	}

	// ---- string dump ----

	/// Render every value and subconfig, one entry per line, recursing into
	/// children with tab-deepened indentation. `newline` is appended after
	/// each line and grows by one tab per nesting level.
	pub fn all_values_as_string(&self, newline: &str) -> String {
		let mut out = String::new();
		for (key, value) in &self.values {
			out.push_str(key);
			out.push_str(" : ");
			out.push_str(&value.as_string());
			out.push_str(newline);
		}
		let nested = format!("{newline}\t");
		for (name, child) in &self.subconfigs {
			out.push_str("subconfig ");
			out.push_str(name);
			out.push_str(&nested);
			out.push_str(&child.borrow().all_values_as_string(&nested));
		}
		out
	}
}

impl fmt::Display for Configuration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.all_values_as_string("\n"))
	}
}
