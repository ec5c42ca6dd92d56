use std::fs;
use std::path::Path;

use tracing::warn;

use crate::config::error::{ConfigError, Result};
use crate::config::math::{Mat3, Mat4, Quat, Vec2, Vec3};
use crate::config::tree::Configuration;
use crate::config::value::ConfigValue;

/// Serialization hooks for writing a node to a document object.
///
/// `Configuration` implements both hooks; wrapper node kinds (for example a
/// binding layer attaching extra top-level fields) can override either hook
/// while keeping the default [`to_json`](WriteToJson::to_json) composition.
pub trait WriteToJson {
	/// Write one document entry per valid value key into `obj`.
	fn write_values_to_json(&self, obj: &mut serde_json::Map<String, serde_json::Value>);

	/// Write one nested document object per subconfig into `obj`.
	fn write_subconfigs_to_json(&self, obj: &mut serde_json::Map<String, serde_json::Value>);

	/// Build the document object for this node: values first, then nested
	/// subconfig objects.
	fn to_json(&self) -> serde_json::Value {
		let mut obj = serde_json::Map::new();
		self.write_values_to_json(&mut obj);
		self.write_subconfigs_to_json(&mut obj);
		serde_json::Value::Object(obj)
	}
}

impl WriteToJson for Configuration {
	fn write_values_to_json(&self, obj: &mut serde_json::Map<String, serde_json::Value>) {
		for (key, value) in &self.values {
			if value.is_valid() {
				obj.insert(key.clone(), value.to_json());
			}
		}
	}

	fn write_subconfigs_to_json(&self, obj: &mut serde_json::Map<String, serde_json::Value>) {
		for (name, child) in &self.subconfigs {
			obj.insert(name.clone(), child.borrow().to_json());
		}
	}
}

/// Infer a tagged value from the shape of a non-object document field.
///
/// Booleans, numbers, and strings map to their scalar kinds; all-numeric
/// arrays map positionally (2 components to `Vec2`, 3 to `Vec3`, 4 to `Quat`
/// read as `[w, x, y, z]`, 9 to `Mat3`, 16 to `Mat4`, column-major). Nested
/// objects are subconfigs and are rejected here; `name` only labels the
/// error.
pub fn value_from_json(name: &str, json: &serde_json::Value) -> Result<ConfigValue> {
	match json {
		serde_json::Value::Bool(payload) => Ok(ConfigValue::Bool(*payload)),
		serde_json::Value::Number(number) => match number.as_f64() {
			Some(payload) => Ok(ConfigValue::Double(payload)),
			None => Err(malformed(name, "number is not representable as a double")),
		},
		serde_json::Value::String(text) => Ok(ConfigValue::from(text.as_str())),
		serde_json::Value::Array(items) => {
			let mut cells = Vec::with_capacity(items.len());
			for item in items {
				match item.as_f64() {
					Some(cell) => cells.push(cell as f32),
					None => return Err(malformed(name, "array holds a non-numeric element")),
				}
			}
			match cells.len() {
				2 => Ok(ConfigValue::from(Vec2::new(cells[0], cells[1]))),
				3 => Ok(ConfigValue::from(Vec3::new(cells[0], cells[1], cells[2]))),
				4 => Ok(ConfigValue::from(Quat::new(cells[0], cells[1], cells[2], cells[3]))),
				9 => Ok(ConfigValue::from(Mat3(std::array::from_fn(|idx| cells[idx])))),
				16 => Ok(ConfigValue::from(Mat4(std::array::from_fn(|idx| cells[idx])))),
				len => Err(malformed(name, &format!("array length {len} matches no registered kind"))),
			}
		}
		serde_json::Value::Null => Err(malformed(name, "null field")),
		serde_json::Value::Object(_) => Err(malformed(name, "nested objects load as subconfigs")),
	}
}

fn malformed(name: &str, reason: &str) -> ConfigError {
	ConfigError::MalformedField {
		name: name.to_owned(),
		reason: reason.to_owned(),
	}
}

impl Configuration {
	/// Load values into this node from a document object, recursing into
	/// nested objects as subconfigs.
	///
	/// Returns the number of fields successfully loaded across the whole
	/// recursion. Malformed or unrecognized fields are skipped with a
	/// warning and never abort the load.
	pub fn load_from_json(&mut self, json: &serde_json::Value) -> usize {
		let Some(obj) = json.as_object() else {
			warn!("document root is not an object, nothing loaded");
			return 0;
		};
		let mut loaded = 0;
		for (name, field) in obj {
			if field.is_object() {
				loaded += self.edit_subconfig(name).borrow_mut().load_from_json(field);
				continue;
			}
			match value_from_json(name, field) {
				Ok(value) => {
					self.set(name.clone(), value);
					loaded += 1;
				}
				Err(err) => warn!(field = name.as_str(), %err, "skipping malformed document field"),
			}
		}
		loaded
	}

	/// Write the value at `key` into `obj` under the same name. No entry is
	/// added when `key` is absent.
	pub fn write_value_to_json(&self, key: &str, obj: &mut serde_json::Map<String, serde_json::Value>) {
		self.write_value_to_json_as(key, key, obj);
	}

	/// Write the value at `key` into `obj` under `json_name`. No entry is
	/// added when `key` is absent.
	pub fn write_value_to_json_as(&self, key: &str, json_name: &str, obj: &mut serde_json::Map<String, serde_json::Value>) {
		if let Some(value) = self.values.get(key) {
			if value.is_valid() {
				obj.insert(json_name.to_owned(), value.to_json());
			}
		}
	}
}

/// Load a configuration tree from a JSON document file.
pub fn load_json_file(path: impl AsRef<Path>) -> Result<Configuration> {
	let text = fs::read_to_string(path)?;
	let json: serde_json::Value = serde_json::from_str(&text)?;
	let mut config = Configuration::new();
	config.load_from_json(&json);
	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::{WriteToJson, value_from_json};
	use crate::config::kinds::ValueKind;
	use crate::config::math::{Quat, Vec2, Vec3};
	use crate::config::tree::Configuration;
	use crate::config::value::ConfigValue;

	#[test]
	fn scalar_shapes_infer_kinds() {
		assert_eq!(value_from_json("f", &serde_json::json!(true)).unwrap().kind(), ValueKind::Bool);
		assert_eq!(value_from_json("f", &serde_json::json!(3)).unwrap().kind(), ValueKind::Double);
		assert_eq!(value_from_json("f", &serde_json::json!(3.5)).unwrap().kind(), ValueKind::Double);
		assert_eq!(value_from_json("f", &serde_json::json!("s")).unwrap().kind(), ValueKind::String);
	}

	#[test]
	fn array_lengths_map_positionally() {
		assert_eq!(value_from_json("f", &serde_json::json!([1, 2])).unwrap(), ConfigValue::from(Vec2::new(1.0, 2.0)));
		assert_eq!(value_from_json("f", &serde_json::json!([1, 2, 3])).unwrap(), ConfigValue::from(Vec3::new(1.0, 2.0, 3.0)));
		assert_eq!(
			value_from_json("f", &serde_json::json!([1, 0, 0, 0])).unwrap(),
			ConfigValue::from(Quat::new(1.0, 0.0, 0.0, 0.0))
		);
		assert_eq!(value_from_json("f", &serde_json::Value::from(vec![0.0_f64; 9])).unwrap().kind(), ValueKind::Mat3);
		assert_eq!(value_from_json("f", &serde_json::Value::from(vec![0.0_f64; 16])).unwrap().kind(), ValueKind::Mat4);
	}

	#[test]
	fn unmappable_shapes_are_errors() {
		assert!(value_from_json("f", &serde_json::Value::Null).is_err());
		assert!(value_from_json("f", &serde_json::json!([1, "x"])).is_err());
		assert!(value_from_json("f", &serde_json::json!([1, 2, 3, 4, 5])).is_err());
	}

	#[test]
	fn load_recurses_and_counts_leaves() {
		let doc = serde_json::json!({
			"x": 3.5,
			"flag": true,
			"bad": null,
			"sub": { "y": true, "deeper": { "z": "s" } }
		});
		let mut config = Configuration::new();
		assert_eq!(config.load_from_json(&doc), 4);

		assert_eq!(config.get::<f64>("x"), 3.5);
		assert!(config.get::<bool>("flag"));
		assert!(!config.has_value("bad"));
		let sub = config.subconfig_view("sub");
		assert!(sub.borrow().get::<bool>("y"));
		assert_eq!(sub.borrow().subconfig_view("deeper").borrow().get::<String>("z"), "s");
	}

	#[test]
	fn non_object_root_loads_nothing() {
		let mut config = Configuration::new();
		assert_eq!(config.load_from_json(&serde_json::json!([1, 2, 3])), 0);
		assert_eq!(config.num_entries(), 0);
	}

	#[test]
	fn document_roundtrip_preserves_shape() {
		let doc = serde_json::json!({"x": 3.5, "sub": {"y": true}});
		let mut config = Configuration::new();
		config.load_from_json(&doc);

		assert_eq!(config.value_type("x"), ValueKind::Double);
		assert_eq!(config.to_json(), doc);
	}

	#[test]
	fn single_key_export_skips_absent_keys() {
		let mut config = Configuration::new();
		config.set("present", 2_i32);

		let mut obj = serde_json::Map::new();
		config.write_value_to_json_as("present", "renamed", &mut obj);
		config.write_value_to_json_as("absent", "ghost", &mut obj);

		assert_eq!(obj.get("renamed"), Some(&serde_json::json!(2)));
		assert!(!obj.contains_key("ghost"));
	}

	#[test]
	fn single_key_export_defaults_to_the_key_name() {
		let mut config = Configuration::new();
		config.set("present", 2_i32);

		let mut obj = serde_json::Map::new();
		config.write_value_to_json("present", &mut obj);
		config.write_value_to_json("absent", &mut obj);

		assert_eq!(obj.get("present"), Some(&serde_json::json!(2)));
		assert!(!obj.contains_key("absent"));
	}
}
