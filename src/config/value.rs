use std::fmt;

use crate::config::error::{ConfigError, Result};
use crate::config::kinds::{INLINE_PAYLOAD_SIZE, StorageBand, ValueKind};
use crate::config::math::{Mat3, Mat4, Quat, Rad, Vec2, Vec3, Vec4};

/// Single-slot tagged value: one payload of a registered kind, or `Unknown`
/// when empty.
///
/// The inline/boxed storage split follows the kind's
/// [`StorageBand`](crate::config::StorageBand): small trivially copyable
/// payloads live directly in the variant, larger ones behind a box. The
/// registration macro below enforces the band assignment at compile time, so
/// adding a payload type to the wrong band fails the build.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConfigValue {
	/// Empty value, no payload.
	#[default]
	Unknown,
	/// Boolean scalar.
	Bool(bool),
	/// 32-bit signed integer scalar.
	Int(i32),
	/// Angle in radians.
	Rad(Rad),
	/// 64-bit float scalar.
	Double(f64),
	/// 2-component vector.
	Vec2(Vec2),
	/// 3-component vector.
	Vec3(Box<Vec3>),
	/// 4-component vector.
	Vec4(Box<Vec4>),
	/// Quaternion.
	Quat(Box<Quat>),
	/// 3x3 matrix.
	Mat3(Box<Mat3>),
	/// 4x4 matrix.
	Mat4(Box<Mat4>),
	/// UTF-8 text.
	String(Box<str>),
}

// Tag plus one boxed or 8-byte inline payload slot.
const _: () = assert!(std::mem::size_of::<ConfigValue>() <= 24, "ConfigValue grew past its storage budget");

/// Payload types storable in a [`ConfigValue`], with their registered kind.
pub trait ConfigStorable: Sized {
	/// Kind tag this payload type is registered under.
	const KIND: ValueKind;

	/// Wrap the payload in a tagged value.
	fn into_value(self) -> ConfigValue;

	/// Extract a payload copy if `value` holds this type's kind.
	fn from_value(value: &ConfigValue) -> Option<Self>;
}

const fn assert_trivially_copyable<T: Copy>() {}

macro_rules! register_storable {
	($ty:ty, $kind:ident, inline) => {
		const _: () = {
			assert!(std::mem::size_of::<$ty>() <= INLINE_PAYLOAD_SIZE, "inline payload exceeds the inline byte budget");
			assert!(std::mem::align_of::<$ty>() <= std::mem::align_of::<u64>(), "inline payload over-aligned for value storage");
			assert_trivially_copyable::<$ty>();
			assert!(matches!(ValueKind::$kind.band(), StorageBand::Inline), "kind registered in the wrong storage band");
		};

		impl ConfigStorable for $ty {
			const KIND: ValueKind = ValueKind::$kind;

			fn into_value(self) -> ConfigValue {
				ConfigValue::$kind(self)
			}

			fn from_value(value: &ConfigValue) -> Option<Self> {
				match value {
					ConfigValue::$kind(payload) => Some(*payload),
					_ => None,
				}
			}
		}

		impl From<$ty> for ConfigValue {
			fn from(value: $ty) -> Self {
				value.into_value()
			}
		}
	};
	($ty:ty, $kind:ident, boxed) => {
		const _: () = {
			assert!(std::mem::size_of::<$ty>() > INLINE_PAYLOAD_SIZE, "boxed payload would fit inline");
			assert_trivially_copyable::<$ty>();
			assert!(matches!(ValueKind::$kind.band(), StorageBand::Boxed), "kind registered in the wrong storage band");
		};

		impl ConfigStorable for $ty {
			const KIND: ValueKind = ValueKind::$kind;

			fn into_value(self) -> ConfigValue {
				ConfigValue::$kind(Box::new(self))
			}

			fn from_value(value: &ConfigValue) -> Option<Self> {
				match value {
					ConfigValue::$kind(payload) => Some(**payload),
					_ => None,
				}
			}
		}

		impl From<$ty> for ConfigValue {
			fn from(value: $ty) -> Self {
				value.into_value()
			}
		}
	};
}

register_storable!(bool, Bool, inline);
register_storable!(i32, Int, inline);
register_storable!(Rad, Rad, inline);
register_storable!(f64, Double, inline);
register_storable!(Vec2, Vec2, inline);
register_storable!(Vec3, Vec3, boxed);
register_storable!(Vec4, Vec4, boxed);
register_storable!(Quat, Quat, boxed);
register_storable!(Mat3, Mat3, boxed);
register_storable!(Mat4, Mat4, boxed);

// Text is the one non-trivial kind: heap payload, no bitwise copy.
const _: () = assert!(ValueKind::String.is_non_trivial(), "kind registered in the wrong storage band");

impl ConfigStorable for String {
	const KIND: ValueKind = ValueKind::String;

	fn into_value(self) -> ConfigValue {
		ConfigValue::String(self.into_boxed_str())
	}

	fn from_value(value: &ConfigValue) -> Option<Self> {
		match value {
			ConfigValue::String(payload) => Some(payload.to_string()),
			_ => None,
		}
	}
}

impl From<String> for ConfigValue {
	fn from(value: String) -> Self {
		value.into_value()
	}
}

/// Raw text normalizes to the string kind.
impl From<&str> for ConfigValue {
	fn from(value: &str) -> Self {
		ConfigValue::String(value.into())
	}
}

/// Single-precision floats normalize to the double kind.
impl From<f32> for ConfigValue {
	fn from(value: f32) -> Self {
		ConfigValue::Double(f64::from(value))
	}
}

impl ConfigValue {
	/// Kind tag of the live payload, `Unknown` if empty.
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Unknown => ValueKind::Unknown,
			Self::Bool(_) => ValueKind::Bool,
			Self::Int(_) => ValueKind::Int,
			Self::Rad(_) => ValueKind::Rad,
			Self::Double(_) => ValueKind::Double,
			Self::Vec2(_) => ValueKind::Vec2,
			Self::Vec3(_) => ValueKind::Vec3,
			Self::Vec4(_) => ValueKind::Vec4,
			Self::Quat(_) => ValueKind::Quat,
			Self::Mat3(_) => ValueKind::Mat3,
			Self::Mat4(_) => ValueKind::Mat4,
			Self::String(_) => ValueKind::String,
		}
	}

	/// Whether a payload is present.
	pub fn is_valid(&self) -> bool {
		!matches!(self, Self::Unknown)
	}

	/// Store `value`, replacing any prior payload and updating the tag.
	pub fn set<T: ConfigStorable>(&mut self, value: T) {
		*self = value.into_value();
	}

	/// Payload copy cast as `T`, or a type-mismatch error when the live kind
	/// does not match `T`'s registered kind.
	pub fn get<T: ConfigStorable>(&self) -> Result<T> {
		T::from_value(self).ok_or(ConfigError::TypeMismatch {
			expected: T::KIND,
			actual: self.kind(),
		})
	}

	/// Render the payload with the per-kind formatter.
	pub fn as_string(&self) -> String {
		self.to_string()
	}

	/// Encode the payload as a document value: scalars as JSON scalars,
	/// aggregate kinds as flat number arrays, `Unknown` as null.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Self::Unknown => serde_json::Value::Null,
			Self::Bool(payload) => serde_json::Value::Bool(*payload),
			Self::Int(payload) => serde_json::Value::from(*payload),
			Self::Rad(payload) => serde_json::Value::from(f64::from(payload.0)),
			Self::Double(payload) => serde_json::Value::from(*payload),
			Self::Vec2(payload) => json_number_array(&[payload.x, payload.y]),
			Self::Vec3(payload) => json_number_array(&[payload.x, payload.y, payload.z]),
			Self::Vec4(payload) => json_number_array(&[payload.x, payload.y, payload.z, payload.w]),
			Self::Quat(payload) => json_number_array(&[payload.w, payload.x, payload.y, payload.z]),
			Self::Mat3(payload) => json_number_array(&payload.0),
			Self::Mat4(payload) => json_number_array(&payload.0),
			Self::String(payload) => serde_json::Value::String(payload.to_string()),
		}
	}

	/// Encode the payload for the flat config-group export, or `None` for
	/// kinds the flat format does not represent.
	pub fn to_toml(&self) -> Option<toml::Value> {
		match self {
			Self::Unknown => None,
			Self::Bool(payload) => Some(toml::Value::Boolean(*payload)),
			Self::Int(payload) => Some(toml::Value::Integer(i64::from(*payload))),
			Self::Rad(payload) => Some(toml::Value::Float(f64::from(payload.0))),
			Self::Double(payload) => Some(toml::Value::Float(*payload)),
			Self::Vec2(payload) => Some(toml_float_array(&[payload.x, payload.y])),
			Self::Vec3(payload) => Some(toml_float_array(&[payload.x, payload.y, payload.z])),
			Self::Vec4(payload) => Some(toml_float_array(&[payload.x, payload.y, payload.z, payload.w])),
			Self::Quat(payload) => Some(toml_float_array(&[payload.w, payload.x, payload.y, payload.z])),
			Self::Mat3(payload) => Some(toml_float_array(&payload.0)),
			Self::Mat4(payload) => Some(toml_float_array(&payload.0)),
			Self::String(payload) => Some(toml::Value::String(payload.to_string())),
		}
	}
}

fn json_number_array(cells: &[f32]) -> serde_json::Value {
	serde_json::Value::Array(cells.iter().map(|cell| serde_json::Value::from(f64::from(*cell))).collect())
}

fn toml_float_array(cells: &[f32]) -> toml::Value {
	toml::Value::Array(cells.iter().map(|cell| toml::Value::Float(f64::from(*cell))).collect())
}

impl fmt::Display for ConfigValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unknown => f.write_str("undefined"),
			Self::Bool(payload) => write!(f, "{payload}"),
			Self::Int(payload) => write!(f, "{payload}"),
			Self::Rad(payload) => write!(f, "{payload}"),
			Self::Double(payload) => write!(f, "{payload}"),
			Self::Vec2(payload) => write!(f, "{payload}"),
			Self::Vec3(payload) => write!(f, "{payload}"),
			Self::Vec4(payload) => write!(f, "{payload}"),
			Self::Quat(payload) => write!(f, "{payload}"),
			Self::Mat3(payload) => write!(f, "{payload}"),
			Self::Mat4(payload) => write!(f, "{payload}"),
			Self::String(payload) => f.write_str(payload),
		}
	}
}
