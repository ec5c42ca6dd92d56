use std::fmt;

/// Payload byte budget for kinds stored without a heap allocation.
///
/// Kinds whose payload exceeds this are stored boxed; the registration macro
/// in `value.rs` enforces the split at compile time.
pub const INLINE_PAYLOAD_SIZE: usize = 8;

/// Every kind of payload a [`ConfigValue`](crate::config::ConfigValue) can
/// hold. `Unknown` marks an empty, uninitialized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// Empty / uninitialized.
	Unknown,
	/// Boolean scalar.
	Bool,
	/// 32-bit signed integer scalar.
	Int,
	/// Angle in radians.
	Rad,
	/// 64-bit float scalar.
	Double,
	/// 2-component vector.
	Vec2,
	/// 3-component vector.
	Vec3,
	/// 4-component vector.
	Vec4,
	/// Quaternion.
	Quat,
	/// 3x3 matrix.
	Mat3,
	/// 4x4 matrix.
	Mat4,
	/// UTF-8 text.
	String,
}

/// Storage policy band a payload kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBand {
	/// Small trivially copyable payload, held directly in the value.
	Inline,
	/// Large trivially copyable payload, held through a heap box.
	Boxed,
	/// Heap payload requiring explicit construction and destruction.
	BoxedNonTrivial,
}

impl ValueKind {
	/// Storage band this kind is registered in. `Unknown` carries no payload
	/// and reports the inline band.
	pub const fn band(self) -> StorageBand {
		match self {
			Self::Unknown | Self::Bool | Self::Int | Self::Rad | Self::Double | Self::Vec2 => StorageBand::Inline,
			Self::Vec3 | Self::Vec4 | Self::Quat | Self::Mat3 | Self::Mat4 => StorageBand::Boxed,
			Self::String => StorageBand::BoxedNonTrivial,
		}
	}

	/// Whether this kind stores its payload through a heap box.
	pub const fn is_boxed(self) -> bool {
		!matches!(self.band(), StorageBand::Inline)
	}

	/// Whether this kind's payload requires explicit construction and
	/// destruction rather than a bitwise copy.
	pub const fn is_non_trivial(self) -> bool {
		matches!(self.band(), StorageBand::BoxedNonTrivial)
	}

	/// Human-readable tag name.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Unknown => "Unknown",
			Self::Bool => "Bool",
			Self::Int => "Int",
			Self::Rad => "Rad",
			Self::Double => "Double",
			Self::Vec2 => "Vec2",
			Self::Vec3 => "Vec3",
			Self::Vec4 => "Vec4",
			Self::Quat => "Quat",
			Self::Mat3 => "Mat3",
			Self::Mat4 => "Mat4",
			Self::String => "String",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
