mod error;
mod group;
mod json;
mod kinds;
mod math;
mod tree;
mod value;

// group contributes the flat config-group export as inherent methods.

/// Error and result aliases.
pub use error::{ConfigError, Result};
/// Document load helpers and serialization hook trait.
pub use json::{WriteToJson, load_json_file, value_from_json};
/// Value kind tags and storage band classification.
pub use kinds::{INLINE_PAYLOAD_SIZE, StorageBand, ValueKind};
/// Trivially copyable math payload types.
pub use math::{Mat3, Mat4, Quat, Rad, Vec2, Vec3, Vec4};
/// Configuration tree node and shared child handle.
pub use tree::{Configuration, SharedConfig};
/// Tagged value storage and the payload registration trait.
pub use value::{ConfigStorable, ConfigValue};
