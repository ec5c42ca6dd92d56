use tracing::warn;

use crate::config::tree::Configuration;

impl Configuration {
	/// Flatten this node into a legacy flat config-group table.
	///
	/// Every value key becomes a `name = value` pair and every subconfig a
	/// nested named table. Kinds the flat format does not represent are
	/// skipped with a warning.
	pub fn to_config_group(&self) -> toml::Table {
		let mut group = toml::Table::new();
		for (key, value) in &self.values {
			match value.to_toml() {
				Some(entry) => {
					group.insert(key.clone(), entry);
				}
				None => warn!(key = %key, kind = %value.kind(), "kind not representable in flat config group, skipping"),
			}
		}
		for (name, child) in &self.subconfigs {
			group.insert(name.clone(), toml::Value::Table(child.borrow().to_config_group()));
		}
		group
	}
}
