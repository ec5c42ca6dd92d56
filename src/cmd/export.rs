use std::path::PathBuf;

use cfgtree::config::{Result, load_json_file};

/// Print the config file as a flat key/value config group.
pub fn run(path: PathBuf) -> Result<()> {
	let config = load_json_file(&path)?;
	print!("{}", config.to_config_group());
	Ok(())
}
