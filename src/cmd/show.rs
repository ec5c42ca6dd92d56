use std::path::PathBuf;

use cfgtree::config::{Result, load_json_file};

/// Print the tree dump and entry counts of a config file.
pub fn run(path: PathBuf) -> Result<()> {
	let config = load_json_file(&path)?;

	println!("path: {}", path.display());
	println!("entries: {}", config.num_entries());
	println!("tree_entries: {}", config.tree_num_entries());
	println!("tree_values: {}", config.tree_num_values());
	println!("tree_subconfigs: {}", config.tree_num_subconfigs());
	println!();
	print!("{config}");

	Ok(())
}
