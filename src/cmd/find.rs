use std::path::PathBuf;

use cfgtree::config::{Result, load_json_file};

/// Search the tree for `key` and print the subconfig breadcrumb to it.
pub fn run(path: PathBuf, key: String) -> Result<()> {
	let config = load_json_file(&path)?;

	if config.has_value(&key) {
		println!("{key} found at root");
		return Ok(());
	}

	let breadcrumb = config.find_value(&key);
	if breadcrumb.is_empty() {
		println!("{key} not found");
	} else {
		println!("{key} found under {}", breadcrumb.join("/"));
	}

	Ok(())
}
