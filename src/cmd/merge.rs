use std::path::PathBuf;

use cfgtree::config::{Result, WriteToJson, load_json_file};

/// Merge the overlay file into the base file and print the merged document.
pub fn run(base: PathBuf, overlay: PathBuf) -> Result<()> {
	let mut merged = load_json_file(&base)?;
	let overlay = load_json_file(&overlay)?;

	merged.overwrite_with(&overlay);
	println!("{}", serde_json::to_string_pretty(&merged.to_json())?);

	Ok(())
}
