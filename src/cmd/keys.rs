use std::path::PathBuf;

use cfgtree::config::{Configuration, Result, load_json_file};

/// List value keys with their kinds, and subconfig names.
pub fn run(path: PathBuf, subconfig: Option<String>) -> Result<()> {
	let root = load_json_file(&path)?;

	match subconfig {
		Some(name) if root.has_subconfig(&name) => {
			let child = root.subconfig_view(&name);
			print_node(&child.borrow());
		}
		Some(name) => {
			println!("no subconfig named {name}");
		}
		None => print_node(&root),
	}

	Ok(())
}

fn print_node(config: &Configuration) {
	println!("values:");
	for (key, kind) in config.value_types() {
		println!("  {key}: {kind}");
	}
	println!("subconfigs:");
	for name in config.subconfig_keys() {
		println!("  {name}");
	}
}
