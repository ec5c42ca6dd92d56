#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "cfgtree", about = "Typed hierarchical configuration inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the tree dump and entry counts of a JSON config file.
	Show {
		path: PathBuf,
	},
	/// List value keys and subconfig names.
	Keys {
		path: PathBuf,
		#[arg(long)]
		subconfig: Option<String>,
	},
	/// Search the whole tree for a key and print its breadcrumb.
	Find {
		path: PathBuf,
		key: String,
	},
	/// Merge an overlay config file into a base and print the result.
	Merge {
		base: PathBuf,
		overlay: PathBuf,
	},
	/// Export a config file as a flat key/value config group.
	Export {
		path: PathBuf,
	},
}

fn main() {
	// Library diagnostics (missing keys, malformed document fields) go to
	// stderr; RUST_LOG overrides the default warn level.
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
		)
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cfgtree::config::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Show { path } => cmd::show::run(path),
		Commands::Keys { path, subconfig } => cmd::keys::run(path, subconfig),
		Commands::Find { path, key } => cmd::find::run(path, key),
		Commands::Merge { base, overlay } => cmd::merge::run(base, overlay),
		Commands::Export { path } => cmd::export::run(path),
	}
}
