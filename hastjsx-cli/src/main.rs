//! CLI for hastjsx.
use std::io::{Read, Write};

use clap::Parser;
use hastjsx_cli::Args;
use tracing_subscriber::EnvFilter;

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();

	let source = if let Some(ref entry) = args.entry_point {
		std::fs::read_to_string(entry).unwrap_or_else(|error| {
			eprintln!("failed to read entry point: {error}");
			std::process::exit(1);
		})
	} else {
		let mut str = String::with_capacity(4096);
		if let Err(error) = std::io::stdin().read_to_string(&mut str) {
			eprintln!("failed to read stdin: {error}");
			std::process::exit(1);
		}
		str
	};

	let compilation = match hastjsx_cli::run(&source, &args) {
		Ok(compilation) => compilation,
		Err(error) => {
			eprintln!("{error}");
			std::process::exit(1);
		}
	};

	let written = if let Some(output) = args.output {
		std::fs::write(&output, compilation.code.as_bytes())
	} else {
		let mut stdout = std::io::stdout();
		stdout
			.write_all(compilation.code.as_bytes())
			.and_then(|()| stdout.write_all(b"\n"))
	};

	if let Err(error) = written {
		eprintln!("failed to write output: {error}");
		std::process::exit(1);
	}
}
