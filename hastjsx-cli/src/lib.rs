//! High level CLI-as-a-library for hastjsx.
//!
//! This is directly called to by the `hastjsx` CLI binary, and by the
//! fixture tests. It's a thin wrapper; library users should call
//! [`hastjsx::to_estree`] instead.

use clap::{Parser, ValueEnum};
use hastjsx::{Options, hast::Node};
use serde::Deserialize;

/// Converts a hast tree (JSON) into an estree JSX program (JSON).
#[derive(Debug, Parser)]
pub struct Args {
	/// Where to write the program. Defaults to
	/// stdout; intermediate folders must exist
	#[arg(short = 'o', long = "output")]
	pub output: Option<String>,
	/// The namespace of the tree root
	#[arg(long = "space", value_enum, default_value_t = Space::Html)]
	pub space: Space,
	/// How attribute names are spelled
	#[arg(long = "attribute-name-case", value_enum, default_value_t = AttributeNameCase::React)]
	pub attribute_name_case: AttributeNameCase,
	/// How `style` property names are spelled
	#[arg(long = "style-property-name-case", value_enum, default_value_t = StylePropertyNameCase::Dom)]
	pub style_property_name_case: StylePropertyNameCase,
	/// Pretty print the output
	#[arg(short = 'P', long = "pretty")]
	pub pretty: bool,
	/// The hast tree to convert
	/// (defaults to stdin)
	pub entry_point: Option<String>,
}

/// `--space`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Space {
	/// HTML
	Html,
	/// SVG
	Svg,
}

/// `--attribute-name-case`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AttributeNameCase {
	/// `className`, `htmlFor`
	React,
	/// `class`, `for`
	Html,
}

/// `--style-property-name-case`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StylePropertyNameCase {
	/// `backgroundColor`
	Dom,
	/// `background-color`
	Css,
}

impl Args {
	/// The conversion options selected by these arguments.
	#[must_use]
	pub fn options(&self) -> Options {
		Options {
			space: match self.space {
				Space::Html => hastjsx::Namespace::Html,
				Space::Svg => hastjsx::Namespace::Svg,
			},
			attribute_name_case: match self.attribute_name_case {
				AttributeNameCase::React => hastjsx::AttributeNameCase::React,
				AttributeNameCase::Html => hastjsx::AttributeNameCase::Html,
			},
			style_property_name_case: match self.style_property_name_case {
				StylePropertyNameCase::Dom => hastjsx::StylePropertyNameCase::Dom,
				StylePropertyNameCase::Css => hastjsx::StylePropertyNameCase::Css,
			},
			..Options::default()
		}
	}
}

/// The `Ok` result type for the [`run`] function.
pub struct Compilation {
	/// The generated program, as JSON.
	pub code: String,
}

/// Runs the converter with the given arguments.
///
/// This is identical to running the hastjsx CLI (except for parsing the
/// arguments and reading/writing files).
pub fn run(source: &str, args: &Args) -> Result<Compilation, Box<dyn std::error::Error>> {
	let options = args.options();
	tracing::debug!(bytes = source.len(), ?options, "read tree");

	let tree = parse(source)?;
	let program = hastjsx::to_estree(&tree, &options)?;

	let code = if args.pretty {
		serde_json::to_string_pretty(&program)?
	} else {
		serde_json::to_string(&program)?
	};

	Ok(Compilation { code })
}

/// Parses a hast tree of any depth.
///
/// JSON nesting isn't limited here; [`Options::max_depth`] is what bounds
/// how deep a convertible tree may be.
fn parse(source: &str) -> serde_json::Result<Node> {
	let mut deserializer = serde_json::Deserializer::from_str(source);
	deserializer.disable_recursion_limit();
	let tree = Node::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
	deserializer.end()?;
	Ok(tree)
}
