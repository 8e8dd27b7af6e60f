//! Errors raised while converting a hast tree.

use thiserror::Error;

/// Result type returned by the conversion and every node handler.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A fatal conversion failure.
///
/// Conversion is all-or-nothing; any of these aborts the whole call and no
/// partial [`Program`](crate::estree::Program) is produced.
#[derive(Debug, Error)]
pub enum Error {
	/// The value handed to the converter (or found as a child) has no
	/// string `type` discriminator, or its fields don't match its kind.
	#[error("Cannot handle value `{0}`, expected node")]
	InvalidInput(String),
	/// A node's kind has neither a built-in handler nor an override.
	#[error("Cannot handle unknown node `{0}`")]
	UnknownNodeKind(String),
	/// A `style` property string could not be parsed as CSS declarations.
	#[error("{tag_name}[style]:{line}:{column}: {reason}")]
	StyleSyntax {
		/// The tag name of the element carrying the `style` property.
		tag_name: String,
		/// 1-based line of the parse failure within the style text.
		line: usize,
		/// 1-based column (UTF-16 units) of the parse failure.
		column: usize,
		/// What went wrong.
		reason: String,
	},
	/// The input tree is nested deeper than [`Options::max_depth`](crate::Options::max_depth).
	#[error("Cannot handle tree deeper than {0} nodes")]
	DepthLimitExceeded(usize),
	/// A comment could not be re-encoded while attaching it to script nodes.
	#[error("failed to encode comment: {0}")]
	Json(#[from] serde_json::Error),
}
