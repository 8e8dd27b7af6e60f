//! Identifier name checks.
//!
//! Reserved words are not rejected; `class` is a perfectly good JSX
//! attribute name and object key.

use oxc::syntax::identifier::{is_identifier_part, is_identifier_start};

/// Whether `name` can be written as a JSX identifier: an ECMAScript
/// identifier name that may also contain hyphens after its first character.
#[must_use]
pub fn is_jsx_identifier_name(name: &str) -> bool {
	check(name, true)
}

/// Whether `name` is an ECMAScript identifier name.
#[must_use]
pub fn is_identifier_name(name: &str) -> bool {
	check(name, false)
}

/// Whether `name` is an identifier, also allowing `-` after the first
/// character when `jsx` is set.
fn check(name: &str, jsx: bool) -> bool {
	let mut chars = name.chars();

	let Some(first) = chars.next() else {
		return false;
	};

	is_identifier_start(first) && chars.all(|c| is_identifier_part(c) || (jsx && c == '-'))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn jsx_names() {
		assert!(is_jsx_identifier_name("a"));
		assert!(is_jsx_identifier_name("b-c"));
		assert!(is_jsx_identifier_name("$_x1"));
		assert!(is_jsx_identifier_name("é"));
		assert!(is_jsx_identifier_name("class"));
		assert!(!is_jsx_identifier_name(""));
		assert!(!is_jsx_identifier_name("1"));
		assert!(!is_jsx_identifier_name("-a"));
		assert!(!is_jsx_identifier_name("b+"));
		assert!(!is_jsx_identifier_name("a b"));
		assert!(!is_jsx_identifier_name("a:b"));
	}

	#[test]
	fn plain_names() {
		assert!(is_identifier_name("backgroundColor"));
		assert!(is_identifier_name("WebkitTransform"));
		assert!(!is_identifier_name("--x"));
		assert!(!is_identifier_name("a-b"));
		assert!(!is_identifier_name("0"));
	}
}
