//! Space and comma separated token lists, as used by attributes such as
//! `class` and `srcset`.

/// Joins tokens with single spaces.
#[must_use]
pub fn stringify_spaces<S: AsRef<str>>(values: &[S]) -> String {
	values
		.iter()
		.map(AsRef::as_ref)
		.collect::<Vec<_>>()
		.join(" ")
		.trim()
		.to_owned()
}

/// Joins tokens with `", "`.
///
/// A trailing empty token is kept visible as a trailing comma.
#[must_use]
pub fn stringify_commas<S: AsRef<str>>(values: &[S]) -> String {
	let mut values = values.iter().map(AsRef::as_ref).collect::<Vec<_>>();

	if values.last().is_some_and(|last| last.is_empty()) {
		values.push("");
	}

	values.join(", ").trim().to_owned()
}
