//! Inline `style` attribute handling.
//!
//! The parser is a small scanner over the declaration list grammar of inline
//! styles (declarations separated by `;`, `/* */` comments, quoted strings
//! and parenthesized groups in values). It does not understand anything
//! else of CSS.

use indexmap::IndexMap;

use crate::{Error, Result, StylePropertyNameCase, hast::Primitive};

/// Parses `text` into ordered `(property, value)` declarations, then
/// renames the properties according to `case`.
///
/// Properties are kept as written with [`StylePropertyNameCase::Css`], and
/// camel cased with [`StylePropertyNameCase::Dom`]. Later duplicates
/// overwrite earlier values. `tag_name` is only used in errors.
pub fn parse(
	text: &str,
	tag_name: &str,
	case: StylePropertyNameCase,
) -> Result<IndexMap<String, String>> {
	let mut scanner = Scanner::new(text);
	let mut result = IndexMap::new();

	let declarations = scanner.declarations().map_err(|reason| {
		Error::StyleSyntax {
			tag_name: tag_name.to_owned(),
			line: scanner.line,
			column: scanner.column,
			reason: reason.to_owned(),
		}
	})?;

	for (property, value) in declarations {
		let property = match case {
			StylePropertyNameCase::Dom => to_dom_case(&property),
			StylePropertyNameCase::Css => property,
		};
		result.insert(property, value);
	}

	Ok(result)
}

/// Stringifies the values of an object-form style, renaming its keys
/// according to `case`.
///
/// Keys are kept as written with [`StylePropertyNameCase::Dom`], and dash
/// cased with [`StylePropertyNameCase::Css`].
#[must_use]
pub fn from_object(
	object: &IndexMap<String, Primitive>,
	case: StylePropertyNameCase,
) -> IndexMap<String, String> {
	object
		.iter()
		.map(|(property, value)| {
			let property = match case {
				StylePropertyNameCase::Dom => property.clone(),
				StylePropertyNameCase::Css => to_css_case(property),
			};
			(property, value.to_js_string())
		})
		.collect()
}

/// `background-color` to `backgroundColor`, `-webkit-x` to `WebkitX`,
/// `-ms-x` to `msX`. Custom properties (`--x`) are left alone.
#[must_use]
pub fn to_dom_case(property: &str) -> String {
	if property.starts_with("--") {
		return property.to_owned();
	}

	let property = match property.strip_prefix("-ms-") {
		Some(rest) => format!("ms-{rest}"),
		None => property.to_owned(),
	};

	let mut result = String::with_capacity(property.len());
	let mut chars = property.chars().peekable();
	while let Some(c) = chars.next() {
		match chars.peek() {
			Some(next) if c == '-' && next.is_ascii_lowercase() => {
				result.push(next.to_ascii_uppercase());
				chars.next();
			}
			_ => result.push(c),
		}
	}

	result
}

/// `backgroundColor` to `background-color`, `WebkitX` to `-webkit-x`,
/// `msX` to `-ms-x`. Custom properties (`--x`) are left alone.
#[must_use]
pub fn to_css_case(property: &str) -> String {
	if property.starts_with("--") {
		return property.to_owned();
	}

	let mut result = String::with_capacity(property.len() + 2);
	for c in property.chars() {
		if c.is_ascii_uppercase() {
			result.push('-');
			result.push(c.to_ascii_lowercase());
		} else {
			result.push(c);
		}
	}

	if result.starts_with("ms-") {
		result.insert(0, '-');
	}

	result
}

/// Whitespace as matched by `\s` in script regular expressions.
fn is_space(c: char) -> bool {
	c.is_whitespace() || c == '\u{feff}'
}

/// Line terminators, which `.` in script regular expressions excludes.
fn is_line_terminator(c: char) -> bool {
	matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Removes complete `/* */` comments.
fn strip_comments(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	let mut rest = text;

	while let Some(start) = rest.find("/*") {
		let Some(length) = rest[start + 2..].find("*/") else {
			break;
		};
		result.push_str(&rest[..start]);
		rest = &rest[start + 2 + length + 2..];
	}

	result.push_str(rest);
	result
}

/// Cursor over the remaining style text, tracking the 1-based line and
/// column (in UTF-16 units) of the next character.
struct Scanner<'a> {
	/// Text not consumed yet.
	rest: &'a str,
	/// Current line.
	line: usize,
	/// Current column.
	column: usize,
}

impl<'a> Scanner<'a> {
	/// Starts at the beginning of `text`.
	fn new(text: &'a str) -> Self {
		Self {
			rest: text,
			line: 1,
			column: 1,
		}
	}

	/// Moves the position over `text`.
	fn advance_position(&mut self, text: &str) {
		self.line += text.matches('\n').count();
		self.column = match text.rfind('\n') {
			Some(index) => text[index..].encode_utf16().count(),
			None => self.column + text.encode_utf16().count(),
		};
	}

	/// Consumes `length` bytes, returning them.
	fn consume(&mut self, length: usize) -> &'a str {
		let (consumed, rest) = self.rest.split_at(length);
		self.advance_position(consumed);
		self.rest = rest;
		consumed
	}

	/// Consumes whitespace.
	fn whitespace(&mut self) {
		let length = self.rest.len() - self.rest.trim_start_matches(is_space).len();
		self.consume(length);
	}

	/// Consumes a comment; `Ok(false)` when there is none.
	fn comment(&mut self) -> Result<bool, &'static str> {
		let Some(body) = self.rest.strip_prefix("/*") else {
			return Ok(false);
		};

		let Some(length) = body.find("*/") else {
			return Err("End of comment missing");
		};

		let inner = &body[..length];
		self.column += 2;
		self.advance_position(inner);
		self.column += 2;
		self.rest = &body[length + 2..];
		self.whitespace();
		Ok(true)
	}

	/// Consumes any number of comments.
	fn comments(&mut self) -> Result<(), &'static str> {
		while self.comment()? {}
		Ok(())
	}

	/// Consumes a property name and the whitespace after it.
	fn property(&mut self) -> Option<&'a str> {
		let is_name =
			|c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '#' | '/' | '*' | '\\');

		let mut length = self.rest.len() - self.rest.trim_start_matches(is_name).len();
		if length == 0 {
			return None;
		}

		// `name[hack]`
		if let Some(bracketed) = self.rest[length..].strip_prefix('[') {
			let inner = bracketed.len()
				- bracketed
					.trim_start_matches(|c: char| {
						c.is_ascii_digit() || c.is_ascii_lowercase() || matches!(c, '_' | '-')
					})
					.len();
			if inner > 0 && bracketed[inner..].starts_with(']') {
				length += inner + 2;
			}
		}

		let after = &self.rest[length..];
		length += after.len() - after.trim_start_matches(is_space).len();
		Some(self.consume(length))
	}

	/// Consumes a colon and the whitespace after it.
	fn colon(&mut self) -> bool {
		let Some(after) = self.rest.strip_prefix(':') else {
			return false;
		};
		let length = self.rest.len() - after.trim_start_matches(is_space).len();
		self.consume(length);
		true
	}

	/// Consumes a value, if any.
	fn value(&mut self) -> Option<&'a str> {
		let mut length = 0;

		while let Some(c) = self.rest[length..].chars().next() {
			let rest = &self.rest[length..];
			length += match c {
				'\'' | '"' => quoted(rest, c).unwrap_or(c.len_utf8()),
				'(' => rest.find(')').map_or(1, |end| end + 1),
				'}' | ';' => break,
				_ => c.len_utf8(),
			};
		}

		(length > 0).then(|| self.consume(length))
	}

	/// Consumes semicolons and whitespace.
	fn semicolons(&mut self) {
		let length = self.rest.len()
			- self
				.rest
				.trim_start_matches(|c: char| c == ';' || is_space(c))
				.len();
		self.consume(length);
	}

	/// Consumes a declaration; `Ok(None)` when no property starts here.
	fn declaration(&mut self) -> Result<Option<(String, String)>, &'static str> {
		let Some(property) = self.property() else {
			return Ok(None);
		};

		self.comment()?;

		if !self.colon() {
			return Err("property missing ':'");
		}

		let value = self.value().map(strip_comments).unwrap_or_default();
		let property = strip_comments(property);
		self.semicolons();

		Ok(Some((
			property.trim_matches(is_space).to_owned(),
			value.trim_matches(is_space).to_owned(),
		)))
	}

	/// Consumes the whole text.
	fn declarations(&mut self) -> Result<Vec<(String, String)>, &'static str> {
		let mut declarations = Vec::new();

		self.whitespace();
		self.comments()?;

		while let Some(declaration) = self.declaration()? {
			declarations.push(declaration);
			self.comments()?;
		}

		Ok(declarations)
	}
}

/// Length of a quoted string at the start of `text` (which starts with
/// `quote`), including both quotes.
///
/// Escaped quotes are skipped. When no unescaped closing quote is found on
/// the same line, the last escaped quote closes the string instead.
fn quoted(text: &str, quote: char) -> Option<usize> {
	let mut last_escaped = None;
	let mut chars = text.char_indices().skip(1).peekable();

	while let Some((index, c)) = chars.next() {
		if c == quote {
			return Some(index + c.len_utf8());
		}

		if is_line_terminator(c) {
			break;
		}

		if c == '\\' {
			if let Some(&(next_index, next)) = chars.peek() {
				if next == quote {
					last_escaped = Some(next_index + next.len_utf8());
					chars.next();
				}
			}
		}
	}

	last_escaped
}

#[cfg(test)]
mod tests {
	use super::*;

	fn dom(text: &str) -> Vec<(String, String)> {
		parse(text, "a", StylePropertyNameCase::Dom)
			.unwrap()
			.into_iter()
			.collect()
	}

	fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
		items
			.iter()
			.map(|(a, b)| ((*a).to_owned(), (*b).to_owned()))
			.collect()
	}

	#[test]
	fn empty() {
		assert!(dom("").is_empty());
		assert!(dom("  ;; ").is_empty());
	}

	#[test]
	fn declarations() {
		assert_eq!(
			dom("color: red; background-color: blue"),
			pairs(&[("color", "red"), ("backgroundColor", "blue")])
		);
	}

	#[test]
	fn vendor_prefixes() {
		assert_eq!(
			dom("-webkit-transform: rotate(0.01turn); -ms-transform: none; --fg: 1"),
			pairs(&[
				("WebkitTransform", "rotate(0.01turn)"),
				("msTransform", "none"),
				("--fg", "1")
			])
		);
	}

	#[test]
	fn css_case_keeps_names() {
		let parsed = parse("-webkit-transform: none", "a", StylePropertyNameCase::Css).unwrap();
		assert_eq!(parsed["-webkit-transform"], "none");
	}

	#[test]
	fn values_with_separators() {
		assert_eq!(
			dom("background: url(\"a;b\"); content: 'x;y'; font-family: \"a\\\"b\""),
			pairs(&[
				("background", "url(\"a;b\")"),
				("content", "'x;y'"),
				("fontFamily", "\"a\\\"b\"")
			])
		);
	}

	#[test]
	fn comments_are_ignored() {
		assert_eq!(
			dom("/* a */ color /* b */: red /* c */; /* d */"),
			pairs(&[("color", "red")])
		);
	}

	#[test]
	fn empty_values_are_kept() {
		assert_eq!(dom("color:;"), pairs(&[("color", "")]));
	}

	#[test]
	fn duplicates_overwrite() {
		assert_eq!(dom("color: red; color: blue"), pairs(&[("color", "blue")]));
	}

	#[test]
	fn stops_at_garbage() {
		assert_eq!(dom("color: red; {x: y}"), pairs(&[("color", "red")]));
	}

	#[test]
	fn missing_colon() {
		let error = parse("x", "a", StylePropertyNameCase::Dom).unwrap_err();
		assert_eq!(error.to_string(), "a[style]:1:2: property missing ':'");

		let error = parse("color: red;\n  y", "b", StylePropertyNameCase::Dom).unwrap_err();
		assert_eq!(error.to_string(), "b[style]:2:4: property missing ':'");
	}

	#[test]
	fn unterminated_comment() {
		let error = parse("color: red; /* x", "a", StylePropertyNameCase::Dom).unwrap_err();
		assert!(error.to_string().ends_with("End of comment missing"));
	}

	#[test]
	fn casing() {
		assert_eq!(to_css_case("backgroundColor"), "background-color");
		assert_eq!(to_css_case("WebkitTransform"), "-webkit-transform");
		assert_eq!(to_css_case("msTransform"), "-ms-transform");
		assert_eq!(to_css_case("--someVar"), "--someVar");
		assert_eq!(to_dom_case("-moz-user-select"), "MozUserSelect");
		assert_eq!(to_dom_case("color"), "color");
	}

	#[test]
	fn objects() {
		let object = IndexMap::from([
			("backgroundColor".to_owned(), Primitive::String("red".into())),
			("zIndex".to_owned(), Primitive::Number(1.0)),
		]);

		let dom = from_object(&object, StylePropertyNameCase::Dom);
		assert_eq!(dom["backgroundColor"], "red");
		assert_eq!(dom["zIndex"], "1");

		let css = from_object(&object, StylePropertyNameCase::Css);
		assert_eq!(css.keys().collect::<Vec<_>>(), ["background-color", "z-index"]);
	}
}
