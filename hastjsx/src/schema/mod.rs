//! Property information for HTML and SVG.
//!
//! Maps hast property names (`className`, `strokeDashArray`, `dataFooBar`)
//! to their attribute spelling (`class`, `stroke-dasharray`,
//! `data-foo-bar`), the space they belong to, and how their values are
//! written.

use std::{borrow::Cow, collections::HashMap};

use once_cell::sync::Lazy;

use crate::Namespace;

mod html;
mod shared;
mod svg;

/// The space a known property belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
	/// HTML attributes.
	Html,
	/// SVG attributes.
	Svg,
	/// `xml:*` attributes.
	Xml,
	/// `xlink:*` attributes.
	Xlink,
	/// `xmlns` and `xmlns:*` attributes.
	Xmlns,
}

/// How the values of a property are written.
///
/// A property can be several kinds at once (`coords` is both numeric and
/// comma separated).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kind(u8);

impl Kind {
	/// Nothing special.
	pub const PLAIN: Self = Self(0);
	/// Present or absent (`hidden`).
	pub const BOOLEAN: Self = Self(1);
	/// `"true"` or `"false"` (`draggable`).
	pub const BOOLEANISH: Self = Self(1 << 1);
	/// Present, absent, or a string (`download`).
	pub const OVERLOADED_BOOLEAN: Self = Self(1 << 2);
	/// A number (`tabIndex`).
	pub const NUMBER: Self = Self(1 << 3);
	/// A space separated list (`className`).
	pub const SPACE_SEPARATED: Self = Self(1 << 4);
	/// A comma separated list (`srcSet`).
	pub const COMMA_SEPARATED: Self = Self(1 << 5);
	/// A list separated by commas or spaces (`strokeDashArray`).
	pub const COMMA_OR_SPACE_SEPARATED: Self = Self(1 << 6);

	/// Both kinds.
	#[must_use]
	pub const fn and(self, other: Self) -> Self {
		Self(self.0 | other.0)
	}

	/// Whether all of `other` is in `self`.
	#[must_use]
	pub const fn contains(self, other: Self) -> bool {
		self.0 & other.0 == other.0
	}
}

/// What is known about a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Info {
	/// The hast property name (`className`).
	pub property: Cow<'static, str>,
	/// The attribute name (`class`).
	pub attribute: Cow<'static, str>,
	/// The space of known properties; `None` for `aria-*`, `data-*` and
	/// unknown names.
	pub space: Option<Space>,
	/// How values are written.
	pub kind: Kind,
}

impl Info {
	/// Whether the property is present-or-absent.
	#[must_use]
	pub fn is_boolean(&self) -> bool {
		self.kind.contains(Kind::BOOLEAN)
	}

	/// Whether list values are joined with commas.
	#[must_use]
	pub fn is_comma_separated(&self) -> bool {
		self.kind.contains(Kind::COMMA_SEPARATED)
	}
}

/// A group of properties sharing a space and a naming rule.
pub(crate) struct Definition {
	/// The space of every property in the group.
	space: Option<Space>,
	/// Derives the attribute name of a property.
	attribute: fn(&'static str) -> Cow<'static, str>,
	/// Property names and kinds.
	properties: &'static [(&'static str, Kind)],
}

/// The properties of a namespace, indexed for lookups.
pub struct Schema {
	/// Known properties by property name.
	properties: HashMap<&'static str, Info>,
	/// Property names by lowercased property or attribute name.
	normal: HashMap<String, &'static str>,
}

impl Schema {
	/// Indexes `definitions`; later definitions win.
	fn new(definitions: &[&Definition]) -> Self {
		let mut schema = Self {
			properties: HashMap::new(),
			normal: HashMap::new(),
		};

		for definition in definitions {
			for &(property, kind) in definition.properties {
				let attribute = (definition.attribute)(property);
				schema.normal.insert(property.to_lowercase(), property);
				schema.normal.insert(attribute.to_lowercase(), property);
				schema.properties.insert(
					property,
					Info {
						property: Cow::Borrowed(property),
						attribute,
						space: definition.space,
						kind,
					},
				);
			}
		}

		schema
	}

	/// The schema for `namespace`.
	#[must_use]
	pub fn of(namespace: Namespace) -> &'static Self {
		match namespace {
			Namespace::Html => &HTML,
			Namespace::Svg => &SVG,
		}
	}

	/// Looks up a property or attribute name.
	///
	/// Lookups are case-insensitive. `data-*` attributes and their
	/// `dataset` style property names are converted into each other. Any
	/// other unknown name is its own property and attribute name.
	#[must_use]
	pub fn find(&self, name: &str) -> Info {
		if let Some(info) = self
			.normal
			.get(&name.to_lowercase())
			.and_then(|property| self.properties.get(property))
		{
			return info.clone();
		}

		let (property, attribute) = match dataset(name) {
			Some(pair) => pair,
			None => (name.to_owned(), name.to_owned()),
		};

		Info {
			property: Cow::Owned(property),
			attribute: Cow::Owned(attribute),
			space: None,
			kind: Kind::PLAIN,
		}
	}
}

/// HTML with the shared spaces.
static HTML: Lazy<Schema> = Lazy::new(|| {
	Schema::new(&[
		&shared::XML,
		&shared::XLINK,
		&shared::XMLNS,
		&shared::ARIA,
		&html::HTML,
	])
});

/// SVG with the shared spaces.
static SVG: Lazy<Schema> = Lazy::new(|| {
	Schema::new(&[
		&shared::XML,
		&shared::XLINK,
		&shared::XMLNS,
		&shared::ARIA,
		&svg::SVG,
	])
});

/// Converts between `data-foo-bar` and `dataFooBar`, returning
/// `(property, attribute)`, or `None` for names that aren't data names.
fn dataset(name: &str) -> Option<(String, String)> {
	let rest = name.get(4..).filter(|rest| !rest.is_empty())?;
	let valid = name[..4].eq_ignore_ascii_case("data")
		&& rest
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'));
	if !valid {
		return None;
	}

	if let Some(rest) = rest.strip_prefix('-') {
		let camel = dashes_to_camel(rest);
		let mut chars = camel.chars();
		let property = match chars.next() {
			Some(first) => format!("data{}{}", first.to_uppercase(), chars.as_str()),
			None => "data".to_owned(),
		};
		return Some((property, name.to_owned()));
	}

	if has_dash_lowercase(rest) {
		return Some((name.to_owned(), name.to_owned()));
	}

	let mut dashes = String::with_capacity(rest.len() + 4);
	for c in rest.chars() {
		if c.is_ascii_uppercase() {
			dashes.push('-');
			dashes.push(c.to_ascii_lowercase());
		} else {
			dashes.push(c);
		}
	}
	if !dashes.starts_with('-') {
		dashes.insert(0, '-');
	}

	Some((name.to_owned(), format!("data{dashes}")))
}

/// `a-bc` to `aBc`; only lowercase letters after a dash are joined.
fn dashes_to_camel(value: &str) -> String {
	let mut result = String::with_capacity(value.len());
	let mut chars = value.chars().peekable();
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

/// Whether `value` contains a dash followed by a lowercase letter.
fn has_dash_lowercase(value: &str) -> bool {
	value
		.as_bytes()
		.windows(2)
		.any(|pair| pair[0] == b'-' && pair[1].is_ascii_lowercase())
}

/// Lowercases a property name, unless it is one of `overrides`.
fn lowercase_unless(
	overrides: &'static [(&'static str, &'static str)],
	property: &'static str,
) -> Cow<'static, str> {
	let lower = property.to_lowercase();
	overrides
		.iter()
		.find(|(from, _)| *from == lower)
		.map_or(Cow::Owned(lower), |(_, to)| Cow::Borrowed(*to))
}

/// The property names React uses where they differ from hast's.
const HAST_TO_REACT: &[(&str, &str)] = &[
	("classId", "classID"),
	("dataType", "datatype"),
	("itemId", "itemID"),
	("strokeDashArray", "strokeDasharray"),
	("strokeDashOffset", "strokeDashoffset"),
	("strokeLineCap", "strokeLinecap"),
	("strokeLineJoin", "strokeLinejoin"),
	("strokeMiterLimit", "strokeMiterlimit"),
	("typeOf", "typeof"),
	("xLinkActuate", "xlinkActuate"),
	("xLinkArcRole", "xlinkArcrole"),
	("xLinkHref", "xlinkHref"),
	("xLinkRole", "xlinkRole"),
	("xLinkShow", "xlinkShow"),
	("xLinkTitle", "xlinkTitle"),
	("xLinkType", "xlinkType"),
	("xmlnsXLink", "xmlnsXlink"),
];

/// The React spelling of a hast property name.
#[must_use]
pub fn hast_to_react(property: &str) -> &str {
	HAST_TO_REACT
		.iter()
		.find(|(hast, _)| *hast == property)
		.map_or(property, |(_, react)| *react)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn html(name: &str) -> Info {
		Schema::of(Namespace::Html).find(name)
	}

	fn svg(name: &str) -> Info {
		Schema::of(Namespace::Svg).find(name)
	}

	#[test]
	fn html_properties() {
		let info = html("className");
		assert_eq!(info.attribute, "class");
		assert_eq!(info.space, Some(Space::Html));
		assert!(info.kind.contains(Kind::SPACE_SEPARATED));

		assert_eq!(html("class").property, "className");
		assert_eq!(html("for").property, "htmlFor");
		assert_eq!(html("ACCEPT-CHARSET").property, "acceptCharset");
		assert_eq!(html("tabIndex").attribute, "tabindex");
		assert!(html("allowFullScreen").is_boolean());
		assert!(html("srcSet").is_comma_separated());
		assert!(html("coords").kind.contains(Kind::NUMBER));
		assert!(html("coords").is_comma_separated());
	}

	#[test]
	fn svg_properties() {
		let info = svg("strokeDashArray");
		assert_eq!(info.attribute, "stroke-dasharray");
		assert_eq!(info.space, Some(Space::Svg));
		assert_eq!(svg("viewBox").attribute, "viewBox");
		assert_eq!(svg("viewbox").property, "viewBox");
		assert_eq!(svg("className").attribute, "class");
		assert_eq!(svg("onClick").attribute, "onclick");
		assert!(svg("g1").is_comma_separated());
		assert!(!html("g1").is_comma_separated());
	}

	#[test]
	fn shared_spaces() {
		let info = html("xLinkHref");
		assert_eq!(info.attribute, "xlink:href");
		assert_eq!(info.space, Some(Space::Xlink));
		assert_eq!(svg("xlink:href").property, "xLinkHref");
		assert_eq!(html("xmlLang").attribute, "xml:lang");
		assert_eq!(html("xmlnsXLink").attribute, "xmlns:xlink");

		let info = html("ariaDescribedBy");
		assert_eq!(info.attribute, "aria-describedby");
		assert_eq!(info.space, None);
		assert_eq!(html("role").attribute, "role");
	}

	#[test]
	fn data_names() {
		let info = html("data-foo-bar");
		assert_eq!(info.property, "dataFooBar");
		assert_eq!(info.attribute, "data-foo-bar");

		let info = html("dataFooBar");
		assert_eq!(info.property, "dataFooBar");
		assert_eq!(info.attribute, "data-foo-bar");

		assert_eq!(html("data123").attribute, "data-123");
		assert_eq!(html("dataFoo-bar").attribute, "dataFoo-bar");
		assert_eq!(html("data").attribute, "data");
		assert_eq!(html("data-").property, "data");
		assert_eq!(html("data+x").attribute, "data+x");
	}

	#[test]
	fn unknown_names() {
		let info = html("b-c");
		assert_eq!(info.property, "b-c");
		assert_eq!(info.attribute, "b-c");
		assert_eq!(info.space, None);
		assert_eq!(info.kind, Kind::PLAIN);
	}

	#[test]
	fn react_names() {
		assert_eq!(hast_to_react("strokeDashArray"), "strokeDasharray");
		assert_eq!(hast_to_react("className"), "className");
	}
}
