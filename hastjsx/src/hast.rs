//! The input side: hast nodes, extended with the MDX node kinds.
//!
//! Nodes are usually deserialized from hast JSON. Deserializing a [`Node`]
//! never fails; values that aren't recognizable nodes become
//! [`Node::Invalid`] and unrecognized kinds become [`Node::Unknown`], so that
//! both can be reported (or handled by an override) at dispatch time.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::estree::{self, Span};

/// Table structure tags inside which single line break text children are dropped.
const TABLE_ELEMENTS: [&str; 7] = ["table", "thead", "tbody", "tfoot", "tr", "th", "td"];

/// Remaining stack below which deserializing a node grows the stack.
const RED_ZONE: usize = 64 * 1024;
/// Size of each newly allocated stack segment.
const STACK_SIZE: usize = 1024 * 1024;

/// Any node in the input tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	/// `root`
	Root(Root),
	/// `element`
	Element(Element),
	/// `text`
	Text(Text),
	/// `comment`
	Comment(Comment),
	/// `doctype`
	Doctype(Doctype),
	/// `mdxjsEsm`
	MdxjsEsm(MdxjsEsm),
	/// `mdxFlowExpression`
	MdxFlowExpression(MdxExpression),
	/// `mdxTextExpression`
	MdxTextExpression(MdxExpression),
	/// `mdxJsxFlowElement`
	MdxJsxFlowElement(MdxJsxElement),
	/// `mdxJsxTextElement`
	MdxJsxTextElement(MdxJsxElement),
	/// A node with a `type` no built-in handler knows about.
	Unknown(UnknownNode),
	/// A value without a string `type`, or a known kind with malformed fields.
	Invalid(Value),
}

impl Node {
	/// Returns the node's kind string (its `type`), or `None` for
	/// [`Node::Invalid`].
	#[must_use]
	pub fn kind(&self) -> Option<&str> {
		Some(match self {
			Node::Root(_) => "root",
			Node::Element(_) => "element",
			Node::Text(_) => "text",
			Node::Comment(_) => "comment",
			Node::Doctype(_) => "doctype",
			Node::MdxjsEsm(_) => "mdxjsEsm",
			Node::MdxFlowExpression(_) => "mdxFlowExpression",
			Node::MdxTextExpression(_) => "mdxTextExpression",
			Node::MdxJsxFlowElement(_) => "mdxJsxFlowElement",
			Node::MdxJsxTextElement(_) => "mdxJsxTextElement",
			Node::Unknown(node) => &node.kind,
			Node::Invalid(_) => return None,
		})
	}
}

/// Deserializes a known node kind, falling back to [`Node::Invalid`].
///
/// Children are deserialized recursively, so the stack is grown on demand
/// for deeply nested trees.
fn typed<T: DeserializeOwned>(value: Value, wrap: impl FnOnce(T) -> Node) -> Node {
	match stacker::maybe_grow(RED_ZONE, STACK_SIZE, || T::deserialize(&value)) {
		Ok(node) => wrap(node),
		Err(error) => {
			tracing::debug!(%error, "malformed node");
			Node::Invalid(value)
		}
	}
}

impl From<Value> for Node {
	fn from(value: Value) -> Self {
		let Some(kind) = value.get("type").and_then(Value::as_str).map(str::to_owned) else {
			return Node::Invalid(value);
		};

		match kind.as_str() {
			"root" => typed(value, Node::Root),
			"element" => typed(value, Node::Element),
			"text" => typed(value, Node::Text),
			"comment" => typed(value, Node::Comment),
			"doctype" => typed(value, Node::Doctype),
			"mdxjsEsm" => typed(value, Node::MdxjsEsm),
			"mdxFlowExpression" => typed(value, Node::MdxFlowExpression),
			"mdxTextExpression" => typed(value, Node::MdxTextExpression),
			"mdxJsxFlowElement" => typed(value, Node::MdxJsxFlowElement),
			"mdxJsxTextElement" => typed(value, Node::MdxJsxTextElement),
			_ => typed(value, Node::Unknown),
		}
	}
}

impl<'de> Deserialize<'de> for Node {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Value::deserialize(deserializer).map(Node::from)
	}
}

/// A point in the source document.
///
/// `line` and `column` are 1-based, `offset` is 0-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Point {
	/// 1-based line.
	#[serde(default)]
	pub line: Option<usize>,
	/// 1-based column.
	#[serde(default)]
	pub column: Option<usize>,
	/// 0-based offset.
	#[serde(default)]
	pub offset: Option<usize>,
}

/// The source span of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Position {
	/// Place of the first character.
	#[serde(default)]
	pub start: Point,
	/// Place after the last character.
	#[serde(default)]
	pub end: Point,
}

/// Side-channel data attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Data {
	/// The pre-parsed script for MDX expression and ESM nodes.
	#[serde(default, deserialize_with = "lenient_payload")]
	pub estree: Option<ScriptPayload>,
	/// Everything else, in insertion order.
	#[serde(flatten)]
	pub fields: Map<String, Value>,
}

/// Reads a script payload, treating an unrecognizable one as absent.
fn lenient_payload<'de, D: Deserializer<'de>>(
	deserializer: D,
) -> Result<Option<ScriptPayload>, D::Error> {
	let value = Option::<Value>::deserialize(deserializer)?;
	Ok(value.and_then(|value| {
		ScriptPayload::deserialize(value)
			.inspect_err(|error| tracing::debug!(%error, "ignoring malformed script payload"))
			.ok()
	}))
}

/// An already parsed script fragment, as produced by the MDX tooling.
///
/// Statements are kept as estree JSON; only their positions and the
/// `expression`/`properties`/`argument` fields are ever inspected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScriptPayload {
	/// Top-level statements, in order.
	#[serde(default)]
	pub body: Vec<Value>,
	/// Comments found while parsing.
	#[serde(default)]
	pub comments: Vec<estree::Comment>,
	/// The span of the payload program itself.
	#[serde(flatten)]
	pub span: Span,
}

/// Access to the fields every node kind may carry.
pub trait Located {
	/// The source span, if known.
	fn position(&self) -> Option<&Position>;
	/// Side-channel data, if any.
	fn data(&self) -> Option<&Data>;
}

/// Implements [`Located`] for structs with `position` and `data` fields.
macro_rules! located {
	($($ty:ty),* $(,)?) => {
		$(
			impl Located for $ty {
				fn position(&self) -> Option<&Position> {
					self.position.as_ref()
				}

				fn data(&self) -> Option<&Data> {
					self.data.as_ref()
				}
			}
		)*
	};
}

located!(
	Root,
	Element,
	Text,
	Comment,
	Doctype,
	MdxjsEsm,
	MdxExpression,
	MdxJsxElement,
	MdxJsxAttribute,
	MdxJsxExpressionAttribute,
	MdxJsxAttributeValueExpression,
	UnknownNode,
);

impl Located for Node {
	fn position(&self) -> Option<&Position> {
		match self {
			Node::Root(node) => node.position(),
			Node::Element(node) => node.position(),
			Node::Text(node) => node.position(),
			Node::Comment(node) => node.position(),
			Node::Doctype(node) => node.position(),
			Node::MdxjsEsm(node) => node.position(),
			Node::MdxFlowExpression(node) | Node::MdxTextExpression(node) => node.position(),
			Node::MdxJsxFlowElement(node) | Node::MdxJsxTextElement(node) => node.position(),
			Node::Unknown(node) => node.position(),
			Node::Invalid(_) => None,
		}
	}

	fn data(&self) -> Option<&Data> {
		match self {
			Node::Root(node) => node.data(),
			Node::Element(node) => node.data(),
			Node::Text(node) => node.data(),
			Node::Comment(node) => node.data(),
			Node::Doctype(node) => node.data(),
			Node::MdxjsEsm(node) => node.data(),
			Node::MdxFlowExpression(node) | Node::MdxTextExpression(node) => node.data(),
			Node::MdxJsxFlowElement(node) | Node::MdxJsxTextElement(node) => node.data(),
			Node::Unknown(node) => node.data(),
			Node::Invalid(_) => None,
		}
	}
}

/// A node whose children are converted in order.
pub trait Parent {
	/// The child nodes.
	fn children(&self) -> &[Node];

	/// Whether this is a table structure element, inside which text
	/// children consisting of a single line break are dropped.
	fn is_table_structure(&self) -> bool {
		false
	}
}

/// The document root.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Root {
	/// Child nodes.
	#[serde(default)]
	pub children: Vec<Node>,
	/// Source span.
	#[serde(default)]
	pub position: Option<Position>,
	/// Side-channel data.
	#[serde(default)]
	pub data: Option<Data>,
}

impl Parent for Root {
	fn children(&self) -> &[Node] {
		&self.children
	}
}

/// An HTML or SVG element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
	/// The tag name, as written.
	pub tag_name: String,
	/// Properties, in insertion order.
	#[serde(default)]
	pub properties: IndexMap<String, PropertyValue>,
	/// Child nodes.
	#[serde(default)]
	pub children: Vec<Node>,
	/// Source span.
	#[serde(default)]
	pub position: Option<Position>,
	/// Side-channel data.
	#[serde(default)]
	pub data: Option<Data>,
}

impl Parent for Element {
	fn children(&self) -> &[Node] {
		&self.children
	}

	fn is_table_structure(&self) -> bool {
		TABLE_ELEMENTS
			.iter()
			.any(|tag| self.tag_name.eq_ignore_ascii_case(tag))
	}
}

/// Text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Text {
	/// The text content; absent is treated as empty.
	#[serde(default)]
	pub value: Option<String>,
	/// Source span.
	#[serde(default)]
	pub position: Option<Position>,
	/// Side-channel data.
	#[serde(default)]
	pub data: Option<Data>,
}

/// An HTML comment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Comment {
	/// The comment content.
	#[serde(default)]
	pub value: String,
	/// Source span.
	#[serde(default)]
	pub position: Option<Position>,
	/// Side-channel data.
	#[serde(default)]
	pub data: Option<Data>,
}

/// A doctype; always dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Doctype {
	/// Source span.
	#[serde(default)]
	pub position: Option<Position>,
	/// Side-channel data.
	#[serde(default)]
	pub data: Option<Data>,
}

/// An MDX ESM block (`import`/`export` statements).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MdxjsEsm {
	/// The raw source.
	#[serde(default)]
	pub value: String,
	/// Source span.
	#[serde(default)]
	pub position: Option<Position>,
	/// Side-channel data; the script lives in `data.estree`.
	#[serde(default)]
	pub data: Option<Data>,
}

/// An MDX `{expression}`, either flow or text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MdxExpression {
	/// The raw source.
	#[serde(default)]
	pub value: String,
	/// Source span.
	#[serde(default)]
	pub position: Option<Position>,
	/// Side-channel data; the script lives in `data.estree`.
	#[serde(default)]
	pub data: Option<Data>,
}

/// An MDX JSX element, or a fragment when `name` is absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MdxJsxElement {
	/// The element name; `None` for fragments.
	#[serde(default)]
	pub name: Option<String>,
	/// Attributes, in order.
	#[serde(default)]
	pub attributes: Vec<MdxJsxAttributeItem>,
	/// Child nodes.
	#[serde(default)]
	pub children: Vec<Node>,
	/// Source span.
	#[serde(default)]
	pub position: Option<Position>,
	/// Side-channel data.
	#[serde(default)]
	pub data: Option<Data>,
}

impl Parent for MdxJsxElement {
	fn children(&self) -> &[Node] {
		&self.children
	}
}

/// An attribute of an MDX JSX element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum MdxJsxAttributeItem {
	/// `name` or `name="value"` or `name={expression}`.
	#[serde(rename = "mdxJsxAttribute")]
	Attribute(MdxJsxAttribute),
	/// `{...expression}`.
	#[serde(rename = "mdxJsxExpressionAttribute")]
	Expression(MdxJsxExpressionAttribute),
}

/// A named MDX JSX attribute.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MdxJsxAttribute {
	/// The attribute name, as written.
	pub name: String,
	/// The value; `None` for presence-only attributes.
	#[serde(default)]
	pub value: Option<MdxJsxAttributeValue>,
	/// Source span.
	#[serde(default)]
	pub position: Option<Position>,
	/// Side-channel data.
	#[serde(default)]
	pub data: Option<Data>,
}

/// The value of a named MDX JSX attribute.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MdxJsxAttributeValue {
	/// `name={expression}`
	Expression(MdxJsxAttributeValueExpression),
	/// `name="value"`
	Literal(Primitive),
}

/// The expression value of a named MDX JSX attribute.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MdxJsxAttributeValueExpression {
	/// The raw source.
	#[serde(default)]
	pub value: String,
	/// Source span.
	#[serde(default)]
	pub position: Option<Position>,
	/// Side-channel data; the script lives in `data.estree`.
	#[serde(default)]
	pub data: Option<Data>,
}

/// A spread MDX JSX attribute (`{...props}`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MdxJsxExpressionAttribute {
	/// The raw source.
	#[serde(default)]
	pub value: String,
	/// Source span.
	#[serde(default)]
	pub position: Option<Position>,
	/// Side-channel data; the script lives in `data.estree`.
	#[serde(default)]
	pub data: Option<Data>,
}

/// A node of a kind this crate doesn't know.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UnknownNode {
	/// The node's `type`.
	#[serde(rename = "type")]
	pub kind: String,
	/// Source span.
	#[serde(default)]
	pub position: Option<Position>,
	/// Side-channel data.
	#[serde(default)]
	pub data: Option<Data>,
	/// All other fields, for override handlers.
	#[serde(flatten)]
	pub fields: Map<String, Value>,
}

/// A string, number or boolean.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Primitive {
	/// A boolean.
	Bool(bool),
	/// A number.
	Number(f64),
	/// A string.
	String(String),
}

impl Primitive {
	/// Converts the value to a string the way JavaScript's `String()` does.
	#[must_use]
	pub fn to_js_string(&self) -> String {
		match self {
			Primitive::Bool(value) => value.to_string(),
			Primitive::Number(value) => number_to_js_string(*value),
			Primitive::String(value) => value.clone(),
		}
	}
}

/// The value of an element property.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
	/// `null` (or `undefined`).
	Null,
	/// A boolean.
	Bool(bool),
	/// A number, possibly `NaN`.
	Number(f64),
	/// A string.
	String(String),
	/// A space or comma separated list.
	List(Vec<Primitive>),
	/// An inline style object.
	Style(IndexMap<String, Primitive>),
}

impl PropertyValue {
	/// Whether the value is `null` or `NaN`.
	#[must_use]
	pub fn is_nullish_or_nan(&self) -> bool {
		match self {
			PropertyValue::Null => true,
			PropertyValue::Number(value) => value.is_nan(),
			_ => false,
		}
	}

	/// Whether JavaScript would consider the value falsy.
	#[must_use]
	pub fn is_falsy(&self) -> bool {
		match self {
			PropertyValue::Null => true,
			PropertyValue::Bool(value) => !value,
			PropertyValue::Number(value) => *value == 0.0 || value.is_nan(),
			PropertyValue::String(value) => value.is_empty(),
			PropertyValue::List(_) | PropertyValue::Style(_) => false,
		}
	}

	/// Converts the value to a string the way JavaScript's `String()` does.
	#[must_use]
	pub fn to_js_string(&self) -> String {
		match self {
			PropertyValue::Null => "null".into(),
			PropertyValue::Bool(value) => value.to_string(),
			PropertyValue::Number(value) => number_to_js_string(*value),
			PropertyValue::String(value) => value.clone(),
			PropertyValue::List(values) => values
				.iter()
				.map(Primitive::to_js_string)
				.collect::<Vec<_>>()
				.join(","),
			PropertyValue::Style(_) => "[object Object]".into(),
		}
	}
}

impl From<&str> for PropertyValue {
	fn from(value: &str) -> Self {
		PropertyValue::String(value.into())
	}
}

impl From<bool> for PropertyValue {
	fn from(value: bool) -> Self {
		PropertyValue::Bool(value)
	}
}

impl From<f64> for PropertyValue {
	fn from(value: f64) -> Self {
		PropertyValue::Number(value)
	}
}

/// Formats a number like JavaScript's `Number.prototype.toString()`.
#[must_use]
pub fn number_to_js_string(value: f64) -> String {
	if value.is_nan() {
		return "NaN".into();
	}

	if value.is_infinite() {
		return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
	}

	// Also covers `-0`.
	if value == 0.0 {
		return "0".into();
	}

	let magnitude = value.abs();
	if (1e-6..1e21).contains(&magnitude) {
		return value.to_string();
	}

	// Exponent form: Rust writes `1e21` and `1e-7`, JavaScript `1e+21` and `1e-7`.
	let formatted = format!("{value:e}");
	match formatted.split_once('e') {
		Some((mantissa, exponent)) if !exponent.starts_with('-') => {
			format!("{mantissa}e+{exponent}")
		}
		_ => formatted,
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn formats_numbers_like_javascript() {
		assert_eq!(number_to_js_string(1.0), "1");
		assert_eq!(number_to_js_string(-0.0), "0");
		assert_eq!(number_to_js_string(1.5), "1.5");
		assert_eq!(number_to_js_string(f64::NAN), "NaN");
		assert_eq!(number_to_js_string(f64::NEG_INFINITY), "-Infinity");
		assert_eq!(number_to_js_string(1e21), "1e+21");
		assert_eq!(number_to_js_string(1.5e-9), "1.5e-9");
	}

	#[test]
	fn values_without_a_type_are_invalid() {
		assert!(matches!(Node::from(json!({})), Node::Invalid(_)));
		assert!(matches!(Node::from(json!("text")), Node::Invalid(_)));
		assert!(matches!(Node::from(json!({"type": 1})), Node::Invalid(_)));
		assert_eq!(Node::from(json!({})).kind(), None);
	}

	#[test]
	fn malformed_known_kinds_are_invalid() {
		let node = Node::from(json!({"type": "element", "tagName": 1}));
		assert!(matches!(node, Node::Invalid(_)));
	}

	#[test]
	fn unknown_kinds_keep_their_fields() {
		let Node::Unknown(node) = Node::from(json!({"type": "custom", "value": 1})) else {
			panic!("expected an unknown node");
		};
		assert_eq!(node.kind, "custom");
		assert_eq!(node.fields.get("value"), Some(&json!(1)));
	}

	#[test]
	fn reads_properties_in_order() {
		let Node::Element(element) = Node::from(json!({
			"type": "element",
			"tagName": "a",
			"properties": {
				"z": null,
				"y": true,
				"x": 1,
				"w": "v",
				"className": ["a", 1],
				"style": {"color": "red"}
			}
		})) else {
			panic!("expected an element");
		};

		let keys: Vec<_> = element.properties.keys().map(String::as_str).collect();
		assert_eq!(keys, ["z", "y", "x", "w", "className", "style"]);
		assert_eq!(element.properties["z"], PropertyValue::Null);
		assert_eq!(element.properties["y"], PropertyValue::Bool(true));
		assert_eq!(element.properties["x"], PropertyValue::Number(1.0));
		assert_eq!(
			element.properties["className"],
			PropertyValue::List(vec![
				Primitive::String("a".into()),
				Primitive::Number(1.0)
			])
		);
		assert!(matches!(element.properties["style"], PropertyValue::Style(_)));
		assert!(element.children.is_empty());
	}

	#[test]
	fn malformed_payloads_are_dropped() {
		let Node::MdxFlowExpression(node) = Node::from(json!({
			"type": "mdxFlowExpression",
			"data": {"estree": {"body": 1}, "other": true}
		})) else {
			panic!("expected an expression");
		};

		let data = node.data.expect("data should be kept");
		assert!(data.estree.is_none());
		assert_eq!(data.fields.get("other"), Some(&json!(true)));
	}

	#[test]
	fn falsy_values() {
		assert!(PropertyValue::Number(0.0).is_falsy());
		assert!(PropertyValue::String(String::new()).is_falsy());
		assert!(PropertyValue::Bool(false).is_falsy());
		assert!(!PropertyValue::List(vec![]).is_falsy());
		assert!(!PropertyValue::Number(2.0).is_falsy());
	}

	#[test]
	fn table_structure_is_case_insensitive() {
		let element = Element {
			tag_name: "TBody".into(),
			..Element::default()
		};
		assert!(element.is_table_structure());
		assert!(
			!Element {
				tag_name: "div".into(),
				..Element::default()
			}
			.is_table_structure()
		);
	}
}
