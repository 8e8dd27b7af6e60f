//! The output side: estree nodes, with the JSX extension.
//!
//! Every node struct serializes its own `type`; the enums are untagged so a
//! node is written exactly once. Expressions and statements that come from
//! embedded scripts are never interpreted and stay opaque JSON (the
//! `Foreign` variants).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A 0-based column, 1-based line pair, as estree writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
	/// 1-based line.
	pub line: usize,
	/// 0-based column.
	pub column: usize,
}

/// The `loc` field of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
	/// Where the node starts.
	pub start: Point,
	/// Where the node ends.
	pub end: Point,
}

/// The positional fields of a node.
///
/// All fields are optional; absent ones aren't serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
	/// Start offset.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub start: Option<usize>,
	/// End offset.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub end: Option<usize>,
	/// Line/column location.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub loc: Option<SourceLocation>,
	/// `[start, end]` offsets.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub range: Option<[usize; 2]>,
}

impl Span {
	/// Whether no positional field is set.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.start.is_none() && self.end.is_none() && self.loc.is_none() && self.range.is_none()
	}
}

/// Position and side-channel data copied from the hast node a node was
/// made from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
	/// Positional fields.
	#[serde(flatten)]
	pub span: Span,
	/// Side-channel data (never containing the `estree` payload).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<Map<String, Value>>,
}

/// The whole output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Program", rename_all = "camelCase")]
pub struct Program {
	/// Hoisted ESM statements followed by the JSX statement.
	pub body: Vec<Statement>,
	/// Always `module`.
	pub source_type: SourceType,
	/// Every comment seen during conversion, in order.
	pub comments: Vec<Comment>,
	/// Position and data.
	#[serde(flatten)]
	pub meta: Meta,
}

/// The `sourceType` of a [`Program`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
	/// An ES module.
	Module,
}

/// A statement in the program body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statement {
	/// The statement wrapping the converted tree.
	Expression(ExpressionStatement),
	/// A statement hoisted from an ESM block.
	Foreign(Value),
}

/// An expression used as a statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ExpressionStatement")]
pub struct ExpressionStatement {
	/// The expression.
	pub expression: Expression,
	/// Position and data.
	#[serde(flatten)]
	pub meta: Meta,
}

/// An expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
	/// `<a />`
	JsxElement(Box<JsxElement>),
	/// `<></>`
	JsxFragment(Box<JsxFragment>),
	/// `"a"`
	Literal(Literal),
	/// `{a: "b"}`
	Object(ObjectExpression),
	/// An expression taken from an embedded script.
	Foreign(Value),
}

impl From<JsxChild> for Expression {
	fn from(child: JsxChild) -> Self {
		match child {
			JsxChild::Element(element) => Expression::JsxElement(element),
			JsxChild::Fragment(fragment) => Expression::JsxFragment(fragment),
			JsxChild::ExpressionContainer(container) => {
				Expression::Foreign(serde_json::to_value(container).unwrap_or(Value::Null))
			}
			JsxChild::Foreign(value) => Expression::Foreign(value),
		}
	}
}

/// A child of an element or fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxChild {
	/// `<a />`
	Element(Box<JsxElement>),
	/// `<></>`
	Fragment(Box<JsxFragment>),
	/// `{"a"}`, `{a}`, `{/* a */}`
	ExpressionContainer(JsxExpressionContainer),
	/// Anything an override handler produced.
	Foreign(Value),
}

impl JsxChild {
	/// Whether this is an element or a fragment, also when produced as
	/// JSON by an override handler.
	#[must_use]
	pub fn is_element_or_fragment(&self) -> bool {
		match self {
			JsxChild::Element(_) | JsxChild::Fragment(_) => true,
			JsxChild::ExpressionContainer(_) => false,
			JsxChild::Foreign(value) => matches!(
				value.get("type").and_then(Value::as_str),
				Some("JSXElement" | "JSXFragment")
			),
		}
	}

	/// Whether this is an expression container holding a string literal
	/// made only of inter-element whitespace (spaces, tabs, line breaks and
	/// form feeds).
	#[must_use]
	pub fn is_whitespace(&self) -> bool {
		let JsxChild::ExpressionContainer(JsxExpressionContainer {
			expression:
				JsxExpression::Expression(Expression::Literal(Literal {
					value: LiteralValue::String(value),
					..
				})),
			..
		}) = self
		else {
			return false;
		};

		value
			.chars()
			.all(|c| matches!(c, ' ' | '\t' | '\n' | '\u{c}' | '\r'))
	}
}

/// `<a b="c">d</a>`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXElement", rename_all = "camelCase")]
pub struct JsxElement {
	/// `<a b="c">`
	pub opening_element: JsxOpeningElement,
	/// `</a>`; `None` when self-closing.
	pub closing_element: Option<JsxClosingElement>,
	/// `d`
	pub children: Vec<JsxChild>,
	/// Position and data.
	#[serde(flatten)]
	pub meta: Meta,
}

impl JsxElement {
	/// Creates an element, self-closing iff there are no children.
	#[must_use]
	pub fn new(
		name: impl Fn() -> JsxElementName,
		attributes: Vec<JsxAttributeItem>,
		children: Vec<JsxChild>,
		meta: Meta,
	) -> Self {
		let self_closing = children.is_empty();
		Self {
			opening_element: JsxOpeningElement {
				attributes,
				name: name(),
				self_closing,
			},
			closing_element: (!self_closing).then(|| JsxClosingElement { name: name() }),
			children,
			meta,
		}
	}
}

/// `<a b="c">`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXOpeningElement", rename_all = "camelCase")]
pub struct JsxOpeningElement {
	/// `b="c"`
	pub attributes: Vec<JsxAttributeItem>,
	/// `a`
	pub name: JsxElementName,
	/// Whether written as `<a />`.
	pub self_closing: bool,
}

/// `</a>`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXClosingElement")]
pub struct JsxClosingElement {
	/// `a`
	pub name: JsxElementName,
}

/// `<>a</>`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXFragment", rename_all = "camelCase")]
pub struct JsxFragment {
	/// `<>`
	pub opening_fragment: JsxOpeningFragment,
	/// `</>`
	pub closing_fragment: JsxClosingFragment,
	/// `a`
	pub children: Vec<JsxChild>,
	/// Position and data.
	#[serde(flatten)]
	pub meta: Meta,
}

impl JsxFragment {
	/// Creates a fragment around `children`.
	#[must_use]
	pub fn new(children: Vec<JsxChild>, meta: Meta) -> Self {
		Self {
			opening_fragment: JsxOpeningFragment {
				attributes: Vec::new(),
				self_closing: false,
			},
			closing_fragment: JsxClosingFragment {},
			children,
			meta,
		}
	}
}

/// `<>`
///
/// Carries the (always empty) `attributes` and `selfClosing` fields acorn
/// writes for fragments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXOpeningFragment", rename_all = "camelCase")]
pub struct JsxOpeningFragment {
	/// Always empty.
	pub attributes: Vec<JsxAttributeItem>,
	/// Always `false`.
	pub self_closing: bool,
}

/// `</>`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXClosingFragment")]
pub struct JsxClosingFragment {}

/// An attribute or a spread attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxAttributeItem {
	/// `b="c"`
	Attribute(JsxAttribute),
	/// `{...b}`
	Spread(JsxSpreadAttribute),
}

/// `b="c"`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXAttribute")]
pub struct JsxAttribute {
	/// `b`
	pub name: JsxAttributeName,
	/// `"c"`; `None` for presence-only attributes.
	pub value: Option<JsxAttributeValue>,
	/// Position and data.
	#[serde(flatten)]
	pub meta: Meta,
}

/// `{...b}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXSpreadAttribute")]
pub struct JsxSpreadAttribute {
	/// `b`
	pub argument: Expression,
	/// Position and data.
	#[serde(flatten)]
	pub meta: Meta,
}

/// The value of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxAttributeValue {
	/// `"c"`
	Literal(Literal),
	/// `{c}`
	ExpressionContainer(JsxExpressionContainer),
}

/// The name of an element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxElementName {
	/// `a`
	Identifier(JsxIdentifier),
	/// `a.b`
	Member(Box<JsxMemberExpression>),
	/// `a:b`
	Namespaced(JsxNamespacedName),
}

/// The name of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxAttributeName {
	/// `a`
	Identifier(JsxIdentifier),
	/// `a:b`
	Namespaced(JsxNamespacedName),
}

/// `a`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "JSXIdentifier")]
pub struct JsxIdentifier {
	/// The name.
	pub name: String,
}

impl JsxIdentifier {
	/// Creates an identifier.
	#[must_use]
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}

/// `a.b`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXMemberExpression")]
pub struct JsxMemberExpression {
	/// `a`
	pub object: JsxMemberObject,
	/// `b`
	pub property: JsxIdentifier,
}

/// The object of a [`JsxMemberExpression`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxMemberObject {
	/// `a`
	Identifier(JsxIdentifier),
	/// `a.b`
	Member(Box<JsxMemberExpression>),
}

/// `a:b`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXNamespacedName")]
pub struct JsxNamespacedName {
	/// `a`
	pub namespace: JsxIdentifier,
	/// `b`
	pub name: JsxIdentifier,
}

/// `{a}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXExpressionContainer")]
pub struct JsxExpressionContainer {
	/// `a`
	pub expression: JsxExpression,
	/// Position and data.
	#[serde(flatten)]
	pub meta: Meta,
}

/// The content of a [`JsxExpressionContainer`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxExpression {
	/// Nothing (`{}`), possibly holding a comment.
	Empty(JsxEmptyExpression),
	/// An expression.
	Expression(Expression),
}

/// The nothing in `{}` or `{/* a */}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXEmptyExpression")]
pub struct JsxEmptyExpression {
	/// Comments attached to this position.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub comments: Vec<Comment>,
	/// Position and data.
	#[serde(flatten)]
	pub meta: Meta,
}

/// `"a"` or `true`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Literal")]
pub struct Literal {
	/// The value.
	pub value: LiteralValue,
	/// Position and data.
	#[serde(flatten)]
	pub meta: Meta,
}

impl Literal {
	/// Creates a string literal.
	#[must_use]
	pub fn string(value: impl Into<String>, meta: Meta) -> Self {
		Self {
			value: LiteralValue::String(value.into()),
			meta,
		}
	}
}

/// The value of a [`Literal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
	/// A string.
	String(String),
	/// A boolean.
	Bool(bool),
}

/// `{a: "b"}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ObjectExpression")]
pub struct ObjectExpression {
	/// `a: "b"`
	pub properties: Vec<Property>,
}

/// `a: "b"` inside an object expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Property")]
pub struct Property {
	/// Always `false`.
	pub method: bool,
	/// Always `false`.
	pub shorthand: bool,
	/// Always `false`.
	pub computed: bool,
	/// `a`
	pub key: PropertyKey,
	/// `"b"`
	pub value: Expression,
	/// Always `init`.
	pub kind: PropertyKind,
}

impl Property {
	/// Creates a plain `key: value` property.
	#[must_use]
	pub fn init(key: PropertyKey, value: Expression) -> Self {
		Self {
			method: false,
			shorthand: false,
			computed: false,
			key,
			value,
			kind: PropertyKind::Init,
		}
	}
}

/// The `kind` of a [`Property`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
	/// A plain property.
	Init,
}

/// The key of a [`Property`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyKey {
	/// `a`
	Identifier(Identifier),
	/// `"a-b"`
	Literal(Literal),
}

/// `a`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "Identifier")]
pub struct Identifier {
	/// The name.
	pub name: String,
}

/// A comment, either at the program level or attached to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
	/// `Block` or `Line`.
	#[serde(rename = "type")]
	pub kind: CommentKind,
	/// The text between the comment markers.
	pub value: String,
	/// Set when attached before a node.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub leading: Option<bool>,
	/// Set when attached after a node.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub trailing: Option<bool>,
	/// Position and data.
	#[serde(flatten)]
	pub meta: Meta,
}

impl Comment {
	/// Returns a copy marked as attached, with `leading`/`trailing` set.
	#[must_use]
	pub fn attached(&self, leading: bool, trailing: bool) -> Self {
		Self {
			leading: Some(leading),
			trailing: Some(trailing),
			..self.clone()
		}
	}
}

/// The kind of a [`Comment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentKind {
	/// `/* a */`
	Block,
	/// `// a`
	Line,
}
