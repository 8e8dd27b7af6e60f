//! Per-conversion state and node dispatch.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{
	Error, Result,
	estree::{Comment, JsxChild, JsxElement, JsxExpressionContainer, JsxFragment, Statement},
	hast::{Node, Parent, Text},
};

/// The markup namespace properties are resolved in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Namespace {
	/// HTML.
	#[default]
	Html,
	/// SVG.
	Svg,
}

/// How attribute names of hast elements are spelled in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AttributeNameCase {
	/// React's DOM property names (`className`, `htmlFor`, `strokeDasharray`).
	#[default]
	React,
	/// Plain attribute names (`class`, `for`, `stroke-dasharray`).
	Html,
}

/// How property names in `style` objects are spelled in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StylePropertyNameCase {
	/// DOM style property names (`backgroundColor`, `WebkitTransform`).
	#[default]
	Dom,
	/// CSS property names (`background-color`, `-webkit-transform`).
	Css,
}

/// A caller supplied node handler.
///
/// Receives the node and the conversion state; may recurse with
/// [`State::handle`] and [`State::all`].
pub type Handler = Arc<dyn Fn(&Node, &mut State) -> Result<Converted> + Send + Sync>;

/// What a handler produced for a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Converted {
	/// The node has no output (doctypes, ESM blocks, empty text).
	Nothing,
	/// A single child.
	One(JsxChild),
	/// Several children, spliced into the parent in order.
	Many(Vec<JsxChild>),
}

impl From<JsxChild> for Converted {
	fn from(child: JsxChild) -> Self {
		Converted::One(child)
	}
}

impl From<JsxElement> for Converted {
	fn from(element: JsxElement) -> Self {
		Converted::One(JsxChild::Element(Box::new(element)))
	}
}

impl From<JsxFragment> for Converted {
	fn from(fragment: JsxFragment) -> Self {
		Converted::One(JsxChild::Fragment(Box::new(fragment)))
	}
}

impl From<JsxExpressionContainer> for Converted {
	fn from(container: JsxExpressionContainer) -> Self {
		Converted::One(JsxChild::ExpressionContainer(container))
	}
}

impl From<Vec<JsxChild>> for Converted {
	fn from(children: Vec<JsxChild>) -> Self {
		Converted::Many(children)
	}
}

/// Conversion options.
#[derive(Clone)]
pub struct Options {
	/// The namespace of the tree root.
	pub space: Namespace,
	/// Handlers by node kind, consulted before the built-in ones.
	pub handlers: HashMap<String, Handler>,
	/// Spelling of element attribute names.
	pub attribute_name_case: AttributeNameCase,
	/// Spelling of `style` property names.
	pub style_property_name_case: StylePropertyNameCase,
	/// How deeply nodes may nest before conversion fails.
	pub max_depth: usize,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			space: Namespace::Html,
			handlers: HashMap::new(),
			attribute_name_case: AttributeNameCase::default(),
			style_property_name_case: StylePropertyNameCase::default(),
			max_depth: 512,
		}
	}
}

impl Options {
	/// Adds a handler for nodes of `kind`, replacing any built-in one.
	#[must_use]
	pub fn with_handler(
		mut self,
		kind: impl Into<String>,
		handler: impl Fn(&Node, &mut State) -> Result<Converted> + Send + Sync + 'static,
	) -> Self {
		self.handlers.insert(kind.into(), Arc::new(handler));
		self
	}
}

impl fmt::Debug for Options {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Options")
			.field("space", &self.space)
			.field("handlers", &self.handlers.keys().collect::<Vec<_>>())
			.field("attribute_name_case", &self.attribute_name_case)
			.field("style_property_name_case", &self.style_property_name_case)
			.field("max_depth", &self.max_depth)
			.finish()
	}
}

/// The state of one conversion, threaded through every handler.
pub struct State {
	/// The namespace properties are currently resolved in.
	pub namespace: Namespace,
	/// Every comment seen so far, in order.
	pub comments: Vec<Comment>,
	/// Statements hoisted from ESM blocks, in order.
	pub esm: Vec<Statement>,
	/// Spelling of element attribute names.
	pub attribute_name_case: AttributeNameCase,
	/// Spelling of `style` property names.
	pub style_property_name_case: StylePropertyNameCase,
	/// Caller supplied handlers.
	handlers: HashMap<String, Handler>,
	/// Current nesting depth.
	depth: usize,
	/// Maximum nesting depth.
	max_depth: usize,
}

impl State {
	/// Creates fresh state for one conversion.
	#[must_use]
	pub fn new(options: &Options) -> Self {
		Self {
			namespace: options.space,
			comments: Vec::new(),
			esm: Vec::new(),
			attribute_name_case: options.attribute_name_case,
			style_property_name_case: options.style_property_name_case,
			handlers: options.handlers.clone(),
			depth: 0,
			max_depth: options.max_depth,
		}
	}

	/// Converts a node with its caller supplied or built-in handler.
	pub fn handle(&mut self, node: &Node) -> Result<Converted> {
		let Some(kind) = node.kind() else {
			let value = match node {
				Node::Invalid(value) => value.to_string(),
				_ => format!("{node:?}"),
			};
			return Err(Error::InvalidInput(value));
		};

		if self.depth >= self.max_depth {
			return Err(Error::DepthLimitExceeded(self.max_depth));
		}

		tracing::trace!(kind, depth = self.depth, "handling node");

		self.depth += 1;
		let result = match self.handlers.get(kind).cloned() {
			Some(handler) => handler(node, self),
			None => self.handle_built_in(node),
		};
		self.depth -= 1;

		result
	}

	/// Dispatches to the built-in handlers.
	fn handle_built_in(&mut self, node: &Node) -> Result<Converted> {
		match node {
			Node::Root(root) => self.root(root),
			Node::Element(element) => self.element(element),
			Node::Text(text) => Ok(self.text(text)),
			Node::Comment(comment) => Ok(self.comment(comment)),
			Node::Doctype(_) => Ok(Converted::Nothing),
			Node::MdxjsEsm(esm) => self.mdxjs_esm(esm),
			Node::MdxFlowExpression(expression) | Node::MdxTextExpression(expression) => {
				self.mdx_expression(expression)
			}
			Node::MdxJsxFlowElement(element) | Node::MdxJsxTextElement(element) => {
				self.mdx_jsx_element(element)
			}
			Node::Unknown(node) => Err(Error::UnknownNodeKind(node.kind.clone())),
			Node::Invalid(value) => Err(Error::InvalidInput(value.to_string())),
		}
	}

	/// Converts the children of `parent`, in order, splicing in handlers
	/// that produce several children and skipping those producing none.
	///
	/// Inside HTML table structure, text children that are a single line
	/// break are dropped without being converted.
	pub fn all(&mut self, parent: &impl Parent) -> Result<Vec<JsxChild>> {
		let skip_line_breaks = self.namespace == Namespace::Html && parent.is_table_structure();
		let mut results = Vec::with_capacity(parent.children().len());

		for child in parent.children() {
			if skip_line_breaks
				&& matches!(child, Node::Text(Text { value: Some(value), .. }) if value == "\n")
			{
				continue;
			}

			match self.handle(child)? {
				Converted::Nothing => {}
				Converted::One(result) => results.push(result),
				Converted::Many(many) => results.extend(many),
			}
		}

		Ok(results)
	}

	/// Runs `f` with the namespace switched to `namespace`, restoring the
	/// previous one afterwards, also on failure.
	pub fn in_namespace<T>(
		&mut self,
		namespace: Namespace,
		f: impl FnOnce(&mut Self) -> Result<T>,
	) -> Result<T> {
		let parent = std::mem::replace(&mut self.namespace, namespace);
		let result = f(self);
		self.namespace = parent;
		result
	}
}
