//! # hastjsx
//! Converts hast trees (HTML and SVG, plus the MDX node kinds) into estree
//! programs holding a single JSX expression.
//!
//! ```
//! use hastjsx::{Options, hast::Node};
//!
//! let tree: Node = serde_json::from_str(
//! 	r#"{"type": "element", "tagName": "p", "properties": {"className": ["a"]}}"#,
//! )
//! .unwrap();
//! let program = hastjsx::to_estree(&tree, &Options::default()).unwrap();
//! let json = serde_json::to_value(&program).unwrap();
//!
//! assert_eq!(
//! 	json["body"][0]["expression"]["openingElement"]["attributes"][0]["name"]["name"],
//! 	"className",
//! );
//! ```

mod comments;
mod error;
pub mod estree;
mod handlers;
pub mod hast;
pub mod identifier;
pub mod name;
mod position;
pub mod schema;
mod state;
pub mod style;
pub mod tokens;

pub use self::{
	error::{Error, Result},
	state::{
		AttributeNameCase, Converted, Handler, Namespace, Options, State, StylePropertyNameCase,
	},
};
use self::{
	estree::{Expression, ExpressionStatement, JsxFragment, Meta, Program, SourceType, Statement},
	hast::Node,
};

/// Converts `tree` into a program.
///
/// The program holds the statements hoisted from ESM nodes, in order,
/// followed by one expression statement with the converted tree, unless
/// the tree converted into nothing. A tree that doesn't convert into a
/// single element or fragment is wrapped in a fragment. Every comment met
/// along the way is listed on the program.
pub fn to_estree(tree: &Node, options: &Options) -> Result<Program> {
	tracing::debug!(kind = tree.kind(), ?options, "converting tree");

	let mut state = State::new(options);

	let children = match state.handle(tree)? {
		Converted::Nothing => None,
		Converted::One(child) => Some(vec![child]),
		Converted::Many(children) => Some(children),
	};

	let mut body = state.esm;

	if let Some(mut children) = children {
		let expression = if children.len() == 1 && children[0].is_element_or_fragment() {
			Expression::from(children.remove(0))
		} else {
			wrap(children, tree)
		};

		body.push(Statement::Expression(ExpressionStatement {
			expression,
			meta: Meta::create(tree),
		}));
	}

	tracing::debug!(
		statements = body.len(),
		comments = state.comments.len(),
		"converted tree"
	);

	Ok(Program {
		body,
		source_type: SourceType::Module,
		comments: state.comments,
		meta: Meta::create(tree),
	})
}

/// `<>{children}</>`, positioned like `tree`.
fn wrap(children: Vec<estree::JsxChild>, tree: &Node) -> Expression {
	Expression::JsxFragment(Box::new(JsxFragment::new(children, Meta::create(tree))))
}
