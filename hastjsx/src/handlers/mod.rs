//! The built-in node handlers, one `impl State` block per node family.

mod comment;
mod element;
mod mdx;
mod root;
mod text;

use serde_json::Value;

use crate::{
	Result, State, comments,
	hast::{Data, Located},
};

impl State {
	/// Takes the script payload out of `data`: records its comments, attaches
	/// them to its statements and returns those statements.
	///
	/// `None` when there is no payload.
	fn script(&mut self, data: Option<&Data>) -> Result<Option<Vec<Value>>> {
		let Some(payload) = data.and_then(|data| data.estree.as_ref()) else {
			return Ok(None);
		};

		let mut payload = payload.clone();
		self.comments.extend(payload.comments.iter().cloned());
		comments::attach(&mut payload)?;

		Ok(Some(payload.body))
	}
}

/// The expression of the first statement, if it is an expression statement.
fn first_expression(body: Vec<Value>) -> Option<Value> {
	let Value::Object(mut statement) = body.into_iter().next()? else {
		return None;
	};

	statement.remove("expression").filter(|expression| !expression.is_null())
}

/// `a` in `{...a}`: the argument of the first property of an object
/// expression statement, if that property is a spread element.
fn spread_argument(body: Vec<Value>) -> Option<Value> {
	let Value::Object(mut expression) = first_expression(body)? else {
		return None;
	};

	if expression.get("type").and_then(Value::as_str) != Some("ObjectExpression") {
		return None;
	}

	let Value::Array(properties) = expression.remove("properties")? else {
		return None;
	};

	let Value::Object(mut property) = properties.into_iter().next()? else {
		return None;
	};

	if property.get("type").and_then(Value::as_str) != Some("SpreadElement") {
		return None;
	}

	property.remove("argument").filter(|argument| !argument.is_null())
}

/// Whether `name` opens an SVG subtree when seen inside HTML.
fn is_svg(name: &str) -> bool {
	name.eq_ignore_ascii_case("svg")
}

/// Logs that a node's payload was unusable and a placeholder was emitted.
fn degraded(node: &impl Located, what: &str) {
	let line = node
		.position()
		.and_then(|position| position.start.line)
		.unwrap_or_default();
	tracing::debug!(line, "no usable {what} in script payload, using a placeholder");
}
