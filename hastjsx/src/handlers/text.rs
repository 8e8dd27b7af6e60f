use crate::{
	State,
	estree::{Expression, JsxExpression, JsxExpressionContainer, Literal, Meta},
	hast::Text,
	state::Converted,
};

impl State {
	/// Converts text into a string literal in an expression container.
	/// Empty text converts into nothing.
	pub(crate) fn text(&mut self, node: &Text) -> Converted {
		let value = node.value.as_deref().unwrap_or_default();

		if value.is_empty() {
			return Converted::Nothing;
		}

		JsxExpressionContainer {
			expression: JsxExpression::Expression(Expression::Literal(Literal::string(
				value,
				Meta::inherit(node),
			))),
			meta: Meta::create(node),
		}
		.into()
	}
}
