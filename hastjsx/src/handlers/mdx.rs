use crate::{
	Namespace, Result, State,
	estree::{
		Expression, JsxAttribute, JsxAttributeItem, JsxAttributeValue, JsxElement,
		JsxEmptyExpression, JsxExpression, JsxExpressionContainer, JsxFragment, JsxSpreadAttribute,
		Literal, Meta, ObjectExpression, Statement,
	},
	hast::{
		MdxExpression, MdxJsxAttributeItem, MdxJsxAttributeValue, MdxJsxElement, MdxjsEsm,
	},
	name::{attribute_name, element_name},
	state::Converted,
};

use super::{degraded, first_expression, spread_argument};

impl State {
	/// Hoists the statements of an ESM block; the block itself converts
	/// into nothing.
	pub(crate) fn mdxjs_esm(&mut self, node: &MdxjsEsm) -> Result<Converted> {
		if let Some(body) = self.script(node.data.as_ref())? {
			self.esm.extend(body.into_iter().map(Statement::Foreign));
		}

		Ok(Converted::Nothing)
	}

	/// Converts an expression into an expression container, empty when
	/// there is no usable script.
	pub(crate) fn mdx_expression(&mut self, node: &MdxExpression) -> Result<Converted> {
		let expression = match self.script(node.data.as_ref())?.and_then(first_expression) {
			Some(expression) => JsxExpression::Expression(Expression::Foreign(expression)),
			None => JsxExpression::Empty(JsxEmptyExpression {
				comments: Vec::new(),
				meta: Meta::create(node),
			}),
		};

		Ok(JsxExpressionContainer {
			expression,
			meta: Meta::inherit(node),
		}
		.into())
	}

	/// Converts an MDX JSX element, or a fragment when it has no name.
	pub(crate) fn mdx_jsx_element(&mut self, node: &MdxJsxElement) -> Result<Converted> {
		let namespace = match &node.name {
			Some(name) if self.namespace == Namespace::Html && super::is_svg(name) => Namespace::Svg,
			_ => self.namespace,
		};

		self.in_namespace(namespace, |state| {
			let children = state.all(node)?;
			let attributes = node
				.attributes
				.iter()
				.map(|attribute| state.mdx_jsx_attribute(attribute))
				.collect::<Result<Vec<_>>>()?;

			let meta = Meta::inherit(node);
			let Some(name) = &node.name else {
				if !attributes.is_empty() {
					tracing::debug!(count = attributes.len(), "ignoring attributes on fragment");
				}
				return Ok(JsxFragment::new(children, meta).into());
			};

			Ok(JsxElement::new(|| element_name(name), attributes, children, meta).into())
		})
	}

	/// Converts one MDX JSX attribute.
	fn mdx_jsx_attribute(&mut self, attribute: &MdxJsxAttributeItem) -> Result<JsxAttributeItem> {
		let attribute = match attribute {
			MdxJsxAttributeItem::Attribute(attribute) => attribute,
			MdxJsxAttributeItem::Expression(spread) => {
				let argument = match self.script(spread.data.as_ref())?.and_then(spread_argument) {
					Some(argument) => Expression::Foreign(argument),
					None => {
						degraded(spread, "spread");
						Expression::Object(ObjectExpression::default())
					}
				};

				return Ok(JsxAttributeItem::Spread(JsxSpreadAttribute {
					argument,
					meta: Meta::inherit(spread),
				}));
			}
		};

		let value = match &attribute.value {
			None => None,
			Some(MdxJsxAttributeValue::Literal(value)) => Some(JsxAttributeValue::Literal(
				Literal::string(value.to_js_string(), Meta::default()),
			)),
			Some(MdxJsxAttributeValue::Expression(value)) => {
				let expression = match self.script(value.data.as_ref())?.and_then(first_expression) {
					Some(expression) => JsxExpression::Expression(Expression::Foreign(expression)),
					None => {
						degraded(value, "expression");
						JsxExpression::Empty(JsxEmptyExpression::default())
					}
				};

				Some(JsxAttributeValue::ExpressionContainer(JsxExpressionContainer {
					expression,
					meta: Meta::inherit(value),
				}))
			}
		};

		Ok(JsxAttributeItem::Attribute(JsxAttribute {
			name: attribute_name(&attribute.name),
			value,
			meta: Meta::inherit(attribute),
		}))
	}
}
