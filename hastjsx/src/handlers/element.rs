use indexmap::IndexMap;

use crate::{
	AttributeNameCase, Namespace, Result, State,
	estree::{
		Expression, Identifier, JsxAttribute, JsxAttributeItem, JsxAttributeName,
		JsxAttributeValue, JsxElement, JsxExpression, JsxExpressionContainer, JsxIdentifier,
		JsxSpreadAttribute, Literal, LiteralValue, Meta, ObjectExpression, Property, PropertyKey,
	},
	hast::{Element, PropertyValue},
	identifier::{is_identifier_name, is_jsx_identifier_name},
	name::element_name,
	schema::{Info, Schema, hast_to_react},
	state::Converted,
	style, tokens,
};

impl State {
	/// Converts an element, switching to SVG for `<svg>` inside HTML.
	pub(crate) fn element(&mut self, node: &Element) -> Result<Converted> {
		let namespace = if self.namespace == Namespace::Html && super::is_svg(&node.tag_name) {
			Namespace::Svg
		} else {
			self.namespace
		};

		self.in_namespace(namespace, |state| {
			let children = state.all(node)?;
			let attributes = state.properties(node)?;

			Ok(JsxElement::new(
				|| element_name(&node.tag_name),
				attributes,
				children,
				Meta::inherit(node),
			)
			.into())
		})
	}

	/// Converts the properties of an element into attributes, in order.
	fn properties(&self, node: &Element) -> Result<Vec<JsxAttributeItem>> {
		let schema = Schema::of(self.namespace);
		let mut attributes = Vec::with_capacity(node.properties.len());

		for (name, value) in &node.properties {
			let info = schema.find(name);

			if value.is_nullish_or_nan()
				|| matches!(value, PropertyValue::Bool(false))
				|| (info.is_boolean() && value.is_falsy())
			{
				continue;
			}

			let name = match self.attribute_name_case {
				AttributeNameCase::React if info.space.is_some() => {
					hast_to_react(&info.property).to_owned()
				}
				_ => info.attribute.clone().into_owned(),
			};

			let value = self.property_value(node, &name, value, &info)?;
			attributes.push(attribute(name, value));
		}

		Ok(attributes)
	}

	/// Converts one property value; `None` for present-only attributes.
	fn property_value(
		&self,
		node: &Element,
		name: &str,
		value: &PropertyValue,
		info: &Info,
	) -> Result<Option<JsxAttributeValue>> {
		let joined;
		let value = match value {
			PropertyValue::List(items) => {
				let items = items.iter().map(|item| item.to_js_string()).collect::<Vec<_>>();
				joined = PropertyValue::String(if info.is_comma_separated() {
					tokens::stringify_commas(&items)
				} else {
					tokens::stringify_spaces(&items)
				});
				&joined
			}
			value => value,
		};

		let declarations = match (name, value) {
			("style", PropertyValue::String(text)) => {
				style::parse(text, &node.tag_name, self.style_property_name_case)?
			}
			("style", PropertyValue::Style(object)) => {
				style::from_object(object, self.style_property_name_case)
			}
			// Anything else has no declarations.
			("style", _) => IndexMap::new(),
			(_, PropertyValue::Bool(true)) => return Ok(None),
			(_, value) => {
				return Ok(Some(JsxAttributeValue::Literal(Literal::string(
					value.to_js_string(),
					Meta::default(),
				))));
			}
		};

		Ok(Some(JsxAttributeValue::ExpressionContainer(
			JsxExpressionContainer {
				expression: JsxExpression::Expression(Expression::Object(style_object(
					declarations,
				))),
				meta: Meta::default(),
			},
		)))
	}
}

/// `{color: "red", "--x": "1"}`
fn style_object(declarations: IndexMap<String, String>) -> ObjectExpression {
	ObjectExpression {
		properties: declarations
			.into_iter()
			.map(|(property, value)| {
				let key = if is_identifier_name(&property) {
					PropertyKey::Identifier(Identifier { name: property })
				} else {
					PropertyKey::Literal(Literal::string(property, Meta::default()))
				};
				Property::init(key, Expression::Literal(Literal::string(value, Meta::default())))
			})
			.collect(),
	}
}

/// `name="value"`, or `{...{"name": "value"}}` when `name` can't be written
/// as a JSX attribute name.
fn attribute(name: String, value: Option<JsxAttributeValue>) -> JsxAttributeItem {
	if is_jsx_identifier_name(&name) {
		return JsxAttributeItem::Attribute(JsxAttribute {
			name: JsxAttributeName::Identifier(JsxIdentifier::new(name)),
			value,
			meta: Meta::default(),
		});
	}

	let value = match value {
		None => Expression::Literal(Literal {
			value: LiteralValue::Bool(true),
			meta: Meta::default(),
		}),
		Some(JsxAttributeValue::Literal(literal)) => Expression::Literal(literal),
		Some(JsxAttributeValue::ExpressionContainer(JsxExpressionContainer {
			expression: JsxExpression::Expression(expression),
			..
		})) => expression,
		Some(JsxAttributeValue::ExpressionContainer(_)) => Expression::Object(ObjectExpression::default()),
	};

	JsxAttributeItem::Spread(JsxSpreadAttribute {
		argument: Expression::Object(ObjectExpression {
			properties: vec![Property::init(
				PropertyKey::Literal(Literal::string(name, Meta::default())),
				value,
			)],
		}),
		meta: Meta::default(),
	})
}

#[cfg(test)]
mod tests {
	use indexmap::IndexMap;
	use serde_json::{Value, json};

	use crate::{
		AttributeNameCase, Error, Options, State, StylePropertyNameCase,
		hast::{Element, Node, PropertyValue},
		state::Converted,
	};

	fn convert_with(options: &Options, tree: Value) -> Value {
		let Converted::One(result) = State::new(options).handle(&Node::from(tree)).unwrap() else {
			panic!("expected one child");
		};
		serde_json::to_value(result).unwrap()
	}

	fn convert(tree: Value) -> Value {
		convert_with(&Options::default(), tree)
	}

	fn attributes(tree: Value) -> Value {
		convert(tree)["openingElement"]["attributes"].clone()
	}

	#[test]
	fn self_closing_without_children() {
		let result = convert(json!({"type": "element", "tagName": "br"}));
		assert_eq!(result["openingElement"]["selfClosing"], true);
		assert_eq!(result["closingElement"], Value::Null);
		assert_eq!(result["children"], json!([]));

		let result = convert(json!({
			"type": "element",
			"tagName": "p",
			"children": [{"type": "text", "value": "a"}]
		}));
		assert_eq!(result["openingElement"]["selfClosing"], false);
		assert_eq!(
			result["closingElement"],
			json!({"type": "JSXClosingElement", "name": {"type": "JSXIdentifier", "name": "p"}})
		);
	}

	#[test]
	fn skips_absent_values() {
		let result = attributes(json!({
			"type": "element",
			"tagName": "input",
			"properties": {
				"id": null,
				"title": false,
				"disabled": 0,
				"checked": "",
				"value": 0,
				"name": ""
			}
		}));

		assert_eq!(
			result,
			json!([
				{"type": "JSXAttribute", "name": {"type": "JSXIdentifier", "name": "value"}, "value": {"type": "Literal", "value": "0"}},
				{"type": "JSXAttribute", "name": {"type": "JSXIdentifier", "name": "name"}, "value": {"type": "Literal", "value": ""}}
			])
		);
	}

	#[test]
	fn skips_nan() {
		let element = Element {
			tag_name: "img".into(),
			properties: IndexMap::from([
				("width".to_owned(), PropertyValue::Number(f64::NAN)),
				("title".to_owned(), PropertyValue::Number(f64::NAN)),
				("height".to_owned(), PropertyValue::Number(1.0)),
			]),
			..Element::default()
		};

		let Converted::One(result) = State::new(&Options::default()).element(&element).unwrap() else {
			panic!("expected one child");
		};

		assert_eq!(
			serde_json::to_value(result).unwrap()["openingElement"]["attributes"],
			json!([
				{"type": "JSXAttribute", "name": {"type": "JSXIdentifier", "name": "height"}, "value": {"type": "Literal", "value": "1"}}
			])
		);
	}

	#[test]
	fn present_only_values() {
		let result = attributes(json!({
			"type": "element",
			"tagName": "input",
			"properties": {"disabled": true}
		}));

		assert_eq!(
			result,
			json!([{"type": "JSXAttribute", "name": {"type": "JSXIdentifier", "name": "disabled"}, "value": null}])
		);
	}

	#[test]
	fn lists() {
		let result = attributes(json!({
			"type": "element",
			"tagName": "img",
			"properties": {"className": ["a", "b"], "srcSet": ["a.png 1x", "b.png 2x"], "width": 10}
		}));

		assert_eq!(result[0]["name"]["name"], "className");
		assert_eq!(result[0]["value"]["value"], "a b");
		assert_eq!(result[1]["name"]["name"], "srcSet");
		assert_eq!(result[1]["value"]["value"], "a.png 1x, b.png 2x");
		assert_eq!(result[2]["value"]["value"], "10");
	}

	#[test]
	fn html_attribute_names() {
		let options = Options {
			attribute_name_case: AttributeNameCase::Html,
			..Options::default()
		};
		let result = convert_with(
			&options,
			json!({
				"type": "element",
				"tagName": "label",
				"properties": {"className": ["a"], "htmlFor": "b"}
			}),
		);

		let names = result["openingElement"]["attributes"]
			.as_array()
			.unwrap()
			.iter()
			.map(|attribute| attribute["name"]["name"].as_str().unwrap())
			.collect::<Vec<_>>();
		assert_eq!(names, ["class", "for"]);
	}

	#[test]
	fn svg_names() {
		let result = convert(json!({
			"type": "element",
			"tagName": "svg",
			"properties": {"viewBox": "0 0 1 1"},
			"children": [{
				"type": "element",
				"tagName": "path",
				"properties": {"strokeDashArray": ["1", "2"], "xLinkHref": "#a"}
			}]
		}));

		assert_eq!(result["openingElement"]["attributes"][0]["name"]["name"], "viewBox");
		let path = &result["children"][0]["openingElement"]["attributes"];
		assert_eq!(path[0]["name"]["name"], "strokeDasharray");
		assert_eq!(path[0]["value"]["value"], "1 2");
		assert_eq!(path[1]["name"]["name"], "xlinkHref");
	}

	#[test]
	fn data_and_aria_names() {
		let result = attributes(json!({
			"type": "element",
			"tagName": "div",
			"properties": {"dataFooBar": "a", "ariaHidden": "true"}
		}));

		assert_eq!(result[0]["name"]["name"], "data-foo-bar");
		assert_eq!(result[1]["name"]["name"], "aria-hidden");
	}

	#[test]
	fn unsupported_names_are_spread() {
		let result = attributes(json!({
			"type": "element",
			"tagName": "div",
			"properties": {"1x": "a", "b c": true}
		}));

		assert_eq!(
			result,
			json!([
				{
					"type": "JSXSpreadAttribute",
					"argument": {
						"type": "ObjectExpression",
						"properties": [{
							"type": "Property",
							"method": false,
							"shorthand": false,
							"computed": false,
							"key": {"type": "Literal", "value": "1x"},
							"value": {"type": "Literal", "value": "a"},
							"kind": "init"
						}]
					}
				},
				{
					"type": "JSXSpreadAttribute",
					"argument": {
						"type": "ObjectExpression",
						"properties": [{
							"type": "Property",
							"method": false,
							"shorthand": false,
							"computed": false,
							"key": {"type": "Literal", "value": "b c"},
							"value": {"type": "Literal", "value": true},
							"kind": "init"
						}]
					}
				}
			])
		);
	}

	#[test]
	fn styles() {
		let result = attributes(json!({
			"type": "element",
			"tagName": "div",
			"properties": {"style": "color: red; -webkit-transform: none; --x: 1"}
		}));

		let properties = &result[0]["value"]["expression"]["properties"];
		assert_eq!(result[0]["value"]["type"], "JSXExpressionContainer");
		assert_eq!(properties[0]["key"], json!({"type": "Identifier", "name": "color"}));
		assert_eq!(properties[0]["value"], json!({"type": "Literal", "value": "red"}));
		assert_eq!(properties[1]["key"]["name"], "WebkitTransform");
		assert_eq!(properties[2]["key"], json!({"type": "Literal", "value": "--x"}));
		assert_eq!(properties[2]["value"]["value"], "1");
	}

	#[test]
	fn style_strings_and_objects_agree() {
		let string = attributes(json!({
			"type": "element",
			"tagName": "div",
			"properties": {"style": "background-color: red"}
		}));
		let object = attributes(json!({
			"type": "element",
			"tagName": "div",
			"properties": {"style": {"backgroundColor": "red"}}
		}));

		assert_eq!(string, object);
	}

	#[test]
	fn styles_without_declarations() {
		let result = attributes(json!({
			"type": "element",
			"tagName": "div",
			"properties": {"style": true}
		}));

		assert_eq!(result[0]["value"]["expression"]["type"], "ObjectExpression");
		assert_eq!(result[0]["value"]["expression"]["properties"], json!([]));
	}

	#[test]
	fn css_cased_styles() {
		let options = Options {
			style_property_name_case: StylePropertyNameCase::Css,
			..Options::default()
		};
		let result = convert_with(
			&options,
			json!({
				"type": "element",
				"tagName": "div",
				"properties": {"style": {"backgroundColor": "red", "WebkitTransform": "none"}}
			}),
		);

		let properties = &result["openingElement"]["attributes"][0]["value"]["expression"]["properties"];
		assert_eq!(properties[0]["key"], json!({"type": "Literal", "value": "background-color"}));
		assert_eq!(properties[1]["key"], json!({"type": "Literal", "value": "-webkit-transform"}));
	}

	#[test]
	fn style_errors() {
		let error = State::new(&Options::default())
			.handle(&Node::from(json!({
				"type": "element",
				"tagName": "b",
				"properties": {"style": "x"}
			})))
			.unwrap_err();

		assert!(matches!(error, Error::StyleSyntax { .. }));
		assert_eq!(error.to_string(), "b[style]:1:2: property missing ':'");
	}

	#[test]
	fn table_line_breaks() {
		let result = convert(json!({
			"type": "element",
			"tagName": "table",
			"children": [
				{"type": "text", "value": "\n"},
				{"type": "element", "tagName": "tr"},
				{"type": "text", "value": "\n"}
			]
		}));

		assert_eq!(result["children"].as_array().unwrap().len(), 1);

		let result = convert(json!({
			"type": "element",
			"tagName": "div",
			"children": [{"type": "text", "value": "\n"}]
		}));

		assert_eq!(result["children"].as_array().unwrap().len(), 1);
	}

	#[test]
	fn member_and_namespaced_tag_names() {
		let result = convert(json!({"type": "element", "tagName": "a.b.c"}));
		assert_eq!(
			result["openingElement"]["name"],
			json!({
				"type": "JSXMemberExpression",
				"object": {
					"type": "JSXMemberExpression",
					"object": {"type": "JSXIdentifier", "name": "a"},
					"property": {"type": "JSXIdentifier", "name": "b"}
				},
				"property": {"type": "JSXIdentifier", "name": "c"}
			})
		);

		let result = convert(json!({"type": "element", "tagName": "a:b"}));
		assert_eq!(result["openingElement"]["name"]["type"], "JSXNamespacedName");
	}
}
