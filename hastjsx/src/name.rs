//! Builds JSX names from raw element and attribute names.

use crate::estree::{
	JsxAttributeName, JsxElementName, JsxIdentifier, JsxMemberExpression, JsxMemberObject,
	JsxNamespacedName,
};

/// Builds an element name.
///
/// `a.b.c` becomes a left-associative member expression chain, `a:b` a
/// namespaced name (split at the first colon), anything else an
/// identifier. Dots take precedence over colons.
#[must_use]
pub fn element_name(raw: &str) -> JsxElementName {
	if raw.contains('.') {
		let mut parts = raw.split('.');
		let mut object = JsxMemberObject::Identifier(JsxIdentifier::new(
			parts.next().unwrap_or_default(),
		));
		let mut property = None;

		for part in parts {
			if let Some(previous) = property.replace(JsxIdentifier::new(part)) {
				object = JsxMemberObject::Member(Box::new(JsxMemberExpression {
					object,
					property: previous,
				}));
			}
		}

		if let Some(property) = property {
			return JsxElementName::Member(Box::new(JsxMemberExpression { object, property }));
		}
	}

	match namespaced(raw) {
		Some(name) => JsxElementName::Namespaced(name),
		None => JsxElementName::Identifier(JsxIdentifier::new(raw)),
	}
}

/// Builds an attribute name; attributes are never member expressions.
#[must_use]
pub fn attribute_name(raw: &str) -> JsxAttributeName {
	match namespaced(raw) {
		Some(name) => JsxAttributeName::Namespaced(name),
		None => JsxAttributeName::Identifier(JsxIdentifier::new(raw)),
	}
}

/// `a:b` split at the first colon, if there is one.
fn namespaced(raw: &str) -> Option<JsxNamespacedName> {
	raw.split_once(':').map(|(namespace, name)| JsxNamespacedName {
		namespace: JsxIdentifier::new(namespace),
		name: JsxIdentifier::new(name),
	})
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn identifiers() {
		assert_eq!(
			serde_json::to_value(element_name("a")).unwrap(),
			json!({"type": "JSXIdentifier", "name": "a"})
		);
	}

	#[test]
	fn member_chains_are_left_associative() {
		assert_eq!(
			serde_json::to_value(element_name("a.b.c")).unwrap(),
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
	}

	#[test]
	fn namespaces_split_at_the_first_colon() {
		assert_eq!(
			serde_json::to_value(element_name("a:b:c")).unwrap(),
			json!({
				"type": "JSXNamespacedName",
				"namespace": {"type": "JSXIdentifier", "name": "a"},
				"name": {"type": "JSXIdentifier", "name": "b:c"}
			})
		);
	}

	#[test]
	fn attributes_never_become_members() {
		assert_eq!(
			serde_json::to_value(attribute_name("a.b")).unwrap(),
			json!({"type": "JSXIdentifier", "name": "a.b"})
		);
		assert_eq!(
			serde_json::to_value(attribute_name("xlink:href")).unwrap(),
			json!({
				"type": "JSXNamespacedName",
				"namespace": {"type": "JSXIdentifier", "name": "xlink"},
				"name": {"type": "JSXIdentifier", "name": "href"}
			})
		);
	}
}
