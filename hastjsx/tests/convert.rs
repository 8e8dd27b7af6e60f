//! End to end conversions through [`hastjsx::to_estree`].

use hastjsx::{Converted, Error, Namespace, Options, hast::Node, to_estree};
use serde_json::{Value, json};

fn convert_with(options: &Options, tree: Value) -> Value {
	let program = to_estree(&Node::from(tree), options).unwrap();
	serde_json::to_value(program).unwrap()
}

fn convert(tree: Value) -> Value {
	convert_with(&Options::default(), tree)
}

/// The converted tree, without the program around it.
fn expression(tree: Value) -> Value {
	let program = convert(tree);
	let body = program["body"].as_array().unwrap();
	body[body.len() - 1]["expression"].clone()
}

fn text(value: &str) -> Value {
	json!({"type": "text", "value": value})
}

fn element(tag_name: &str, properties: Value, children: Value) -> Value {
	json!({"type": "element", "tagName": tag_name, "properties": properties, "children": children})
}

#[test]
fn empty_element() {
	assert_eq!(
		convert(json!({"type": "element", "tagName": "div"})),
		json!({
			"type": "Program",
			"body": [{
				"type": "ExpressionStatement",
				"expression": {
					"type": "JSXElement",
					"openingElement": {
						"type": "JSXOpeningElement",
						"attributes": [],
						"name": {"type": "JSXIdentifier", "name": "div"},
						"selfClosing": true
					},
					"closingElement": null,
					"children": []
				}
			}],
			"sourceType": "module",
			"comments": []
		})
	);
}

#[test]
fn every_kind_converts_without_optional_fields() {
	for kind in [
		"root",
		"doctype",
		"text",
		"comment",
		"mdxjsEsm",
		"mdxFlowExpression",
		"mdxTextExpression",
		"mdxJsxFlowElement",
		"mdxJsxTextElement",
	] {
		let result = to_estree(&Node::from(json!({"type": kind})), &Options::default());
		assert!(result.is_ok(), "{kind}: {result:?}");
	}

	let result = to_estree(
		&Node::from(json!({"type": "element", "tagName": "a"})),
		&Options::default(),
	);
	assert!(result.is_ok());
}

#[test]
fn roots_keep_inner_whitespace() {
	let result = expression(json!({
		"type": "root",
		"children": [
			element("b", json!({}), json!([text("a")])),
			text(" "),
			element("i", json!({}), json!([text("b")])),
			text(".")
		]
	}));

	let children = result["children"].as_array().unwrap();
	assert_eq!(children.len(), 4);
	assert_eq!(children[0]["openingElement"]["name"]["name"], "b");
	assert_eq!(children[0]["children"][0]["expression"]["value"], "a");
	assert_eq!(children[1]["expression"]["value"], " ");
	assert_eq!(children[2]["openingElement"]["name"]["name"], "i");
	assert_eq!(children[3]["expression"]["value"], ".");
}

#[test]
fn roots_trim_outer_whitespace() {
	let trimmed = expression(json!({
		"type": "root",
		"children": [text(" "), text("\n"), text("x"), text(" "), text("y"), text("\t")]
	}));
	let plain = expression(json!({
		"type": "root",
		"children": [text("x"), text(" "), text("y")]
	}));

	assert_eq!(trimmed, plain);
}

#[test]
fn closing_elements_name_the_tag() {
	let result = expression(element("a:b", json!({}), json!([text("c")])));

	assert_eq!(result["openingElement"]["selfClosing"], false);
	assert_eq!(result["closingElement"]["name"], result["openingElement"]["name"]);
}

#[test]
fn tables_drop_line_breaks() {
	let result = expression(element(
		"table",
		json!({}),
		json!([text("\n"), element("tr", json!({}), json!([])), text("\n")]),
	));

	let children = result["children"].as_array().unwrap();
	assert_eq!(children.len(), 1);
	assert_eq!(children[0]["openingElement"]["name"]["name"], "tr");

	let result = expression(element(
		"table",
		json!({}),
		json!([text("\n"), text("\n")]),
	));
	assert_eq!(result["openingElement"]["selfClosing"], true);
}

#[test]
fn property_filtering() {
	let result = expression(element(
		"input",
		json!({"id": null, "title": false, "hidden": 0, "checked": true, "alt": "", "value": "a"}),
		json!([]),
	));

	let names = result["openingElement"]["attributes"]
		.as_array()
		.unwrap()
		.iter()
		.map(|attribute| attribute["name"]["name"].as_str().unwrap())
		.collect::<Vec<_>>();
	assert_eq!(names, ["checked", "alt", "value"]);
}

#[test]
fn list_values() {
	let result = expression(element(
		"x",
		json!({"className": ["y", "z"], "accept": ["y", "z"]}),
		json!([]),
	));

	let attributes = &result["openingElement"]["attributes"];
	assert_eq!(attributes[0]["value"]["value"], "y z");
	assert_eq!(attributes[1]["value"]["value"], "y, z");
}

#[test]
fn attribute_name_fallback() {
	let result = expression(element(
		"a",
		json!({"1": "x", "b+": "y", "b-c": "z"}),
		json!([]),
	));

	let attributes = &result["openingElement"]["attributes"];
	assert_eq!(attributes[0]["type"], "JSXSpreadAttribute");
	assert_eq!(attributes[0]["argument"]["properties"][0]["key"]["value"], "1");
	assert_eq!(attributes[1]["type"], "JSXSpreadAttribute");
	assert_eq!(attributes[1]["argument"]["properties"][0]["key"]["value"], "b+");
	assert_eq!(attributes[2]["type"], "JSXAttribute");
	assert_eq!(attributes[2]["name"]["name"], "b-c");
}

#[test]
fn svg_scoping() {
	let result = expression(element(
		"div",
		json!({}),
		json!([
			element("svg", json!({}), json!([element("path", json!({"strokeLineCap": "round"}), json!([]))])),
			element("p", json!({"strokeLineCap": "round"}), json!([]))
		]),
	));

	let svg = &result["children"][0];
	let p = &result["children"][1];
	assert_eq!(
		svg["children"][0]["openingElement"]["attributes"][0]["name"]["name"],
		"strokeLinecap"
	);
	// Unknown to HTML, so spelled as given.
	assert_eq!(p["openingElement"]["attributes"][0]["name"]["name"], "strokeLineCap");
}

#[test]
fn svg_space() {
	let options = Options {
		space: Namespace::Svg,
		..Options::default()
	};
	let result = convert_with(
		&options,
		element("g", json!({"className": ["a"], "strokeLineJoin": "round"}), json!([])),
	);

	let attributes = &result["body"][0]["expression"]["openingElement"]["attributes"];
	assert_eq!(attributes[0]["name"]["name"], "className");
	assert_eq!(attributes[1]["name"]["name"], "strokeLinejoin");
}

#[test]
fn style_errors_name_the_element() {
	let error = to_estree(
		&Node::from(element("a", json!({"style": "x"}), json!([]))),
		&Options::default(),
	)
	.unwrap_err();

	assert!(error.to_string().contains("a[style]"));
}

#[test]
fn unknown_kinds() {
	let error = to_estree(&Node::from(json!({"type": "unknown"})), &Options::default()).unwrap_err();

	assert!(matches!(error, Error::UnknownNodeKind(ref kind) if kind == "unknown"));
	assert!(error.to_string().contains("unknown"));
}

#[test]
fn unknown_children() {
	let error = to_estree(
		&Node::from(element("a", json!({}), json!([{"type": "x"}]))),
		&Options::default(),
	)
	.unwrap_err();

	assert_eq!(error.to_string(), "Cannot handle unknown node `x`");
}

#[test]
fn positions_and_data() {
	let result = convert(json!({
		"type": "element",
		"tagName": "a",
		"position": {
			"start": {"line": 1, "column": 1, "offset": 0},
			"end": {"line": 1, "column": 5, "offset": 4}
		},
		"data": {"b": "c"}
	}));

	let span = json!({
		"start": 0,
		"end": 4,
		"loc": {"start": {"line": 1, "column": 0}, "end": {"line": 1, "column": 4}},
		"range": [0, 4]
	});
	for value in [&result, &result["body"][0], &result["body"][0]["expression"]] {
		for key in ["start", "end", "loc", "range"] {
			assert_eq!(value[key], span[key], "{key} of {value}");
		}
	}

	assert_eq!(result["body"][0]["expression"]["data"], json!({"b": "c"}));
	assert!(result["body"][0].get("data").is_none());
	assert!(result.get("data").is_none());
}

#[test]
fn comments_are_collected() {
	// `{c(/*b*/)}`
	let program = convert(json!({
		"type": "root",
		"children": [
			{"type": "comment", "value": "a"},
			{
				"type": "mdxFlowExpression",
				"value": "c(/*b*/)",
				"data": {"estree": {
					"type": "Program",
					"start": 0,
					"end": 8,
					"body": [{
						"type": "ExpressionStatement",
						"start": 0,
						"end": 8,
						"expression": {
							"type": "CallExpression",
							"start": 0,
							"end": 8,
							"callee": {"type": "Identifier", "name": "c", "start": 0, "end": 1},
							"arguments": [],
							"optional": false
						}
					}],
					"comments": [{"type": "Block", "value": "b", "start": 2, "end": 7}]
				}}
			}
		]
	}));

	assert_eq!(
		program["comments"],
		json!([
			{"type": "Block", "value": "a"},
			{"type": "Block", "value": "b", "start": 2, "end": 7}
		])
	);

	let children = &program["body"][0]["expression"]["children"];
	assert_eq!(children[0]["expression"]["comments"][0]["trailing"], true);
	assert_eq!(
		children[1]["expression"]["comments"],
		json!([{"type": "Block", "value": "b", "leading": false, "trailing": true, "start": 2, "end": 7}])
	);
	assert!(children[1]["expression"]["callee"].get("comments").is_none());
}

#[test]
fn esm_comes_first() {
	let import = |source: &str| {
		json!({
			"type": "mdxjsEsm",
			"value": format!("import {source} from '{source}'"),
			"data": {"estree": {
				"type": "Program",
				"body": [{"type": "ImportDeclaration", "source": {"type": "Literal", "value": source}}],
				"comments": []
			}}
		})
	};

	let program = convert(json!({
		"type": "root",
		"children": [import("a"), element("b", json!({}), json!([])), import("c")]
	}));

	let body = program["body"].as_array().unwrap();
	assert_eq!(body.len(), 3);
	assert_eq!(body[0]["source"]["value"], "a");
	assert_eq!(body[1]["source"]["value"], "c");
	assert_eq!(body[2]["type"], "ExpressionStatement");
	assert_eq!(body[2]["expression"]["children"][0]["openingElement"]["name"]["name"], "b");
}

#[test]
fn override_handlers() {
	let options = Options::default()
		.with_handler("x", |_, state| {
			let children = state.all(&hastjsx::hast::Root {
				children: vec![Node::from(json!({"type": "text", "value": "a"})), Node::from(json!({"type": "text", "value": "b"}))],
				..Default::default()
			})?;
			Ok(Converted::Many(children))
		})
		.with_handler("y", |_, _| Ok(Converted::Nothing))
		.with_handler("element", |_, _| Ok(Converted::Nothing));

	let many = convert_with(&options, json!({"type": "x"}));
	let fragment = &many["body"][0]["expression"];
	assert_eq!(fragment["type"], "JSXFragment");
	assert_eq!(fragment["children"].as_array().unwrap().len(), 2);

	let none = convert_with(&options, json!({"type": "y"}));
	assert_eq!(none["body"], json!([]));

	let shadowed = convert_with(&options, element("a", json!({}), json!([])));
	assert_eq!(shadowed["body"], json!([]));

	let inner = convert_with(&options, json!({"type": "root", "children": [element("a", json!({}), json!([]))]}));
	assert_eq!(inner["body"][0]["expression"]["type"], "JSXFragment");
	assert_eq!(inner["body"][0]["expression"]["children"], json!([]));
}

#[test]
fn deep_trees() {
	let mut tree = text("a");
	for _ in 0..100 {
		tree = element("b", json!({}), json!([tree]));
	}

	assert!(to_estree(&Node::from(tree.clone()), &Options::default()).is_ok());

	let error = to_estree(
		&Node::from(tree),
		&Options {
			max_depth: 50,
			..Options::default()
		},
	)
	.unwrap_err();
	assert!(matches!(error, Error::DepthLimitExceeded(50)));
}

#[test]
fn conversions_are_independent() {
	let tree = Node::from(json!({"type": "root", "children": [{"type": "comment", "value": "a"}]}));
	let options = Options::default();

	let first = to_estree(&tree, &options).unwrap();
	let second = to_estree(&tree, &options).unwrap();

	assert_eq!(first, second);
	assert_eq!(second.comments.len(), 1);
}
