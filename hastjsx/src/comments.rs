//! Attaches comments to the script nodes around them.
//!
//! Each comment is copied onto the node it precedes (`leading: true`) or,
//! failing that, onto the innermost node it is enclosed by or follows
//! (`leading: false`, `trailing` set when that node has children).

use std::cmp::Ordering;

use serde_json::{Map, Value};

use crate::{
	Result,
	estree::{Comment, Span},
	hast::ScriptPayload,
};

/// Which side of a node a comment is compared against.
#[derive(Clone, Copy)]
enum Edge {
	/// The node start.
	Start,
	/// The node end.
	End,
}

/// The positional fields of a script node.
trait Positioned {
	/// `range[0]` or `range[1]`.
	fn range(&self, edge: Edge) -> Option<f64>;
	/// `loc.start` or `loc.end`, as `(line, column)`.
	fn loc(&self, edge: Edge) -> Option<(f64, f64)>;
	/// `start` or `end`.
	fn offset(&self, edge: Edge) -> Option<f64>;
}

impl Positioned for Span {
	fn range(&self, edge: Edge) -> Option<f64> {
		let [start, end] = self.range?;
		let offset = match edge {
			Edge::Start => start,
			Edge::End => end,
		};
		Some(offset as f64)
	}

	fn loc(&self, edge: Edge) -> Option<(f64, f64)> {
		let loc = self.loc?;
		let point = match edge {
			Edge::Start => loc.start,
			Edge::End => loc.end,
		};
		Some((point.line as f64, point.column as f64))
	}

	fn offset(&self, edge: Edge) -> Option<f64> {
		match edge {
			Edge::Start => self.start,
			Edge::End => self.end,
		}
		.map(|offset| offset as f64)
	}
}

impl Positioned for Map<String, Value> {
	fn range(&self, edge: Edge) -> Option<f64> {
		let index = match edge {
			Edge::Start => 0,
			Edge::End => 1,
		};
		self.get("range")?.get(index)?.as_f64()
	}

	fn loc(&self, edge: Edge) -> Option<(f64, f64)> {
		let key = match edge {
			Edge::Start => "start",
			Edge::End => "end",
		};
		let point = self.get("loc")?.get(key)?;
		Some((point.get("line")?.as_f64()?, point.get("column")?.as_f64()?))
	}

	fn offset(&self, edge: Edge) -> Option<f64> {
		let key = match edge {
			Edge::Start => "start",
			Edge::End => "end",
		};
		self.get(key)?.as_f64()
	}
}

/// Compares the start of `comment` with the `edge` of `node`, by range,
/// then line and column, then offset. `None` when neither has a
/// comparable position.
fn compare(comment: &Span, node: &impl Positioned, edge: Edge) -> Option<Ordering> {
	if let (Some(left), Some(right)) = (comment.range(Edge::Start), node.range(edge)) {
		return left.partial_cmp(&right);
	}

	if let (Some(left), Some(right)) = (comment.loc(Edge::Start), node.loc(edge)) {
		return match left.0.partial_cmp(&right.0)? {
			Ordering::Equal => left.1.partial_cmp(&right.1),
			ordering => Some(ordering),
		};
	}

	if let (Some(left), Some(right)) = (comment.offset(Edge::Start), node.offset(edge)) {
		return left.partial_cmp(&right);
	}

	None
}

/// Walk state: the sorted comments and the next one to place.
struct Attacher {
	/// Comments in source order.
	comments: Vec<Comment>,
	/// Index of the next unplaced comment.
	index: usize,
}

impl Attacher {
	/// Takes the next comments positioned at or before the `edge` of
	/// `node`, marked with `leading` and `trailing`.
	fn slice(
		&mut self,
		node: &impl Positioned,
		edge: Edge,
		leading: bool,
		trailing: bool,
	) -> Vec<Comment> {
		let mut result = Vec::new();

		while let Some(comment) = self.comments.get(self.index) {
			if !matches!(
				compare(&comment.meta.span, node, edge),
				Some(Ordering::Less | Ordering::Equal)
			) {
				break;
			}

			result.push(comment.attached(leading, trailing));
			self.index += 1;
		}

		result
	}

	/// Places comments on `node` and its descendants.
	fn walk(&mut self, node: &mut Map<String, Value>) -> Result<()> {
		if self.index == self.comments.len() {
			return Ok(());
		}

		let leading = self.slice(&*node, Edge::Start, true, false);

		let mut children = Vec::new();
		for (key, value) in node.iter_mut() {
			if key != "comments" {
				children.extend(child_nodes(value));
			}
		}

		let has_children = !children.is_empty();
		children.sort_by(|left, right| {
			offset(left)
				.zip(offset(right))
				.and_then(|(left, right)| left.partial_cmp(&right))
				.unwrap_or(Ordering::Equal)
		});

		for child in children {
			self.walk(child)?;
		}

		let trailing = self.slice(&*node, Edge::End, false, has_children);

		if !leading.is_empty() || !trailing.is_empty() {
			let comments = leading
				.into_iter()
				.chain(trailing)
				.map(serde_json::to_value)
				.collect::<Result<Vec<_>, _>>()?;
			node.insert("comments".into(), Value::Array(comments));
		}

		Ok(())
	}
}

/// The object behind `value`, if it is a node (has a string `type`).
fn as_node(value: &mut Value) -> Option<&mut Map<String, Value>> {
	value
		.as_object_mut()
		.filter(|object| object.get("type").is_some_and(Value::is_string))
}

/// The nodes in a field value: the value itself or the nodes of an array.
fn child_nodes(value: &mut Value) -> Vec<&mut Map<String, Value>> {
	match value {
		Value::Array(items) => items.iter_mut().filter_map(as_node).collect(),
		value => as_node(value).into_iter().collect(),
	}
}

/// Where a node starts, for ordering siblings.
fn offset(node: &Map<String, Value>) -> Option<f64> {
	node.range(Edge::Start)
		.or_else(|| node.loc(Edge::Start).map(|(line, _)| line))
		.or_else(|| node.offset(Edge::Start))
}

/// Attaches the comments of `payload` to its statements.
///
/// The payload program node itself is not part of the output, so comments
/// that would land on it are dropped there.
pub(crate) fn attach(payload: &mut ScriptPayload) -> Result<()> {
	if payload.comments.is_empty() {
		return Ok(());
	}

	let mut comments = payload.comments.clone();
	comments.sort_by(|left, right| {
		compare(&left.meta.span, &right.meta.span, Edge::Start).unwrap_or(Ordering::Equal)
	});

	let mut attacher = Attacher { comments, index: 0 };

	let leading = attacher.slice(&payload.span, Edge::Start, true, false);
	if !leading.is_empty() {
		tracing::trace!(count = leading.len(), "dropping comments before script");
	}

	let mut body: Vec<_> = payload.body.iter_mut().filter_map(as_node).collect();
	let has_children = !body.is_empty();
	body.sort_by(|left, right| {
		offset(left)
			.zip(offset(right))
			.and_then(|(left, right)| left.partial_cmp(&right))
			.unwrap_or(Ordering::Equal)
	});

	for statement in body {
		attacher.walk(statement)?;
	}

	let trailing = attacher.slice(&payload.span, Edge::End, false, has_children);
	if !trailing.is_empty() {
		tracing::trace!(count = trailing.len(), "dropping comments after script");
	}

	Ok(())
}
