//! Copies source positions and side-channel data from hast nodes onto the
//! estree nodes made from them.

use crate::{
	estree::{Meta, Point, SourceLocation, Span},
	hast::{self, Located},
};

impl Meta {
	/// Takes only the position of `from`.
	///
	/// Nothing is copied unless the start point has a line. Offsets are
	/// copied as far as they are known; `loc` needs all four line/column
	/// values.
	#[must_use]
	pub fn create(from: &impl Located) -> Self {
		Self {
			span: from.position().map(span).unwrap_or_default(),
			data: None,
		}
	}

	/// Takes the position of `from` and its data, except the `estree`
	/// payload.
	#[must_use]
	pub fn inherit(from: &impl Located) -> Self {
		let mut meta = Self::create(from);
		meta.data = from
			.data()
			.map(|data| data.fields.clone())
			.filter(|fields| !fields.is_empty());
		meta
	}
}

/// Converts a hast position into estree positional fields.
fn span(position: &hast::Position) -> Span {
	let (start, end) = (position.start, position.end);

	if !start.line.is_some_and(|line| line > 0) {
		return Span::default();
	}

	Span {
		start: start.offset,
		end: end.offset,
		loc: point(start).zip(point(end)).map(|(start, end)| SourceLocation { start, end }),
		range: start.offset.zip(end.offset).map(|(start, end)| [start, end]),
	}
}

/// Converts a 1-based column point into an estree 0-based column point.
fn point(point: hast::Point) -> Option<Point> {
	Some(Point {
		line: point.line?,
		column: point.column?.checked_sub(1)?,
	})
}
