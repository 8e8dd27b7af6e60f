use crate::{
	Result, State,
	estree::{JsxChild, JsxFragment, Meta},
	hast::Root,
	state::Converted,
};

impl State {
	/// Converts a root into a fragment of its children, without the
	/// whitespace-only text before the first and after the last other child.
	pub(crate) fn root(&mut self, node: &Root) -> Result<Converted> {
		let mut children = Vec::new();
		// Whitespace seen since the last other child; `None` until there is one.
		let mut queue: Option<Vec<JsxChild>> = None;

		for child in self.all(node)? {
			if child.is_whitespace() {
				if let Some(queue) = &mut queue {
					queue.push(child);
				}
			} else {
				children.extend(queue.replace(Vec::new()).unwrap_or_default());
				children.push(child);
			}
		}

		Ok(JsxFragment::new(children, Meta::inherit(node)).into())
	}
}
