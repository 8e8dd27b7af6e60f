use crate::{
	State,
	estree::{self, CommentKind, JsxEmptyExpression, JsxExpression, JsxExpressionContainer, Meta},
	hast::Comment,
	state::Converted,
};

impl State {
	/// Records a block comment and converts it into an empty expression
	/// container carrying that comment (`{/* a */}`).
	pub(crate) fn comment(&mut self, node: &Comment) -> Converted {
		let comment = estree::Comment {
			kind: CommentKind::Block,
			value: node.value.clone(),
			leading: None,
			trailing: None,
			meta: Meta::inherit(node),
		};
		let attached = comment.attached(false, true);
		self.comments.push(comment);

		JsxExpressionContainer {
			expression: JsxExpression::Empty(JsxEmptyExpression {
				comments: vec![attached],
				meta: Meta::create(node),
			}),
			meta: Meta::create(node),
		}
		.into()
	}
}
