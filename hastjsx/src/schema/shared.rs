//! Spaces shared by HTML and SVG.

use std::borrow::Cow;

use super::{Definition, Kind, Space, lowercase_unless};

/// `xml:*`
pub(super) const XML: Definition = Definition {
	space: Some(Space::Xml),
	attribute: |property| Cow::Owned(format!("xml:{}", property[3..].to_lowercase())),
	properties: &[
		("xmlBase", Kind::PLAIN),
		("xmlLang", Kind::PLAIN),
		("xmlSpace", Kind::PLAIN),
	],
};

/// `xlink:*`
pub(super) const XLINK: Definition = Definition {
	space: Some(Space::Xlink),
	attribute: |property| Cow::Owned(format!("xlink:{}", property[5..].to_lowercase())),
	properties: &[
		("xLinkActuate", Kind::PLAIN),
		("xLinkArcRole", Kind::PLAIN),
		("xLinkHref", Kind::PLAIN),
		("xLinkRole", Kind::PLAIN),
		("xLinkShow", Kind::PLAIN),
		("xLinkTitle", Kind::PLAIN),
		("xLinkType", Kind::PLAIN),
	],
};

/// `xmlns` and `xmlns:xlink`
pub(super) const XMLNS: Definition = Definition {
	space: Some(Space::Xmlns),
	attribute: |property| lowercase_unless(&[("xmlnsxlink", "xmlns:xlink")], property),
	properties: &[("xmlns", Kind::PLAIN), ("xmlnsXLink", Kind::PLAIN)],
};

/// `aria-*` and `role`; these have no space.
pub(super) const ARIA: Definition = Definition {
	space: None,
	attribute: |property| {
		if property == "role" {
			Cow::Borrowed(property)
		} else {
			Cow::Owned(format!("aria-{}", property[4..].to_lowercase()))
		}
	},
	properties: &[
		("ariaActiveDescendant", Kind::PLAIN),
		("ariaAtomic", Kind::BOOLEANISH),
		("ariaAutoComplete", Kind::PLAIN),
		("ariaBusy", Kind::BOOLEANISH),
		("ariaChecked", Kind::BOOLEANISH),
		("ariaColCount", Kind::NUMBER),
		("ariaColIndex", Kind::NUMBER),
		("ariaColSpan", Kind::NUMBER),
		("ariaControls", Kind::SPACE_SEPARATED),
		("ariaCurrent", Kind::PLAIN),
		("ariaDescribedBy", Kind::SPACE_SEPARATED),
		("ariaDetails", Kind::PLAIN),
		("ariaDisabled", Kind::BOOLEANISH),
		("ariaDropEffect", Kind::SPACE_SEPARATED),
		("ariaErrorMessage", Kind::PLAIN),
		("ariaExpanded", Kind::BOOLEANISH),
		("ariaFlowTo", Kind::SPACE_SEPARATED),
		("ariaGrabbed", Kind::BOOLEANISH),
		("ariaHasPopup", Kind::PLAIN),
		("ariaHidden", Kind::BOOLEANISH),
		("ariaInvalid", Kind::PLAIN),
		("ariaKeyShortcuts", Kind::PLAIN),
		("ariaLabel", Kind::PLAIN),
		("ariaLabelledBy", Kind::SPACE_SEPARATED),
		("ariaLevel", Kind::NUMBER),
		("ariaLive", Kind::PLAIN),
		("ariaModal", Kind::BOOLEANISH),
		("ariaMultiLine", Kind::BOOLEANISH),
		("ariaMultiSelectable", Kind::BOOLEANISH),
		("ariaOrientation", Kind::PLAIN),
		("ariaOwns", Kind::SPACE_SEPARATED),
		("ariaPlaceholder", Kind::PLAIN),
		("ariaPosInSet", Kind::NUMBER),
		("ariaPressed", Kind::BOOLEANISH),
		("ariaReadOnly", Kind::BOOLEANISH),
		("ariaRelevant", Kind::PLAIN),
		("ariaRequired", Kind::BOOLEANISH),
		("ariaRoleDescription", Kind::SPACE_SEPARATED),
		("ariaRowCount", Kind::NUMBER),
		("ariaRowIndex", Kind::NUMBER),
		("ariaRowSpan", Kind::NUMBER),
		("ariaSelected", Kind::BOOLEANISH),
		("ariaSetSize", Kind::NUMBER),
		("ariaSort", Kind::PLAIN),
		("ariaValueMax", Kind::NUMBER),
		("ariaValueMin", Kind::NUMBER),
		("ariaValueNow", Kind::NUMBER),
		("ariaValueText", Kind::PLAIN),
		("role", Kind::PLAIN),
	],
};
