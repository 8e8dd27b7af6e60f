//! HTML properties.
//!
//! Attribute names are the lowercased property names, apart from a few
//! dashed or renamed ones.

use std::borrow::Cow;

use super::{Definition, Kind, Space, lowercase_unless};

/// Shorthands for the table below.
const B: Kind = Kind::BOOLEAN;
/// Shorthand.
const BISH: Kind = Kind::BOOLEANISH;
/// Shorthand.
const N: Kind = Kind::NUMBER;
/// Shorthand.
const P: Kind = Kind::PLAIN;
/// Shorthand.
const SS: Kind = Kind::SPACE_SEPARATED;
/// Shorthand.
const CS: Kind = Kind::COMMA_SEPARATED;

/// Attribute names that aren't the lowercased property name.
const ATTRIBUTES: &[(&str, &str)] = &[
	("acceptcharset", "accept-charset"),
	("classname", "class"),
	("htmlfor", "for"),
	("httpequiv", "http-equiv"),
];

/// Derives an attribute name.
fn attribute(property: &'static str) -> Cow<'static, str> {
	lowercase_unless(ATTRIBUTES, property)
}

/// HTML.
pub(super) const HTML: Definition = Definition {
	space: Some(Space::Html),
	attribute,
	properties: &[
		("abbr", P),
		("accept", CS),
		("acceptCharset", SS),
		("accessKey", SS),
		("action", P),
		("allow", P),
		("allowFullScreen", B),
		("allowPaymentRequest", B),
		("allowUserMedia", B),
		("alt", P),
		("as", P),
		("async", B),
		("autoCapitalize", P),
		("autoComplete", SS),
		("autoFocus", B),
		("autoPlay", B),
		("blocking", SS),
		("capture", P),
		("charSet", P),
		("checked", B),
		("cite", P),
		("className", SS),
		("cols", N),
		("colSpan", P),
		("content", P),
		("contentEditable", BISH),
		("controls", B),
		("controlsList", SS),
		("coords", N.and(CS)),
		("crossOrigin", P),
		("data", P),
		("dateTime", P),
		("decoding", P),
		("default", B),
		("defer", B),
		("dir", P),
		("dirName", P),
		("disabled", B),
		("download", Kind::OVERLOADED_BOOLEAN),
		("draggable", BISH),
		("encType", P),
		("enterKeyHint", P),
		("fetchPriority", P),
		("form", P),
		("formAction", P),
		("formEncType", P),
		("formMethod", P),
		("formNoValidate", B),
		("formTarget", P),
		("headers", SS),
		("height", N),
		("hidden", B),
		("high", N),
		("href", P),
		("hrefLang", P),
		("htmlFor", SS),
		("httpEquiv", SS),
		("id", P),
		("imageSizes", P),
		("imageSrcSet", CS),
		("inert", B),
		("inputMode", P),
		("integrity", P),
		("is", P),
		("isMap", B),
		("itemId", P),
		("itemProp", SS),
		("itemRef", SS),
		("itemScope", B),
		("itemType", SS),
		("kind", P),
		("label", P),
		("lang", P),
		("language", P),
		("list", P),
		("loading", P),
		("loop", B),
		("low", N),
		("manifest", P),
		("max", P),
		("maxLength", N),
		("media", P),
		("method", P),
		("min", P),
		("minLength", N),
		("multiple", B),
		("muted", B),
		("name", P),
		("nonce", P),
		("noModule", B),
		("noValidate", B),
		("onAbort", P),
		("onAfterPrint", P),
		("onAuxClick", P),
		("onBeforeMatch", P),
		("onBeforePrint", P),
		("onBeforeToggle", P),
		("onBeforeUnload", P),
		("onBlur", P),
		("onCancel", P),
		("onCanPlay", P),
		("onCanPlayThrough", P),
		("onChange", P),
		("onClick", P),
		("onClose", P),
		("onContextLost", P),
		("onContextMenu", P),
		("onContextRestored", P),
		("onCopy", P),
		("onCueChange", P),
		("onCut", P),
		("onDblClick", P),
		("onDrag", P),
		("onDragEnd", P),
		("onDragEnter", P),
		("onDragExit", P),
		("onDragLeave", P),
		("onDragOver", P),
		("onDragStart", P),
		("onDrop", P),
		("onDurationChange", P),
		("onEmptied", P),
		("onEnded", P),
		("onError", P),
		("onFocus", P),
		("onFormData", P),
		("onHashChange", P),
		("onInput", P),
		("onInvalid", P),
		("onKeyDown", P),
		("onKeyPress", P),
		("onKeyUp", P),
		("onLanguageChange", P),
		("onLoad", P),
		("onLoadedData", P),
		("onLoadedMetadata", P),
		("onLoadEnd", P),
		("onLoadStart", P),
		("onMessage", P),
		("onMessageError", P),
		("onMouseDown", P),
		("onMouseEnter", P),
		("onMouseLeave", P),
		("onMouseMove", P),
		("onMouseOut", P),
		("onMouseOver", P),
		("onMouseUp", P),
		("onOffline", P),
		("onOnline", P),
		("onPageHide", P),
		("onPageShow", P),
		("onPaste", P),
		("onPause", P),
		("onPlay", P),
		("onPlaying", P),
		("onPopState", P),
		("onProgress", P),
		("onRateChange", P),
		("onRejectionHandled", P),
		("onReset", P),
		("onResize", P),
		("onScroll", P),
		("onScrollEnd", P),
		("onSecurityPolicyViolation", P),
		("onSeeked", P),
		("onSeeking", P),
		("onSelect", P),
		("onSlotChange", P),
		("onStalled", P),
		("onStorage", P),
		("onSubmit", P),
		("onSuspend", P),
		("onTimeUpdate", P),
		("onToggle", P),
		("onUnhandledRejection", P),
		("onUnload", P),
		("onVolumeChange", P),
		("onWaiting", P),
		("onWheel", P),
		("open", B),
		("optimum", N),
		("pattern", P),
		("ping", SS),
		("placeholder", P),
		("playsInline", B),
		("popover", P),
		("popoverTarget", P),
		("popoverTargetAction", P),
		("poster", P),
		("preload", P),
		("readOnly", B),
		("referrerPolicy", P),
		("rel", SS),
		("required", B),
		("reversed", B),
		("rows", N),
		("rowSpan", N),
		("sandbox", SS),
		("scope", P),
		("scoped", B),
		("seamless", B),
		("selected", B),
		("shadowRootClonable", B),
		("shadowRootDelegatesFocus", B),
		("shadowRootMode", P),
		("shape", P),
		("size", N),
		("sizes", P),
		("slot", P),
		("span", N),
		("spellCheck", BISH),
		("src", P),
		("srcDoc", P),
		("srcLang", P),
		("srcSet", CS),
		("start", N),
		("step", P),
		("style", P),
		("tabIndex", N),
		("target", P),
		("title", P),
		("translate", P),
		("type", P),
		("typeMustMatch", B),
		("useMap", P),
		("value", BISH),
		("width", N),
		("wrap", P),
		("writingSuggestions", P),
		// Legacy.
		("align", P),
		("aLink", P),
		("archive", SS),
		("axis", P),
		("background", P),
		("bgColor", P),
		("border", N),
		("borderColor", P),
		("bottomMargin", N),
		("cellPadding", P),
		("cellSpacing", P),
		("char", P),
		("charOff", P),
		("classId", P),
		("clear", P),
		("code", P),
		("codeBase", P),
		("codeType", P),
		("color", P),
		("compact", B),
		("declare", B),
		("event", P),
		("face", P),
		("frame", P),
		("frameBorder", P),
		("hSpace", N),
		("leftMargin", N),
		("link", P),
		("longDesc", P),
		("lowSrc", P),
		("marginHeight", N),
		("marginWidth", N),
		("noResize", B),
		("noHref", B),
		("noShade", B),
		("noWrap", B),
		("object", P),
		("profile", P),
		("prompt", P),
		("rev", P),
		("rightMargin", N),
		("rules", P),
		("scheme", P),
		("scrolling", BISH),
		("standby", P),
		("summary", P),
		("text", P),
		("topMargin", N),
		("valueType", P),
		("version", P),
		("vAlign", P),
		("vLink", P),
		("vSpace", N),
		// Non-standard.
		("allowTransparency", P),
		("autoCorrect", P),
		("autoSave", P),
		("disablePictureInPicture", B),
		("disableRemotePlayback", B),
		("prefix", P),
		("property", P),
		("results", N),
		("security", P),
		("unselectable", P),
	],
};
