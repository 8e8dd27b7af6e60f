//! SVG properties.
//!
//! SVG attributes are case-sensitive; most are spelled like their property,
//! the rest are listed in [`ATTRIBUTES`]. Event handlers are lowercased.

use std::borrow::Cow;

use super::{Definition, Kind, Space};

/// Shorthand.
const B: Kind = Kind::BOOLEAN;
/// Shorthand.
const N: Kind = Kind::NUMBER;
/// Shorthand.
const P: Kind = Kind::PLAIN;
/// Shorthand.
const SS: Kind = Kind::SPACE_SEPARATED;
/// Shorthand.
const CS: Kind = Kind::COMMA_SEPARATED;
/// Shorthand.
const COS: Kind = Kind::COMMA_OR_SPACE_SEPARATED;

/// Attribute names that aren't the property name.
const ATTRIBUTES: &[(&str, &str)] = &[
	("accentHeight", "accent-height"),
	("alignmentBaseline", "alignment-baseline"),
	("arabicForm", "arabic-form"),
	("baselineShift", "baseline-shift"),
	("capHeight", "cap-height"),
	("className", "class"),
	("clipPath", "clip-path"),
	("clipRule", "clip-rule"),
	("colorInterpolation", "color-interpolation"),
	("colorInterpolationFilters", "color-interpolation-filters"),
	("colorProfile", "color-profile"),
	("colorRendering", "color-rendering"),
	("crossOrigin", "crossorigin"),
	("dataType", "datatype"),
	("dominantBaseline", "dominant-baseline"),
	("enableBackground", "enable-background"),
	("fillOpacity", "fill-opacity"),
	("fillRule", "fill-rule"),
	("floodColor", "flood-color"),
	("floodOpacity", "flood-opacity"),
	("fontFamily", "font-family"),
	("fontSize", "font-size"),
	("fontSizeAdjust", "font-size-adjust"),
	("fontStretch", "font-stretch"),
	("fontStyle", "font-style"),
	("fontVariant", "font-variant"),
	("fontWeight", "font-weight"),
	("glyphName", "glyph-name"),
	("glyphOrientationHorizontal", "glyph-orientation-horizontal"),
	("glyphOrientationVertical", "glyph-orientation-vertical"),
	("hrefLang", "hreflang"),
	("horizAdvX", "horiz-adv-x"),
	("horizOriginX", "horiz-origin-x"),
	("horizOriginY", "horiz-origin-y"),
	("imageRendering", "image-rendering"),
	("letterSpacing", "letter-spacing"),
	("lightingColor", "lighting-color"),
	("markerEnd", "marker-end"),
	("markerMid", "marker-mid"),
	("markerStart", "marker-start"),
	("navDown", "nav-down"),
	("navDownLeft", "nav-down-left"),
	("navDownRight", "nav-down-right"),
	("navLeft", "nav-left"),
	("navNext", "nav-next"),
	("navPrev", "nav-prev"),
	("navRight", "nav-right"),
	("navUp", "nav-up"),
	("navUpLeft", "nav-up-left"),
	("navUpRight", "nav-up-right"),
	("overlinePosition", "overline-position"),
	("overlineThickness", "overline-thickness"),
	("paintOrder", "paint-order"),
	("panose1", "panose-1"),
	("playbackOrder", "playbackorder"),
	("pointerEvents", "pointer-events"),
	("referrerPolicy", "referrerpolicy"),
	("renderingIntent", "rendering-intent"),
	("shapeRendering", "shape-rendering"),
	("stopColor", "stop-color"),
	("stopOpacity", "stop-opacity"),
	("strikethroughPosition", "strikethrough-position"),
	("strikethroughThickness", "strikethrough-thickness"),
	("strokeDashArray", "stroke-dasharray"),
	("strokeDashOffset", "stroke-dashoffset"),
	("strokeLineCap", "stroke-linecap"),
	("strokeLineJoin", "stroke-linejoin"),
	("strokeMiterLimit", "stroke-miterlimit"),
	("strokeOpacity", "stroke-opacity"),
	("strokeWidth", "stroke-width"),
	("tabIndex", "tabindex"),
	("textAnchor", "text-anchor"),
	("textDecoration", "text-decoration"),
	("textRendering", "text-rendering"),
	("timelineBegin", "timelinebegin"),
	("transformOrigin", "transform-origin"),
	("typeOf", "typeof"),
	("underlinePosition", "underline-position"),
	("underlineThickness", "underline-thickness"),
	("unicodeBidi", "unicode-bidi"),
	("unicodeRange", "unicode-range"),
	("unitsPerEm", "units-per-em"),
	("vAlphabetic", "v-alphabetic"),
	("vHanging", "v-hanging"),
	("vIdeographic", "v-ideographic"),
	("vMathematical", "v-mathematical"),
	("vectorEffect", "vector-effect"),
	("vertAdvY", "vert-adv-y"),
	("vertOriginX", "vert-origin-x"),
	("vertOriginY", "vert-origin-y"),
	("wordSpacing", "word-spacing"),
	("writingMode", "writing-mode"),
	("xHeight", "x-height"),
];

/// Derives an attribute name.
fn attribute(property: &'static str) -> Cow<'static, str> {
	if let Some((_, attribute)) = ATTRIBUTES.iter().find(|(from, _)| *from == property) {
		return Cow::Borrowed(*attribute);
	}

	if property.starts_with("on") && property[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
		return Cow::Owned(property.to_lowercase());
	}

	Cow::Borrowed(property)
}

/// SVG.
pub(super) const SVG: Definition = Definition {
	space: Some(Space::Svg),
	attribute,
	properties: &[
		("about", COS),
		("accentHeight", N),
		("accumulate", P),
		("additive", P),
		("alignmentBaseline", P),
		("alphabetic", N),
		("amplitude", N),
		("arabicForm", P),
		("ascent", N),
		("attributeName", P),
		("attributeType", P),
		("azimuth", N),
		("bandwidth", P),
		("baselineShift", P),
		("baseFrequency", P),
		("baseProfile", P),
		("bbox", P),
		("begin", P),
		("bias", N),
		("by", P),
		("calcMode", P),
		("capHeight", N),
		("className", SS),
		("clip", P),
		("clipPath", P),
		("clipPathUnits", P),
		("clipRule", P),
		("color", P),
		("colorInterpolation", P),
		("colorInterpolationFilters", P),
		("colorProfile", P),
		("colorRendering", P),
		("content", P),
		("contentScriptType", P),
		("contentStyleType", P),
		("crossOrigin", P),
		("cursor", P),
		("cx", P),
		("cy", P),
		("d", P),
		("dataType", P),
		("defaultAction", P),
		("descent", N),
		("diffuseConstant", N),
		("direction", P),
		("display", P),
		("dur", P),
		("divisor", N),
		("dominantBaseline", P),
		("download", B),
		("dx", P),
		("dy", P),
		("edgeMode", P),
		("editable", P),
		("elevation", N),
		("enableBackground", P),
		("end", P),
		("event", P),
		("exponent", N),
		("externalResourcesRequired", P),
		("fill", P),
		("fillOpacity", N),
		("fillRule", P),
		("filter", P),
		("filterRes", P),
		("filterUnits", P),
		("floodColor", P),
		("floodOpacity", P),
		("focusable", P),
		("focusHighlight", P),
		("fontFamily", P),
		("fontSize", P),
		("fontSizeAdjust", P),
		("fontStretch", P),
		("fontStyle", P),
		("fontVariant", P),
		("fontWeight", P),
		("format", P),
		("fr", P),
		("from", P),
		("fx", P),
		("fy", P),
		("g1", CS),
		("g2", CS),
		("glyphName", CS),
		("glyphOrientationHorizontal", P),
		("glyphOrientationVertical", P),
		("glyphRef", P),
		("gradientTransform", P),
		("gradientUnits", P),
		("handler", P),
		("hanging", N),
		("hatchContentUnits", P),
		("hatchUnits", P),
		("height", P),
		("href", P),
		("hrefLang", P),
		("horizAdvX", N),
		("horizOriginX", N),
		("horizOriginY", N),
		("id", P),
		("ideographic", N),
		("imageRendering", P),
		("initialVisibility", P),
		("in", P),
		("in2", P),
		("intercept", N),
		("k", N),
		("k1", N),
		("k2", N),
		("k3", N),
		("k4", N),
		("kernelMatrix", COS),
		("kernelUnitLength", P),
		("keyPoints", P),
		("keySplines", P),
		("keyTimes", P),
		("kerning", P),
		("lang", P),
		("lengthAdjust", P),
		("letterSpacing", P),
		("lightingColor", P),
		("limitingConeAngle", N),
		("local", P),
		("markerEnd", P),
		("markerMid", P),
		("markerStart", P),
		("markerHeight", P),
		("markerUnits", P),
		("markerWidth", P),
		("mask", P),
		("maskContentUnits", P),
		("maskUnits", P),
		("mathematical", P),
		("max", P),
		("media", P),
		("mediaCharacterEncoding", P),
		("mediaContentEncodings", P),
		("mediaSize", N),
		("mediaTime", P),
		("method", P),
		("min", P),
		("mode", P),
		("name", P),
		("navDown", P),
		("navDownLeft", P),
		("navDownRight", P),
		("navLeft", P),
		("navNext", P),
		("navPrev", P),
		("navRight", P),
		("navUp", P),
		("navUpLeft", P),
		("navUpRight", P),
		("numOctaves", P),
		("observer", P),
		("offset", P),
		("onAbort", P),
		("onActivate", P),
		("onAfterPrint", P),
		("onBeforePrint", P),
		("onBegin", P),
		("onCancel", P),
		("onCanPlay", P),
		("onCanPlayThrough", P),
		("onChange", P),
		("onClick", P),
		("onClose", P),
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
		("onEnd", P),
		("onEnded", P),
		("onError", P),
		("onFocus", P),
		("onFocusIn", P),
		("onFocusOut", P),
		("onHashChange", P),
		("onInput", P),
		("onInvalid", P),
		("onKeyDown", P),
		("onKeyPress", P),
		("onKeyUp", P),
		("onLoad", P),
		("onLoadedData", P),
		("onLoadedMetadata", P),
		("onLoadStart", P),
		("onMessage", P),
		("onMouseDown", P),
		("onMouseEnter", P),
		("onMouseLeave", P),
		("onMouseMove", P),
		("onMouseOut", P),
		("onMouseOver", P),
		("onMouseUp", P),
		("onMouseWheel", P),
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
		("onRepeat", P),
		("onReset", P),
		("onResize", P),
		("onScroll", P),
		("onSeeked", P),
		("onSeeking", P),
		("onSelect", P),
		("onShow", P),
		("onStalled", P),
		("onStorage", P),
		("onSubmit", P),
		("onSuspend", P),
		("onTimeUpdate", P),
		("onToggle", P),
		("onUnload", P),
		("onVolumeChange", P),
		("onWaiting", P),
		("onZoom", P),
		("opacity", P),
		("operator", P),
		("order", P),
		("orient", P),
		("orientation", P),
		("origin", P),
		("overflow", P),
		("overlay", P),
		("overlinePosition", N),
		("overlineThickness", N),
		("paintOrder", P),
		("panose1", P),
		("path", P),
		("pathLength", N),
		("patternContentUnits", P),
		("patternTransform", P),
		("patternUnits", P),
		("phase", P),
		("ping", SS),
		("pitch", P),
		("playbackOrder", P),
		("pointerEvents", P),
		("points", P),
		("pointsAtX", N),
		("pointsAtY", N),
		("pointsAtZ", N),
		("preserveAlpha", P),
		("preserveAspectRatio", P),
		("primitiveUnits", P),
		("propagate", P),
		("property", COS),
		("r", P),
		("radius", P),
		("referrerPolicy", P),
		("refX", P),
		("refY", P),
		("rel", COS),
		("rev", COS),
		("renderingIntent", P),
		("repeatCount", P),
		("repeatDur", P),
		("requiredExtensions", COS),
		("requiredFeatures", COS),
		("requiredFonts", COS),
		("requiredFormats", COS),
		("resource", P),
		("restart", P),
		("result", P),
		("rotate", P),
		("rx", P),
		("ry", P),
		("scale", P),
		("seed", P),
		("shapeRendering", P),
		("side", P),
		("slope", P),
		("snapshotTime", P),
		("specularConstant", N),
		("specularExponent", N),
		("spreadMethod", P),
		("spacing", P),
		("startOffset", P),
		("stdDeviation", P),
		("stemh", P),
		("stemv", P),
		("stitchTiles", P),
		("stopColor", P),
		("stopOpacity", P),
		("strikethroughPosition", N),
		("strikethroughThickness", N),
		("string", P),
		("stroke", P),
		("strokeDashArray", COS),
		("strokeDashOffset", P),
		("strokeLineCap", P),
		("strokeLineJoin", P),
		("strokeMiterLimit", N),
		("strokeOpacity", N),
		("strokeWidth", P),
		("style", P),
		("surfaceScale", N),
		("syncBehavior", P),
		("syncBehaviorDefault", P),
		("syncMaster", P),
		("syncTolerance", P),
		("syncToleranceDefault", P),
		("systemLanguage", COS),
		("tabIndex", N),
		("tableValues", P),
		("target", P),
		("targetX", N),
		("targetY", N),
		("textAnchor", P),
		("textDecoration", P),
		("textRendering", P),
		("textLength", P),
		("timelineBegin", P),
		("title", P),
		("transformBehavior", P),
		("type", P),
		("typeOf", COS),
		("to", P),
		("transform", P),
		("transformOrigin", P),
		("u1", P),
		("u2", P),
		("underlinePosition", N),
		("underlineThickness", N),
		("unicode", P),
		("unicodeBidi", P),
		("unicodeRange", P),
		("unitsPerEm", N),
		("values", P),
		("vAlphabetic", N),
		("vMathematical", N),
		("vectorEffect", P),
		("vHanging", N),
		("vIdeographic", N),
		("version", P),
		("vertAdvY", N),
		("vertOriginX", N),
		("vertOriginY", N),
		("viewBox", P),
		("viewTarget", P),
		("visibility", P),
		("width", P),
		("widths", P),
		("wordSpacing", P),
		("writingMode", P),
		("x", P),
		("x1", P),
		("x2", P),
		("xChannelSelector", P),
		("xHeight", N),
		("y", P),
		("y1", P),
		("y2", P),
		("yChannelSelector", P),
		("z", P),
		("zoomAndPan", P),
	],
};
