//! SVG parsing and size-parameterized markup rendering.

/// Fallback when the source SVG carries no `viewBox` attribute.
const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

/// Rendering variant for icon markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Uniform outline styling; the source icon's own fill/stroke is dropped
    #[default]
    Plain,

    /// Filled rendering with stroke overrides and a precision hint
    HighQuality,

    /// Keep the source attributes, substituting only size and class
    Original,
}

impl RenderStyle {
    /// Parse a style name as used on the CLI.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "plain" => Some(Self::Plain),
            "high-quality" | "hq" => Some(Self::HighQuality),
            "original" => Some(Self::Original),
            _ => None,
        }
    }
}

/// The pieces of a parsed SVG document needed for re-rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    /// `viewBox` attribute, defaulted to `"0 0 24 24"` when absent
    pub view_box: String,

    /// Markup of the root element's children (paths, rects, groups, ...)
    pub content: String,

    /// Root element attributes in document order
    pub attributes: Vec<(String, String)>,

    /// Root element namespace URI, if declared
    pub namespace: Option<String>,
}

/// Parse raw SVG markup into its renderable pieces.
///
/// Returns `None` when the content is not well-formed XML or its root
/// element is not `<svg>`.
pub fn parse_svg(raw: &str) -> Option<SvgDocument> {
    let doc = roxmltree::Document::parse(raw).ok()?;
    let root = doc.root_element();

    if root.tag_name().name() != "svg" {
        return None;
    }

    let view_box = root
        .attribute("viewBox")
        .unwrap_or(DEFAULT_VIEW_BOX)
        .to_string();

    // Child nodes are taken as one contiguous span of the source text, so
    // whitespace and comments between elements survive re-rendering.
    let content = match (root.first_child(), root.last_child()) {
        (Some(first), Some(last)) => raw[first.range().start..last.range().end].to_string(),
        _ => String::new(),
    };

    let attributes = root
        .attributes()
        .map(|attr| (attr.name().to_string(), attr.value().to_string()))
        .collect();

    let namespace = root.tag_name().namespace().map(str::to_string);

    Some(SvgDocument {
        view_box,
        content,
        attributes,
        namespace,
    })
}

/// Render fetched SVG content as markup of the requested size.
///
/// Content that [`parse_svg`] rejects is returned verbatim as a best-effort
/// fallback.
pub fn render_svg(raw: &str, size: u32, class: &str, style: RenderStyle) -> String {
    let Some(doc) = parse_svg(raw) else {
        return raw.to_string();
    };

    match style {
        RenderStyle::Plain => format!(
            r#"<svg class="icon {class}" width="{size}" height="{size}" viewBox="{view_box}" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{content}</svg>"#,
            view_box = doc.view_box,
            content = doc.content,
        ),
        RenderStyle::HighQuality => format!(
            r#"<svg class="icon icon-high-quality {class}" width="{size}" height="{size}" viewBox="{view_box}" fill="currentColor" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" style="shape-rendering: geometricPrecision;">{content}</svg>"#,
            view_box = doc.view_box,
            content = doc.content,
        ),
        RenderStyle::Original => {
            let mut attrs = String::new();
            if let Some(ns) = &doc.namespace {
                attrs.push_str(&format!(r#" xmlns="{ns}""#));
            }
            for (name, value) in &doc.attributes {
                if matches!(name.as_str(), "width" | "height" | "class") {
                    continue;
                }
                attrs.push_str(&format!(r#" {name}="{value}""#));
            }
            format!(
                r#"<svg class="icon {class}"{attrs} width="{size}" height="{size}">{content}</svg>"#,
                content = doc.content,
            )
        }
    }
}

/// Fixed-shape placeholder markup for an unresolvable icon.
///
/// A bordered box of exactly the requested pixel size, labeled with the
/// icon name, so callers never receive empty markup.
pub fn placeholder(name: &str, size: u32, class: &str) -> String {
    format!(
        r#"<div class="icon-placeholder {class}" style="width: {size}px; height: {size}px; background: #f8f9fa; border: 1px solid #e9ecef; border-radius: 4px; display: flex; align-items: center; justify-content: center; font-size: 10px; color: #6c757d; font-weight: 500;">{name}</div>"#
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const STAR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16" fill="none"><path fill="currentColor" d="M8 0l2 6h6l-5 4 2 6-5-4-5 4 2-6-5-4h6z"/></svg>"#;

    #[test]
    fn parses_view_box_and_content() {
        let doc = parse_svg(STAR).unwrap();

        assert_eq!(doc.view_box, "0 0 16 16");
        assert!(doc.content.starts_with("<path"));
        assert_eq!(doc.namespace.as_deref(), Some("http://www.w3.org/2000/svg"));
    }

    #[test]
    fn missing_view_box_defaults() {
        let doc = parse_svg(r#"<svg><circle cx="8" cy="8" r="4"/></svg>"#).unwrap();
        assert_eq!(doc.view_box, "0 0 24 24");
    }

    #[test]
    fn content_spans_all_children() {
        let doc = parse_svg(
            r#"<svg viewBox="0 0 8 8"><rect x="0" y="0" width="4" height="4"/> <circle cx="6" cy="6" r="2"/></svg>"#,
        )
        .unwrap();

        assert_eq!(
            doc.content,
            r#"<rect x="0" y="0" width="4" height="4"/> <circle cx="6" cy="6" r="2"/>"#
        );
    }

    #[test]
    fn rejects_non_svg_root() {
        assert!(parse_svg("<div>hello</div>").is_none());
        assert!(parse_svg("not markup at all").is_none());
    }

    #[test]
    fn plain_style_drops_source_styling() {
        let markup = render_svg(STAR, 24, "demo-icon", RenderStyle::Plain);

        assert!(markup.starts_with(r#"<svg class="icon demo-icon""#));
        assert!(markup.contains(r#"width="24" height="24""#));
        assert!(markup.contains(r#"viewBox="0 0 16 16""#));
        assert!(markup.contains(r#"fill="none" stroke="currentColor" stroke-width="2""#));
        // Inner content keeps its own attributes.
        assert!(markup.contains(r#"<path fill="currentColor""#));
    }

    #[test]
    fn high_quality_style_forces_fill_and_precision() {
        let markup = render_svg(STAR, 24, "", RenderStyle::HighQuality);

        assert!(markup.contains("icon-high-quality"));
        assert!(markup.contains(r#"fill="currentColor" stroke="currentColor" stroke-width="1.5""#));
        assert!(markup.contains("shape-rendering: geometricPrecision"));
    }

    #[test]
    fn original_style_preserves_source_attributes() {
        let markup = render_svg(STAR, 12, "icon", RenderStyle::Original);

        assert!(markup.starts_with(r#"<svg class="icon icon""#));
        assert!(markup.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        // The source's own fill survives, its size does not.
        assert!(markup.contains(r#"fill="none""#));
        assert!(markup.contains(r#"width="12" height="12""#));
        assert!(!markup.contains(r#"width="16""#));
        assert!(markup.contains(r#"viewBox="0 0 16 16""#));
    }

    #[test]
    fn unparseable_content_passes_through_verbatim() {
        let raw = "<svg><unclosed";
        assert_eq!(render_svg(raw, 24, "", RenderStyle::Plain), raw);

        let not_svg = "<div>box</div>";
        assert_eq!(render_svg(not_svg, 24, "", RenderStyle::Original), not_svg);
    }

    #[test]
    fn placeholder_uses_requested_size_and_name() {
        let markup = placeholder("ghost", 32, "demo");

        assert!(markup.contains("width: 32px"));
        assert!(markup.contains("height: 32px"));
        assert!(markup.contains(">ghost</div>"));
        assert!(markup.contains(r#"class="icon-placeholder demo""#));
    }

    #[test]
    fn style_names_parse() {
        assert_eq!(RenderStyle::from_name("plain"), Some(RenderStyle::Plain));
        assert_eq!(RenderStyle::from_name("hq"), Some(RenderStyle::HighQuality));
        assert_eq!(
            RenderStyle::from_name("original"),
            Some(RenderStyle::Original)
        );
        assert_eq!(RenderStyle::from_name("fancy"), None);
    }
}
