//! User-Agent default display values.
//!
//! [WHATWG HTML § 15 Rendering](https://html.spec.whatwg.org/multipage/rendering.html)
//!
//! "User agents are expected to have a default style sheet that presents
//! elements of HTML documents in ways consistent with general user
//! expectations."
//!
//! With the cascade out of scope, this table plays the role of the host
//! engine's computed-style layer for the one property whose default varies
//! by tag: `display`. A bare `<div>` resolves to `block` here exactly as
//! `getComputedStyle` would report in a real engine.

/// [WHATWG HTML § 15.3 The CSS user agent style sheet](https://html.spec.whatwg.org/multipage/rendering.html#the-css-user-agent-style-sheet-and-presentational-hints)
///
/// The default `display` value for a tag, ASCII case-insensitive.
/// Unlisted tags default to `inline`
/// ([CSS Display § 2 'display'](https://www.w3.org/TR/css-display-3/#the-display-properties):
/// "Initial: inline").
#[must_use]
pub fn default_display(tag_name: &str) -> &'static str {
    match tag_name.to_ascii_lowercase().as_str() {
        // [§ 15.3.1 Hidden elements](https://html.spec.whatwg.org/multipage/rendering.html#hidden-elements)
        // "The following elements must have their 'display' property set to 'none'."
        "area" | "base" | "basefont" | "datalist" | "head" | "link" | "meta" | "noembed"
        | "noframes" | "param" | "rp" | "script" | "style" | "template" | "title" => "none",

        // [§ 15.3.3 Flow content](https://html.spec.whatwg.org/multipage/rendering.html#flow-content-3)
        // "The following elements must have their 'display' property set to 'block'."
        "address" | "article" | "aside" | "blockquote" | "body" | "center" | "dd" | "details"
        | "dialog" | "dir" | "div" | "dl" | "dt" | "fieldset" | "figcaption" | "figure"
        | "footer" | "form" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "header" | "hgroup"
        | "hr" | "html" | "legend" | "listing" | "main" | "menu" | "nav" | "ol" | "p"
        | "plaintext" | "pre" | "search" | "section" | "summary" | "ul" | "xmp" => "block",

        // [§ 15.3.7 Lists](https://html.spec.whatwg.org/multipage/rendering.html#lists)
        // "li { display: list-item; }"
        "li" => "list-item",

        // [§ 15.3.9 Tables](https://html.spec.whatwg.org/multipage/rendering.html#tables-2)
        // "table { display: table; }" — table display types participate in
        // table layout, not block layout, so they are neither 'block' nor
        // 'inline' here.
        "table" => "table",
        "caption" => "table-caption",
        "colgroup" => "table-column-group",
        "col" => "table-column",
        "thead" => "table-header-group",
        "tbody" => "table-row-group",
        "tfoot" => "table-footer-group",
        "tr" => "table-row",
        "td" | "th" => "table-cell",

        // [§ 15.3.12 The hr element](https://html.spec.whatwg.org/multipage/rendering.html#the-hr-element-2)
        // covered by the flow-content list above; everything else:
        //
        // [CSS Display § 2] "Initial: inline"
        _ => "inline",
    }
}
