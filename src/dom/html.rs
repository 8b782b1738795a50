// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! HTML serialization for element trees.

use super::Element;

const INDENT: &str = "  ";

/// Escape text for use in HTML content or a quoted attribute
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub(super) fn write_compact(element: &Element, out: &mut String) {
    out.push_str(&element.open_tag());
    if let Some(text) = element.text() {
        out.push_str(&escape(&text));
    }
    for child in element.children() {
        write_compact(&child, out);
    }
    out.push_str(&format!("</{}>", element.tag()));
}

pub(super) fn write_pretty(element: &Element, depth: usize, out: &mut String) {
    let pad = INDENT.repeat(depth);
    out.push_str(&pad);
    out.push_str(&element.open_tag());
    if let Some(text) = element.text() {
        out.push_str(&escape(&text));
    }

    let children = element.children();
    if !children.is_empty() {
        out.push('\n');
        for child in &children {
            write_pretty(child, depth + 1, out);
        }
        out.push_str(&pad);
    }
    out.push_str(&format!("</{}>\n", element.tag()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
        assert_eq!(escape("hi-hat"), "hi-hat");
    }

    #[test]
    fn test_compact_html() {
        let root = Element::new("div").with_id("kickTrack").with_class("track");
        root.append_child(&Element::new("p").with_class("track-name").with_text("kick"));
        root.append_child(&Element::new("div").with_class("step"));

        assert_eq!(
            root.outer_html(),
            "<div id=\"kickTrack\" class=\"track\">\
             <p class=\"track-name\">kick</p>\
             <div class=\"step\"></div>\
             </div>"
        );
    }

    #[test]
    fn test_pretty_html_indents_children() {
        let root = Element::new("div");
        let inner = Element::new("div");
        inner.append_child(&Element::new("span").with_text("<x>"));
        root.append_child(&inner);

        assert_eq!(
            root.pretty_html(),
            "<div>\n  <div>\n    <span>&lt;x&gt;</span>\n  </div>\n</div>\n"
        );
    }
}
