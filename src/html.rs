// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rendering forms as HTML.
//!
//! A table is an element: its first positional entry names the tag,
//! keyed entries with scalar keys and values are attributes, the
//! remaining positional entries are the children, one per line and
//! indented by two more columns. Scalars are text. `html` keeps its
//! children at its own indentation and is preceded by a doctype.
//! Inside `style`, the children are taken in pairs of a selector and
//! a table of CSS properties.

use crate::print::print;
use crate::value::{Form, Entry};
use thiserror::Error;

pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "html", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

pub const DOCTYPE: &str = "<!doctype html>";

const INDENT_STEP: usize = 2;

#[derive(Error, Debug)]
pub enum HtmlError {
    #[error("can't render as HTML: {0}")]
    UnsupportedForm(String),
}

fn unsupported(what: &str, form: &Form) -> HtmlError {
    HtmlError::UnsupportedForm(format!("{} in {}", what, print(form)))
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attribute(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}

// Keyed entries whose key and value are both scalars, in entry order;
// a repeated key keeps its first place and takes the last value.
fn scalar_pairs(entries: &[Entry]) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for entry in entries {
        if let Entry::Pair { key, value } = entry {
            if let (Some(k), Some(v)) = (key.scalar_text(), value.scalar_text()) {
                if let Some(pair) = pairs.iter_mut().find(|(k0, _)| *k0 == k) {
                    pair.1 = v;
                } else {
                    pairs.push((k, v));
                }
            }
        }
    }
    pairs
}

fn push_style(
    form: &Form,
    rules: &[&Form],
    indent: &str,
    lines: &mut Vec<String>,
) -> Result<(), HtmlError> {
    lines.push(format!("{}<style>", indent));
    for chunk in rules.chunks(2) {
        let (selector, properties) = match chunk {
            [selector, properties] => (selector, properties),
            _ => return Err(unsupported("style selector without properties", form))
        };
        let selector = selector.scalar_text()
            .ok_or_else(|| unsupported("composite style selector", form))?;
        let properties = properties.entries()
            .ok_or_else(|| unsupported("style properties that are not a table", form))?;
        lines.push(format!("{}{} {{", indent, selector));
        for (k, v) in scalar_pairs(properties) {
            lines.push(format!("{}  {}: {};", indent, k, v));
        }
        lines.push(format!("{}}}", indent));
    }
    lines.push(format!("{}</style>", indent));
    Ok(())
}

fn push_html(form: &Form, indent: usize, lines: &mut Vec<String>) -> Result<(), HtmlError> {
    let i = " ".repeat(indent);
    let entries = match form {
        Form::Table(entries) => entries,
        _ => {
            // scalars always have text
            let text = form.scalar_text().unwrap_or_default();
            lines.push(format!("{}{}", i, escape_text(&text)));
            return Ok(())
        }
    };

    let attributes = scalar_pairs(entries);
    let items: Vec<&Form> = entries.iter().filter_map(|e| match e {
        Entry::Item(f) => Some(f),
        Entry::Pair { .. } => None,
    }).collect();
    let (head, children) = items.split_first()
        .ok_or_else(|| unsupported("table without a tag", form))?;
    let tag = head.as_text().unwrap_or("div");

    if tag == "style" {
        return push_style(form, children, &i, lines)
    }

    if tag == "html" {
        lines.push(DOCTYPE.to_string());
    }
    let mut open = format!("{}<{}", i, tag);
    for (k, v) in &attributes {
        open.push_str(&format!(" {}=\"{}\"", k, escape_attribute(v)));
    }
    open.push('>');
    lines.push(open);
    let child_indent = if tag == "html" { indent } else { indent + INDENT_STEP };
    for child in children {
        push_html(child, child_indent, lines)?;
    }
    if ! VOID_TAGS.contains(&tag) {
        lines.push(format!("{}</{}>", i, tag));
    }
    Ok(())
}

/// Render `form` with its outermost element indented by `indent`
/// columns. Lines are joined with `\n`, without a final newline.
pub fn form_to_html(form: &Form, indent: usize) -> Result<String, HtmlError> {
    let mut lines = Vec::new();
    push_html(form, indent, &mut lines)?;
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read::{read, read_with};
    use crate::settings::SINGLE_FORM_FORMAT;

    fn html(s: &str) -> String {
        form_to_html(&read_with(s, &SINGLE_FORM_FORMAT).unwrap(), 0).unwrap()
    }

    #[test]
    fn element_with_text() {
        assert_eq!(html(r#"(p :class intro "Hello")"#),
                   "<p class=\"intro\">\n  Hello\n</p>");
    }

    #[test]
    fn void_elements() {
        assert_eq!(html("(br)"), "<br>");
        assert_eq!(html("(img :src a.png :alt 3)"), "<img src=\"a.png\" alt=\"3\">");
    }

    #[test]
    fn nesting_and_indent() {
        assert_eq!(form_to_html(&read_with("(ul (li a) (li b))", &SINGLE_FORM_FORMAT).unwrap(), 2).unwrap(),
                   "  <ul>\n    <li>\n      a\n    </li>\n    <li>\n      b\n    </li>\n  </ul>");
    }

    #[test]
    fn missing_tag_is_div() {
        assert_eq!(html("((x) y)"), "<div>\n  y\n</div>");
    }

    #[test]
    fn composite_attributes_are_skipped() {
        assert_eq!(html("(a :href x :(k) v :title (t) :href y)"), "<a href=\"y\">\n</a>");
    }

    #[test]
    fn escaping() {
        assert_eq!(html(r#"(a :title "say \"hi\"" "1 < 2")"#),
                   "<a title=\"say \\&quot;hi\\&quot;\">\n  1 &lt; 2\n</a>");
    }

    #[test]
    fn style_block() {
        assert_eq!(html(r#"(style body (:margin 0 :color red) h1 (:font-size "2em"))"#),
                   "<style>\nbody {\n  margin: 0;\n  color: red;\n}\nh1 {\n  font-size: 2em;\n}\n</style>");
    }

    #[test]
    fn unsupported_forms() {
        for s in ["()", "(:a b)", "(style body)", "(style (a) (:b c))", "(style body red)"] {
            let form = read_with(s, &SINGLE_FORM_FORMAT).unwrap();
            assert!(matches!(form_to_html(&form, 0), Err(HtmlError::UnsupportedForm(_))),
                    "{}", s);
        }
    }

    #[test]
    fn page() {
        let form = read("html :lang en (meta :encoding utf-8) (title \"Hi\") (br)").unwrap();
        assert_eq!(form_to_html(&form, 0).unwrap(),
                   "<!doctype html>\n<html lang=\"en\">\n<meta encoding=\"utf-8\">\n<title>\n  Hi\n</title>\n<br>");
    }
}
