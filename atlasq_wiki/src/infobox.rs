//! Infobox isolation and HTML-to-text flattening.
//!
//! No HTML parser: Wikipedia's rendered markup is regular enough that the
//! first `infobox`-classed table can be cut out by scanning tag starts and
//! tracking nested table depth, and flattened to text by dropping tags.

use anyhow::{Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::unwrap_used)]
static DUP_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(" +").unwrap());

#[allow(clippy::unwrap_used)]
static DUP_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new("\n+").unwrap());

/// Slice out the first table whose opening tag carries the `infobox`
/// class, nested tables included.
pub fn first_infobox(html: &str) -> Result<&str> {
    let mut from = 0;
    while let Some(rel) = html[from..].find("<table") {
        let start = from + rel;
        let Some(head_len) = html[start..].find('>') else {
            break;
        };
        let head_end = start + head_len + 1;

        if html[start..head_end].contains("infobox") {
            return table_extent(html, start, head_end);
        }
        from = head_end;
    }

    bail!("Page has no infobox")
}

/// Extend from an opening `<table` tag to its matching `</table>`.
fn table_extent(html: &str, start: usize, head_end: usize) -> Result<&str> {
    let mut depth = 1;
    let mut pos = head_end;

    while depth > 0 {
        let open = html[pos..].find("<table");
        let close = html[pos..].find("</table>");

        match (open, close) {
            (Some(o), Some(c)) if o < c => {
                depth += 1;
                pos += o + "<table".len();
            }
            (_, Some(c)) => {
                depth -= 1;
                pos += c + "</table>".len();
            }
            _ => bail!("Page has no infobox"),
        }
    }

    Ok(&html[start..pos])
}

/// Flatten HTML to text: row and break tags become newlines, cell
/// boundaries become spaces, every other tag is dropped, and the few
/// entities Wikipedia infoboxes actually use are decoded.
#[must_use]
pub fn strip_tags(html: &str) -> String {
    let html = html
        .replace("</tr>", "\n")
        .replace("<br>", "\n")
        .replace("<br/>", "\n")
        .replace("<br />", "\n")
        .replace("</caption>", "\n")
        .replace("</th>", " ")
        .replace("</td>", " ");

    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

/// Keep printable ASCII and collapse runs of spaces and newlines, so the
/// field regexes see one stable layout regardless of page styling.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let only_ascii: String = text
        .chars()
        .map(|ch| {
            if ch.is_ascii() && (ch == '\n' || !ch.is_ascii_control()) {
                ch
            } else {
                ' '
            }
        })
        .collect();

    let no_dup_spaces = DUP_SPACES.replace_all(&only_ascii, " ");
    DUP_NEWLINES.replace_all(&no_dup_spaces, "\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<div class="mw-parser-output">
<p>France is a country in Europe.</p>
<table class="infobox ib-country vcard"><tbody>
<tr><th>Capital</th><td>Paris</td></tr>
<tr><th>Area</th><td><table><tr><td>inner</td></tr></table></td></tr>
<tr><th>Total</th><td>643,801&nbsp;km<sup>2</sup></td></tr>
</tbody></table>
<table class="wikitable"><tr><td>not the infobox</td></tr></table>
</div>"#;

    #[test]
    fn test_first_infobox_skips_preamble() {
        let infobox = first_infobox(PAGE).unwrap();
        assert!(infobox.starts_with("<table class=\"infobox"));
        assert!(infobox.ends_with("</table>"));
        assert!(infobox.contains("643,801"));
        assert!(!infobox.contains("wikitable"));
    }

    #[test]
    fn test_first_infobox_keeps_nested_table() {
        let infobox = first_infobox(PAGE).unwrap();
        assert!(infobox.contains("inner"));
    }

    #[test]
    fn test_missing_infobox_is_an_error() {
        let err = first_infobox("<p>plain page</p>").unwrap_err();
        assert!(err.to_string().contains("no infobox"));
    }

    #[test]
    fn test_unclosed_infobox_is_an_error() {
        assert!(first_infobox("<table class=\"infobox\"><tr>").is_err());
    }

    #[test]
    fn test_strip_tags_flattens_rows() {
        let text = strip_tags("<tr><th>Capital</th><td>Paris</td></tr>");
        assert_eq!(text, "Capital Paris \n");
    }

    #[test]
    fn test_strip_tags_decodes_entities() {
        assert_eq!(strip_tags("a&nbsp;&amp;&#39;b"), "a &'b");
    }

    #[test]
    fn test_clean_text_collapses_runs() {
        assert_eq!(clean_text("a   b\n\n\nc"), "a b\nc");
    }

    #[test]
    fn test_clean_text_replaces_non_ascii() {
        assert_eq!(clean_text("643,801\u{a0}km\u{b2}"), "643,801 km ");
    }

    #[test]
    fn test_full_pipeline_exposes_field_labels() {
        let text = clean_text(&strip_tags(first_infobox(PAGE).unwrap()));
        assert!(text.contains("Total 643,801"));
    }
}
