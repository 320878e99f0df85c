//! Display formatting for AniList free-text fields.

use scraper::{Html, Node};

pub const NO_DESCRIPTION: &str = "No description available.";

/// Elements whose text content is never shown.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Elements that start on a new line.
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "div", "li", "ul", "ol", "blockquote", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "tr",
];

/// Turn an AniList description into plain text.
///
/// All markup is removed through a real HTML parser, so malformed or
/// unbalanced tags degrade to their visible text. `<br>` and the start of
/// a block element become a line break; whitespace runs collapse to a
/// single space, or to a single newline when the run contains one.
pub fn format_description(description: Option<&str>) -> String {
    match description {
        Some(raw) if !raw.trim().is_empty() => {
            let text = collapse_whitespace(&html_to_text(raw));
            if text.is_empty() {
                NO_DESCRIPTION.to_string()
            } else {
                text
            }
        }
        _ => NO_DESCRIPTION.to_string(),
    }
}

/// Visible text of an HTML fragment, with `<br>` and block starts rendered
/// as `\n`.
fn html_to_text(raw: &str) -> String {
    let fragment = Html::parse_fragment(raw);
    let mut out = String::with_capacity(raw.len());

    for node in fragment.tree.root().descendants() {
        match node.value() {
            Node::Text(text) => {
                let hidden = node.ancestors().any(|a| match a.value() {
                    Node::Element(el) => HIDDEN_ELEMENTS.contains(&el.name()),
                    _ => false,
                });
                if !hidden {
                    out.push_str(text);
                }
            }
            Node::Element(el) if el.name() == "br" || BLOCK_ELEMENTS.contains(&el.name()) => {
                out.push('\n')
            }
            _ => {}
        }
    }

    out
}

fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut pending: Option<char> = None;

    for c in s.chars() {
        if c.is_whitespace() {
            if c == '\n' || pending != Some('\n') {
                pending = Some(if c == '\n' { '\n' } else { ' ' });
            }
            continue;
        }
        if let Some(sep) = pending.take() {
            if !result.is_empty() {
                result.push(sep);
            }
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_blank_is_placeholder() {
        assert_eq!(format_description(None), NO_DESCRIPTION);
        assert_eq!(format_description(Some("")), NO_DESCRIPTION);
        assert_eq!(format_description(Some("   \n ")), NO_DESCRIPTION);
        assert_eq!(format_description(Some("<br><br>")), NO_DESCRIPTION);
    }

    #[test]
    fn br_becomes_newline() {
        assert_eq!(format_description(Some("Line1<br>Line2")), "Line1\nLine2");
        assert_eq!(format_description(Some("Line1<br />Line2")), "Line1\nLine2");
        assert_eq!(format_description(Some("Line1<BR/>Line2")), "Line1\nLine2");
    }

    #[test]
    fn repeated_breaks_collapse() {
        assert_eq!(format_description(Some("<br>Hi<br><br>there")), "Hi\nthere");
        assert_eq!(
            format_description(Some("Hi<br>\n<br>\n\nthere")),
            "Hi\nthere"
        );
    }

    #[test]
    fn malformed_tags_keep_visible_text() {
        assert_eq!(
            format_description(Some("<b>bold <i>text</b></i>")),
            "bold text"
        );
        assert_eq!(format_description(Some("<i>unclosed")), "unclosed");
        assert_eq!(
            format_description(Some(r#"<a href="https://anilist.co" onclick="x()">link</a>"#)),
            "link"
        );
    }

    #[test]
    fn block_elements_are_separated() {
        assert_eq!(format_description(Some("<p>One</p><p>Two</p>")), "One\nTwo");
        assert_eq!(
            format_description(Some("<div>a</div><ul><li>b</li><li>c</li></ul>")),
            "a\nb\nc"
        );
        assert_eq!(format_description(Some("Intro<p>Body</p>")), "Intro\nBody");
    }

    #[test]
    fn script_content_is_dropped() {
        assert_eq!(
            format_description(Some("safe<script>alert(1)</script> text")),
            "safe text"
        );
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(format_description(Some("a   b")), "a b");
        assert_eq!(format_description(Some("  a \t b  ")), "a b");
        assert_eq!(format_description(Some("a  <br>  b")), "a\nb");
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(
            format_description(Some("Tom &amp; Jerry&#39;s")),
            "Tom & Jerry's"
        );
    }

    #[test]
    fn typical_anilist_description() {
        let raw = "The story follows <i>Frieren</i>, an elf mage.<br>\n<br>\n(Source: Crunchyroll)";
        assert_eq!(
            format_description(Some(raw)),
            "The story follows Frieren, an elf mage.\n(Source: Crunchyroll)"
        );
    }
}
