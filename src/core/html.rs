// src/core/html.rs
// Small helpers over the `scraper` tree: text extraction, child walking,
// and markup serialization with link rewriting.

use scraper::{node::Node, ElementRef, Selector};
use url::Url;

/// Elements serialized without a closing tag.
const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noreferrer noopener";

/// Compile a selector known at build time.
pub fn sel(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad built-in selector {css:?}: {e}"))
}

/// Concatenated text of all descendants, untouched.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text of `el` with the subtree rooted at `skip` left out.
pub fn text_without(el: ElementRef<'_>, skip: ElementRef<'_>) -> String {
    let skip_id = skip.id();
    el.descendants()
        .filter(|n| n.id() != skip_id && !n.ancestors().any(|a| a.id() == skip_id))
        .filter_map(|n| n.value().as_text().map(|t| &**t))
        .collect()
}

/// Direct element children.
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children().filter_map(ElementRef::wrap)
}

/// Direct element children with the given tag name.
pub fn child_elements_named<'a>(
    el: ElementRef<'a>,
    name: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    child_elements(el).filter(move |c| c.value().name() == name)
}

/// Resolve a relative `href` against `base`. Absolute and unresolvable
/// links are kept verbatim.
pub fn resolve_link(base: &Url, href: &str) -> String {
    if Url::parse(href).is_ok() {
        return s!(href);
    }
    match base.join(href) {
        Ok(abs) => abs.into(),
        Err(e) => {
            logd!("keeping unresolvable link {href:?}: {e}");
            s!(href)
        }
    }
}

/// Serialize `el` back to markup.
///
/// With `links = Some(base)`, every `<a>` gets an absolute `href` (resolved
/// against `base`), opens in a new browsing context and carries
/// `rel="noreferrer noopener"`. Source attribute order is kept; missing
/// `target`/`rel` attributes are appended.
pub fn outer_html(el: ElementRef<'_>, links: Option<&Url>) -> String {
    let mut out = String::new();
    write_element(el, links, &mut out);
    out
}

fn write_element(el: ElementRef<'_>, links: Option<&Url>, out: &mut String) {
    let name = el.value().name();
    out.push('<');
    out.push_str(name);

    match links {
        Some(base) if name == "a" => write_link_attrs(el, base, out),
        _ => {
            for (k, v) in el.value().attrs() {
                write_attr(out, k, v);
            }
        }
    }

    if VOID.contains(&name) {
        out.push_str("/>");
        return;
    }
    out.push('>');

    for child in el.children() {
        match child.value() {
            Node::Text(text) => escape_into(out, text, false),
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    write_element(child_el, links, out);
                }
            }
            _ => {}
        }
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn write_link_attrs(el: ElementRef<'_>, base: &Url, out: &mut String) {
    let mut has_target = false;
    let mut has_rel = false;
    for (k, v) in el.value().attrs() {
        match k {
            "href" => write_attr(out, k, &resolve_link(base, v)),
            "target" => {
                has_target = true;
                write_attr(out, k, LINK_TARGET);
            }
            "rel" => {
                has_rel = true;
                write_attr(out, k, LINK_REL);
            }
            _ => write_attr(out, k, v),
        }
    }
    if !has_target {
        write_attr(out, "target", LINK_TARGET);
    }
    if !has_rel {
        write_attr(out, "rel", LINK_REL);
    }
}

fn write_attr(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    escape_into(out, value, true);
    out.push('"');
}

fn escape_into(out: &mut String, s: &str, in_attr: bool) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first<'a>(doc: &'a Html, css: &'static str) -> ElementRef<'a> {
        doc.select(&sel(css)).next().expect("fixture element")
    }

    #[test]
    fn links_are_absolutized_and_hardened() {
        let doc = Html::parse_document(
            r#"<p>See <a href="ADDPS.html">ADDPS</a> and <a href="https://example.com/x" rel="me">x</a>.</p>"#,
        );
        let base = Url::parse("https://www.felixcloutier.com/x86/").unwrap();
        let html = outer_html(first(&doc, "p"), Some(&base));
        assert_eq!(
            html,
            concat!(
                r#"<p>See <a href="https://www.felixcloutier.com/x86/ADDPS.html" target="_blank" rel="noreferrer noopener">ADDPS</a>"#,
                r#" and <a href="https://example.com/x" rel="noreferrer noopener" target="_blank">x</a>.</p>"#
            )
        );
    }

    #[test]
    fn anchors_without_href_are_still_hardened() {
        let doc = Html::parse_document(r#"<p>Jump <a name="x">here</a> now.</p>"#);
        let base = Url::parse("https://www.felixcloutier.com/x86/").unwrap();
        let html = outer_html(first(&doc, "p"), Some(&base));
        assert_eq!(
            html,
            r#"<p>Jump <a name="x" target="_blank" rel="noreferrer noopener">here</a> now.</p>"#
        );
        assert!(!html.contains("href"));
    }

    #[test]
    fn absolute_links_are_kept_verbatim() {
        let base = Url::parse("https://www.felixcloutier.com/x86/").unwrap();
        assert_eq!(resolve_link(&base, "https://example.com"), "https://example.com");
        assert_eq!(resolve_link(&base, "mailto:someone@example.com"), "mailto:someone@example.com");
        assert_eq!(
            resolve_link(&base, "../x86/ADDPS.html"),
            "https://www.felixcloutier.com/x86/ADDPS.html"
        );
    }

    #[test]
    fn serialization_without_links_keeps_markup() {
        let doc = Html::parse_document(r#"<p class="x">a &amp; b<br>c <a href="y.html">y</a></p>"#);
        let html = outer_html(first(&doc, "p"), None);
        assert_eq!(html, r#"<p class="x">a &amp; b<br/>c <a href="y.html">y</a></p>"#);
    }

    #[test]
    fn text_without_skips_the_subtree() {
        let doc = Html::parse_document("<table><tr><td><p><strong>Opcode</strong></p>0F C7</td></tr></table>");
        let td = first(&doc, "td");
        let strong = first(&doc, "strong");
        assert_eq!(text_without(td, strong), "0F C7");
        assert_eq!(text_of(td), "Opcode0F C7");
    }
}
