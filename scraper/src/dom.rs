//! Markup tree abstraction
//!
//! The extractor only needs a handful of queries over a parsed page, so they
//! are expressed as traits here. `HtmlTree` implements them on top of the
//! `scraper` crate; another parser can be dropped in by implementing
//! `MarkupTree` and `MarkupNode`.

use scraper::{ElementRef, Html};

/// What an element is matched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Element carries this CSS class.
    Class(&'static str),
    /// Element has this tag name.
    Tag(&'static str),
    /// Element carries this attribute, whatever its value.
    Attribute(&'static str),
}

/// A single element in a parsed document.
pub trait MarkupNode: Sized {
    fn tag_name(&self) -> &str;

    fn attr(&self, name: &str) -> Option<&str>;

    /// Concatenated text of this element and all of its descendants.
    fn text_content(&self) -> String;

    fn matches(&self, marker: Marker) -> bool;

    /// First descendant (excluding self) matching `marker`, in document order.
    fn find_first(&self, marker: Marker) -> Option<Self>;

    /// All descendants (excluding self) matching `marker`, in document order.
    fn find_all(&self, marker: Marker) -> Vec<Self>;

    /// Whether any ancestor of this element matches `marker`.
    fn has_ancestor(&self, marker: Marker) -> bool;
}

/// A parsed document.
pub trait MarkupTree {
    type Node<'a>: MarkupNode
    where
        Self: 'a;

    fn root(&self) -> Self::Node<'_>;
}

/// HTML document parsed with the `scraper` crate.
pub struct HtmlTree {
    document: Html,
}

impl HtmlTree {
    /// Parses raw response bytes. Invalid UTF-8 is replaced rather than rejected.
    pub fn parse(markup: &[u8]) -> Self {
        let html = String::from_utf8_lossy(markup);
        Self {
            document: Html::parse_document(&html),
        }
    }
}

impl MarkupTree for HtmlTree {
    type Node<'a> = ElementRef<'a>;

    fn root(&self) -> ElementRef<'_> {
        self.document.root_element()
    }
}

impl<'a> MarkupNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn matches(&self, marker: Marker) -> bool {
        let element = self.value();
        match marker {
            Marker::Class(class) => element.classes().any(|c| c == class),
            Marker::Tag(tag) => element.name().eq_ignore_ascii_case(tag),
            Marker::Attribute(name) => element.attr(name).is_some(),
        }
    }

    fn find_first(&self, marker: Marker) -> Option<Self> {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|el| el.matches(marker))
    }

    fn find_all(&self, marker: Marker) -> Vec<Self> {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| el.matches(marker))
            .collect()
    }

    fn has_ancestor(&self, marker: Marker) -> bool {
        self.ancestors()
            .filter_map(ElementRef::wrap)
            .any(|el| el.matches(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(html: &str) -> HtmlTree {
        HtmlTree::parse(html.as_bytes())
    }

    #[test]
    fn test_find_all_in_document_order() {
        let doc = tree(concat!(
            r#"<div><p class="x">1</p>"#,
            r#"<span><p class="x">2</p></span><p class="x">3</p>"#,
        ));
        let texts: Vec<String> = doc
            .root()
            .find_all(Marker::Class("x"))
            .iter()
            .map(MarkupNode::text_content)
            .collect();
        assert_eq!(texts, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_find_first_excludes_self() {
        let doc = tree(r#"<div class="outer"><div class="outer inner">child</div></div>"#);
        let outer = doc.root().find_first(Marker::Class("outer")).unwrap();
        let inner = outer.find_first(Marker::Class("outer")).unwrap();
        assert!(inner.matches(Marker::Class("inner")));
        assert!(inner.find_first(Marker::Class("outer")).is_none());
    }

    #[test]
    fn test_class_marker_matches_any_tag() {
        let doc = tree(r#"<div class="card">a</div><a class="card" href="/x">b</a>"#);
        let tags: Vec<String> = doc
            .root()
            .find_all(Marker::Class("card"))
            .iter()
            .map(|el| el.tag_name().to_string())
            .collect();
        assert_eq!(tags, vec!["div", "a"]);
    }

    #[test]
    fn test_attribute_marker_and_lookup() {
        let doc = tree(r#"<h2><a data-jk="k1">t</a></h2>"#);
        let anchor = doc.root().find_first(Marker::Attribute("data-jk")).unwrap();
        assert_eq!(anchor.attr("data-jk"), Some("k1"));
        assert_eq!(anchor.attr("href"), None);
    }

    #[test]
    fn test_text_concatenates_descendants() {
        let doc = tree(r#"<div class="m"><span>$40k</span>-<b>$50k</b></div>"#);
        let meta = doc.root().find_first(Marker::Class("m")).unwrap();
        assert_eq!(meta.text_content(), "$40k-$50k");
    }

    #[test]
    fn test_has_ancestor() {
        let doc = tree(r#"<div class="card"><div class="card" id="nested"></div></div>"#);
        let cards = doc.root().find_all(Marker::Class("card"));
        assert_eq!(cards.len(), 2);
        assert!(!cards[0].has_ancestor(Marker::Class("card")));
        assert!(cards[1].has_ancestor(Marker::Class("card")));
    }

    #[test]
    fn test_parse_tolerates_invalid_utf8() {
        let doc = HtmlTree::parse(b"<p class=\"x\">caf\xe9</p>");
        let p = doc.root().find_first(Marker::Class("x")).unwrap();
        assert!(p.text_content().starts_with("caf"));
    }
}
