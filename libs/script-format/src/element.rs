//! Path-tracking view over a parsed XML element
//!
//! Every accessor knows where it is in the document so failures can name the
//! offending element (`Message/Body/NewRx/Patient/...`). Matching is by local
//! name; namespaces are ignored.

use chrono::{DateTime, FixedOffset, NaiveDate};
use roxmltree::Node;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::trace;

use crate::error::{DecodeError, Result};
use crate::temporal;

/// Types that can be read from one XML element.
pub(crate) trait FromElement: Sized {
    /// Child element names this type understands; anything else is skipped.
    const CHILDREN: &'static [&'static str];

    fn from_element(el: &Element<'_, '_>) -> Result<Self>;
}

#[derive(Clone, Debug)]
pub(crate) struct Element<'a, 'input> {
    node: Node<'a, 'input>,
    path: String,
}

impl<'a, 'input> Element<'a, 'input> {
    pub fn root(node: Node<'a, 'input>) -> Self {
        let path = node.tag_name().name().to_string();
        Self { node, path }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &'a str {
        self.node.tag_name().name()
    }

    fn child_path(&self, name: &str) -> String {
        format!("{}/{}", self.path, name)
    }

    /// All element children, whatever their name.
    pub fn element_children(&self) -> Vec<Element<'a, 'input>> {
        self.node
            .children()
            .filter(|n| n.is_element())
            .map(|node| Element {
                path: self.child_path(node.tag_name().name()),
                node,
            })
            .collect()
    }

    fn named(&self, name: &str) -> Vec<Node<'a, 'input>> {
        self.node
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == name)
            .collect()
    }

    /// A single-valued child. Present more than once is a structural error.
    pub fn child(&self, name: &'a str) -> Result<Option<Element<'a, 'input>>> {
        let mut matches = self.named(name).into_iter();
        let Some(node) = matches.next() else {
            return Ok(None);
        };
        if matches.next().is_some() {
            return Err(DecodeError::structure(
                self.child_path(name),
                "element may appear only once",
            ));
        }
        Ok(Some(Element {
            node,
            path: self.child_path(name),
        }))
    }

    pub fn required(&self, name: &'a str) -> Result<Element<'a, 'input>> {
        self.child(name)?.ok_or_else(|| {
            DecodeError::structure(self.child_path(name), "missing required element")
        })
    }

    /// Repeated children, addressed as `Name[0]`, `Name[1]`, ...
    pub fn children(&self, name: &'a str) -> Vec<Element<'a, 'input>> {
        self.named(name)
            .into_iter()
            .enumerate()
            .map(|(idx, node)| Element {
                node,
                path: format!("{}/{}[{}]", self.path, name, idx),
            })
            .collect()
    }

    /// Character data of this element, exactly as sent.
    pub fn text(&self) -> String {
        self.node
            .children()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.node
            .attributes()
            .find(|attr| attr.name() == name)
            .map(|attr| attr.value().to_string())
    }

    /// Decode this element as `T`, skipping children `T` does not model.
    pub fn decode<T: FromElement>(&self) -> Result<T> {
        for node in self.node.children().filter(|n| n.is_element()) {
            let name = node.tag_name().name();
            if !T::CHILDREN.iter().any(|known| *known == name) {
                trace!(path = %self.path, element = name, "ignoring unmodeled element");
            }
        }
        T::from_element(self)
    }

    pub fn opt<T: FromElement>(&self, name: &'a str) -> Result<Option<T>> {
        self.child(name)?.map(|el| el.decode()).transpose()
    }

    pub fn req<T: FromElement>(&self, name: &'a str) -> Result<T> {
        self.required(name)?.decode()
    }

    pub fn list<T: FromElement>(&self, name: &'a str) -> Result<Vec<T>> {
        self.children(name).iter().map(|el| el.decode()).collect()
    }

    pub fn opt_text(&self, name: &'a str) -> Result<Option<String>> {
        Ok(self.child(name)?.map(|el| el.text()))
    }

    pub fn req_text(&self, name: &'a str) -> Result<String> {
        Ok(self.required(name)?.text())
    }

    pub fn decimal(&self) -> Result<Decimal> {
        let text = self.text();
        Decimal::from_str(text.trim()).map_err(|_| {
            DecodeError::structure(&self.path, format!("{text:?} is not a decimal number"))
        })
    }

    pub fn count(&self) -> Result<u32> {
        let text = self.text();
        text.trim().parse().map_err(|_| {
            DecodeError::structure(&self.path, format!("{text:?} is not a whole number"))
        })
    }

    /// Boolean flag: `true`/`false`, `1`/`0` or `Y`/`N`.
    pub fn flag(&self) -> Result<bool> {
        let text = self.text();
        match text.trim() {
            t if t.eq_ignore_ascii_case("true") || t == "1" || t.eq_ignore_ascii_case("y") => {
                Ok(true)
            }
            t if t.eq_ignore_ascii_case("false") || t == "0" || t.eq_ignore_ascii_case("n") => {
                Ok(false)
            }
            _ => Err(DecodeError::structure(
                &self.path,
                format!("{text:?} is not a boolean flag"),
            )),
        }
    }

    pub fn date(&self) -> Result<NaiveDate> {
        temporal::parse_date(&self.text()).map_err(|e| DecodeError::temporal(&self.path, e))
    }

    pub fn timestamp(&self) -> Result<DateTime<FixedOffset>> {
        temporal::parse_timestamp(&self.text()).map_err(|e| DecodeError::temporal(&self.path, e))
    }

    pub fn opt_decimal(&self, name: &'a str) -> Result<Option<Decimal>> {
        self.child(name)?.map(|el| el.decimal()).transpose()
    }

    pub fn req_decimal(&self, name: &'a str) -> Result<Decimal> {
        self.required(name)?.decimal()
    }

    pub fn opt_count(&self, name: &'a str) -> Result<Option<u32>> {
        self.child(name)?.map(|el| el.count()).transpose()
    }

    pub fn opt_flag(&self, name: &'a str) -> Result<Option<bool>> {
        self.child(name)?.map(|el| el.flag()).transpose()
    }

    pub fn req_flag(&self, name: &'a str) -> Result<bool> {
        self.required(name)?.flag()
    }

    pub fn opt_timestamp(&self, name: &'a str) -> Result<Option<DateTime<FixedOffset>>> {
        self.child(name)?.map(|el| el.timestamp()).transpose()
    }

    pub fn req_timestamp(&self, name: &'a str) -> Result<DateTime<FixedOffset>> {
        self.required(name)?.timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn paths_follow_the_tree() {
        let doc = Document::parse("<Message><Header><To>a</To></Header></Message>").unwrap();
        let root = Element::root(doc.root_element());
        let header = root.required("Header").unwrap();
        let to = header.required("To").unwrap();
        assert_eq!(to.path(), "Message/Header/To");
        assert_eq!(to.text(), "a");
    }

    #[test]
    fn duplicated_single_child_is_rejected() {
        let doc = Document::parse("<Message><Header/><Header/></Message>").unwrap();
        let root = Element::root(doc.root_element());
        let err = root.child("Header").unwrap_err();
        assert_eq!(err.path(), Some("Message/Header"));
    }

    #[test]
    fn missing_required_child_names_the_path() {
        let doc = Document::parse("<Message/>").unwrap();
        let root = Element::root(doc.root_element());
        assert_eq!(
            root.required("Header").unwrap_err(),
            DecodeError::MalformedStructure {
                path: "Message/Header".to_string(),
                reason: "missing required element".to_string(),
            }
        );
    }

    #[test]
    fn repeated_children_are_indexed() {
        let doc = Document::parse("<O><M>1</M><X/><M>2</M></O>").unwrap();
        let root = Element::root(doc.root_element());
        let items = root.children("M");
        let paths: Vec<_> = items.iter().map(|el| el.path().to_string()).collect();
        assert_eq!(paths, ["O/M[0]", "O/M[1]"]);
        assert_eq!(items[1].count().unwrap(), 2);
    }

    #[test]
    fn namespaces_are_ignored() {
        let xml = r#"<s:Message xmlns:s="http://www.ncpdp.org/schema/SCRIPT"><s:To Qualifier="P">x</s:To></s:Message>"#;
        let doc = Document::parse(xml).unwrap();
        let root = Element::root(doc.root_element());
        assert_eq!(root.name(), "Message");
        let to = root.required("To").unwrap();
        assert_eq!(to.attribute("Qualifier").as_deref(), Some("P"));
    }

    #[test]
    fn scalar_parsers_report_bad_text() {
        let doc =
            Document::parse("<R><Q>2.50</Q><N>x</N><F>Y</F><G>maybe</G><D>2024-13-01</D></R>")
                .unwrap();
        let root = Element::root(doc.root_element());
        assert_eq!(root.req_decimal("Q").unwrap().to_string(), "2.50");
        assert!(matches!(
            root.opt_count("N"),
            Err(DecodeError::MalformedStructure { .. })
        ));
        assert_eq!(root.opt_flag("F").unwrap(), Some(true));
        assert!(root.req_flag("G").is_err());
        assert_eq!(
            root.required("D").unwrap().date(),
            Err(DecodeError::MalformedDate {
                path: "R/D".to_string(),
                value: "2024-13-01".to_string(),
            })
        );
    }

    #[test]
    fn empty_element_is_present_and_empty() {
        let doc = Document::parse("<R><Note/></R>").unwrap();
        let root = Element::root(doc.root_element());
        assert_eq!(root.opt_text("Note").unwrap(), Some(String::new()));
        assert_eq!(root.opt_text("Other").unwrap(), None);
    }
}
