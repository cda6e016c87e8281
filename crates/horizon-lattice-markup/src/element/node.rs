//! The output element tree.

use serde::{Serialize, Serializer};

use super::html_escape;

/// A compiled element.
///
/// Each element exclusively owns its children; the tree has no parent links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Output tag name.
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Class names in first-added order, without duplicates.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Attributes other than `id` and `class`, in first-set order.
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_attributes"
    )]
    pub attributes: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

fn serialize_attributes<S: Serializer>(
    attributes: &[(String, String)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(attributes.iter().map(|(k, v)| (k, v)))
}

impl Element {
    /// Create an element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the id, builder style.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class unless already present.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !class.is_empty() && !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    /// Whether the element carries a class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Set an attribute. A repeated name replaces the earlier value in place.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Get an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Append a child.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Whether the element carries nothing: no text, no children and no
    /// id, class or attribute.
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.children.is_empty()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attributes.is_empty()
    }

    /// Visit this element and every descendant, parents first.
    pub fn visit_mut(&mut self, visitor: &mut impl FnMut(&mut Element)) {
        visitor(self);
        for child in &mut self.children {
            child.visit_mut(visitor);
        }
    }

    /// Number of elements in this subtree, including this one.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(Element::subtree_size).sum::<usize>()
    }

    /// Serialize this subtree as HTML.
    pub fn to_html(&self) -> String {
        let mut output = String::new();
        self.write_html(&mut output);
        output
    }

    fn write_html(&self, output: &mut String) {
        output.push('<');
        output.push_str(&self.tag);

        if let Some(id) = &self.id {
            push_attribute(output, "id", id);
        }
        if !self.classes.is_empty() {
            push_attribute(output, "class", &self.classes.join(" "));
        }
        for (name, value) in &self.attributes {
            push_attribute(output, name, value);
        }
        output.push('>');

        if let Some(text) = &self.text {
            output.push_str(&html_escape(text));
        }
        for child in &self.children {
            child.write_html(output);
        }

        output.push_str("</");
        output.push_str(&self.tag);
        output.push('>');
    }
}

fn push_attribute(output: &mut String, name: &str, value: &str) {
    output.push(' ');
    output.push_str(name);
    output.push_str("=\"");
    output.push_str(&html_escape(value));
    output.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_deduplicated() {
        let mut el = Element::new("div");
        el.add_class("card");
        el.add_class("n-behmg9");
        el.add_class("card");
        assert_eq!(el.classes, vec!["card", "n-behmg9"]);
    }

    #[test]
    fn attributes_replace_in_place() {
        let mut el = Element::new("a");
        el.set_attribute("href", "/a");
        el.set_attribute("role", "link");
        el.set_attribute("href", "/b");
        assert_eq!(
            el.attributes,
            vec![
                ("href".to_string(), "/b".to_string()),
                ("role".to_string(), "link".to_string()),
            ]
        );
        assert_eq!(el.attribute("href"), Some("/b"));
    }

    #[test]
    fn emptiness() {
        let mut el = Element::new("div");
        assert!(el.is_empty());
        el.add_class("x");
        assert!(!el.is_empty());
        assert!(!Element::new("p").with_id("a").is_empty());
    }

    #[test]
    fn html_output() {
        let mut root = Element::new("div").with_id("app");
        let mut p = Element::new("p");
        p.add_class("lead");
        p.set_attribute("title", "say \"hi\"");
        p.set_text("a < b");
        root.push_child(p);

        assert_eq!(
            root.to_html(),
            r#"<div id="app"><p class="lead" title="say &quot;hi&quot;">a &lt; b</p></div>"#
        );
        assert_eq!(root.subtree_size(), 2);
    }

    #[test]
    fn json_shape() {
        let mut el = Element::new("a");
        el.set_attribute("href", "/home");
        el.set_text("Home");

        let json = serde_json::to_value(&el).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"tag": "a", "attributes": {"href": "/home"}, "text": "Home"})
        );
    }

    #[test]
    fn visit_reaches_descendants() {
        let mut root = Element::new("div");
        let mut child = Element::new("section");
        child.push_child(Element::new("p"));
        root.push_child(child);

        let mut tags = Vec::new();
        root.visit_mut(&mut |el| tags.push(el.tag.clone()));
        assert_eq!(tags, vec!["div", "section", "p"]);
    }
}
