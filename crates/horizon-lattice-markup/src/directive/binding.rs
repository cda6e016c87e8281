//! Responsive bindings: media classes attached to elements by selector.

use crate::element::{CONTAINER_TAGS, Element, ElementKind};
use crate::source::{SelectorToken, SourceLine};

/// Which elements a media rule selector names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingTarget {
    /// `#id`, `.class` or a compound of them; all parts must match.
    Selector(SelectorToken),
    /// An element code with a fixed tag, or a literal tag name.
    Tag(String),
    /// `c`: any tag a generic container can be inferred to.
    Container,
}

impl BindingTarget {
    /// Parse a media rule selector.
    pub fn parse(selector: &str) -> Self {
        if let Some(token) = SelectorToken::parse(selector) {
            return Self::Selector(token);
        }
        match ElementKind::parse(selector) {
            Some(ElementKind::Container) => Self::Container,
            Some(kind) => Self::Tag(kind.fixed_tag().unwrap_or_default().to_string()),
            None => Self::Tag(selector.to_ascii_lowercase()),
        }
    }

    /// Whether an element is selected.
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Selector(token) => {
                token
                    .id
                    .as_deref()
                    .is_none_or(|id| element.id.as_deref() == Some(id))
                    && token.classes.iter().all(|class| element.has_class(class))
            }
            Self::Tag(tag) => element.tag == *tag,
            Self::Container => CONTAINER_TAGS.contains(&element.tag.as_str()),
        }
    }
}

/// A media-scoped class to append to every element a selector names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsiveBinding {
    pub target: BindingTarget,
    pub class_name: String,
}

impl ResponsiveBinding {
    /// Create a binding from a rule selector.
    pub fn new(selector: &str, class_name: impl Into<String>) -> Self {
        Self {
            target: BindingTarget::parse(selector),
            class_name: class_name.into(),
        }
    }

    /// Append the class to every matching element in a tree.
    ///
    /// Returns the number of elements that matched.
    pub fn apply(&self, root: &mut Element) -> usize {
        let mut matched = 0;
        root.visit_mut(&mut |element| {
            if self.target.matches(element) {
                element.add_class(self.class_name.as_str());
                matched += 1;
            }
        });
        matched
    }
}

/// A media class from a selector-less rule.
///
/// It belongs to the element written most recently before its directive, in
/// the same scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchoredClass {
    /// Line number of the directive header.
    pub line: usize,
    /// Column of the directive header.
    pub column: usize,
    pub class_name: String,
}

impl AnchoredClass {
    /// Anchor a class at a directive header.
    pub fn new(header: &SourceLine<'_>, class_name: impl Into<String>) -> Self {
        Self {
            line: header.number,
            column: header.column(),
            class_name: class_name.into(),
        }
    }
}
