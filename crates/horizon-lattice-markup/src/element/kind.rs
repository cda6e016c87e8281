//! Element codes.

use std::fmt;

use super::{InferenceInput, infer_container_tag};

/// A recognized element code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `p`
    Paragraph,
    /// `h1` through `h6`.
    Heading(u8),
    /// `c`: generic container, tag inferred.
    Container,
    /// `sec`
    Section,
    /// `art`
    Article,
    /// `aside`
    Aside,
    /// `main`
    Main,
    /// `nav`
    Nav,
    /// `head`
    Header,
    /// `foot`
    Footer,
    /// `btn`
    Button,
    /// `ul`
    UnorderedList,
    /// `ol`
    OrderedList,
    /// `li`
    ListItem,
    /// `fig`
    Figure,
    /// `cap`
    FigCaption,
    /// `time`
    Time,
    /// `mark`
    Mark,
    /// `a`
    Link,
}

impl ElementKind {
    /// Look up an element code.
    pub fn parse(code: &str) -> Option<Self> {
        let kind = match code {
            "p" => Self::Paragraph,
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "c" => Self::Container,
            "sec" => Self::Section,
            "art" => Self::Article,
            "aside" => Self::Aside,
            "main" => Self::Main,
            "nav" => Self::Nav,
            "head" => Self::Header,
            "foot" => Self::Footer,
            "btn" => Self::Button,
            "ul" => Self::UnorderedList,
            "ol" => Self::OrderedList,
            "li" => Self::ListItem,
            "fig" => Self::Figure,
            "cap" => Self::FigCaption,
            "time" => Self::Time,
            "mark" => Self::Mark,
            "a" => Self::Link,
            _ => return None,
        };
        Some(kind)
    }

    /// The tag this kind always maps to, or `None` for the container.
    pub fn fixed_tag(self) -> Option<&'static str> {
        let tag = match self {
            Self::Paragraph => "p",
            Self::Heading(1) => "h1",
            Self::Heading(2) => "h2",
            Self::Heading(3) => "h3",
            Self::Heading(4) => "h4",
            Self::Heading(5) => "h5",
            Self::Heading(_) => "h6",
            Self::Container => return None,
            Self::Section => "section",
            Self::Article => "article",
            Self::Aside => "aside",
            Self::Main => "main",
            Self::Nav => "nav",
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Button => "button",
            Self::UnorderedList => "ul",
            Self::OrderedList => "ol",
            Self::ListItem => "li",
            Self::Figure => "figure",
            Self::FigCaption => "figcaption",
            Self::Time => "time",
            Self::Mark => "mark",
            Self::Link => "a",
        };
        Some(tag)
    }

    /// Choose the output tag for an element of this kind.
    pub fn tag(self, input: &InferenceInput<'_>) -> &'static str {
        self.fixed_tag()
            .unwrap_or_else(|| infer_container_tag(input))
    }

    /// Whether the `h` key means the hyperlink target for this kind.
    pub fn is_link(self) -> bool {
        self == Self::Link
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading(level) => write!(f, "h{level}"),
            Self::Container => f.write_str("c"),
            Self::Section => f.write_str("sec"),
            Self::Article => f.write_str("art"),
            Self::Header => f.write_str("head"),
            Self::Footer => f.write_str("foot"),
            Self::Button => f.write_str("btn"),
            Self::Figure => f.write_str("fig"),
            Self::FigCaption => f.write_str("cap"),
            kind => f.write_str(kind.fixed_tag().unwrap_or("c")),
        }
    }
}
