//! Semantic tag inference for generic containers.
//!
//! Rules are checked in [`INFERENCE_RULES`] order and the first match wins.
//! Class and id checks are substring checks, so `.site-footer` counts as a
//! footer. Text checks are case-insensitive.
//!
//! | # | Condition                                                  | Tag       |
//! |---|------------------------------------------------------------|-----------|
//! | 1 | class contains `banner`/`header`, or id contains `header`  | `header`  |
//! | 2 | class or id contains `footer`                              | `footer`  |
//! | 3 | class or id contains `nav`                                 | `nav`     |
//! | 4 | class contains `aside`/`sidebar`                           | `aside`   |
//! | 5 | text mentions `copyright` or `©`                           | `footer`  |
//! | 6 | text mentions `menu` or `navigation`                       | `nav`     |
//! | 7 | has children, class contains `card`/`article`              | `article` |
//! | 8 | has children, class or id contains `section`               | `section` |
//! | 9 | has children, no `wrapper`/`container` class               | `section` |
//! |   | otherwise                                                  | `div`     |

/// What inference may look at.
#[derive(Debug, Clone, Copy)]
pub struct InferenceInput<'a> {
    pub classes: &'a [String],
    pub id: Option<&'a str>,
    pub text: Option<&'a str>,
    pub has_children: bool,
}

impl InferenceInput<'_> {
    fn class_contains(&self, needle: &str) -> bool {
        self.classes.iter().any(|class| class.contains(needle))
    }

    fn id_contains(&self, needle: &str) -> bool {
        self.id.is_some_and(|id| id.contains(needle))
    }

    fn text_mentions(&self, needle: &str) -> bool {
        self.text
            .is_some_and(|text| text.to_lowercase().contains(needle))
    }
}

/// One inference rule.
#[derive(Debug, Clone, Copy)]
pub struct InferenceRule {
    pub tag: &'static str,
    pub matches: fn(&InferenceInput<'_>) -> bool,
}

/// Inference rules in priority order.
pub const INFERENCE_RULES: [InferenceRule; 9] = [
    InferenceRule {
        tag: "header",
        matches: |i| i.class_contains("banner") || i.class_contains("header") || i.id_contains("header"),
    },
    InferenceRule {
        tag: "footer",
        matches: |i| i.class_contains("footer") || i.id_contains("footer"),
    },
    InferenceRule {
        tag: "nav",
        matches: |i| i.class_contains("nav") || i.id_contains("nav"),
    },
    InferenceRule {
        tag: "aside",
        matches: |i| i.class_contains("aside") || i.class_contains("sidebar"),
    },
    InferenceRule {
        tag: "footer",
        matches: |i| i.text_mentions("copyright") || i.text_mentions("©"),
    },
    InferenceRule {
        tag: "nav",
        matches: |i| i.text_mentions("menu") || i.text_mentions("navigation"),
    },
    InferenceRule {
        tag: "article",
        matches: |i| i.has_children && (i.class_contains("card") || i.class_contains("article")),
    },
    InferenceRule {
        tag: "section",
        matches: |i| i.has_children && (i.class_contains("section") || i.id_contains("section")),
    },
    InferenceRule {
        tag: "section",
        matches: |i| {
            i.has_children && !i.class_contains("wrapper") && !i.class_contains("container")
        },
    },
];

/// Tag used when no rule matches.
pub const DEFAULT_CONTAINER_TAG: &str = "div";

/// Every tag a generic container can end up with.
pub const CONTAINER_TAGS: [&str; 7] = [
    "header",
    "footer",
    "nav",
    "aside",
    "article",
    "section",
    DEFAULT_CONTAINER_TAG,
];

/// Choose a tag for a generic container.
pub fn infer_container_tag(input: &InferenceInput<'_>) -> &'static str {
    INFERENCE_RULES
        .iter()
        .find(|rule| (rule.matches)(input))
        .map_or(DEFAULT_CONTAINER_TAG, |rule| rule.tag)
}
