//! Per-element declaration groups.

use super::{Declaration, StyleCategory, join_declarations, merge_declarations};

/// Declarations of one category for one element or rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleGroup {
    pub category: StyleCategory,
    pub declarations: Vec<Declaration>,
}

impl StyleGroup {
    /// The group's declaration string, in insertion order.
    pub fn css(&self) -> String {
        join_declarations(&self.declarations)
    }
}

/// Style groups in first-seen category order.
///
/// Each group becomes one generated class, so related properties set by
/// separate tokens (`dir=col align=c`) share a class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleGroups {
    groups: Vec<StyleGroup>,
}

impl StyleGroups {
    /// Create an empty set of groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add declarations under a category.
    ///
    /// A declaration for a property the group already holds replaces the
    /// earlier one in place.
    pub fn insert(&mut self, category: StyleCategory, declarations: Vec<Declaration>) {
        if declarations.is_empty() {
            return;
        }

        let index = match self.groups.iter().position(|g| g.category == category) {
            Some(index) => index,
            None => {
                self.groups.push(StyleGroup {
                    category,
                    declarations: Vec::new(),
                });
                self.groups.len() - 1
            }
        };

        merge_declarations(&mut self.groups[index].declarations, declarations);
    }

    /// Whether no declarations were added.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Iterate over the groups.
    pub fn iter(&self) -> impl Iterator<Item = &StyleGroup> {
        self.groups.iter()
    }
}

impl IntoIterator for StyleGroups {
    type Item = StyleGroup;
    type IntoIter = std::vec::IntoIter<StyleGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
