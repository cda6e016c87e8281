//! Mounting compiled documents onto a host.
//!
//! The compiler only builds an in-memory tree. A host that can create
//! elements, set attributes and text, append children and insert stylesheet
//! text implements [`Renderer`]; [`mount`] then replays the compiled tree onto
//! it.

use crate::compiler::CompiledDocument;
use crate::element::Element;
use crate::logging::targets;
use crate::{Error, Result};

/// A host document that compiled output can be materialized into.
pub trait Renderer {
    /// Handle to a node owned by the host.
    type Node;

    /// Find the node with the given id to mount under.
    fn mount_point(&mut self, id: &str) -> Option<Self::Node>;

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Set an attribute on a node.
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Set the text content of a node.
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);

    /// Add stylesheet text to the host document.
    fn insert_stylesheet(&mut self, css: &str);
}

/// Mount a compiled document under the node with id `mount_id`.
///
/// The stylesheet is inserted first, then the root element and its subtree
/// are created and appended. Returns the host node of the root element.
///
/// # Errors
///
/// Returns [`Error::MountPointMissing`] when the host has no node with that
/// id. Nothing is inserted in that case.
pub fn mount<R: Renderer>(
    document: &CompiledDocument,
    renderer: &mut R,
    mount_id: &str,
) -> Result<R::Node> {
    let parent = renderer
        .mount_point(mount_id)
        .ok_or_else(|| Error::mount_point_missing(mount_id))?;

    let css = document.stylesheet_text();
    if !css.is_empty() {
        renderer.insert_stylesheet(&css);
    }

    let root = materialize(&document.root, renderer);
    renderer.append_child(&parent, &root);

    tracing::debug!(
        target: targets::COMPILER,
        "mounted {} element(s) under #{}",
        document.root.subtree_size(),
        mount_id
    );
    Ok(root)
}

fn materialize<R: Renderer>(element: &Element, renderer: &mut R) -> R::Node {
    let node = renderer.create_element(&element.tag);

    if let Some(id) = &element.id {
        renderer.set_attribute(&node, "id", id);
    }
    if !element.classes.is_empty() {
        renderer.set_attribute(&node, "class", &element.classes.join(" "));
    }
    for (name, value) in &element.attributes {
        renderer.set_attribute(&node, name, value);
    }
    if let Some(text) = &element.text {
        renderer.set_text(&node, text);
    }

    for child in &element.children {
        let child_node = materialize(child, renderer);
        renderer.append_child(&node, &child_node);
    }
    node
}
