//! Output elements and tag classification.
//!
//! [`ElementKind`] is the closed set of element codes the DSL knows. Most
//! codes map to a fixed tag; the generic container `c` (and any code not in
//! the table) goes through [`infer_container_tag`], an ordered list of
//! keyword rules over the element's classes, id and text.

mod html;
mod infer;
mod kind;
mod node;

pub use html::html_escape;
pub use infer::{
    CONTAINER_TAGS, DEFAULT_CONTAINER_TAG, INFERENCE_RULES, InferenceInput, InferenceRule,
    infer_container_tag,
};
pub use kind::ElementKind;
pub use node::Element;
