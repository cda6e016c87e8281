//! Generated utility classes.
//!
//! A set of declarations is reduced to a canonical string that does not
//! depend on declaration order or priority markers, then hashed into a short
//! class name. The [`ClassRegistry`] makes sure every canonical string maps to
//! exactly one name within a compile, and no name is ever bound to two
//! different strings.

mod canonical;
mod registry;

pub use canonical::{canonicalize, class_hash};
pub use registry::{ClassRegistry, ClassScope, Registration};
