/// Label resolution module.
///
/// Maps human-readable references onto stable node identities, merging
/// references that share a label and upgrading placeholders in place once
/// their real target is known.
mod resolver;

pub use resolver::{transition, NodeResolver, NodeTransition};
