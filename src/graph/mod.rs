/// Link target classification.
pub mod target;

/// Graph assembly from a scanned document tree.
pub mod assembler;

pub use assembler::{build_graph, GraphAssembler};
pub use target::{classify, normalize_path, LinkTarget};
