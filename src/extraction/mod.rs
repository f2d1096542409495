/// Link extraction from raw document text.
///
/// Recognizes inline links (`[text](target)`) and wiki links (`[[target]]`)
/// in a single regex pass. No other markdown structure is interpreted.
mod links;

pub use links::{extract_links, LinkRef, Links};
