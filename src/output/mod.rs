/// Formatters that turn a built graph into text for consumers.
mod formatter;

pub use formatter::{format_graph, format_graph_as_dot, format_graph_as_json, format_stats_as_text};
