//! # graphparse - lay simulator locale logs side by side
//!
//! The metapopulation simulator writes every locale's log one after another
//! into `output.csv`, each block opened by a `Locale x y` line. This crate
//! transposes those blocks into `graph.csv` so each locale becomes a column
//! group that a spreadsheet can chart directly.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ output.csv  │────▶│   Source    │────▶│ GraphBuilder │────▶│  graph.csv  │
//! │ (any enc.)  │     │ (auto-enc)  │     │ (transpose)  │     │   (UTF-8)   │
//! └─────────────┘     └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`source`] - Input decoding and line splitting
//! - [`graph`] - Grouping/transposition and the file pipeline
//! - [`logs`] - Progress logging

pub mod error;
pub mod graph;
pub mod logs;
pub mod source;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{GraphError, GraphResult, SourceError, SourceResult};

pub use graph::{
    build_graph,
    is_marker,
    parse_graph,
    parse_graph_in,
    write_rows,
    GraphBuilder,
    GraphSummary,
    Phase,
    FIELD_SEPARATOR,
    INPUT_FILE,
    MARKER,
    MARKER_PADDING,
    OUTPUT_FILE,
};

pub use source::{read_source, SourceText};
