//! End-to-end run: `output.csv` in, `graph.csv` out.
//!
//! # Example
//!
//! ```rust,ignore
//! use graphparse::parse_graph;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = parse_graph()?;
//!     println!("Wrote {} rows", summary.rows);
//!     Ok(())
//! }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::builder::{GraphBuilder, Phase};
use crate::error::{GraphError, GraphResult};
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::source::{open_source, read_source};

/// Input file name, relative to the working directory
pub const INPUT_FILE: &str = "output.csv";

/// Output file name, relative to the working directory
pub const OUTPUT_FILE: &str = "graph.csv";

/// What a run consumed and produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSummary {
    /// Input lines processed
    pub lines_read: usize,
    /// Marker lines seen
    pub groups: usize,
    /// Rows written to the output
    pub rows: usize,
    /// Detected input encoding
    pub encoding: String,
}

/// Reformat `output.csv` into `graph.csv` in the current directory.
pub fn parse_graph() -> GraphResult<GraphSummary> {
    parse_graph_in(Path::new("."))
}

/// Reformat `<dir>/output.csv` into `<dir>/graph.csv`.
///
/// Both files stay open until the run ends. The output is truncated before the
/// input is read, so a failed run leaves `graph.csv` empty or partial.
pub fn parse_graph_in(dir: &Path) -> GraphResult<GraphSummary> {
    let input_path = dir.join(INPUT_FILE);
    let output_path = dir.join(OUTPUT_FILE);

    let input = open_source(&input_path)?;
    let output = File::create(&output_path).map_err(|e| GraphError::io(&output_path, e))?;

    log_info(format!("Reading {}", input_path.display()));
    let source = read_source(&input, &input_path)?;
    log_info_indent(format!("Encoding: {}", source.encoding), 1);
    log_info_indent(format!("Lines: {}", source.lines.len()), 1);

    let mut builder = GraphBuilder::new();
    for line in &source.lines {
        builder.push_line(line)?;
    }
    let lines_read = builder.lines_read();
    let groups = builder.groups();
    if builder.phase() != Phase::Steady {
        log_warning(format!(
            "Only {} marker line(s) found; every line became its own row",
            groups
        ));
    }
    let rows = builder.finish();

    write_rows(output, &rows).map_err(|e| GraphError::io(&output_path, e))?;

    let summary = GraphSummary {
        lines_read,
        groups,
        rows: rows.len(),
        encoding: source.encoding,
    };
    log_success(format!(
        "Wrote {} rows from {} groups to {}",
        summary.rows,
        summary.groups,
        output_path.display()
    ));

    Ok(summary)
}

/// Write each row followed by `'\n'`.
pub fn write_rows<W: Write>(writer: W, rows: &[String]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for row in rows {
        writer.write_all(row.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
