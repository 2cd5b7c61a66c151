//! Transpose marker-delimited line groups into side-by-side rows.
//!
//! Each `Locale` marker opens a group. The first two groups (bootstrap) lay
//! down one row per line; every later group appends its lines, in order, to
//! the rows already established.
//!
//! # Architecture
//!
//! ```text
//! Input (one group after another)     →  Output (groups side by side)
//! ┌────────────┐                         ┌──────────────────────────┐
//! │ Locale 0 0 │                         │ Locale 0 0,Locale 0 2,,,,│
//! │ a          │                         │ a,b,c,                   │
//! │ Locale 0 1 │  → bootstrap ends here  │ Locale 0 1,,,,           │
//! │ b          │                         └──────────────────────────┘
//! │ Locale 0 2 │  → merges into row 0
//! │ c          │
//! └────────────┘
//! ```

use crate::error::{GraphError, GraphResult};

/// Substring that identifies a group header line.
pub const MARKER: &str = "Locale";

/// Appended after every data field.
pub const FIELD_SEPARATOR: &str = ",";

/// Appended after a marker that closes the bootstrap or merges into row 0.
pub const MARKER_PADDING: &str = ",,,,";

/// Number of markers consumed before rows stop being created.
const BOOTSTRAP_MARKERS: u8 = 2;

/// Returns true if the line opens a new group.
pub fn is_marker(line: &str) -> bool {
    line.contains(MARKER)
}

/// Scan phase of a [`GraphBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Every line creates a new row.
    Bootstrap { markers_left: u8 },
    /// Lines are appended to existing rows.
    Steady,
}

/// Accumulates output rows over a single linear scan of the input.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    rows: Vec<String>,
    cursor: usize,
    phase: Phase,
    line_no: usize,
    markers: usize,
}

impl GraphBuilder {
    /// Empty builder, waiting for the first marker
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            cursor: 0,
            phase: Phase::Bootstrap {
                markers_left: BOOTSTRAP_MARKERS,
            },
            line_no: 0,
            markers: 0,
        }
    }

    /// Feed one already-stripped input line.
    ///
    /// Fails with [`GraphError::RowOutOfRange`] when a steady-state data line
    /// points past the established rows. The builder is left unchanged in
    /// that case apart from the line counter.
    pub fn push_line(&mut self, line: &str) -> GraphResult<()> {
        self.line_no += 1;
        let marker = is_marker(line);
        if marker {
            self.markers += 1;
        }

        match self.phase {
            Phase::Bootstrap { markers_left } => {
                if marker {
                    self.cursor = 0;
                    let markers_left = markers_left - 1;
                    if markers_left == 0 {
                        self.rows.push(format!("{}{}", line, MARKER_PADDING));
                        self.phase = Phase::Steady;
                    } else {
                        self.rows.push(format!("{}{}", line, FIELD_SEPARATOR));
                        self.phase = Phase::Bootstrap { markers_left };
                    }
                } else {
                    self.rows.push(format!("{}{}", line, FIELD_SEPARATOR));
                }
            }
            Phase::Steady => {
                if marker {
                    self.cursor = 0;
                    // rows is never empty here: the closing bootstrap marker pushed one
                    self.rows[0].push_str(line);
                    self.rows[0].push_str(MARKER_PADDING);
                } else {
                    let rows = self.rows.len();
                    let row = self
                        .rows
                        .get_mut(self.cursor)
                        .ok_or(GraphError::RowOutOfRange {
                            line: self.line_no,
                            index: self.cursor,
                            rows,
                        })?;
                    row.push_str(line);
                    row.push_str(FIELD_SEPARATOR);
                }
            }
        }

        self.cursor += 1;
        Ok(())
    }

    /// Current scan phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rows accumulated so far
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.line_no
    }

    /// Marker lines seen so far
    pub fn groups(&self) -> usize {
        self.markers
    }

    /// Consume the builder and return the rows in output order
    pub fn finish(self) -> Vec<String> {
        self.rows
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a whole sequence of stripped lines through a fresh [`GraphBuilder`].
pub fn build_graph<I, S>(lines: I) -> GraphResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GraphBuilder::new();
    for line in lines {
        builder.push_line(line.as_ref())?;
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_markers_without_trailing_group() {
        let rows = build_graph(["Locale,A", "1,x", "2,y", "Locale,B"]).unwrap();
        assert_eq!(rows, vec!["Locale,A,", "1,x,", "2,y,", "Locale,B,,,,"]);
    }

    #[test]
    fn test_steady_state_appends_in_lockstep() {
        let rows = build_graph(["Locale,A", "1,x", "2,y", "Locale,B", "3,z", "4,w"]).unwrap();
        assert_eq!(rows, vec!["Locale,A,", "1,x,3,z,", "2,y,4,w,", "Locale,B,,,,"]);
    }

    #[test]
    fn test_third_marker_merges_into_first_row() {
        let rows = build_graph([
            "Locale 0 0",
            "a",
            "Locale 0 1",
            "b",
            "Locale 0 2",
            "c",
            "d",
        ])
        .unwrap();
        assert_eq!(
            rows,
            vec!["Locale 0 0,Locale 0 2,,,,", "a,b,c,", "Locale 0 1,,,,d,"]
        );
    }

    #[test]
    fn test_single_data_line_between_markers() {
        let rows = build_graph(["Locale,A", "only", "Locale,B"]).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], "only,");
    }

    #[test]
    fn test_n_data_lines_give_n_plus_two_rows() {
        let mut lines = vec!["Locale 0 0, ".to_string()];
        lines.extend((0..25).map(|g| format!("{},{}", g, g * 2)));
        lines.push("Locale 0 1, ".to_string());
        let rows = build_graph(&lines).unwrap();
        assert_eq!(rows.len(), 27);
    }

    #[test]
    fn test_lines_before_first_marker_create_rows() {
        let rows = build_graph(["header", "Locale,A", "1", "Locale,B"]).unwrap();
        assert_eq!(rows, vec!["header,", "Locale,A,", "1,", "Locale,B,,,,"]);
    }

    #[test]
    fn test_no_marker_keeps_bootstrapping() {
        let mut builder = GraphBuilder::new();
        builder.push_line("a").unwrap();
        builder.push_line("b").unwrap();
        assert_eq!(builder.phase(), Phase::Bootstrap { markers_left: 2 });
        assert_eq!(builder.rows(), &["a,", "b,"]);
    }

    #[test]
    fn test_phase_transitions() {
        let mut builder = GraphBuilder::new();
        builder.push_line("Locale 0 0").unwrap();
        assert_eq!(builder.phase(), Phase::Bootstrap { markers_left: 1 });
        builder.push_line("Locale 0 1").unwrap();
        assert_eq!(builder.phase(), Phase::Steady);
        assert_eq!(builder.groups(), 2);
        assert_eq!(builder.lines_read(), 2);
    }

    #[test]
    fn test_marker_is_substring_match() {
        assert!(is_marker("Locale 3 4, "));
        assert!(is_marker("x,Locale,y"));
        assert!(!is_marker("locale 3 4"));
        assert!(!is_marker(""));
    }

    #[test]
    fn test_overlong_group_is_an_error() {
        // Rows: [Locale,A | 1 | Locale,B]; cursor reaches 3 on the third data line
        let result = build_graph(["Locale,A", "1", "Locale,B", "2", "3", "4"]);
        match result {
            Err(GraphError::RowOutOfRange { line, index, rows }) => {
                assert_eq!(line, 6);
                assert_eq!(index, 3);
                assert_eq!(rows, 3);
            }
            other => panic!("expected RowOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_error_leaves_rows_untouched() {
        let mut builder = GraphBuilder::new();
        for line in ["Locale,A", "1", "Locale,B", "2", "3"] {
            builder.push_line(line).unwrap();
        }
        let before = builder.rows().to_vec();
        assert!(builder.push_line("4").is_err());
        assert_eq!(builder.rows(), before.as_slice());
    }

    #[test]
    fn test_empty_input() {
        let rows = build_graph(Vec::<String>::new()).unwrap();
        assert!(rows.is_empty());
    }
}
