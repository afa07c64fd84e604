//! Plain-text edge-list input.
//!
//! The first meaningful line holds the vertex count and every following
//! meaningful line holds one edge as `tail head weight`. Blank lines and lines
//! starting with `#` are skipped. Line numbers in errors are 1-based.

use std::io::{self, BufRead};

use spanwise_core::{VertexId, Weight};
use thiserror::Error;

/// One edge read from the input, tagged with its source line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EdgeLine {
    /// Line the edge was read from.
    pub line: usize,
    /// First endpoint.
    pub tail: VertexId,
    /// Second endpoint.
    pub head: VertexId,
    /// Edge weight.
    pub weight: Weight,
}

/// A parsed edge list. Endpoints are not range-checked here; the graph does
/// that when the edges are inserted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EdgeList {
    header_line: usize,
    vertex_count: usize,
    edges: Vec<EdgeLine>,
}

/// Why a line was rejected.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Malformed {
    /// The input ended before a vertex count was found.
    #[error("missing vertex count")]
    MissingVertexCount,
    /// The header line held more than one field.
    #[error("expected a single vertex count, found {found} fields")]
    HeaderFields {
        /// Number of whitespace-separated fields on the line.
        found: usize,
    },
    /// An edge line did not hold exactly three fields.
    #[error("expected `tail head weight`, found {found} fields")]
    EdgeFields {
        /// Number of whitespace-separated fields on the line.
        found: usize,
    },
    /// A field was not a valid integer of the expected kind.
    #[error("`{token}` is not a valid {expected}")]
    BadNumber {
        /// The offending field.
        token: String,
        /// What the field should have been.
        expected: &'static str,
    },
}

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// The underlying reader failed.
    #[error("failed to read edge list: {0}")]
    Read(#[from] io::Error),
    /// A line could not be parsed.
    #[error("line {line}: {reason}")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: Malformed,
    },
}

impl EdgeList {
    /// Parses an edge list from `reader`.
    ///
    /// A missing header is reported against the line after the last one
    /// read.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Read`] on I/O failure and
    /// [`EdgeListError::Malformed`] for the first line that does not parse.
    ///
    /// # Examples
    /// ```
    /// use spanwise_cli::cli::EdgeList;
    ///
    /// let list = EdgeList::parse("# triangle\n3\n1 2 1\n2 3 2\n1 3 4\n".as_bytes())?;
    /// assert_eq!(list.vertex_count(), 3);
    /// assert_eq!(list.edges().len(), 3);
    /// assert_eq!(list.edges()[0].line, 3);
    /// # Ok::<(), spanwise_cli::cli::EdgeListError>(())
    /// ```
    pub fn parse(reader: impl BufRead) -> Result<Self, EdgeListError> {
        let mut header = None;
        let mut edges = Vec::new();
        let mut last_line = 0;

        for (index, text) in reader.lines().enumerate() {
            let line = index + 1;
            last_line = line;
            let text = text?;
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            let malformed = |reason| EdgeListError::Malformed { line, reason };

            if header.is_none() {
                let [count] = fields.as_slice() else {
                    return Err(malformed(Malformed::HeaderFields {
                        found: fields.len(),
                    }));
                };
                header = Some((line, number(count, "vertex count").map_err(malformed)?));
                continue;
            }

            let [tail, head, weight] = fields.as_slice() else {
                return Err(malformed(Malformed::EdgeFields {
                    found: fields.len(),
                }));
            };
            edges.push(EdgeLine {
                line,
                tail: number(tail, "vertex id").map_err(malformed)?,
                head: number(head, "vertex id").map_err(malformed)?,
                weight: number(weight, "weight").map_err(malformed)?,
            });
        }

        let (header_line, vertex_count) = header.ok_or(EdgeListError::Malformed {
            line: last_line + 1,
            reason: Malformed::MissingVertexCount,
        })?;
        Ok(Self {
            header_line,
            vertex_count,
            edges,
        })
    }

    /// Returns the line the vertex count was read from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn header_line(&self) -> usize { self.header_line }

    /// Returns the declared vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edges in input order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> &[EdgeLine] { self.edges.as_slice() }
}

fn number<T: std::str::FromStr>(token: &str, expected: &'static str) -> Result<T, Malformed> {
    token.parse().map_err(|_| Malformed::BadNumber {
        token: token.to_owned(),
        expected,
    })
}
