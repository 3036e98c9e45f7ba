//! Streaming serialization of graph elements to the Graphviz DOT language.
//!
//! Elements are written as they arrive, so arbitrarily large passes can be
//! rendered without buffering. The output is always a `digraph`; undirected
//! edges are drawn with `dir="none"`.

use std::io::{self, Write};

use crate::element::{Edge, Label, Vertex};

/// Writes vertices and edges to `W` as a DOT `digraph`.
///
/// # Examples
/// ```
/// use randgraph_core::{Edge, Vertex, dot::DotWriter};
///
/// let mut dot = DotWriter::begin(Vec::new())?;
/// dot.vertex(&Vertex::new(0).with_label("a \"quoted\" name"))?;
/// dot.vertex(&Vertex::new(1))?;
/// dot.edge(&Edge::new(0, 0, 1, true))?;
/// let bytes = dot.finish()?;
/// assert_eq!(
///     String::from_utf8(bytes).expect("dot output is utf-8"),
///     "digraph {\n  0 [label=\"a \\\"quoted\\\" name\"]\n  1 [label=\"\"]\n  0 -> 1 [dir=\"forward\"] [label=\"\"]\n}\n",
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct DotWriter<W: Write> {
    writer: W,
}

impl<W: Write> DotWriter<W> {
    /// Writes the opening `digraph {` line.
    ///
    /// # Errors
    /// Returns any [`io::Error`] raised by `writer`.
    pub fn begin(mut writer: W) -> io::Result<Self> {
        writeln!(writer, "digraph {{")?;
        Ok(Self { writer })
    }

    /// Writes one vertex statement.
    ///
    /// # Errors
    /// Returns any [`io::Error`] raised by the underlying writer.
    pub fn vertex(&mut self, vertex: &Vertex) -> io::Result<()> {
        writeln!(
            self.writer,
            "  {} [label=\"{}\"]",
            vertex.id(),
            escape_label(vertex.label())
        )
    }

    /// Writes one edge statement.
    ///
    /// # Errors
    /// Returns any [`io::Error`] raised by the underlying writer.
    pub fn edge(&mut self, edge: &Edge) -> io::Result<()> {
        let dir = if edge.directed() { "forward" } else { "none" };
        writeln!(
            self.writer,
            "  {} -> {} [dir=\"{dir}\"] [label=\"{}\"]",
            edge.v0(),
            edge.v1(),
            escape_label(edge.label())
        )
    }

    /// Writes the closing brace, flushes and returns the writer.
    ///
    /// # Errors
    /// Returns any [`io::Error`] raised while writing or flushing.
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.writer, "}}")?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Escapes a label for use inside a double-quoted DOT string. Absent labels
/// render as the empty string.
///
/// Control characters use the C-style short escapes where one exists
/// (`\n`, `\a`, ...), then `\xNN` for ASCII and `\uNNNN` beyond it.
#[must_use]
pub fn escape_label(label: Option<&Label>) -> String {
    let Some(label) = label else {
        return String::new();
    };
    let text = label.as_str();
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{7}' => escaped.push_str("\\a"),
            '\u{8}' => escaped.push_str("\\b"),
            '\u{b}' => escaped.push_str("\\v"),
            '\u{c}' => escaped.push_str("\\f"),
            ch if ch.is_ascii_control() => {
                escaped.push_str(&format!("\\x{:02x}", u32::from(ch)));
            }
            ch if ch.is_control() => {
                escaped.push_str(&format!("\\u{:04x}", u32::from(ch)));
            }
            ch => escaped.push(ch),
        }
    }
    escaped
}
