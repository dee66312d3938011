// src/graph/dot.rs
// =============================================================================
// This module writes the discovered link graph in DOT format.
//
// The output is a plain digraph, one edge per line:
//
//   digraph {
//   	"https://.../wiki/Chat" -> "https://.../wiki/Chien";
//   	"https://.../wiki/Chat" -> "https://.../wiki/Souris";
//   }
//
// The writer performs no deduplication: if a page links to the same target
// three times, three edge lines are written. The multigraph is the intended
// output; tools like `dot` render it fine and the duplicate count is itself
// information about the page.
//
// Rust concepts:
// - Generics: GraphWriter<W: Write> works with files, buffers, or Vec<u8>
//   (which the tests use to inspect the output)
// - writeln!: Formatted writing to any io::Write sink
// =============================================================================

use std::io::{self, Write};

// Streams the crawl's edges to a DOT file.
pub struct GraphWriter<W: Write> {
    out: W,
}

impl<W: Write> GraphWriter<W> {
    /// Wraps a sink. Nothing is written until open() is called.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    // Writes the opening frame. Called once, before any edges.
    pub fn open(&mut self) -> io::Result<()> {
        writeln!(self.out, "digraph {{")
    }

    // Writes one directed edge line.
    pub fn edge(&mut self, source: &str, target: &str) -> io::Result<()> {
        writeln!(self.out, "\t\"{}\" -> \"{}\";", source, target)
    }

    // Writes the closing frame and flushes the sink. Called once, at the
    // end of the crawl.
    pub fn close(&mut self) -> io::Result<()> {
        write!(self.out, "}}")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph_is_still_framed() {
        let mut out = Vec::new();
        let mut writer = GraphWriter::new(&mut out);
        writer.open().unwrap();
        writer.close().unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "digraph {\n}");
    }

    #[test]
    fn test_edges_are_quoted_and_ordered() {
        let mut out = Vec::new();
        let mut writer = GraphWriter::new(&mut out);
        writer.open().unwrap();
        writer.edge("A", "B").unwrap();
        writer.edge("A", "C").unwrap();
        writer.close().unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "digraph {\n\t\"A\" -> \"B\";\n\t\"A\" -> \"C\";\n}"
        );
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let mut out = Vec::new();
        let mut writer = GraphWriter::new(&mut out);
        writer.open().unwrap();
        writer.edge("A", "B").unwrap();
        writer.edge("A", "B").unwrap();
        writer.close().unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\"A\" -> \"B\";").count(), 2);
    }
}
