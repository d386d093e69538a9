//! Column-aligned text output.
//!
//! Renderers hand each row to a [`RowSink`] as a list of cells. [`TabWriter`]
//! buffers rows as tab-separated lines and, on flush, pads every
//! tab-terminated cell to its column's widest entry.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

/// Destination for rendered rows.
pub trait RowSink {
    /// Append one row.
    fn write_row(&mut self, cells: &[&str]) -> io::Result<()>;
}

/// Collects rows as owned cells, mostly for inspection in tests.
impl RowSink for Vec<Vec<String>> {
    fn write_row(&mut self, cells: &[&str]) -> io::Result<()> {
        self.push(cells.iter().map(|cell| cell.to_string()).collect());
        Ok(())
    }
}

/// Aligns tab-separated columns with spaces.
///
/// Text written through [`Write`] is treated the same as rows: `\t` ends a
/// cell and `\n` ends a line. The last cell of a line is never padded.
#[derive(Debug)]
pub struct TabWriter<W: Write> {
    inner: W,
    padding: usize,
    buf: Vec<u8>,
}

impl<W: Write> TabWriter<W> {
    /// Create a writer with a two-space column gap.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            padding: 2,
            buf: Vec::new(),
        }
    }

    /// Set the minimum gap between columns.
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Flush and return the wrapped writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.inner)
    }

    fn align(&self) -> String {
        let text = String::from_utf8_lossy(&self.buf);
        let lines: Vec<Vec<&str>> = text
            .split_inclusive('\n')
            .map(|line| line.strip_suffix('\n').unwrap_or(line).split('\t').collect())
            .collect();

        let mut widths: Vec<usize> = Vec::new();
        for cells in &lines {
            let terminated = cells.len().saturating_sub(1);
            for (col, cell) in cells[..terminated].iter().enumerate() {
                if col == widths.len() {
                    widths.push(0);
                }
                widths[col] = widths[col].max(cell.width());
            }
        }

        let mut out = String::with_capacity(text.len());
        for (line_no, cells) in lines.iter().enumerate() {
            let Some((last, terminated)) = cells.split_last() else {
                continue;
            };
            for (col, cell) in terminated.iter().enumerate() {
                out.push_str(cell);
                let fill = widths[col] - cell.width() + self.padding;
                out.extend(std::iter::repeat_n(' ', fill));
            }
            out.push_str(last);
            if line_no + 1 < lines.len() || text.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }
}

impl<W: Write> Write for TabWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let aligned = self.align();
            self.buf.clear();
            self.inner.write_all(aligned.as_bytes())?;
        }
        self.inner.flush()
    }
}

impl<W: Write> RowSink for TabWriter<W> {
    fn write_row(&mut self, cells: &[&str]) -> io::Result<()> {
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                self.buf.push(b'\t');
            }
            self.buf.extend_from_slice(cell.as_bytes());
        }
        self.buf.push(b'\n');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligned(rows: &[&[&str]]) -> String {
        let mut writer = TabWriter::new(Vec::new());
        for row in rows {
            writer.write_row(row).unwrap();
        }
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_columns_padded_to_widest_cell() {
        let out = aligned(&[&["KIND", "NAME"], &["Deployment", "web"], &["Pod", "web-0"]]);
        assert_eq!(out, "KIND        NAME\nDeployment  web\nPod         web-0\n");
    }

    #[test]
    fn test_last_cell_not_padded() {
        let out = aligned(&[&["a", "long last cell"], &["bbb", ""]]);
        assert_eq!(out, "a    long last cell\nbbb  \n");
    }

    #[test]
    fn test_width_counts_box_drawing_glyphs_once() {
        let out = aligned(&[&["├─Pod/a", "x"], &["Deployment/b", "y"]]);
        assert_eq!(out, "├─Pod/a       x\nDeployment/b  y\n");
    }

    #[test]
    fn test_custom_padding() {
        let mut writer = TabWriter::new(Vec::new()).padding(1);
        writer.write_row(&["a", "b"]).unwrap();
        writer.write_row(&["ccc", "d"]).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(out, "a   b\nccc d\n");
    }

    #[test]
    fn test_raw_writes_are_aligned() {
        let mut writer = TabWriter::new(Vec::new());
        write!(writer, "x\ty\nlonger\tz").unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(out, "x       y\nlonger  z");
    }

    #[test]
    fn test_vec_sink_collects_cells() {
        let mut rows: Vec<Vec<String>> = Vec::new();
        rows.write_row(&["a", "b"]).unwrap();
        assert_eq!(rows, vec![vec!["a".to_string(), "b".to_string()]]);
    }
}
