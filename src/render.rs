//! Text output - lays selected glyphs out into newline-terminated rows.

use crate::glyph::GlyphGrid;
use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the grid as plain text, overwriting `path` if it exists.
///
/// Keeps the original tool's row slicing verbatim: the last grid row is
/// never emitted and every line stops one glyph short of the full width, so
/// a grid of `height` x `width` produces `height - 1` lines of `width - 1`
/// characters. The handle is scoped, so it is released even when a write
/// fails.
pub fn write_grid(grid: &GlyphGrid, path: impl AsRef<Path>) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for row in rows(grid) {
        out.write_all(row.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Row `i` covers flat offsets `[width * (i - 1), width * i - 1)`.
pub fn rows(grid: &GlyphGrid) -> impl Iterator<Item = String> + '_ {
    let width = grid.width() as usize;
    (1..grid.height() as usize)
        .map(move |i| grid.glyphs()[width * (i - 1)..width * i - 1].iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn grid(width: u32, height: u32) -> GlyphGrid {
        let glyphs = (0..width * height)
            .map(|i| char::from_u32(0x4E00 + i).unwrap())
            .collect();
        GlyphGrid::new(width, height, glyphs)
    }

    #[test]
    fn drops_first_row_and_last_column() {
        let rendered: Vec<String> = rows(&grid(5, 3)).collect();
        assert_eq!(rendered.len(), 2);
        for row in &rendered {
            assert_eq!(row.chars().count(), 4);
        }
        // The first two grid rows, each missing its final glyph; the third
        // row is dropped entirely.
        assert_eq!(rendered[0], "一丁丂七");
        assert_eq!(rendered[1], "丅丆万丈");
    }

    #[test]
    fn single_row_grid_renders_nothing() {
        assert_eq!(rows(&grid(5, 1)).count(), 0);
    }

    #[test]
    fn writes_newline_terminated_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_grid(&grid(5, 3), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn overwrites_existing_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale contents that should disappear").unwrap();
        write_grid(&grid(5, 3), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale"));
    }
}
