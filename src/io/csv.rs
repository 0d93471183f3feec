//! Whitespace-separated text grids
//!
//! The format is a `width height` header followed by `width * height`
//! `red green blue` triples in column-major order (all rows of column 0, then
//! column 1, ...). Any whitespace separates tokens; the writer puts the header
//! and each pixel on their own lines.

use std::fmt::Display;
use std::fs;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use log::info;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::{Pixel, PixelGrid};

// Pulls tokens while remembering the line of the last one for error messages
struct TokenReader<I> {
    tokens: I,
    line: usize,
}

impl<'a, I> TokenReader<I>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    fn next_value<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let (line, token) = self.tokens.next().ok_or_else(|| AlgorithmError::Parse {
            line: self.line,
            reason: format!("expected {what}, found end of input"),
        })?;
        self.line = line;

        token.parse().map_err(|err| AlgorithmError::Parse {
            line,
            reason: format!("expected {what}, found '{token}' ({err})"),
        })
    }

    fn next_dimension(&mut self, name: &'static str) -> Result<usize> {
        let value: usize = self.next_value(name)?;
        if value > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                name,
                &value,
                &format!("exceeds the maximum of {MAX_GRID_DIMENSION}"),
            ));
        }
        Ok(value)
    }
}

/// Parse a text grid held in memory
///
/// # Errors
///
/// Returns:
/// - `Parse` if a token is missing or not a non-negative integer
/// - `InvalidParameter` if the header exceeds `MAX_GRID_DIMENSION`
/// - `InvalidSourceData` if tokens remain after the last pixel
pub fn parse_grid(text: &str) -> Result<PixelGrid> {
    let tokens = text
        .lines()
        .enumerate()
        .flat_map(|(index, line)| line.split_whitespace().map(move |token| (index + 1, token)));
    let mut reader = TokenReader { tokens, line: 1 };

    let width = reader.next_dimension("width")?;
    let height = reader.next_dimension("height")?;

    let mut columns = Vec::with_capacity(width);
    for _ in 0..width {
        let mut column = Vec::with_capacity(height);
        for _ in 0..height {
            let red = reader.next_value("red channel")?;
            let green = reader.next_value("green channel")?;
            let blue = reader.next_value("blue channel")?;
            column.push(Pixel::new(red, green, blue));
        }
        columns.push(column);
    }

    if let Some((line, token)) = reader.tokens.next() {
        return Err(AlgorithmError::InvalidSourceData {
            reason: format!(
                "unexpected token '{token}' on line {line} after {width}x{height} pixels"
            ),
        });
    }

    PixelGrid::from_columns(columns)
}

/// Read and parse a text grid from any reader
///
/// # Errors
///
/// Returns `FileSystem` if the reader fails or is not UTF-8, otherwise the
/// errors of [`parse_grid`]
pub fn read_grid<R: Read>(mut reader: R) -> Result<PixelGrid> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_grid(&text)
}

/// Load a text grid from `path`
///
/// # Errors
///
/// Returns `FileSystem` naming `path` if it can't be read, otherwise the
/// errors of [`parse_grid`]
pub fn load_grid(path: &Path) -> Result<PixelGrid> {
    let text = fs::read_to_string(path).map_err(|e| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation: "read grid",
        source: e,
    })?;
    let grid = parse_grid(&text)?;
    info!(
        "loaded {}x{} grid from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}

/// Write `grid` in text form
///
/// # Errors
///
/// Returns `FileSystem` if the writer fails
pub fn write_grid<W: Write>(grid: &PixelGrid, mut writer: W) -> Result<()> {
    writeln!(writer, "{} {}", grid.width(), grid.height())?;
    for (_, _, pixel) in grid.pixels() {
        writeln!(writer, "{} {} {}", pixel.red, pixel.green, pixel.blue)?;
    }
    writer.flush()?;
    Ok(())
}

/// Save `grid` as a text grid at `path`, creating parent directories
///
/// # Errors
///
/// Returns `FileSystem` naming the directory or file that couldn't be written
pub fn save_grid(grid: &PixelGrid, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = fs::File::create(path).map_err(|e| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation: "create grid file",
        source: e,
    })?;

    write_grid(grid, BufWriter::new(file)).map_err(|e| match e {
        AlgorithmError::FileSystem { source, .. } => AlgorithmError::FileSystem {
            path: path.to_path_buf(),
            operation: "write grid",
            source,
        },
        other => other,
    })?;

    info!(
        "wrote {}x{} grid to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(())
}
