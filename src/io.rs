//! Text, hex, and JSON file plumbing around the quantizer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::matrices::Matrix;
use crate::q15;

/// Parse whitespace-delimited floats from a text file.
///
/// Unparsable tokens are skipped with a warning; the rest of the file is
/// still converted.
pub fn parse_tokens(path: &Path) -> Result<Vec<f64>> {
    if !path.exists() {
        return Err(ConvertError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;

    let mut values = Vec::new();
    for token in text.split_whitespace() {
        match token.parse::<f64>() {
            Ok(v) => values.push(v),
            Err(_) => {
                tracing::warn!(file = %path.display(), token, "skipping unparsable token");
            }
        }
    }
    Ok(values)
}

/// One 4-digit hex word per line.
pub fn write_hex_lines(path: &Path, hex: &[String]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for word in hex {
        writeln!(writer, "{word}")?;
    }
    Ok(())
}

/// Fixed-precision decimal text, 8 places, one matrix row per line.
pub fn write_decimal(path: &Path, matrix: &Matrix<f64>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    if matrix.cols == 0 {
        return Ok(());
    }
    for row in matrix.data.chunks(matrix.cols) {
        let line = row
            .iter()
            .map(|v| format!("{v:.8}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Convert one decimal parameter file to Q1.15 hex, returning the value count.
pub fn convert_file(input: &Path, output: &Path) -> Result<usize> {
    let values = parse_tokens(input)?;
    let hex = q15::quantize_sequence(&values);
    write_hex_lines(output, &hex)?;
    Ok(values.len())
}
