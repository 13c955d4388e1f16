//! Terminal rendering of conversion summaries.

use std::io::{self, Write};

use block_quant::ConversionSummary;

/// Write a human-readable conversion report.
///
/// Covers the same ground as the on-screen conversion panel the tool
/// replaces: original and quantized dimensions, block counts, the
/// compression ratio, and the usage table sorted by count with per-color
/// percentages.
pub fn write_summary<W: Write>(out: &mut W, summary: &ConversionSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Original:    {} x {} px ({} pixels)",
        summary.width, summary.height, summary.pixel_count
    )?;
    writeln!(
        out,
        "Grid:        {} x {} blocks ({} to paint)",
        summary.grid_width, summary.grid_height, summary.block_count
    )?;

    if summary.pixel_count > 0 && summary.block_count > 0 {
        let ratio = summary.pixel_count as f64 / summary.block_count as f64;
        let saved = (1.0 - summary.block_count as f64 / summary.pixel_count as f64) * 100.0;
        writeln!(out, "Compression: {:.1}% ({:.1}:1 reduction)", saved, ratio)?;
    }

    writeln!(out)?;
    writeln!(out, "Colors used ({}):", summary.distinct_colors())?;

    let name_width = summary
        .usage
        .iter()
        .map(|entry| entry.swatch.name.len())
        .max()
        .unwrap_or(0);

    for entry in &summary.usage {
        let percent = if summary.block_count > 0 {
            entry.count as f64 / summary.block_count as f64 * 100.0
        } else {
            0.0
        };
        writeln!(
            out,
            "  {:<name_width$}  {}  {:>8} blocks  {:>5.1}%",
            entry.swatch.name, entry.swatch.rgb, entry.count, percent
        )?;
    }

    Ok(())
}
