//! Quantization error report: per-parameter MSE and a chart of it.

use std::path::Path;

use plotters::prelude::*;

use crate::error::{ConvertError, Result};
use crate::matrices::Matrix;

/// Mean squared error of a quantize → dequantize round trip.
pub fn quantization_mse(matrix: &Matrix<f64>) -> f64 {
    if matrix.is_empty() {
        return 0.0;
    }
    let back = matrix.quantize_q15().dequantize();
    matrix
        .data
        .iter()
        .zip(&back.data)
        .map(|(&a, &b)| (a - b).powi(2))
        .sum::<f64>()
        / matrix.len() as f64
}

/// Plot per-parameter MSE to a PNG.
pub fn plot_mse(entries: &[(String, f64)], output: &Path) -> Result<()> {
    let plot_err = |e: &dyn std::fmt::Display| ConvertError::Plot(e.to_string());

    let root = BitMapBackend::new(output, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| plot_err(&e))?;

    let x_max = entries.len().max(1) as f64 - 0.5;
    let y_max = entries.iter().map(|(_, y)| *y).fold(0.0, f64::max).max(1e-12) * 1.1; // Add 10% padding

    let mut chart = ChartBuilder::on(&root)
        .caption("Q1.15 Quantization MSE per Parameter", ("sans-serif", 40).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(75)
        .build_cartesian_2d(-0.5f64..x_max, 0f64..y_max)
        .map_err(|e| plot_err(&e))?;

    chart
        .configure_mesh()
        .x_desc("Parameter")
        .y_desc("Mean Squared Error (MSE)")
        .x_labels(entries.len())
        .x_label_formatter(&|x| {
            entries
                .get(x.round() as usize)
                .map(|(name, _)| name.clone())
                .unwrap_or_default()
        })
        .light_line_style(&WHITE.mix(0.8))
        .draw()
        .map_err(|e| plot_err(&e))?;

    chart
        .draw_series(LineSeries::new(
            entries
                .iter()
                .enumerate()
                .map(|(i, (_, y))| (i as f64, *y)),
            &RED,
        ))
        .map_err(|e| plot_err(&e))?
        .label("MSE")
        .legend(|(x, y)| PathElement::new(vec![(x - 5, y), (x + 5, y)], &RED));

    chart
        .draw_series(
            entries
                .iter()
                .enumerate()
                .map(|(i, (_, y))| Circle::new((i as f64, *y), 3, RED.filled())),
        )
        .map_err(|e| plot_err(&e))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| plot_err(&e))?;

    root.present().map_err(|e| plot_err(&e))?;

    Ok(())
}
