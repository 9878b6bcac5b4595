use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::LineSeries;
use plotters::prelude::*;
use crate::sim::error::VitalsError;
use crate::sim::snapshot::VitalSample;
#[derive(Clone, Debug)]
pub struct TrendStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub line: RGBColor,
}
impl Default for TrendStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 400,
            background: RGBColor(10, 10, 15),
            line: CYAN,
        }
    }
}
/// Render one metric's history to an in-memory PNG for chart export.
pub fn render_trend_png(samples: &[VitalSample], style: TrendStyle) -> Result<Vec<u8>, VitalsError> {
    if samples.is_empty() {
        return Err(VitalsError::Plot("history is empty".into()));
    }
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let (mut y_min, mut y_max) = (f64::MAX, f64::MIN);
        for sample in samples {
            y_min = y_min.min(sample.value);
            y_max = y_max.max(sample.value);
        }
        let y_bounds = if (y_max - y_min).abs() < f64::EPSILON {
            (y_min - 1.0, y_max + 1.0)
        } else {
            let pad = (y_max - y_min) * 0.1;
            (y_min - pad, y_max + pad)
        };
        let x_start = samples[0].time;
        let x_end = samples[samples.len() - 1].time;
        let x_bounds = if (x_end - x_start).abs() < f64::EPSILON {
            (x_start - 1.0, x_end + 1.0)
        } else {
            (x_start, x_end)
        };
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_2d(x_bounds.0..x_bounds.1, y_bounds.0..y_bounds.1)?;
        chart
            .configure_mesh()
            .light_line_style(&WHITE.mix(0.1))
            .draw()?;
        chart.draw_series(LineSeries::new(
            samples.iter().map(|s| (s.time, s.value)),
            &style.line,
        ))?;
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, VitalsError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| VitalsError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
