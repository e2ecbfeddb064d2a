//! Rating histograms: binning and PNG rendering.
//!
//! Bins are equal-width between the lowest and highest rating. When every
//! rating is the same the range is widened by 0.5 on both sides. The last bin
//! includes its right edge, so the maximum rating is always counted.
//!
//! PNG output goes through `plotters` with only the bitmap backend compiled
//! in, so the image carries bars and axes but no text.

use crate::error::{MoviesError, Result};
use log::debug;
use plotters::prelude::*;
use std::path::Path;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bins: Vec<Bin>,
}

impl Histogram {
    /// Returns `None` when there is nothing to count or `bin_count` is zero.
    pub fn from_ratings(ratings: &[f64], bin_count: usize) -> Option<Self> {
        let finite: Vec<f64> = ratings.iter().copied().filter(|r| r.is_finite()).collect();
        if finite.is_empty() || bin_count == 0 {
            return None;
        }

        let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bin_count as f64;
        let mut bins: Vec<Bin> = (0..bin_count)
            .map(|i| Bin {
                start: lo + width * i as f64,
                end: if i + 1 == bin_count {
                    hi
                } else {
                    lo + width * (i + 1) as f64
                },
                count: 0,
            })
            .collect();

        for rating in finite {
            let idx = (((rating - lo) / width) as usize).min(bin_count - 1);
            bins[idx].count += 1;
        }

        Some(Self { bins })
    }

    pub fn range(&self) -> (f64, f64) {
        match (self.bins.first(), self.bins.last()) {
            (Some(first), Some(last)) => (first.start, last.end),
            _ => (0.0, 1.0),
        }
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

fn chart_error<E: std::error::Error>(err: E) -> MoviesError {
    MoviesError::Chart(err.to_string())
}

/// Draws the histogram as a bar chart and writes it to `path`.
pub fn save_png(histogram: &Histogram, path: &Path) -> Result<()> {
    let (lo, hi) = histogram.range();
    let top = histogram.max_count() as u32 + 1;

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(30)
        .build_cartesian_2d(lo..hi, 0u32..top)
        .map_err(chart_error)?;

    chart
        .draw_series(histogram.bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.start, 0u32), (bin.end, bin.count as u32)],
                BAR_COLOR.filled(),
            )
        }))
        .map_err(chart_error)?;

    chart
        .draw_series(histogram.bins.iter().filter(|b| b.count > 0).map(|bin| {
            Rectangle::new(
                [(bin.start, 0u32), (bin.end, bin.count as u32)],
                BLACK.stroke_width(1),
            )
        }))
        .map_err(chart_error)?;

    chart
        .draw_series([
            PathElement::new(vec![(lo, 0u32), (hi, 0u32)], BLACK),
            PathElement::new(vec![(lo, 0u32), (lo, top)], BLACK),
        ])
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    debug!("histogram written to {}", path.display());
    Ok(())
}
