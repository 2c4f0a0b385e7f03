//! PNG chart rendering for the training and verification reports.
//!
//! Hand-rolled on top of `image::RgbImage`: white canvas, gray grid, simple
//! polylines and square scatter markers. Canvas sizes correspond to the
//! usual 10×6 / 12×7 inch figures at 150 DPI. The images are visual
//! artifacts only; nothing downstream consumes them.

use std::path::Path;

use image::{ImageResult, Rgb, RgbImage};

use crate::dataset::Dataset;
use crate::verify::compare::PointCheck;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const GRID: Rgb<u8> = Rgb([210, 210, 210]);
const AXIS: Rgb<u8> = Rgb([120, 120, 120]);
const BLUE: Rgb<u8> = Rgb([40, 90, 200]);
const SKY: Rgb<u8> = Rgb([135, 206, 235]);
const ORANGE: Rgb<u8> = Rgb([255, 160, 40]);
const RED: Rgb<u8> = Rgb([210, 50, 50]);

const MARGIN: u32 = 60;

/// A data-space drawing surface mapped onto a pixel canvas.
struct Chart {
    img: RgbImage,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Chart {
    fn new(width: u32, height: u32, x_range: (f64, f64), y_range: (f64, f64)) -> Chart {
        let mut img = RgbImage::from_pixel(width, height, WHITE);

        // Frame and a 10×8 grid inside the margins.
        for i in 0..=10u32 {
            let x = MARGIN + (width - 2 * MARGIN) * i / 10;
            for y in MARGIN..=(height - MARGIN) {
                img.put_pixel(x, y, if i == 0 { AXIS } else { GRID });
            }
        }
        for j in 0..=8u32 {
            let y = MARGIN + (height - 2 * MARGIN) * j / 8;
            for x in MARGIN..=(width - MARGIN) {
                img.put_pixel(x, y, if j == 8 { AXIS } else { GRID });
            }
        }

        Chart {
            img,
            x_min: x_range.0,
            x_max: x_range.1,
            y_min: y_range.0,
            y_max: y_range.1,
        }
    }

    fn to_px(&self, x: f64, y: f64) -> (f64, f64) {
        let w = (self.img.width() - 2 * MARGIN) as f64;
        let h = (self.img.height() - 2 * MARGIN) as f64;
        let px = MARGIN as f64 + (x - self.x_min) / (self.x_max - self.x_min) * w;
        // Pixel y grows downward.
        let py = MARGIN as f64 + (1.0 - (y - self.y_min) / (self.y_max - self.y_min)) * h;
        (px, py)
    }

    fn put(&mut self, px: i64, py: i64, color: Rgb<u8>) {
        if px >= 0 && py >= 0 && (px as u32) < self.img.width() && (py as u32) < self.img.height() {
            self.img.put_pixel(px as u32, py as u32, color);
        }
    }

    /// Draws a segment by stepping one pixel at a time along its longer axis.
    fn segment(&mut self, a: (f64, f64), b: (f64, f64), color: Rgb<u8>, thickness: i64) {
        let steps = (b.0 - a.0).abs().max((b.1 - a.1).abs()).ceil() as usize + 1;
        for s in 0..=steps {
            let t = s as f64 / steps as f64;
            let px = (a.0 + (b.0 - a.0) * t).round() as i64;
            let py = (a.1 + (b.1 - a.1) * t).round() as i64;
            for dx in -thickness..=thickness {
                for dy in -thickness..=thickness {
                    self.put(px + dx, py + dy, color);
                }
            }
        }
    }

    fn polyline(&mut self, xs: &[f64], ys: &[f64], color: Rgb<u8>) {
        for window in xs.iter().zip(ys.iter()).collect::<Vec<_>>().windows(2) {
            let a = self.to_px(*window[0].0, *window[0].1);
            let b = self.to_px(*window[1].0, *window[1].1);
            self.segment(a, b, color, 0);
        }
    }

    fn scatter(&mut self, xs: &[f64], ys: &[f64], color: Rgb<u8>, radius: i64) {
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            let (px, py) = self.to_px(x, y);
            let (px, py) = (px.round() as i64, py.round() as i64);
            for dx in -radius..=radius {
                for dy in -radius..=radius {
                    self.put(px + dx, py + dy, color);
                }
            }
        }
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        self.img.save(path)
    }
}

/// Pads a value range so curves do not hug the chart frame.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }
    let pad = ((hi - lo) * 0.1).max(1e-6);
    (lo - pad, hi + pad)
}

/// Training loss per epoch on a log10 y-axis. 1500×900 (10×6 in at 150 DPI).
pub fn save_loss_curve<P: AsRef<Path>>(losses: &[f64], path: P) -> ImageResult<()> {
    let log_losses: Vec<f64> = losses.iter().map(|l| l.max(1e-12).log10()).collect();
    let xs: Vec<f64> = (0..log_losses.len()).map(|i| i as f64).collect();

    let y_range = padded_range(log_losses.iter().copied());
    let mut chart = Chart::new(1500, 900, (0.0, xs.len().max(2) as f64 - 1.0), y_range);
    chart.polyline(&xs, &log_losses, BLUE);
    chart.save(path)
}

/// Dataset scatter plus prediction and truth curves. 1800×1050 (12×7 in).
pub fn save_fit_plot<P: AsRef<Path>>(
    dataset: &Dataset,
    curve_x: &[f64],
    predicted: &[f64],
    truth: &[f64],
    path: P,
) -> ImageResult<()> {
    let x_range = padded_range(curve_x.iter().copied());
    let y_range = padded_range(
        dataset
            .y_train
            .iter()
            .chain(dataset.y_test.iter())
            .chain(predicted.iter())
            .chain(truth.iter())
            .copied(),
    );

    let mut chart = Chart::new(1800, 1050, x_range, y_range);
    chart.polyline(curve_x, truth, BLUE);
    chart.polyline(curve_x, predicted, RED);
    chart.scatter(&dataset.x_train, &dataset.y_train, SKY, 4);
    chart.scatter(&dataset.x_test, &dataset.y_test, ORANGE, 4);
    chart.save(path)
}

/// Reference curve with the verified RTL samples overlaid. 1800×900 (12×6 in).
pub fn save_verification_plot<P: AsRef<Path>>(
    curve_x: &[f64],
    curve_y: &[f64],
    points: &[PointCheck],
    path: P,
) -> ImageResult<()> {
    let x_range = padded_range(curve_x.iter().copied());
    let y_range = padded_range(
        curve_y
            .iter()
            .copied()
            .chain(points.iter().map(|p| p.y_rtl))
            .chain(points.iter().map(|p| p.y_ref)),
    );

    let mut chart = Chart::new(1800, 900, x_range, y_range);
    chart.polyline(curve_x, curve_y, BLUE);

    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let y_ref: Vec<f64> = points.iter().map(|p| p.y_ref).collect();
    let y_rtl: Vec<f64> = points.iter().map(|p| p.y_rtl).collect();
    chart.scatter(&xs, &y_ref, SKY, 5);
    chart.scatter(&xs, &y_rtl, RED, 3);
    chart.save(path)
}
