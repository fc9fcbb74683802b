// SPDX-License-Identifier: Apache-2.0
// Copyright © 2025 ParkSeg Developers. All Rights Reserved.

//! Polygon geometry over flat coordinate sequences.
//!
//! A flat coordinate sequence is `[x1, y1, x2, y2, ...]`, strictly
//! alternating starting with x. Both functions reject sequences that cannot
//! be paired into points rather than silently computing garbage.

use crate::Error;
use itertools::Itertools;

/// Polygon area via the shoelace formula.
///
/// Computes `0.5 * |Σ x_i*y_{i-1} − Σ y_i*x_{i-1}|` with the index wrapping
/// cyclically, so the result is non-negative regardless of winding order.
/// Degenerate or self-intersecting polygons are not treated specially.
///
/// # Arguments
/// * `coords` - Flat coordinate sequence `[x1, y1, x2, y2, ...]`
///
/// # Returns
/// The enclosed area in square pixels.
pub fn polygon_area(coords: &[f64]) -> Result<f64, Error> {
    let points = coordinate_pairs(coords)?;
    let mut sum = 0.0;
    for (i, &(x, y)) in points.iter().enumerate() {
        let (prev_x, prev_y) = points[(i + points.len() - 1) % points.len()];
        sum += x * prev_y - y * prev_x;
    }
    Ok(0.5 * sum.abs())
}

/// Axis-aligned bounding box of a polygon.
///
/// # Arguments
/// * `coords` - Flat coordinate sequence `[x1, y1, x2, y2, ...]`
///
/// # Returns
/// `[min_x, min_y, width, height]` with no padding or rounding.
pub fn polygon_bbox(coords: &[f64]) -> Result<[f64; 4], Error> {
    let points = coordinate_pairs(coords)?;
    let (mut min_x, mut min_y) = points[0];
    let (mut max_x, mut max_y) = points[0];
    for &(x, y) in &points[1..] {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    Ok([min_x, min_y, max_x - min_x, max_y - min_y])
}

/// Pair a flat coordinate sequence into (x, y) points.
///
/// Odd-length and empty sequences are rejected.
fn coordinate_pairs(coords: &[f64]) -> Result<Vec<(f64, f64)>, Error> {
    if coords.len() % 2 != 0 {
        return Err(Error::InvalidPolygon(format!(
            "coordinate sequence has odd length {}",
            coords.len()
        )));
    }
    if coords.is_empty() {
        return Err(Error::InvalidPolygon(
            "coordinate sequence is empty".to_owned(),
        ));
    }
    Ok(coords.iter().copied().tuples().collect())
}
