// SPDX-License-Identifier: Apache-2.0
// Copyright © 2025 ParkSeg Developers. All Rights Reserved.

//! Input label record model and polygon extraction.
//!
//! The annotation tool emits one JSON file per captured image:
//!
//! ```json
//! { "objects": [ { "class_name": "Vehicle", "annotation": [...] }, ... ] }
//! ```
//!
//! The `annotation` value is an arbitrarily nested array structure whose
//! leaves are polygons, each polygon being an array of `{ "x": .., "y": .. }`
//! point records. Nesting depth varies between tool versions, so the model
//! is a sum type classified per node rather than a fixed schema.

use crate::Error;
use serde::Deserialize;
use serde_json::Value;

/// One per-image label file: an ordered list of annotated objects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelRecord {
    /// Annotated objects in authoring order.
    #[serde(default)]
    pub objects: Vec<ObjectRecord>,
}

/// A single annotated object: a class name plus its segmentation tree.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectRecord {
    /// Category name, resolved against the label registry.
    pub class_name: String,
    /// Nested segmentation structure; absent means no polygons.
    #[serde(default)]
    pub annotation: SegNode,
}

/// A 2D point record in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One node of the nested segmentation structure.
///
/// Classification follows the untagged variant order: an object with numeric
/// `x` and `y` fields is a point record, an array is a list (either a
/// polygon or a container), and anything else is an opaque leaf that the
/// extractor ignores.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SegNode {
    /// A point record leaf.
    Point(Point),
    /// A sequence: a polygon when its first element is a point record,
    /// otherwise a container to recurse into.
    List(Vec<SegNode>),
    /// Any other leaf value.
    Other(Value),
}

impl Default for SegNode {
    fn default() -> Self {
        SegNode::List(Vec::new())
    }
}

/// Collect polygon leaves from a segmentation tree.
///
/// Traversal is depth-first, left-to-right, preserving the order in which
/// polygons appear in the document. A node is a polygon iff it is a
/// non-empty list whose first element is a point record; the whole node is
/// taken as the polygon without descending further. Every other list is a
/// container whose elements are traversed in turn.
///
/// A polygon-classified list holding a non-point element violates the input
/// contract and fails the record rather than producing a partial polygon.
pub fn extract_polygons(root: &SegNode) -> Result<Vec<Vec<Point>>, Error> {
    let mut polygons = Vec::new();
    collect_polygons(root, &mut polygons)?;
    Ok(polygons)
}

fn collect_polygons(node: &SegNode, out: &mut Vec<Vec<Point>>) -> Result<(), Error> {
    let SegNode::List(items) = node else {
        return Ok(());
    };
    if let Some(SegNode::Point(_)) = items.first() {
        let points = items
            .iter()
            .map(|item| match item {
                SegNode::Point(point) => Ok(*point),
                _ => Err(Error::MalformedRecord(
                    "polygon contains a non-point entry".to_owned(),
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;
        out.push(points);
    } else {
        for item in items {
            collect_polygons(item, out)?;
        }
    }
    Ok(())
}
