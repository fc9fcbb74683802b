// SPDX-License-Identifier: Apache-2.0
// Copyright © 2025 ParkSeg Developers. All Rights Reserved.

//! COCO JSON data structures for serde serialization/deserialization.
//!
//! Only the object-detection/segmentation subset used by the converter is
//! modelled. Field declaration order matches the output document contract,
//! so serialization is deterministic and diffs are reproducible.

use serde::{Deserialize, Serialize};

/// Top-level COCO document.
///
/// `info` and `licenses` serialize as empty arrays; the converter never
/// populates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CocoDataset {
    /// Dataset metadata entries (always empty).
    #[serde(default)]
    pub info: Vec<CocoInfo>,
    /// License entries (always empty).
    #[serde(default)]
    pub licenses: Vec<CocoLicense>,
    /// Object categories, ascending id order.
    #[serde(default)]
    pub categories: Vec<CocoCategory>,
    /// Images in processing order.
    pub images: Vec<CocoImage>,
    /// Annotations in emission order.
    #[serde(default)]
    pub annotations: Vec<CocoAnnotation>,
}

/// Dataset metadata entry. Present only for schema completeness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CocoInfo {}

/// License entry. Present only for schema completeness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CocoLicense {
    /// Unique license ID.
    pub id: u32,
    /// License name.
    pub name: String,
}

/// Category definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CocoCategory {
    /// Unique category ID (registry id + 1).
    pub id: u32,
    /// Category name from the label registry.
    pub name: String,
}

/// Image metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CocoImage {
    /// Unique image ID, the zero-based processing index.
    pub id: u64,
    /// Rendered image filename derived from the label filename.
    pub file_name: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

/// Annotation for a single object instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CocoAnnotation {
    /// Unique annotation ID, sequential across the whole document.
    pub id: u64,
    /// ID of the image containing this object.
    pub image_id: u64,
    /// Category ID of this object (registry id + 1).
    pub category_id: u32,
    /// Polygon segmentation: a single flat `[x1,y1,x2,y2,...]` sequence.
    pub segmentation: Vec<Vec<f64>>,
    /// Area of the polygon in pixels².
    pub area: f64,
    /// Bounding box: `[x, y, width, height]` in pixels (top-left corner).
    pub bbox: [f64; 4],
    /// Whether this is a crowd annotation (always 0 here).
    pub iscrowd: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coco_dataset_default() {
        let dataset = CocoDataset::default();
        assert!(dataset.info.is_empty());
        assert!(dataset.licenses.is_empty());
        assert!(dataset.categories.is_empty());
        assert!(dataset.images.is_empty());
        assert!(dataset.annotations.is_empty());
    }

    #[test]
    fn test_empty_sections_serialize_as_arrays() {
        let json = serde_json::to_string(&CocoDataset::default()).unwrap();
        assert!(json.contains("\"info\":[]"));
        assert!(json.contains("\"licenses\":[]"));
    }

    #[test]
    fn test_key_order_matches_contract() {
        let json = serde_json::to_string(&CocoDataset::default()).unwrap();
        let positions: Vec<usize> = ["info", "licenses", "categories", "images", "annotations"]
            .iter()
            .map(|key| json.find(&format!("\"{}\"", key)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_coco_annotation_roundtrip() {
        let ann = CocoAnnotation {
            id: 7,
            image_id: 3,
            category_id: 24,
            segmentation: vec![vec![
                100.0, 200.0, 150.0, 200.0, 150.0, 280.0, 100.0, 280.0,
            ]],
            area: 4000.0,
            bbox: [100.0, 200.0, 50.0, 80.0],
            iscrowd: 0,
        };

        let json = serde_json::to_string(&ann).unwrap();
        let restored: CocoAnnotation = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ann);
    }

    #[test]
    fn test_coco_dataset_roundtrip() {
        let dataset = CocoDataset {
            categories: vec![CocoCategory {
                id: 1,
                name: "Undefined Stuff".to_string(),
            }],
            images: vec![CocoImage {
                id: 0,
                file_name: "scene_0001.png".to_string(),
                width: 4032,
                height: 3040,
            }],
            annotations: vec![CocoAnnotation {
                id: 0,
                image_id: 0,
                category_id: 1,
                segmentation: vec![vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0]],
                area: 0.5,
                bbox: [0.0, 0.0, 1.0, 1.0],
                iscrowd: 0,
            }],
            ..Default::default()
        };

        let json = serde_json::to_string_pretty(&dataset).unwrap();
        let restored: CocoDataset = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, dataset);
    }
}
