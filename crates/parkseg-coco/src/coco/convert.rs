// SPDX-License-Identifier: Apache-2.0
// Copyright © 2025 ParkSeg Developers. All Rights Reserved.

//! Label-record to COCO conversion.
//!
//! [`record_to_coco`] assembles one image's worth of COCO entries from a
//! parsed label record. [`CocoDocumentBuilder`] accumulates those entries
//! across a split's label directory, owning the id counters for the split.
//! [`convert_split`] is the single-split pipeline used by the CLI driver.
//!
//! Id assignment follows the dataset contract: image ids are the zero-based
//! processing order, annotation ids are sequential across the whole
//! document starting at 0, and category ids carry the 1-based COCO offset.

use super::{
    types::{CocoAnnotation, CocoCategory, CocoDataset, CocoImage},
    writer::CocoWriter,
};
use crate::{
    Error, geometry, labels,
    record::{LabelRecord, extract_polygons},
};
use log::warn;
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

/// Capture width shared by every image in the dataset.
pub const IMAGE_WIDTH: u32 = 4032;

/// Capture height shared by every image in the dataset.
pub const IMAGE_HEIGHT: u32 = 3040;

/// COCO category table derived from the label registry.
///
/// Ascending id order with the 1-based COCO offset applied.
pub fn categories() -> Vec<CocoCategory> {
    labels::LABEL_NAMES
        .iter()
        .enumerate()
        .map(|(id, name)| CocoCategory {
            id: id as u32 + 1,
            name: (*name).to_string(),
        })
        .collect()
}

/// Rendered image filename for a label file: extension substituted to
/// `.png`. The image itself is not required to exist on disk.
fn image_file_name(label_file_name: &str) -> String {
    Path::new(label_file_name)
        .with_extension("png")
        .to_string_lossy()
        .into_owned()
}

/// Assemble COCO entries for one label record.
///
/// Produces exactly one image entry regardless of how many annotations the
/// record yields. Objects with an unknown class name are skipped with a
/// warning; polygons with fewer than 3 points are skipped silently. Neither
/// consumes an annotation id.
///
/// # Arguments
/// * `record` - Parsed label record for one image
/// * `label_file_name` - Label filename, used for the image entry and
///   diagnostics
/// * `image_id` - Id of the image entry (count of images processed so far)
/// * `next_annotation_id` - Shared counter, advanced once per emitted
///   annotation
pub fn record_to_coco(
    record: &LabelRecord,
    label_file_name: &str,
    image_id: u64,
    next_annotation_id: &mut u64,
) -> Result<(CocoImage, Vec<CocoAnnotation>), Error> {
    let image = CocoImage {
        id: image_id,
        file_name: image_file_name(label_file_name),
        width: IMAGE_WIDTH,
        height: IMAGE_HEIGHT,
    };

    let mut annotations = Vec::new();
    for object in &record.objects {
        let Some(label_id) = labels::label_id(&object.class_name) else {
            warn!(
                "unknown class_name '{}' in {}, skipping object",
                object.class_name, label_file_name
            );
            continue;
        };

        for polygon in extract_polygons(&object.annotation)? {
            let coords: Vec<f64> = polygon.iter().flat_map(|point| [point.x, point.y]).collect();
            if coords.len() < 6 {
                continue;
            }

            let area = geometry::polygon_area(&coords)?;
            let bbox = geometry::polygon_bbox(&coords)?;

            let id = *next_annotation_id;
            *next_annotation_id += 1;

            annotations.push(CocoAnnotation {
                id,
                image_id,
                category_id: label_id + 1,
                segmentation: vec![coords],
                area,
                bbox,
                iscrowd: 0,
            });
        }
    }

    Ok((image, annotations))
}

/// Incrementally builds one split's COCO document.
///
/// Owns the image and annotation id counters for the split; a fresh builder
/// starts both at 0 with the category table pre-filled from the label
/// registry.
#[derive(Debug)]
pub struct CocoDocumentBuilder {
    dataset: CocoDataset,
    next_annotation_id: u64,
}

impl CocoDocumentBuilder {
    /// Create a builder with the fixed category table and zeroed counters.
    pub fn new() -> Self {
        let dataset = CocoDataset {
            categories: categories(),
            ..Default::default()
        };
        Self {
            dataset,
            next_annotation_id: 0,
        }
    }

    /// Convert one parsed record and append its entries to the document.
    ///
    /// The image id is the number of images already appended.
    ///
    /// # Returns
    /// The number of annotations the record contributed.
    pub fn add_record(
        &mut self,
        record: &LabelRecord,
        label_file_name: &str,
    ) -> Result<usize, Error> {
        let image_id = self.dataset.images.len() as u64;
        let (image, annotations) =
            record_to_coco(record, label_file_name, image_id, &mut self.next_annotation_id)?;
        let added = annotations.len();
        self.dataset.images.push(image);
        self.dataset.annotations.extend(annotations);
        Ok(added)
    }

    /// Read, parse, and append one label file.
    ///
    /// Unparseable JSON or a record violating the input contract fails the
    /// split; nothing from the failing file is appended in that case beyond
    /// what a hard failure discards anyway.
    pub fn add_label_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, Error> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(64 * 1024, file);
        let record: LabelRecord = serde_json::from_reader(reader)?;

        let label_file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.add_record(&record, &label_file_name)
    }

    /// Finish building and return the document.
    pub fn build(self) -> CocoDataset {
        self.dataset
    }
}

impl Default for CocoDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// List a split's label files: the `.json` entries directly inside `dir`,
/// sorted by path for deterministic id assignment.
pub fn list_label_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(dir.as_ref()).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "json")
        {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Per-split conversion totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitSummary {
    /// Number of image entries written.
    pub images: usize,
    /// Number of annotation entries written.
    pub annotations: usize,
}

/// Convert one split's label directory into a COCO JSON file.
///
/// Reads every `.json` file in `labels_dir`, assembles the document in
/// memory, and writes it pretty-printed to `output`. The optional progress
/// callback receives `(processed, total)` after each file.
///
/// # Arguments
/// * `labels_dir` - Directory holding one label file per image
/// * `output` - Destination path for the COCO JSON document
/// * `progress` - Optional per-file progress callback
pub fn convert_split<P: AsRef<Path>, Q: AsRef<Path>>(
    labels_dir: P,
    output: Q,
    progress: Option<&dyn Fn(usize, usize)>,
) -> Result<SplitSummary, Error> {
    let files = list_label_files(labels_dir)?;

    let mut builder = CocoDocumentBuilder::new();
    for (index, path) in files.iter().enumerate() {
        builder.add_label_file(path)?;
        if let Some(progress) = progress {
            progress(index + 1, files.len());
        }
    }

    let dataset = builder.build();
    let summary = SplitSummary {
        images: dataset.images.len(),
        annotations: dataset.annotations.len(),
    };
    CocoWriter::new().write_json(&dataset, output)?;

    Ok(summary)
}
