// SPDX-License-Identifier: Apache-2.0
// Copyright © 2025 ParkSeg Developers. All Rights Reserved.

//! # COCO Dataset Format Support
//!
//! Conversion from parking-lot label records to the COCO
//! object-detection/segmentation JSON format.
//!
//! ## Workflow
//!
//! One split at a time: a directory of per-image label files is assembled
//! into a single in-memory COCO document and serialized once. The three
//! dataset splits are independent; each run of [`convert_split`] builds one
//! of them.
//!
//! ## Example
//!
//! ```rust,no_run
//! use parkseg_coco::coco::convert_split;
//!
//! # fn example() -> Result<(), parkseg_coco::Error> {
//! let summary = convert_split("new_data_set/train/labels", "new_data_set/train.json", None)?;
//! println!(
//!     "Converted {} images with {} annotations",
//!     summary.images, summary.annotations
//! );
//! # Ok(())
//! # }
//! ```

mod convert;
mod types;
mod writer;

// Re-export types
pub use types::{
    CocoAnnotation, CocoCategory, CocoDataset, CocoImage, CocoInfo, CocoLicense,
};

// Re-export writer
pub use writer::{CocoWriteOptions, CocoWriter};

// Re-export conversion entry points
pub use convert::{
    CocoDocumentBuilder, IMAGE_HEIGHT, IMAGE_WIDTH, SplitSummary, categories, convert_split,
    list_label_files, record_to_coco,
};

#[cfg(test)]
mod tests;
