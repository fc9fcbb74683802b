// SPDX-License-Identifier: Apache-2.0
// Copyright © 2025 ParkSeg Developers. All Rights Reserved.

//! # ParkSeg COCO Converter Library
//!
//! Converts the parking-lot annotation tool's per-image polygon JSON files
//! into COCO object-detection/segmentation datasets. Each dataset split
//! (train/val/test) is a directory of label files that is assembled into one
//! COCO document and written as a single JSON file.
//!
//! ## Features
//!
//! - **Label Registry**: fixed bidirectional table of the 29 dataset
//!   categories
//! - **Polygon Extraction**: recursive traversal of the tool's arbitrarily
//!   nested segmentation structures
//! - **Geometry**: shoelace area and axis-aligned bounding box from flat
//!   coordinate sequences
//! - **Document Assembly**: sequential id assignment and one-pass
//!   serialization per split
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use parkseg_coco::{Error, coco::convert_split};
//!
//! fn main() -> Result<(), Error> {
//!     let summary = convert_split("new_data_set/train/labels", "new_data_set/train.json", None)?;
//!     println!(
//!         "Converted {} images with {} annotations",
//!         summary.images, summary.annotations
//!     );
//!     Ok(())
//! }
//! ```

mod error;

pub mod coco;
pub mod geometry;
pub mod labels;
pub mod record;

pub use crate::error::Error;
