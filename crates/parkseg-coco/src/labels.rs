// SPDX-License-Identifier: Apache-2.0
// Copyright © 2025 ParkSeg Developers. All Rights Reserved.

//! Fixed label registry for the parking-lot segmentation dataset.
//!
//! The capture pipeline annotates exactly 29 categories. The table is fixed
//! at compile time and bijective: every id in `0..29` has exactly one name
//! and vice versa. COCO output applies a +1 offset to these ids since the
//! COCO format uses 1-based category indexing; that offset belongs to the
//! conversion layer, not to this registry.

use std::{collections::HashMap, sync::LazyLock};

/// Canonical category names indexed by registry id.
pub const LABEL_NAMES: [&str; 29] = [
    "Undefined Stuff",
    "Wall",
    "Driving Area",
    "Non Driving Area",
    "Parking Area",
    "No Parking Area",
    "Big Notice",
    "Pillar",
    "Parking Area Number",
    "Parking Line",
    "Disabled Icon",
    "Women Icon",
    "Compact Car Icon",
    "Speed Bump",
    "Parking Block",
    "Billboard",
    "Toll Bar",
    "Sign",
    "No Parking Sign",
    "Traffic Cone",
    "Fire Extinguisher",
    "Undefined Object",
    "Two-wheeled Vehicle",
    "Vehicle",
    "Wheelchair",
    "Stroller",
    "Shopping Cart",
    "Animal",
    "Human",
];

/// Number of categories in the registry.
pub const LABEL_COUNT: u32 = LABEL_NAMES.len() as u32;

static NAME_TO_ID: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    LABEL_NAMES
        .iter()
        .enumerate()
        .map(|(id, name)| (*name, id as u32))
        .collect()
});

/// Registry id for a category name, or `None` for an unknown category.
pub fn label_id(name: &str) -> Option<u32> {
    NAME_TO_ID.get(name).copied()
}

/// Canonical name for a registry id, or `None` if out of range.
pub fn label_name(id: u32) -> Option<&'static str> {
    LABEL_NAMES.get(id as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_count() {
        assert_eq!(LABEL_COUNT, 29);
        assert_eq!(NAME_TO_ID.len(), LABEL_NAMES.len());
    }

    #[test]
    fn test_known_labels() {
        assert_eq!(label_id("Undefined Stuff"), Some(0));
        assert_eq!(label_id("Parking Area"), Some(4));
        assert_eq!(label_id("Vehicle"), Some(23));
        assert_eq!(label_id("Human"), Some(28));
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(label_id("Bicycle Rack"), None);
        assert_eq!(label_id("vehicle"), None); // lookup is case-sensitive
        assert_eq!(label_id(""), None);
    }

    #[test]
    fn test_label_name_lookup() {
        assert_eq!(label_name(0), Some("Undefined Stuff"));
        assert_eq!(label_name(28), Some("Human"));
        assert_eq!(label_name(29), None);
    }

    #[test]
    fn test_registry_is_bijective() {
        for (id, name) in LABEL_NAMES.iter().enumerate() {
            assert_eq!(label_id(name), Some(id as u32));
            assert_eq!(label_name(id as u32), Some(*name));
        }
    }
}
