// SPDX-License-Identifier: Apache-2.0
// Copyright © 2025 ParkSeg Developers. All Rights Reserved.

//! Integration tests for the COCO conversion pipeline.

use super::*;
use std::fs;
use tempfile::TempDir;

fn write_label(dir: &std::path::Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn test_convert_split_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let labels_dir = temp_dir.path().join("labels");
    fs::create_dir_all(&labels_dir).unwrap();

    // One valid triangle, one unknown class, one degenerate polygon.
    write_label(
        &labels_dir,
        "scene_0001.json",
        r#"{
            "objects": [
                {
                    "class_name": "Vehicle",
                    "annotation": [[{"x": 0, "y": 0}, {"x": 10, "y": 0}, {"x": 0, "y": 6}]]
                },
                {
                    "class_name": "Skateboard",
                    "annotation": [[{"x": 1, "y": 1}, {"x": 2, "y": 1}, {"x": 2, "y": 2}]]
                }
            ]
        }"#,
    );
    write_label(
        &labels_dir,
        "scene_0002.json",
        r#"{
            "objects": [
                {
                    "class_name": "Parking Line",
                    "annotation": [[{"x": 0, "y": 0}, {"x": 5, "y": 5}]]
                },
                {
                    "class_name": "Human",
                    "annotation": [
                        [[{"x": 100, "y": 50}, {"x": 300, "y": 50}, {"x": 300, "y": 350}, {"x": 100, "y": 350}]]
                    ]
                }
            ]
        }"#,
    );

    let output = temp_dir.path().join("train.json");
    let summary = convert_split(&labels_dir, &output, None).unwrap();
    assert_eq!(summary, SplitSummary { images: 2, annotations: 2 });

    let contents = fs::read_to_string(&output).unwrap();
    let dataset: CocoDataset = serde_json::from_str(&contents).unwrap();

    // Category table is the fixed registry with the COCO offset.
    assert_eq!(dataset.categories.len(), 29);
    assert_eq!(dataset.categories[0].id, 1);
    assert_eq!(dataset.categories[28].id, 29);

    // Images in sorted filename order with sequential ids.
    assert_eq!(dataset.images.len(), 2);
    assert_eq!(dataset.images[0].id, 0);
    assert_eq!(dataset.images[0].file_name, "scene_0001.png");
    assert_eq!(dataset.images[0].width, 4032);
    assert_eq!(dataset.images[0].height, 3040);
    assert_eq!(dataset.images[1].id, 1);
    assert_eq!(dataset.images[1].file_name, "scene_0002.png");

    // Unknown class and two-point polygon are skipped without consuming ids.
    assert_eq!(dataset.annotations.len(), 2);
    let vehicle = &dataset.annotations[0];
    assert_eq!(vehicle.id, 0);
    assert_eq!(vehicle.image_id, 0);
    assert_eq!(vehicle.category_id, 24);
    assert_eq!(vehicle.area, 30.0);
    assert_eq!(vehicle.bbox, [0.0, 0.0, 10.0, 6.0]);

    let human = &dataset.annotations[1];
    assert_eq!(human.id, 1);
    assert_eq!(human.image_id, 1);
    assert_eq!(human.category_id, 29);
    assert_eq!(human.area, 60000.0);
    assert_eq!(human.bbox, [100.0, 50.0, 200.0, 300.0]);

    // Round-trip: serializing the parsed document reproduces the file.
    let reserialized = serde_json::to_string_pretty(&dataset).unwrap();
    assert_eq!(reserialized, contents);
}

#[test]
fn test_convert_split_reports_progress() {
    let temp_dir = TempDir::new().unwrap();
    let labels_dir = temp_dir.path().join("labels");
    fs::create_dir_all(&labels_dir).unwrap();
    write_label(&labels_dir, "a.json", "{}");
    write_label(&labels_dir, "b.json", "{}");

    let seen = std::cell::RefCell::new(Vec::new());
    let progress = |done: usize, total: usize| {
        seen.borrow_mut().push((done, total));
    };

    let output = temp_dir.path().join("out.json");
    convert_split(&labels_dir, &output, Some(&progress)).unwrap();
    assert_eq!(*seen.borrow(), vec![(1, 2), (2, 2)]);
}

#[test]
fn test_convert_split_unparseable_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let labels_dir = temp_dir.path().join("labels");
    fs::create_dir_all(&labels_dir).unwrap();
    write_label(&labels_dir, "broken.json", "{ not json");

    let output = temp_dir.path().join("out.json");
    let result = convert_split(&labels_dir, &output, None);
    assert!(matches!(result, Err(crate::Error::JsonError(_))));
    assert!(!output.exists());
}

#[test]
fn test_convert_split_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result = convert_split(
        temp_dir.path().join("absent"),
        temp_dir.path().join("out.json"),
        None,
    );
    assert!(matches!(result, Err(crate::Error::IoError(_))));
}

#[test]
fn test_convert_split_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let labels_dir = temp_dir.path().join("labels");
    fs::create_dir_all(&labels_dir).unwrap();

    let output = temp_dir.path().join("empty.json");
    let summary = convert_split(&labels_dir, &output, None).unwrap();
    assert_eq!(summary, SplitSummary::default());

    let dataset: CocoDataset =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert!(dataset.images.is_empty());
    assert!(dataset.annotations.is_empty());
    assert_eq!(dataset.categories.len(), 29);
}
