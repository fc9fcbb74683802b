// SPDX-License-Identifier: Apache-2.0
// Copyright © 2025 ParkSeg Developers. All Rights Reserved.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use parkseg_coco::{Error, coco::convert_split};
use std::path::PathBuf;

/// The three dataset splits, processed unconditionally on every run.
const SPLITS: [&str; 3] = ["train", "val", "test"];

/// Convert per-image parking-lot polygon annotations to COCO JSON.
///
/// For each of the train, val, and test splits the labels under
/// `<root>/<split>/labels` are assembled into a single COCO document
/// written to `<root>/<split>.json`.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dataset root containing the split directories.
    #[clap(default_value = "new_data_set")]
    root: PathBuf,
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    for split in SPLITS {
        let labels_dir = args.root.join(split).join("labels");
        let output = args.root.join(format!("{split}.json"));

        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise} ETA: {eta}] {msg}: {wide_bar:.yellow} {human_pos}/{human_len}",
            )
            .unwrap()
            .progress_chars("█▇▆▅▄▃▂▁  "),
        );
        bar.set_message(format!("Converting {split}"));

        let progress = |done: usize, total: usize| {
            if total > 0 {
                bar.set_length(total as u64);
                bar.set_position(done as u64);
            }
        };

        let summary = convert_split(&labels_dir, &output, Some(&progress))?;
        bar.finish_and_clear();

        println!(
            "[{split}] {} images, {} annotations -> {}",
            summary.images,
            summary.annotations,
            output.display()
        );
    }

    Ok(())
}
