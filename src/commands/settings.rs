// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use crate::settings::{self, Language, Settings};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    handle_at(&settings::settings_path()?, m)
}

/// Same as `handle`, against an explicit settings file.
pub fn handle_at(path: &Path, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let s = settings::load_from(path)?;
            println!("{}", pretty_table(&["Key", "Value"], rows(&s)));
            println!("Settings file: {}", path.display());
        }
        Some(("set", sub)) => {
            let mut s = settings::load_from(path)?;
            if let Some(lang) = sub.get_one::<String>("language") {
                s.language = lang.parse::<Language>()?;
            }
            if let Some(n) = sub.get_one::<usize>("sample_size") {
                s.sample_size = *n;
            }
            if let Some(seed) = sub.get_one::<u64>("fixed_seed") {
                s.seed = Some(*seed);
            }
            if sub.get_flag("clear_seed") {
                s.seed = None;
            }
            settings::save_to(path, &s)?;
            println!("Saved settings to {}", path.display());
        }
        _ => {}
    }
    Ok(())
}

fn rows(s: &Settings) -> Vec<Vec<String>> {
    vec![
        vec!["language".into(), s.language.to_string()],
        vec!["sample_size".into(), s.sample_size.to_string()],
        vec![
            "seed".into(),
            s.seed.map(|v| v.to_string()).unwrap_or_else(|| "(random)".into()),
        ],
    ]
}
