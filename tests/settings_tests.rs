// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use spendlens::settings::{self, DEFAULT_SAMPLE_SIZE, Language, Settings};
use spendlens::{cli, commands};
use tempfile::tempdir;

fn run_settings(path: &std::path::Path, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["spendlens", "settings"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("settings", sub)) = matches.subcommand() {
        commands::settings::handle_at(path, sub)
    } else {
        panic!("settings command not parsed");
    }
}

#[test]
fn missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let s = settings::load_from(&dir.path().join("nope.json")).unwrap();
    assert_eq!(s, Settings::default());
    assert_eq!(s.sample_size, DEFAULT_SAMPLE_SIZE);
    assert_eq!(s.language, Language::En);
    assert_eq!(s.seed, None);
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "language": "pt-BR" }"#).unwrap();
    let s = settings::load_from(&path).unwrap();
    assert_eq!(s.language, Language::PtBr);
    assert_eq!(s.sample_size, DEFAULT_SAMPLE_SIZE);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = settings::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid settings file"));
}

#[test]
fn set_command_persists_and_clears_seed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    run_settings(
        &path,
        &["set", "--language", "pt-BR", "--sample-size", "25", "--fixed-seed", "7"],
    )
    .unwrap();
    let s = settings::load_from(&path).unwrap();
    assert_eq!(
        s,
        Settings {
            language: Language::PtBr,
            sample_size: 25,
            seed: Some(7),
        }
    );

    run_settings(&path, &["set", "--clear-seed"]).unwrap();
    let s = settings::load_from(&path).unwrap();
    assert_eq!(s.seed, None);
    assert_eq!(s.sample_size, 25);

    run_settings(&path, &["show"]).unwrap();
}
