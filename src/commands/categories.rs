// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, TransactionType};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let kinds = match sub.get_one::<String>("type") {
            Some(t) => vec![t.parse::<TransactionType>()?],
            None => vec![TransactionType::Income, TransactionType::Expense],
        };
        println!("{}", pretty_table(&["Type", "Category"], rows(&kinds)));
    }
    Ok(())
}

pub fn rows(kinds: &[TransactionType]) -> Vec<Vec<String>> {
    kinds
        .iter()
        .flat_map(|k| {
            Category::for_type(*k)
                .iter()
                .map(move |c| vec![k.to_string(), c.to_string()])
        })
        .collect()
}
