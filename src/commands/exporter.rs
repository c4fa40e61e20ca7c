// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::TransactionStore;
use anyhow::{Context, Result, bail};
use serde_json::json;

pub fn handle(store: &TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().trim().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    // oldest first, ties in store order
    let mut rows: Vec<_> = store.transactions().iter().collect();
    rows.sort_by(|a, b| a.date.cmp(&b.date));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Create export file {}", out))?;
            wtr.write_record([
                "id",
                "date",
                "type",
                "amount",
                "category",
                "description",
                "created_by",
            ])?;
            for t in rows {
                wtr.write_record([
                    t.id.clone(),
                    t.date.format("%Y-%m-%dT%H:%M:%S").to_string(),
                    t.r#type.to_string(),
                    t.amount.to_string(),
                    t.category.to_string(),
                    t.description.clone(),
                    t.created_by.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = rows
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id,
                        "date": t.date.format("%Y-%m-%dT%H:%M:%S").to_string(),
                        "type": t.r#type,
                        "amount": t.amount.to_string(),
                        "category": t.category,
                        "description": t.description,
                        "created_by": t.created_by,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Write export file {}", out))?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} transactions to {}", store.len(), out);
    Ok(())
}
