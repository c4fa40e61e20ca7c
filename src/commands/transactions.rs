// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::reports::{print_summary, signed_amount};
use crate::filter::{SortDirection, SortField, TypeFilter, filter_and_sort};
use crate::finance::compute_financial_summary;
use crate::models::{Category, NewTransaction, TransactionType};
use crate::store::TransactionStore;
use crate::utils::{maybe_print_json, parse_datetime, parse_decimal, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(store: &mut TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let kind: TransactionType = sub.get_one::<String>("type").unwrap().parse()?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
    let description = sub.get_one::<String>("description").unwrap().to_string();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_datetime(s)?,
        None => chrono::Local::now().naive_local(),
    };

    let tx = store
        .add(NewTransaction {
            r#type: kind,
            amount,
            category,
            description,
            date,
        })?
        .clone();
    println!(
        "Recorded {} {} on {} as {} ('{}', id {})",
        kind,
        signed_amount(kind, tx.amount),
        tx.date.format("%Y-%m-%d"),
        tx.category,
        tx.description,
        tx.id
    );
    print_summary(&compute_financial_summary(store.transactions()));
    Ok(())
}

fn list(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No transactions found");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.id.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.created_by.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "ID", "Description", "Category", "Amount", "Source"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: String,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub created_by: String,
}

pub fn query_rows(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let query = sub.get_one::<String>("search").map(String::as_str).unwrap_or("");
    let type_filter: TypeFilter = sub.get_one::<String>("type").unwrap().parse()?;
    let sort_field: SortField = sub.get_one::<String>("sort").unwrap().parse()?;
    let direction: SortDirection = sub.get_one::<String>("dir").unwrap().parse()?;

    let mut matched = filter_and_sort(
        store.transactions(),
        query,
        type_filter,
        sort_field,
        direction,
    );
    if let Some(limit) = sub.get_one::<usize>("limit") {
        matched.truncate(*limit);
    }

    Ok(matched
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.format("%Y-%m-%d %H:%M").to_string(),
            r#type: t.r#type.to_string(),
            category: t.category.to_string(),
            description: t.description.clone(),
            amount: signed_amount(t.r#type, t.amount),
            created_by: t.created_by.to_string(),
        })
        .collect())
}
