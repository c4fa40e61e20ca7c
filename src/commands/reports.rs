// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::finance::{
    chart_slices, compute_category_summary, compute_financial_summary, compute_monthly_summary,
    compute_monthly_summary_now,
};
use crate::models::{CategorySummary, FinancialSummary, TransactionType};
use crate::store::TransactionStore;
use crate::utils::{format_currency, maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const BAR_WIDTH: u32 = 20;

pub fn handle(store: &TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("by-category", sub)) => by_category(store, sub)?,
        Some(("monthly", sub)) => monthly(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let s = compute_financial_summary(store.transactions());
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        print_summary(&s);
    }
    Ok(())
}

pub fn print_summary(s: &FinancialSummary<'_>) {
    println!(
        "{}",
        pretty_table(
            &["Total Income", "Total Expenses", "Balance"],
            vec![vec![
                format_currency(s.total_income),
                format_currency(s.total_expenses),
                format_currency(s.balance),
            ]],
        )
    );
    if s.recent_transactions.is_empty() {
        println!("No transactions yet");
        return;
    }
    let rows = s
        .recent_transactions
        .iter()
        .map(|t| {
            vec![
                t.date.format("%Y-%m-%d").to_string(),
                t.description.clone(),
                t.category.to_string(),
                signed_amount(t.r#type, t.amount),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Description", "Category", "Amount"], rows)
    );
}

pub fn signed_amount(kind: TransactionType, amount: Decimal) -> String {
    match kind {
        TransactionType::Income => format!("+{}", format_currency(amount)),
        TransactionType::Expense => format!("-{}", format_currency(amount)),
    }
}

fn by_category(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let kind: TransactionType = sub.get_one::<String>("type").unwrap().parse()?;
    let data = compute_category_summary(store.transactions(), kind);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if chart_slices(&data).is_empty() {
            println!("No data available");
            return Ok(());
        }
        let rows = category_rows(&data);
        println!(
            "{}",
            pretty_table(&["Category", "Total", "Share", ""], rows)
        );
    }
    Ok(())
}

/// Table rows for a category breakdown. Zero-total entries keep their
/// row but get no bar.
pub fn category_rows(data: &[CategorySummary]) -> Vec<Vec<String>> {
    data.iter()
        .map(|c| {
            let bar = if c.total_amount > Decimal::ZERO {
                share_bar(c.percentage)
            } else {
                String::new()
            };
            vec![
                c.category.to_string(),
                format_currency(c.total_amount),
                format!("{:.1}%", c.percentage.round_dp(1)),
                bar,
            ]
        })
        .collect()
}

fn share_bar(percentage: Decimal) -> String {
    let cells = (percentage * Decimal::from(BAR_WIDTH) / Decimal::ONE_HUNDRED)
        .round()
        .max(Decimal::ONE);
    let n = cells.to_usize().unwrap_or(1);
    "█".repeat(n)
}

fn monthly(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = match sub.get_one::<String>("as_of") {
        Some(s) => compute_monthly_summary(store.transactions(), parse_date(s)?),
        None => compute_monthly_summary_now(store.transactions()),
    };
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|m| {
                vec![
                    m.month.clone(),
                    format_currency(m.income),
                    format_currency(m.expense),
                    format_currency(m.income - m.expense),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expense", "Net"], rows)
        );
    }
    Ok(())
}
