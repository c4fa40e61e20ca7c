// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use spendlens::commands::transactions;
use spendlens::filter::{SortDirection, SortField, TypeFilter, filter_and_sort};
use spendlens::models::{Category, CreatedBy, Transaction, TransactionType};
use spendlens::{cli, store::TransactionStore};

fn at(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, d)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap()
}

fn tx(id: &str, kind: TransactionType, amount: i64, category: Category, desc: &str, d: u32) -> Transaction {
    Transaction {
        id: id.into(),
        r#type: kind,
        amount: Decimal::from(amount),
        category,
        description: desc.into(),
        date: at(d),
        created_by: CreatedBy::Ai,
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        tx("trans-1", TransactionType::Expense, 12, Category::Food, "Take-out lunch", 3),
        tx("trans-2", TransactionType::Income, 3200, Category::Salary, "Monthly salary", 1),
        tx("trans-3", TransactionType::Expense, 120, Category::Utilities, "Electric bill", 2),
        tx("trans-4", TransactionType::Expense, 45, Category::Food, "Grocery shopping", 2),
        tx("trans-5", TransactionType::Income, 45, Category::Gift, "Cash gift", 4),
    ]
}

fn ids(v: &[&Transaction]) -> Vec<String> {
    v.iter().map(|t| t.id.clone()).collect()
}

#[test]
fn search_matches_description_case_insensitively() {
    let txs = sample();
    let out = filter_and_sort(&txs, "LUNCH", TypeFilter::All, SortField::Date, SortDirection::Desc);
    assert_eq!(ids(&out), ["trans-1"]);
}

#[test]
fn search_matches_category_name() {
    let txs = sample();
    let out = filter_and_sort(&txs, "Food", TypeFilter::All, SortField::Date, SortDirection::Asc);
    assert_eq!(ids(&out), ["trans-4", "trans-1"]);
}

#[test]
fn empty_query_and_all_filter_keep_everything() {
    let txs = sample();
    let out = filter_and_sort(&txs, "", TypeFilter::All, SortField::Date, SortDirection::Desc);
    assert_eq!(out.len(), txs.len());
}

#[test]
fn type_filter_then_amount_sort() {
    let txs = sample();
    let out = filter_and_sort(&txs, "", TypeFilter::Expense, SortField::Amount, SortDirection::Desc);
    assert_eq!(ids(&out), ["trans-3", "trans-4", "trans-1"]);
    let inc = filter_and_sort(&txs, "", TypeFilter::Income, SortField::Amount, SortDirection::Asc);
    assert_eq!(ids(&inc), ["trans-5", "trans-2"]);
}

#[test]
fn equal_keys_keep_input_order_both_directions() {
    let txs = sample();
    let asc = filter_and_sort(&txs, "", TypeFilter::All, SortField::Amount, SortDirection::Asc);
    assert_eq!(ids(&asc), ["trans-1", "trans-4", "trans-5", "trans-3", "trans-2"]);
    let desc = filter_and_sort(&txs, "", TypeFilter::All, SortField::Date, SortDirection::Desc);
    assert_eq!(ids(&desc), ["trans-5", "trans-1", "trans-3", "trans-4", "trans-2"]);
}

#[test]
fn source_slice_is_not_reordered() {
    let txs = sample();
    let before = txs.clone();
    let _ = filter_and_sort(&txs, "", TypeFilter::All, SortField::Amount, SortDirection::Asc);
    assert_eq!(txs, before);
}

#[test]
fn list_limit_respected() {
    let store = TransactionStore::from_transactions(sample());
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["spendlens", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&store, list_m).unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].id, "trans-5");
            assert_eq!(rows[0].date, "2025-01-04 08:30");
            assert_eq!(rows[0].amount, "+$45.00");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_search_type_and_sort_flags() {
    let store = TransactionStore::from_transactions(sample());
    let matches = cli::build_cli().get_matches_from([
        "spendlens", "tx", "list", "--search", "  bill ", "--type", "expense", "--sort", "amount",
        "--dir", "asc",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    let rows = transactions::query_rows(&store, list_m).unwrap();
    assert!(rows.is_empty());

    let matches = cli::build_cli().get_matches_from([
        "spendlens", "tx", "list", "--search", "bill", "--type", "expense", "--sort", "amount",
        "--dir", "asc",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    let rows = transactions::query_rows(&store, list_m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Electric bill");
    assert_eq!(rows[0].amount, "-$120.00");
}

#[test]
fn tx_add_inserts_at_head_with_next_id() {
    let mut store = TransactionStore::from_transactions(sample());
    let matches = cli::build_cli().get_matches_from([
        "spendlens",
        "tx",
        "add",
        "--type",
        "expense",
        "--amount",
        "19.99",
        "--category",
        "Entertainment",
        "--description",
        "Movie tickets",
        "--date",
        "2025-01-05",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    transactions::handle(&mut store, tx_m).unwrap();

    assert_eq!(store.len(), 6);
    let head = &store.transactions()[0];
    assert_eq!(head.id, "trans-6");
    assert_eq!(head.amount, Decimal::new(1999, 2));
    assert_eq!(head.category, Category::Entertainment);
    assert_eq!(head.created_by, CreatedBy::User);
    assert_eq!(head.date, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap().and_hms_opt(0, 0, 0).unwrap());
}

#[test]
fn tx_add_rejects_zero_amount_naming_the_field() {
    let mut store = TransactionStore::from_transactions(sample());
    let matches = cli::build_cli().get_matches_from([
        "spendlens",
        "tx",
        "add",
        "--type",
        "income",
        "--amount",
        "0",
        "--category",
        "salary",
        "--description",
        "Bonus payment",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let err = transactions::handle(&mut store, tx_m).unwrap_err();
    assert!(err.to_string().starts_with("amount:"), "{}", err);
    assert_eq!(store.len(), 5);
}
