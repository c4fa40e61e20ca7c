// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Sample transactions for demo sessions. Generation goes through a
//! caller-provided `Rng` so a fixed seed always yields the same log.

use chrono::{Duration, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Category, CreatedBy, Transaction, TransactionType};
use crate::store::TransactionStore;

const HISTORY_DAYS: i64 = 30;

fn descriptions(category: Category) -> &'static [&'static str] {
    match category {
        Category::Food => &["Grocery shopping", "Restaurant dinner", "Coffee", "Take-out lunch"],
        Category::Transport => &["Gas", "Uber ride", "Bus ticket", "Car maintenance"],
        Category::Utilities => &["Electric bill", "Water bill", "Internet bill", "Phone bill"],
        Category::Entertainment => &[
            "Movie tickets",
            "Streaming subscription",
            "Concert tickets",
            "Game purchase",
        ],
        Category::Housing => &["Rent payment", "Mortgage payment", "Home repair", "Furniture"],
        Category::Healthcare => &[
            "Doctor visit",
            "Medication",
            "Health insurance",
            "Gym membership",
        ],
        Category::Personal => &["Clothes shopping", "Haircut", "Cosmetics", "Personal care"],
        Category::Education => &["Tuition payment", "Books", "Online course", "Workshop fee"],
        Category::Investments => &[
            "Stock purchase",
            "Mutual fund",
            "Crypto investment",
            "Retirement contribution",
        ],
        Category::Salary => &["Monthly salary", "Bonus payment", "Overtime pay", "Commission"],
        Category::Gift => &["Birthday gift", "Holiday gift", "Gift from family", "Cash gift"],
        Category::Other => &[
            "Miscellaneous expense",
            "Unexpected cost",
            "Other payment",
            "Subscription",
        ],
    }
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// `count` transactions dated within the 30 days before `now`, with ids
/// `trans-1` through `trans-{count}`.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R, now: NaiveDateTime) -> Vec<Transaction> {
    (1..=count)
        .map(|i| {
            let kind = if rng.random_bool(0.6) {
                TransactionType::Expense
            } else {
                TransactionType::Income
            };
            let category = *pick(rng, Category::for_type(kind));
            let amount: i64 = match kind {
                TransactionType::Income => rng.random_range(1000..=5000),
                TransactionType::Expense => rng.random_range(10..=1000),
            };
            let created_by = if rng.random_bool(0.3) {
                CreatedBy::Whatsapp
            } else if rng.random_bool(0.5) {
                CreatedBy::Ai
            } else {
                CreatedBy::User
            };
            let days_ago = rng.random_range(0..HISTORY_DAYS);
            Transaction {
                id: format!("trans-{}", i),
                r#type: kind,
                amount: Decimal::from(amount),
                category,
                description: pick(rng, descriptions(category)).to_string(),
                date: now - Duration::days(days_ago),
                created_by,
            }
        })
        .collect()
}

/// A store holding `count` generated transactions. The same seed and
/// `now` always produce the same store.
pub fn seeded_store(count: usize, seed: u64, now: NaiveDateTime) -> TransactionStore {
    let mut rng = StdRng::seed_from_u64(seed);
    let transactions = generate(count, &mut rng, now);
    debug!(count, seed, "generated mock transactions");
    TransactionStore::from_transactions(transactions)
}
