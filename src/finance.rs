// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over a transaction log: totals, category breakdowns and
//! the rolling monthly cashflow. Every function here is pure; callers
//! recompute after the store changes.

use chrono::{Datelike, Duration, Months, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::models::{
    Category, CategorySummary, FinancialSummary, MonthlySummary, Transaction, TransactionType,
};

/// Number of entries in `FinancialSummary::recent_transactions`.
pub const RECENT_LIMIT: usize = 5;

/// Number of calendar months covered by `compute_monthly_summary`.
pub const MONTH_WINDOW: u32 = 6;

/// Totals per type, the balance, and the most recent transactions.
///
/// Recent transactions are ordered newest first; entries with the same
/// timestamp keep their input order.
#[instrument(level = "debug", skip(transactions), fields(count = transactions.len()))]
pub fn compute_financial_summary(transactions: &[Transaction]) -> FinancialSummary<'_> {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    for t in transactions {
        match t.r#type {
            TransactionType::Income => total_income = saturating_add(total_income, t.amount),
            TransactionType::Expense => {
                total_expenses = saturating_add(total_expenses, t.amount)
            }
        }
    }

    let mut recent: Vec<&Transaction> = transactions.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_LIMIT);

    debug!(%total_income, %total_expenses, "computed financial summary");
    FinancialSummary {
        total_income,
        total_expenses,
        balance: saturating_sub(total_income, total_expenses),
        recent_transactions: recent,
    }
}

/// Per-category totals for one transaction type, largest first.
///
/// Only categories with at least one matching transaction appear. Equal
/// totals keep the order in which their categories were first seen.
/// Percentages are shares of the type's total and are all zero when that
/// total is zero.
#[instrument(level = "debug", skip(transactions), fields(count = transactions.len()))]
pub fn compute_category_summary(
    transactions: &[Transaction],
    kind: TransactionType,
) -> Vec<CategorySummary> {
    let mut groups: Vec<(Category, Decimal)> = Vec::new();
    let mut total = Decimal::ZERO;
    for t in transactions.iter().filter(|t| t.r#type == kind) {
        total = saturating_add(total, t.amount);
        match groups.iter_mut().find(|(c, _)| *c == t.category) {
            Some((_, sum)) => *sum = saturating_add(*sum, t.amount),
            None => groups.push((t.category, t.amount)),
        }
    }

    let mut out: Vec<CategorySummary> = groups
        .into_iter()
        .map(|(category, total_amount)| CategorySummary {
            category,
            total_amount,
            percentage: percentage_of(total_amount, total),
        })
        .collect();
    out.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));

    debug!(%kind, categories = out.len(), %total, "computed category summary");
    out
}

fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Sums clamp at `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(if b.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

fn saturating_sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b).unwrap_or(if b.is_sign_negative() {
        Decimal::MAX
    } else {
        Decimal::MIN
    })
}

/// Entries worth drawing in a chart: those with a positive total.
pub fn chart_slices(summary: &[CategorySummary]) -> Vec<&CategorySummary> {
    summary
        .iter()
        .filter(|s| s.total_amount > Decimal::ZERO)
        .collect()
}

/// Income and expense sums for the six calendar months ending with the
/// month of `reference`, oldest first.
///
/// All six months are present even when empty. Transactions outside the
/// window are ignored.
#[instrument(level = "debug", skip(transactions), fields(count = transactions.len()))]
pub fn compute_monthly_summary(
    transactions: &[Transaction],
    reference: NaiveDate,
) -> Vec<MonthlySummary> {
    let current_month = reference - Duration::days(i64::from(reference.day0()));
    let mut buckets: Vec<MonthlySummary> = (0..MONTH_WINDOW)
        .rev()
        .filter_map(|back| current_month.checked_sub_months(Months::new(back)))
        .map(|start| MonthlySummary {
            month: start.format("%b %Y").to_string(),
            start,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        })
        .collect();

    let mut skipped = 0usize;
    for t in transactions {
        let key = (t.date.year(), t.date.month());
        let Some(bucket) = buckets
            .iter_mut()
            .find(|b| (b.start.year(), b.start.month()) == key)
        else {
            skipped += 1;
            continue;
        };
        match t.r#type {
            TransactionType::Income => bucket.income = saturating_add(bucket.income, t.amount),
            TransactionType::Expense => bucket.expense = saturating_add(bucket.expense, t.amount),
        }
    }

    debug!(%reference, skipped, "computed monthly summary");
    buckets
}

/// `compute_monthly_summary` anchored at today's local date.
pub fn compute_monthly_summary_now(transactions: &[Transaction]) -> Vec<MonthlySummary> {
    compute_monthly_summary(transactions, chrono::Local::now().date_naive())
}
