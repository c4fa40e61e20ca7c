// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(anyhow!("Unknown transaction type '{}' (use income|expense)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Housing,
    Healthcare,
    Personal,
    Education,
    Investments,
    Salary,
    Gift,
    Other,
}

impl Category {
    pub const INCOME: &'static [Category] = &[
        Category::Salary,
        Category::Investments,
        Category::Gift,
        Category::Other,
    ];

    pub const EXPENSE: &'static [Category] = &[
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Entertainment,
        Category::Housing,
        Category::Healthcare,
        Category::Personal,
        Category::Education,
        Category::Other,
    ];

    /// Categories a transaction of `kind` may carry.
    pub fn for_type(kind: TransactionType) -> &'static [Category] {
        match kind {
            TransactionType::Income => Self::INCOME,
            TransactionType::Expense => Self::EXPENSE,
        }
    }

    pub fn is_valid_for(&self, kind: TransactionType) -> bool {
        Self::for_type(kind).contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Utilities => "utilities",
            Category::Entertainment => "entertainment",
            Category::Housing => "housing",
            Category::Healthcare => "healthcare",
            Category::Personal => "personal",
            Category::Education => "education",
            Category::Investments => "investments",
            Category::Salary => "salary",
            Category::Gift => "gift",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::INCOME
            .iter()
            .chain(Category::EXPENSE)
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| anyhow!("Category '{}' not found", s.trim()))
    }
}

/// Where a transaction was entered from. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatedBy {
    User,
    Whatsapp,
    Ai,
}

impl CreatedBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreatedBy::User => "user",
            CreatedBy::Whatsapp => "whatsapp",
            CreatedBy::Ai => "ai",
        }
    }
}

impl fmt::Display for CreatedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub r#type: TransactionType,
    pub amount: Decimal, // magnitude, sign implied by type
    pub category: Category,
    pub description: String,
    pub date: NaiveDateTime,
    pub created_by: CreatedBy,
}

/// Caller-supplied fields for a transaction that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary<'a> {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub recent_transactions: Vec<&'a Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub total_amount: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub month: String, // "Mon YYYY"
    pub start: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
}
