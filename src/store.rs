// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::models::{CreatedBy, NewTransaction, Transaction};

const ID_PREFIX: &str = "trans-";

/// Largest amount a single transaction may carry: one trillion.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// In-memory transaction log. The only way in is `add`, which validates
/// and places the new record at the head; records are never mutated.
#[derive(Debug, Default, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    last_id: u64,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with already-formed records. Generated ids continue
    /// after the highest `trans-N` already present.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let last_id = transactions
            .iter()
            .filter_map(|t| t.id.strip_prefix(ID_PREFIX))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        debug!(count = transactions.len(), last_id, "seeded transaction store");
        Self {
            transactions,
            last_id,
        }
    }

    pub fn add(&mut self, new: NewTransaction) -> Result<&Transaction, ValidationError> {
        if let Err(err) = validate(&new) {
            warn!(field = err.field(), %err, "rejected transaction");
            return Err(err);
        }
        self.last_id += 1;
        let tx = Transaction {
            id: format!("{}{}", ID_PREFIX, self.last_id),
            r#type: new.r#type,
            amount: new.amount,
            category: new.category,
            description: new.description.trim().to_string(),
            date: new.date,
            created_by: CreatedBy::User,
        };
        debug!(id = %tx.id, kind = %tx.r#type, amount = %tx.amount, "added transaction");
        self.transactions.insert(0, tx);
        Ok(&self.transactions[0])
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

pub fn validate(new: &NewTransaction) -> Result<(), ValidationError> {
    if new.amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(new.amount));
    }
    if new.amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge {
            got: new.amount,
            max: MAX_AMOUNT,
        });
    }
    if new.description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    if !new.category.is_valid_for(new.r#type) {
        return Err(ValidationError::CategoryMismatch {
            category: new.category,
            kind: new.r#type,
        });
    }
    Ok(())
}
