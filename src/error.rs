// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Category, TransactionType};

/// Reasons a new transaction is rejected before it reaches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount: must be greater than zero (got {0})")]
    NonPositiveAmount(Decimal),

    #[error("amount: must not exceed {max} (got {got})")]
    AmountTooLarge { got: Decimal, max: Decimal },

    #[error("description: must not be empty")]
    EmptyDescription,

    #[error("category: '{category}' is not a valid {kind} category")]
    CategoryMismatch {
        category: Category,
        kind: TransactionType,
    },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NonPositiveAmount(_) | ValidationError::AmountTooLarge { .. } => {
                "amount"
            }
            ValidationError::EmptyDescription => "description",
            ValidationError::CategoryMismatch { .. } => "category",
        }
    }
}
