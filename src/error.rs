// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error type shared by the budgeting core, the ledger and the store.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BudgetError {
    /// A stored transaction violates an entry-time rule (e.g. negative amount).
    #[error("Invalid transaction '{id}': {reason}")]
    InvalidTransaction { id: String, reason: String },

    #[error("Amounts too large to add up ({0})")]
    Overflow(&'static str),

    #[error("Invalid amount '{0}', expected a non-negative number")]
    InvalidAmount(String),

    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Category name must not be empty")]
    EmptyName,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown time window '{0}' (use today|week|month|all)")]
    UnknownWindow(String),

    #[error("Unknown transaction type '{0}' (use income|expense)")]
    UnknownType(String),

    #[error("Unknown goal '{0}' (use save|track|budget|all)")]
    UnknownGoal(String),

    #[error("Category '{0}' not found")]
    CategoryNotFound(String),

    #[error("Transaction '{0}' not found")]
    TransactionNotFound(String),

    #[error("Onboarding already completed; run `reset` to start over")]
    AlreadyOnboarded,

    #[error("Onboarding not completed; run `onboard` first")]
    NotOnboarded,

    #[error("Storage error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BudgetResult<T> = Result<T, BudgetError>;
