// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Relative time windows over transaction dates.
//!
//! Dates are compared as zero-padded `YYYY-MM-DD` strings, which sort the same
//! way lexicographically as chronologically. Every window is inclusive on both
//! ends and anchored to the caller's `today`, never to the transaction.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::BudgetError;
use crate::models::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    Today,
    Week,
    #[default]
    Month,
    All,
}

impl Window {
    pub const ALL: [Window; 4] = [Window::Today, Window::Week, Window::Month, Window::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            Window::Today => "today",
            Window::Week => "week",
            Window::Month => "month",
            Window::All => "all",
        }
    }

    /// Inclusive `(start, end)` day strings, or `None` for the unbounded window.
    pub fn bounds(&self, today: NaiveDate) -> Option<(String, String)> {
        let start = match self {
            Window::Today => today,
            Window::Week => today - Duration::days(6),
            Window::Month => today.with_day(1).unwrap_or(today),
            Window::All => return None,
        };
        Some((day_string(start), day_string(today)))
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Window {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Window::ALL
            .into_iter()
            .find(|w| w.as_str() == s)
            .ok_or(BudgetError::UnknownWindow(s))
    }
}

/// Keeps the transactions that fall inside `window`, in their original order.
pub fn filter(transactions: &[Transaction], window: Window, today: NaiveDate) -> Vec<Transaction> {
    match window.bounds(today) {
        None => transactions.to_vec(),
        Some((start, end)) => transactions
            .iter()
            .filter(|tx| in_range(tx.day(), &start, &end))
            .cloned()
            .collect(),
    }
}

fn in_range(day: &str, start: &str, end: &str) -> bool {
    !day.is_empty() && start <= day && day <= end
}

pub fn day_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
