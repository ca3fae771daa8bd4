// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Income/expense totals and the per-category spending breakdown.
//!
//! All sums are accumulated as [`Decimal`], so the result does not depend on
//! summation order and many small amounts never drift. Sums past
//! [`Decimal::MAX`] fail with [`BudgetError::Overflow`] instead of panicking.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{BudgetError, BudgetResult};
use crate::icons::{bar_color, resolve_icon};
use crate::models::{Category, Transaction, TxType};
use crate::window::{self, Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    pub category_id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub spending: Decimal,
    pub percentage: Decimal,
}

pub fn totals<'a, I>(transactions: I) -> BudgetResult<Totals>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for tx in transactions {
        tx.check()?;
        match tx.r#type {
            TxType::Income => income = checked_sum(income, tx.amount, "income")?,
            TxType::Expense => expenses = checked_sum(expenses, tx.amount, "expenses")?,
        }
    }
    Ok(Totals {
        income,
        expenses,
        balance: income
            .checked_sub(expenses)
            .ok_or(BudgetError::Overflow("balance"))?,
    })
}

/// Totals over every category's transactions that fall inside `window`.
pub fn window_totals(categories: &[Category], window: Window, today: NaiveDate) -> BudgetResult<Totals> {
    let filtered: Vec<Transaction> = categories
        .iter()
        .flat_map(|c| window::filter(&c.transactions, window, today))
        .collect();
    totals(&filtered)
}

/// Expense spending per category for `window`, largest first.
///
/// Every category appears, even with nothing spent. Ties keep the input
/// order. Percentages are of the summed spending and are all zero when
/// nothing was spent.
pub fn category_breakdown(
    categories: &[Category],
    window: Window,
    today: NaiveDate,
) -> BudgetResult<Vec<CategorySpending>> {
    let mut spent = Vec::with_capacity(categories.len());
    for category in categories {
        let filtered = window::filter(&category.transactions, window, today);
        let t = totals(&filtered)?;
        spent.push((category, t.expenses));
    }

    let total = spent
        .iter()
        .try_fold(Decimal::ZERO, |acc, (_, s)| checked_sum(acc, *s, "spending"))?;

    let mut rows: Vec<CategorySpending> = spent
        .into_iter()
        .map(|(c, spending)| CategorySpending {
            category_id: c.id.clone(),
            name: c.name.clone(),
            icon: resolve_icon(&c.name, c.icon.as_deref()),
            color: bar_color(&c.name).to_string(),
            spending,
            percentage: if total.is_zero() {
                Decimal::ZERO
            } else {
                // ratio is at most 1, so scaling it cannot overflow
                spending / total * Decimal::ONE_HUNDRED
            },
        })
        .collect();
    // sort_by is stable
    rows.sort_by(|a, b| b.spending.cmp(&a.spending));
    Ok(rows)
}

/// Signed net of all of a category's transactions, ignoring any window.
pub fn category_total(category: &Category) -> BudgetResult<Decimal> {
    category
        .transactions
        .iter()
        .try_fold(Decimal::ZERO, |acc, tx| {
            acc.checked_add(tx.signed_amount())
                .ok_or(BudgetError::Overflow("category total"))
        })
}

fn checked_sum(acc: Decimal, amount: Decimal, what: &'static str) -> BudgetResult<Decimal> {
    acc.checked_add(amount).ok_or(BudgetError::Overflow(what))
}
