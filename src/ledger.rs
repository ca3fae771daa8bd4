// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory edits over the category list.
//!
//! Callers load a snapshot from the store, apply one of these edits and save
//! the whole list back.

use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, Transaction};

/// Finds a category by id, falling back to a case-insensitive name match.
pub fn find_category<'a>(categories: &'a [Category], key: &str) -> BudgetResult<&'a Category> {
    position(categories, key).map(|i| &categories[i])
}

fn position(categories: &[Category], key: &str) -> BudgetResult<usize> {
    let key = key.trim();
    categories
        .iter()
        .position(|c| c.id == key)
        .or_else(|| {
            categories
                .iter()
                .position(|c| c.name.to_lowercase() == key.to_lowercase())
        })
        .ok_or_else(|| BudgetError::CategoryNotFound(key.to_string()))
}

pub fn add_category(
    categories: &mut Vec<Category>,
    name: &str,
    icon: Option<&str>,
) -> BudgetResult<Category> {
    let category = Category::new(name, icon)?;
    info!(id = %category.id, name = %category.name, "category added");
    categories.push(category.clone());
    Ok(category)
}

pub fn rename_category(categories: &mut [Category], key: &str, name: &str) -> BudgetResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BudgetError::EmptyName);
    }
    let i = position(categories, key)?;
    info!(id = %categories[i].id, from = %categories[i].name, to = %name, "category renamed");
    categories[i].name = name.to_string();
    Ok(())
}

pub fn set_icon(categories: &mut [Category], key: &str, icon: &str) -> BudgetResult<()> {
    let i = position(categories, key)?;
    let icon = icon.trim();
    categories[i].icon = if icon.is_empty() {
        None
    } else {
        Some(icon.to_string())
    };
    Ok(())
}

/// Removes a category together with all of its transactions.
pub fn delete_category(categories: &mut Vec<Category>, key: &str) -> BudgetResult<Category> {
    let i = position(categories, key)?;
    let removed = categories.remove(i);
    info!(
        id = %removed.id,
        transactions = removed.transactions.len(),
        "category deleted"
    );
    Ok(removed)
}

pub fn add_transaction(
    categories: &mut [Category],
    key: &str,
    tx: Transaction,
) -> BudgetResult<()> {
    let i = position(categories, key)?;
    info!(category = %categories[i].name, id = %tx.id, amount = %tx.amount, kind = %tx.r#type, "transaction added");
    categories[i].transactions.push(tx);
    Ok(())
}

/// Locates a transaction anywhere in the list as `(category index, tx index)`.
pub fn locate_transaction(categories: &[Category], id: &str) -> BudgetResult<(usize, usize)> {
    let id = id.trim();
    categories
        .iter()
        .enumerate()
        .find_map(|(ci, c)| {
            c.transactions
                .iter()
                .position(|t| t.id == id)
                .map(|ti| (ci, ti))
        })
        .ok_or_else(|| BudgetError::TransactionNotFound(id.to_string()))
}

/// Replaces a transaction wholesale, keeping its id and its position.
pub fn update_transaction(categories: &mut [Category], tx: Transaction) -> BudgetResult<()> {
    let (ci, ti) = locate_transaction(categories, &tx.id)?;
    info!(id = %tx.id, "transaction updated");
    categories[ci].transactions[ti] = tx;
    Ok(())
}

pub fn delete_transaction(categories: &mut [Category], id: &str) -> BudgetResult<Transaction> {
    let (ci, ti) = locate_transaction(categories, id)?;
    let removed = categories[ci].transactions.remove(ti);
    info!(id = %removed.id, "transaction deleted");
    Ok(removed)
}
