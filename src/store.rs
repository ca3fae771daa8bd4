// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Typed access to the key-value store.
//!
//! The category list lives as one JSON document under [`CATEGORIES_KEY`];
//! onboarding state uses its own keys.

use rusqlite::Connection;
use tracing::{debug, warn};

use crate::db;
use crate::error::BudgetResult;
use crate::models::{Category, Goal};

pub const CATEGORIES_KEY: &str = "categories";
pub const ONBOARDING_KEY: &str = "onboardingComplete";
pub const GOAL_KEY: &str = "userGoal";
pub const SELECTED_KEY: &str = "selectedCategories";

pub fn load_categories(conn: &Connection) -> BudgetResult<Vec<Category>> {
    let categories: Vec<Category> = match db::get_value(conn, CATEGORIES_KEY)? {
        Some(json) => serde_json::from_str(&json)?,
        None => Vec::new(),
    };
    let undated = categories
        .iter()
        .flat_map(|c| c.transactions.iter())
        .filter(|t| t.day().is_empty())
        .count();
    if undated > 0 {
        warn!(undated, "stored transactions without a date are only shown under 'all'");
    }
    debug!(categories = categories.len(), "loaded categories");
    Ok(categories)
}

pub fn save_categories(conn: &Connection, categories: &[Category]) -> BudgetResult<()> {
    let json = serde_json::to_string(categories)?;
    db::set_value(conn, CATEGORIES_KEY, &json)?;
    debug!(categories = categories.len(), "saved categories");
    Ok(())
}

pub fn is_onboarding_complete(conn: &Connection) -> BudgetResult<bool> {
    Ok(db::get_value(conn, ONBOARDING_KEY)?.as_deref() == Some("true"))
}

pub fn set_onboarding_complete(conn: &Connection) -> BudgetResult<()> {
    db::set_value(conn, ONBOARDING_KEY, "true")?;
    Ok(())
}

pub fn load_goal(conn: &Connection) -> BudgetResult<Option<Goal>> {
    match db::get_value(conn, GOAL_KEY)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

pub fn save_goal(conn: &Connection, goal: Goal) -> BudgetResult<()> {
    db::set_value(conn, GOAL_KEY, &serde_json::to_string(&goal)?)?;
    Ok(())
}

pub fn save_selected(conn: &Connection, names: &[String]) -> BudgetResult<()> {
    db::set_value(conn, SELECTED_KEY, &serde_json::to_string(names)?)?;
    Ok(())
}

/// Wipes every key, returning the app to its pre-onboarding state.
pub fn reset(conn: &Connection) -> BudgetResult<()> {
    db::clear(conn)?;
    debug!("store cleared");
    Ok(())
}
