// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! First-run setup: goal, starter categories, completion flag.

use rusqlite::Connection;
use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, Goal};
use crate::store;

pub struct Preset {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub default_selected: bool,
}

const fn preset(key: &'static str, name: &'static str, icon: &'static str, default_selected: bool) -> Preset {
    Preset {
        key,
        name,
        icon,
        default_selected,
    }
}

pub const PRESETS: &[Preset] = &[
    preset("food", "Comida", "🍕", true),
    preset("transport", "Transporte", "🚗", true),
    preset("shopping", "Compras", "🛍️", true),
    preset("home", "Hogar", "🏠", true),
    preset("health", "Salud", "🏥", false),
    preset("entertainment", "Entretenimiento", "🎮", false),
    preset("work", "Trabajo", "💼", false),
    preset("gifts", "Regalos", "🎁", false),
    preset("education", "Educación", "📚", false),
    preset("sports", "Deportes", "🏋️", false),
    preset("hobbies", "Hobbies", "🎨", false),
    preset("pets", "Mascotas", "🐕", false),
    preset("smoking", "Fumar", "🚬", false),
    preset("alcohol", "Alcohol", "🍺", false),
    preset("gambling", "Juegos", "🎰", false),
    preset("cards", "Tarjetas", "💳", false),
    preset("bank", "Banco", "🏦", false),
    preset("technology", "Tecnología", "📱", false),
    preset("travel", "Viajes", "✈️", false),
    preset("music", "Música", "🎵", false),
];

/// Resolves a preset by key (`food`) or display name (`Comida`), ignoring case.
pub fn find_preset(key: &str) -> BudgetResult<&'static Preset> {
    let key = key.trim().to_lowercase();
    PRESETS
        .iter()
        .find(|p| p.key == key || p.name.to_lowercase() == key)
        .ok_or(BudgetError::CategoryNotFound(key))
}

pub fn default_presets() -> Vec<&'static Preset> {
    PRESETS.iter().filter(|p| p.default_selected).collect()
}

/// Stores the goal, appends the selected presets as categories and marks
/// onboarding complete. `None` selects the default presets; an empty
/// selection skips category setup and creates nothing.
pub fn complete(
    conn: &Connection,
    goal: Option<Goal>,
    selection: Option<&[String]>,
) -> BudgetResult<Vec<Category>> {
    if store::is_onboarding_complete(conn)? {
        return Err(BudgetError::AlreadyOnboarded);
    }
    let presets = match selection {
        Some(keys) => keys
            .iter()
            .map(|k| find_preset(k))
            .collect::<BudgetResult<Vec<_>>>()?,
        None => default_presets(),
    };

    if let Some(goal) = goal {
        store::save_goal(conn, goal)?;
    }
    let names: Vec<String> = presets.iter().map(|p| p.name.to_string()).collect();
    store::save_selected(conn, &names)?;

    let mut categories = store::load_categories(conn)?;
    let mut created = Vec::with_capacity(presets.len());
    for p in presets {
        let category = Category::new(p.name, Some(p.icon))?;
        created.push(category.clone());
        categories.push(category);
    }
    store::save_categories(conn, &categories)?;
    store::set_onboarding_complete(conn)?;
    info!(goal = ?goal, categories = created.len(), "onboarding complete");
    Ok(created)
}

pub fn require_onboarded(conn: &Connection) -> BudgetResult<()> {
    if store::is_onboarding_complete(conn)? {
        Ok(())
    } else {
        Err(BudgetError::NotOnboarded)
    }
}
