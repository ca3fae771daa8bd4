// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Category glyphs and bar colours.
//!
//! Icons resolve in three steps: the category's own icon, then a keyword
//! match on the lowercased name (English and Spanish), then [`DEFAULT_ICON`].

pub const DEFAULT_ICON: &str = "📊";

// First match wins, so order matters.
const KEYWORD_ICONS: &[(&[&str], &str)] = &[
    (&["food", "comida"], "🍕"),
    (&["transport", "transporte"], "🚗"),
    (&["entertainment", "entretenimiento"], "🎬"),
    (&["shopping", "compras"], "🛍️"),
    (&["health", "salud"], "🏥"),
    (&["education", "educacion"], "📚"),
    (&["salary", "salario"], "💰"),
    (&["freelance"], "💼"),
    (&["investment", "inversion"], "📈"),
    (&["gift", "regalo"], "🎁"),
    (&["home", "casa"], "🏠"),
    (&["bills", "facturas"], "📄"),
    (&["gas", "gasolina"], "⛽"),
    (&["coffee", "cafe"], "☕"),
    (&["gym", "ejercicio"], "💪"),
];

/// Glyphs offered when the user picks an icon by hand.
pub const PICKER_ICONS: &[&str] = &[
    "🍕", "🚗", "🎬", "🛍️", "🏥", "📚", "💰", "💼", "📈", "🎁", "🏠", "📄", "⛽", "☕", "💪", "📊",
    "🍔", "🎮", "✈️", "🏦", "💳", "🎵", "🎨",
];

const BAR_COLORS: [&str; 15] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
    "#BB8FCE", "#85C1E9", "#F8C471", "#82E0AA", "#F1948A", "#85C1E9", "#D7BDE2",
];

pub fn infer_icon(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    KEYWORD_ICONS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, icon)| *icon)
}

pub fn resolve_icon(name: &str, custom: Option<&str>) -> String {
    custom
        .filter(|s| !s.trim().is_empty())
        .or_else(|| infer_icon(name))
        .unwrap_or(DEFAULT_ICON)
        .to_string()
}

/// Bar colour keyed on the UTF-16 length of the category name, so a name
/// keeps its colour across runs and platforms.
pub fn bar_color(name: &str) -> &'static str {
    BAR_COLORS[name.encode_utf16().count() % BAR_COLORS.len()]
}
