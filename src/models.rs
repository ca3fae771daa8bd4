// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BudgetError, BudgetResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    Income,
    Expense,
}

impl TxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Income => "income",
            TxType::Expense => "expense",
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxType {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TxType::Income),
            "expense" => Ok(TxType::Expense),
            other => Err(BudgetError::UnknownType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub description: String,
    #[serde(default)]
    pub date: String, // YYYY-MM-DD, may be empty in old data
    pub r#type: TxType,
}

impl Transaction {
    /// Builds a transaction from raw user input, applying the entry-time rules:
    /// the amount must parse and be non-negative, the description is trimmed
    /// and must not be empty, and the date must be a valid `YYYY-MM-DD`.
    pub fn new(amount: &str, description: &str, date: &str, r#type: TxType) -> BudgetResult<Self> {
        let amount = parse_amount(amount)?;
        let description = parse_description(description)?;
        let date = parse_date(date)?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            amount,
            description,
            date: date.format("%Y-%m-%d").to_string(),
            r#type,
        })
    }

    /// Calendar day of the transaction with any time-of-day suffix removed.
    /// Returns an empty string for undated records.
    pub fn day(&self) -> &str {
        let date = self.date.trim();
        match date.split_once('T') {
            Some((day, _)) => day,
            None => date,
        }
    }

    /// Signed contribution to a net figure: `+amount` for income, `-amount`
    /// for expenses.
    pub fn signed_amount(&self) -> Decimal {
        match self.r#type {
            TxType::Income => self.amount,
            TxType::Expense => -self.amount,
        }
    }

    pub fn check(&self) -> BudgetResult<()> {
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            return Err(BudgetError::InvalidTransaction {
                id: self.id.clone(),
                reason: format!("negative amount {}", self.amount),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Category {
    pub fn new(name: &str, icon: Option<&str>) -> BudgetResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BudgetError::EmptyName);
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            icon: icon
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            transactions: Vec::new(),
        })
    }
}

/// What the user wants out of the app, chosen during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Save,
    Track,
    Budget,
    All,
}

impl Goal {
    pub const ALL: [Goal; 4] = [Goal::Save, Goal::Track, Goal::Budget, Goal::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Save => "save",
            Goal::Track => "track",
            Goal::Budget => "budget",
            Goal::All => "all",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Goal::Save => "💰",
            Goal::Track => "📊",
            Goal::Budget => "📈",
            Goal::All => "🎯",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Goal::Save => "Ahorrar dinero",
            Goal::Track => "Controlar gastos",
            Goal::Budget => "Mejorar presupuesto",
            Goal::All => "Todos los anteriores",
        }
    }
}

impl FromStr for Goal {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Goal::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or(BudgetError::UnknownGoal(s))
    }
}

pub fn parse_amount(s: &str) -> BudgetResult<Decimal> {
    let trimmed = s.trim();
    let amount = trimmed
        .parse::<Decimal>()
        .map_err(|_| BudgetError::InvalidAmount(trimmed.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(BudgetError::InvalidAmount(trimmed.to_string()));
    }
    Ok(amount)
}

pub fn parse_description(s: &str) -> BudgetResult<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(BudgetError::EmptyDescription);
    }
    Ok(trimmed.to_string())
}

pub fn parse_date(s: &str) -> BudgetResult<NaiveDate> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| BudgetError::InvalidDate(trimmed.to_string()))
}
