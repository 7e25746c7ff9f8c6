//! Read-only portfolio views supplied by the account collaborator.
//!
//! The engine never mutates these; it only reads exposure data and returns a
//! recommended share count.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PositionSide {
    Long,
    Short,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub quantity: u64,
    pub entry_price: f64,
    pub side: PositionSide,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub cash: f64,
    pub equity: f64,
    pub positions: HashMap<String, Position>,
}

impl PortfolioSnapshot {
    pub fn new(cash: f64, equity: f64) -> Self {
        Self {
            cash,
            equity,
            positions: HashMap::new(),
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.positions.insert(position.symbol.clone(), position);
        self
    }

    pub fn held_tickers(&self) -> Vec<&str> {
        self.positions.keys().map(String::as_str).collect()
    }
}
