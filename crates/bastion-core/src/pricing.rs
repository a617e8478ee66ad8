//! Employee-count bracket lookup.
//!
//! A tiered plan is priced by the first bracket whose inclusive range holds
//! the employee count. When no bracket matches, the [`BracketFallback`]
//! policy decides the outcome. The default, [`BracketFallback::LastBracket`],
//! charges the last bracket's price for any unmatched count, including counts
//! below the lowest bracket.

use std::str::FromStr;

use crate::models::{PlanCatalogEntry, PriceBracket, Pricing};

/// Policy for employee counts that match no bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BracketFallback {
    /// Any unmatched count is charged the last bracket's price
    #[default]
    LastBracket,
    /// Counts below the first bracket's minimum use the first bracket;
    /// everything else unmatched uses the last bracket
    ClampToRange,
}

impl BracketFallback {
    pub fn as_str(&self) -> &'static str {
        match self {
            BracketFallback::LastBracket => "last-bracket",
            BracketFallback::ClampToRange => "clamp-to-range",
        }
    }
}

impl FromStr for BracketFallback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "last-bracket" | "last_bracket" | "last" => Ok(BracketFallback::LastBracket),
            "clamp-to-range" | "clamp_to_range" | "clamp" => Ok(BracketFallback::ClampToRange),
            _ => Err(format!("Invalid bracket fallback: {s}")),
        }
    }
}

/// Looks up the price for `employees` in `brackets`.
///
/// Returns `None` only when `brackets` is empty.
pub fn bracket_price(
    brackets: &[PriceBracket],
    employees: u32,
    fallback: BracketFallback,
) -> Option<f64> {
    if let Some(bracket) = brackets.iter().find(|b| b.contains(employees)) {
        return Some(bracket.price);
    }

    let first = brackets.first()?;
    match fallback {
        BracketFallback::ClampToRange if employees < first.min => Some(first.price),
        _ => brackets.last().map(|b| b.price),
    }
}

impl Pricing {
    /// Resolves the price for a company of the given size.
    pub fn price_for(&self, employees: u32, fallback: BracketFallback) -> Option<f64> {
        match self {
            Pricing::Tiered { brackets } => bracket_price(brackets, employees, fallback),
            Pricing::Flat { price } => Some(*price),
        }
    }

    /// Lowest price this pricing can produce, for "from $X" labels.
    pub fn starting_price(&self) -> Option<f64> {
        match self {
            Pricing::Tiered { brackets } => brackets.iter().map(|b| b.price).reduce(f64::min),
            Pricing::Flat { price } => Some(*price),
        }
    }
}

impl PlanCatalogEntry {
    /// Resolves this entry's price for a company of the given size.
    pub fn price_for(&self, employees: u32, fallback: BracketFallback) -> Option<f64> {
        self.pricing.price_for(employees, fallback)
    }
}
