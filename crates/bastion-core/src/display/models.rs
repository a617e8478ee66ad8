//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it richly or print it as
//! plain text.

use std::fmt;

use super::format::{LocalDateTime, Money};
use crate::{
    models::{PlanCatalogEntry, PlanOption, PlanSelection, Pricing},
    pricing::BracketFallback,
};

impl fmt::Display for PlanSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **Employees**: {}", self.number_of_employees)?;
        writeln!(f, "- **Price**: {}", Money(self.price))?;
        writeln!(f, "- **Added**: {}", LocalDateTime(&self.timestamp))
    }
}

impl fmt::Display for Pricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pricing::Flat { price } => writeln!(f, "- Flat price: {}", Money(*price)),
            Pricing::Tiered { brackets } => {
                for bracket in brackets {
                    writeln!(
                        f,
                        "- {}-{} employees: {}",
                        bracket.min,
                        bracket.max,
                        Money(bracket.price)
                    )?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for PlanCatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.title, self.id)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        writeln!(f, "## Pricing")?;
        writeln!(f)?;
        write!(f, "{}", self.pricing)?;

        if !self.exclusive_with.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Cannot be combined with")?;
            writeln!(f)?;
            for id in &self.exclusive_with {
                writeln!(f, "- {id}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let price = match (self.price, self.starting_price) {
            (Some(price), _) => Money(price).to_string(),
            (None, Some(from)) => format!("from {}", Money(from)),
            (None, None) => "not available".to_string(),
        };

        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;
        match self.employees {
            Some(employees) => writeln!(f, "- **Price for {employees} employees**: {price}")?,
            None => writeln!(f, "- **Price**: {price}")?,
        }

        if self.in_cart {
            writeln!(f, "- **Status**: ✓ In cart")?;
        } else if let Some(blocker) = &self.blocked_by {
            writeln!(f, "- **Status**: ✗ Unavailable while '{blocker}' is in the cart")?;
        } else {
            writeln!(f, "- **Status**: ○ Available")?;
        }

        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for BracketFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
