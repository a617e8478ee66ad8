//! Formatting helpers for timestamps and amounts.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a `Timestamp` in the system timezone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats a price in dollars with thousands separators.
///
/// Whole amounts print without cents.
///
/// ```rust
/// use bastion_core::display::Money;
///
/// assert_eq!(Money(1700.0).to_string(), "$1,700");
/// assert_eq!(Money(1234567.5).to_string(), "$1,234,567.50");
/// assert_eq!(Money(0.0).to_string(), "$0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money(pub f64);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = (self.0.abs() * 100.0).round() as u64;
        let (whole, fraction) = (cents / 100, cents % 100);

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        let sign = if self.0 < 0.0 && cents > 0 { "-" } else { "" };
        if fraction == 0 {
            write!(f, "{sign}${grouped}")
        } else {
            write!(f, "{sign}${grouped}.{fraction:02}")
        }
    }
}
