//! Money and percentage primitives.
//!
//! Every monetary value in the engine is an `i64` number of **centavos**.
//! Ratios between amounts are rounded with exact integer arithmetic
//! ([`round_ratio`], [`percent_of`]); floating point is only used where the
//! contract itself is fractional (hourly rate, [`round_to_2_decimals`]).
use std::{
    fmt,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use crate::EngineError;

/// Standard monthly work hours used to derive an hourly rate from the
/// monthly minimum wage.
pub const MONTHLY_WORK_HOURS: f64 = 220.0;

/// Approximation of weeks per month used to turn weekly housework hours into
/// a monthly amount.
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// Hourly rate (in cents) derived from the monthly minimum wage.
///
/// Returns `0.0` when the minimum wage is not positive.
#[must_use]
pub fn hourly_rate(minimum_wage: i64) -> f64 {
    if minimum_wage <= 0 {
        return 0.0;
    }
    minimum_wage as f64 / MONTHLY_WORK_HOURS
}

/// Monthly value (in cents) of `weekly_hours` of housework paid at
/// `hourly_rate`.
///
/// Rounding happens once, on the final product.
///
/// ```rust
/// use engine::housework_value;
///
/// assert_eq!(housework_value(10.0, 737.0), 29_480);
/// assert_eq!(housework_value(0.0, 737.0), 0);
/// ```
#[must_use]
pub fn housework_value(weekly_hours: f64, hourly_rate: f64) -> i64 {
    if weekly_hours <= 0.0 || hourly_rate <= 0.0 {
        return 0;
    }
    (weekly_hours * WEEKS_PER_MONTH * hourly_rate).round() as i64
}

/// Rounds to two decimal places, halfway cases away from zero.
#[must_use]
pub fn round_to_2_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `numerator / denominator` rounded half-up to the nearest integer.
///
/// Intermediates are widened to `i128`, so `expenses * income` products
/// cannot overflow. Returns `0` when `denominator` is `0`.
#[must_use]
pub fn round_ratio(numerator: i128, denominator: i128) -> i64 {
    if denominator == 0 {
        return 0;
    }
    let (numerator, denominator) = if denominator < 0 {
        (-numerator, -denominator)
    } else {
        (numerator, denominator)
    };
    // Round half up on the remainder; nothing is doubled, so numerators near
    // the `i128` limit cannot overflow.
    let quotient = numerator.div_euclid(denominator);
    let remainder = numerator.rem_euclid(denominator);
    let quotient = if remainder >= denominator - remainder {
        quotient + 1
    } else {
        quotient
    };
    i64::try_from(quotient).unwrap_or(if quotient > 0 { i64::MAX } else { i64::MIN })
}

/// `part / whole * 100` rounded to two decimals.
///
/// Computed on integer basis points, so values such as `0.125` of a whole
/// always land on `12.5` regardless of binary representation. Returns `0.0`
/// when `whole` is not positive.
#[must_use]
pub fn percent_of(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        return 0.0;
    }
    let basis_points = round_ratio(i128::from(part) * 10_000, i128::from(whole));
    basis_points as f64 / 100.0
}

/// Signed money amount represented as **integer cents** of BRL.
///
/// # Examples
///
/// ```rust
/// use engine::MoneyCents;
///
/// let amount = MoneyCents::new(1_234_56);
/// assert_eq!(amount.cents(), 123456);
/// assert_eq!(amount.to_string(), "R$ 1.234,56");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects
/// more than 2 decimals):
///
/// ```rust
/// use engine::MoneyCents;
///
/// assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
/// assert_eq!("10,5".parse::<MoneyCents>().unwrap().cents(), 1050);
/// assert!("12.345".parse::<MoneyCents>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let reais = (abs / 100).to_string();
        let cents = abs % 100;

        // Thousands grouped with `.` as in pt-BR.
        let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
        for (idx, digit) in reais.chars().enumerate() {
            if idx > 0 && (reais.len() - idx) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }

        write!(f, "{sign}R$ {grouped},{cents:02}")
    }
}

impl From<i64> for MoneyCents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<MoneyCents> for i64 {
    fn from(value: MoneyCents) -> Self {
        value.0
    }
}

impl Add for MoneyCents {
    type Output = MoneyCents;

    fn add(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0 + rhs.0)
    }
}

impl AddAssign for MoneyCents {
    fn add_assign(&mut self, rhs: MoneyCents) {
        self.0 += rhs.0;
    }
}

impl Sub for MoneyCents {
    type Output = MoneyCents;

    fn sub(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0 - rhs.0)
    }
}

impl SubAssign for MoneyCents {
    fn sub_assign(&mut self, rhs: MoneyCents) {
        self.0 -= rhs.0;
    }
}

impl Neg for MoneyCents {
    type Output = MoneyCents;

    fn neg(self) -> Self::Output {
        MoneyCents(-self.0)
    }
}

impl FromStr for MoneyCents {
    type Err = EngineError;

    /// Parses a decimal string (reais) into cents.
    ///
    /// Accepts `.` or `,` as decimal separator, an optional `R$` prefix and
    /// an optional leading `+`/`-`. At most 2 fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount(format!("invalid amount: {s}"));
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim();
        let rest = rest.strip_prefix("R$").unwrap_or(rest).trim();
        if rest.is_empty() {
            return Err(empty());
        }

        let rest = rest.replace(',', ".");
        let mut parts = rest.split('.');
        let reais_str = parts.next().ok_or_else(invalid)?;
        let cents_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        if reais_str.is_empty() || !reais_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let reais: i64 = reais_str.parse().map_err(|_| overflow())?;

        let cents: i64 = match cents_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => return Err(EngineError::InvalidAmount("too many decimals".to_string())),
                }
            }
        };

        let total = reais
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(overflow)?;

        Ok(MoneyCents(if negative { -total } else { total }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_rate_divides_by_monthly_hours() {
        assert_eq!(hourly_rate(0), 0.0);
        assert_eq!(hourly_rate(22_000), 100.0);
        assert!((hourly_rate(151_800) - 690.0).abs() < f64::EPSILON);
    }

    #[test]
    fn housework_value_rounds_final_product() {
        assert_eq!(housework_value(10.0, 737.0), 29_480);
        assert_eq!(housework_value(0.0, 737.0), 0);
        assert_eq!(housework_value(10.0, 0.0), 0);
        // 3 * 4 * 0.625 = 7.5
        assert_eq!(housework_value(3.0, 0.625), 8);
        assert_eq!(housework_value(10.0, hourly_rate(151_800)), 27_600);
    }

    #[test]
    fn round_to_2_decimals_half_away_from_zero() {
        assert_eq!(round_to_2_decimals(62.5), 62.5);
        assert_eq!(round_to_2_decimals(33.333_333), 33.33);
        assert_eq!(round_to_2_decimals(66.666_666), 66.67);
        assert_eq!(round_to_2_decimals(0.0), 0.0);
    }

    #[test]
    fn round_ratio_is_half_up() {
        assert_eq!(round_ratio(2001, 2), 1001);
        assert_eq!(round_ratio(2000, 2), 1000);
        assert_eq!(round_ratio(1, 3), 0);
        assert_eq!(round_ratio(2, 3), 1);
        assert_eq!(round_ratio(5, 0), 0);
        assert_eq!(round_ratio(-3, 2), -1);
        let max = i128::from(i64::MAX);
        assert_eq!(round_ratio(max * max, max + 1), i64::MAX - 1);
    }

    #[test]
    fn percent_of_uses_basis_points() {
        assert_eq!(percent_of(125_000, 200_000), 62.5);
        assert_eq!(percent_of(1, 3), 33.33);
        assert_eq!(percent_of(2, 3), 66.67);
        assert_eq!(percent_of(1, 800), 0.13);
        assert_eq!(percent_of(10, 0), 0.0);
    }

    #[test]
    fn display_formats_brl() {
        assert_eq!(MoneyCents::new(0).to_string(), "R$ 0,00");
        assert_eq!(MoneyCents::new(1).to_string(), "R$ 0,01");
        assert_eq!(MoneyCents::new(1050).to_string(), "R$ 10,50");
        assert_eq!(MoneyCents::new(123_456_789).to_string(), "R$ 1.234.567,89");
        assert_eq!(MoneyCents::new(-100_000).to_string(), "-R$ 1.000,00");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<MoneyCents>().unwrap().cents(), 1050);
        assert_eq!("10,50".parse::<MoneyCents>().unwrap().cents(), 1050);
        assert_eq!("R$ 1518".parse::<MoneyCents>().unwrap().cents(), 151_800);
        assert_eq!("-0,01".parse::<MoneyCents>().unwrap().cents(), -1);
        assert_eq!("  2.30 ".parse::<MoneyCents>().unwrap().cents(), 230);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("12.345".parse::<MoneyCents>().is_err());
        assert!("".parse::<MoneyCents>().is_err());
        assert!("1.234,56".parse::<MoneyCents>().is_err());
        assert!("abc".parse::<MoneyCents>().is_err());
    }
}
