//! The module contains the per-party view of a division.
use serde::{Deserialize, Serialize};

use crate::money::percent_of;

/// What a single party pays and how it weighs on their budget.
///
/// Amounts are integer cents, percentages are rounded to two decimals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonResult {
    /// Cents paid toward the shared expenses.
    pub contribution: i64,
    /// Share of the total expenses, `0` when there are no expenses.
    pub expense_percentage: f64,
    /// Share of the party's own income, `0` when the income is `0`.
    pub income_percentage: f64,
    /// Income left after the contribution. Negative means a deficit.
    pub remaining: i64,
    /// Monthly value imputed to the party's housework, `0` when unused.
    pub housework_value: i64,
}

/// Builds the display metrics of one party from its contribution.
///
/// `income` is always the party's **raw** income, even when the split was
/// driven by an income adjusted with housework value.
///
/// # Examples
///
/// ```rust
/// use engine::build_person_result;
///
/// let person = build_person_result(125_000, 500_000, 200_000, 0);
/// assert_eq!(person.expense_percentage, 62.5);
/// assert_eq!(person.income_percentage, 25.0);
/// assert_eq!(person.remaining, 375_000);
/// ```
#[must_use]
pub fn build_person_result(
    contribution: i64,
    income: i64,
    expenses: i64,
    housework_value: i64,
) -> PersonResult {
    PersonResult {
        contribution,
        expense_percentage: percent_of(contribution, expenses),
        income_percentage: percent_of(contribution, income),
        remaining: income.saturating_sub(contribution),
        housework_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_of_expenses_and_income() {
        let person = build_person_result(125_000, 500_000, 200_000, 0);
        assert_eq!(person.contribution, 125_000);
        assert_eq!(person.expense_percentage, 62.5);
        assert_eq!(person.income_percentage, 25.0);
        assert_eq!(person.remaining, 375_000);
        assert_eq!(person.housework_value, 0);
    }

    #[test]
    fn zero_income_does_not_divide() {
        let person = build_person_result(0, 0, 200_000, 0);
        assert_eq!(person.income_percentage, 0.0);
        assert_eq!(person.expense_percentage, 0.0);
        assert_eq!(person.remaining, 0);
    }

    #[test]
    fn zero_expenses_does_not_divide() {
        let person = build_person_result(0, 500_000, 0, 0);
        assert_eq!(person.expense_percentage, 0.0);
        assert_eq!(person.income_percentage, 0.0);
        assert_eq!(person.remaining, 500_000);
    }

    #[test]
    fn remaining_may_be_negative() {
        let person = build_person_result(150_000, 100_000, 200_000, 27_600);
        assert_eq!(person.remaining, -50_000);
        assert_eq!(person.income_percentage, 150.0);
        assert_eq!(person.housework_value, 27_600);
    }
}
