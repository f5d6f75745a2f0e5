//! The module contains the division-method calculators.
//!
//! Every calculator follows the same rule: party A's contribution is computed
//! first and party B pays `expenses - contribution_a`. The two contributions
//! always add up to `expenses` and any leftover cent lands on party B.
use serde::{Deserialize, Serialize};

use crate::{
    method::DivisionMethod,
    money::{hourly_rate, housework_value, round_ratio},
    person::{PersonResult, build_person_result},
};

/// Minimum share of the expenses each party pays under
/// [`calculate_hybrid`].
pub const MINIMUM_SHARE_PERCENT: i64 = 30;

/// Input of every calculator.
///
/// Money is integer cents, housework is weekly hours. There is no optional
/// field: callers pass `0` explicitly. Values are assumed validated (and
/// non-negative) upstream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub income_a: i64,
    pub income_b: i64,
    pub expenses: i64,
    pub housework_a: u32,
    pub housework_b: u32,
    pub minimum_wage: i64,
}

/// Result of one division method.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub person_a: PersonResult,
    pub person_b: PersonResult,
    pub method: DivisionMethod,
}

/// Party A's share of `expenses` weighted by `weight_a / (weight_a + weight_b)`.
///
/// Weights are summed in `i128`, so any pair of `i64` amounts is accepted.
/// Falls back to half of the expenses when the total weight is zero.
fn share_of_a(expenses: i64, weight_a: i128, weight_b: i128) -> i64 {
    let total_weight = weight_a + weight_b;
    if total_weight == 0 {
        return round_ratio(i128::from(expenses), 2);
    }
    round_ratio(i128::from(expenses) * weight_a, total_weight)
}

/// Splits expenses in proportion to raw income.
#[must_use]
pub fn calculate_proportional(input: &CalculationInput) -> CalculationResult {
    let contribution_a = share_of_a(
        input.expenses,
        i128::from(input.income_a),
        i128::from(input.income_b),
    );
    let contribution_b = input.expenses - contribution_a;

    CalculationResult {
        person_a: build_person_result(contribution_a, input.income_a, input.expenses, 0),
        person_b: build_person_result(contribution_b, input.income_b, input.expenses, 0),
        method: DivisionMethod::Proportional,
    }
}

/// Splits expenses in proportion to income plus imputed housework value.
///
/// Housework only moves the ratio: percentages and remaining balance are
/// still computed on each party's raw income. The result is tagged
/// [`DivisionMethod::Proportional`].
#[must_use]
pub fn calculate_adjusted(input: &CalculationInput) -> CalculationResult {
    let rate = hourly_rate(input.minimum_wage);
    let housework_value_a = housework_value(f64::from(input.housework_a), rate);
    let housework_value_b = housework_value(f64::from(input.housework_b), rate);

    let adjusted_income_a = i128::from(input.income_a) + i128::from(housework_value_a);
    let adjusted_income_b = i128::from(input.income_b) + i128::from(housework_value_b);

    let contribution_a = share_of_a(input.expenses, adjusted_income_a, adjusted_income_b);
    let contribution_b = input.expenses - contribution_a;

    CalculationResult {
        person_a: build_person_result(
            contribution_a,
            input.income_a,
            input.expenses,
            housework_value_a,
        ),
        person_b: build_person_result(
            contribution_b,
            input.income_b,
            input.expenses,
            housework_value_b,
        ),
        method: DivisionMethod::Proportional,
    }
}

/// Splits expenses 50/50, ignoring income and housework.
#[must_use]
pub fn calculate_equal(input: &CalculationInput) -> CalculationResult {
    let contribution_a = share_of_a(input.expenses, 0, 0);
    let contribution_b = input.expenses - contribution_a;

    CalculationResult {
        person_a: build_person_result(contribution_a, input.income_a, input.expenses, 0),
        person_b: build_person_result(contribution_b, input.income_b, input.expenses, 0),
        method: DivisionMethod::Equal,
    }
}

/// Proportional split where nobody pays less than
/// [`MINIMUM_SHARE_PERCENT`] of the expenses.
///
/// Party A's proportional share is clamped into `[floor, expenses - floor]`,
/// which is the same as each party paying `max(proportional, floor)` while
/// keeping the sum exact.
#[must_use]
pub fn calculate_hybrid(input: &CalculationInput) -> CalculationResult {
    let proportional_a = share_of_a(
        input.expenses,
        i128::from(input.income_a),
        i128::from(input.income_b),
    );
    let floor = round_ratio(
        i128::from(input.expenses) * i128::from(MINIMUM_SHARE_PERCENT),
        100,
    );

    // `max` then `min` rather than `clamp`: unvalidated negative expenses
    // would invert the bounds.
    let contribution_a = proportional_a.max(floor).min(input.expenses - floor);
    let contribution_b = input.expenses - contribution_a;

    CalculationResult {
        person_a: build_person_result(contribution_a, input.income_a, input.expenses, 0),
        person_b: build_person_result(contribution_b, input.income_b, input.expenses, 0),
        method: DivisionMethod::Hybrid,
    }
}
