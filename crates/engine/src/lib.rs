//! Expense-division engine.
//!
//! Pure, stateless functions that split shared household expenses between
//! two parties, plus the share-link codec that carries their inputs. Nothing
//! here performs I/O or holds state: every function is safe to call from any
//! thread or async context.
//!
//! ```rust
//! use engine::{CalculationInput, DivisionMethod};
//!
//! let input = CalculationInput {
//!     income_a: 500_000,
//!     income_b: 300_000,
//!     expenses: 200_000,
//!     ..Default::default()
//! };
//! let result = DivisionMethod::Proportional.calculate(&input);
//! assert_eq!(result.person_a.contribution, 125_000);
//! assert_eq!(result.person_b.contribution, 75_000);
//! ```
pub use calculations::{
    CalculationInput, CalculationResult, MINIMUM_SHARE_PERCENT, calculate_adjusted,
    calculate_equal, calculate_hybrid, calculate_proportional,
};
pub use error::EngineError;
pub use method::{DivisionMethod, METHODS, MethodInfo, calculate_all};
pub use money::{
    MONTHLY_WORK_HOURS, MoneyCents, WEEKS_PER_MONTH, hourly_rate, housework_value, percent_of,
    round_ratio, round_to_2_decimals,
};
pub use person::{PersonResult, build_person_result};
pub use share::{
    MAX_PREVIEW_NAME_CHARS, ShareData, ShareField, ShareIssue, ShareParams, ShareParamsError,
    build_share_url, url_query, parse_share_params_lenient, query_map,
};

mod calculations;
mod error;
mod method;
mod money;
mod person;
mod share;
