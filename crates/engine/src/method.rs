//! Division methods and their single dispatch table.
//!
//! [`METHODS`] is the only place that maps a method tag to its label and
//! calculator. UI layers and the API read titles from here.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    EngineError,
    calculations::{
        CalculationInput, CalculationResult, calculate_adjusted, calculate_equal,
        calculate_hybrid, calculate_proportional,
    },
};

/// Policy used to split the expenses between the two parties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionMethod {
    Proportional,
    Adjusted,
    Hybrid,
    Equal,
}

/// Static description of a division method.
#[derive(Clone, Copy, Debug)]
pub struct MethodInfo {
    pub method: DivisionMethod,
    pub title: &'static str,
    pub description: &'static str,
    pub calculate: fn(&CalculationInput) -> CalculationResult,
}

/// Dispatch table, in display order.
pub static METHODS: [MethodInfo; 4] = [
    MethodInfo {
        method: DivisionMethod::Proportional,
        title: "Proporcional à renda",
        description: "Cada pessoa contribui na mesma proporção da sua renda.",
        calculate: calculate_proportional,
    },
    MethodInfo {
        method: DivisionMethod::Adjusted,
        title: "Proporcional com trabalho doméstico",
        description: "As horas de trabalho doméstico são valoradas pelo salário mínimo e somadas à renda.",
        calculate: calculate_adjusted,
    },
    MethodInfo {
        method: DivisionMethod::Hybrid,
        title: "Híbrido com contribuição mínima",
        description: "Proporcional à renda, mas ninguém paga menos de 30% das despesas.",
        calculate: calculate_hybrid,
    },
    MethodInfo {
        method: DivisionMethod::Equal,
        title: "Divisão igual",
        description: "Cada pessoa paga metade das despesas.",
        calculate: calculate_equal,
    },
];

impl DivisionMethod {
    /// Every method, in display order.
    pub const ALL: [DivisionMethod; 4] = [
        DivisionMethod::Proportional,
        DivisionMethod::Adjusted,
        DivisionMethod::Hybrid,
        DivisionMethod::Equal,
    ];

    /// Canonical tag used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Proportional => "proportional",
            Self::Adjusted => "adjusted",
            Self::Hybrid => "hybrid",
            Self::Equal => "equal",
        }
    }

    /// Table entry for this method.
    #[must_use]
    pub fn info(self) -> &'static MethodInfo {
        match self {
            Self::Proportional => &METHODS[0],
            Self::Adjusted => &METHODS[1],
            Self::Hybrid => &METHODS[2],
            Self::Equal => &METHODS[3],
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        self.info().title
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        self.info().description
    }

    /// Runs the calculator registered for this method.
    #[must_use]
    pub fn calculate(self, input: &CalculationInput) -> CalculationResult {
        (self.info().calculate)(input)
    }
}

impl fmt::Display for DivisionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DivisionMethod {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "proportional" => Ok(Self::Proportional),
            "adjusted" => Ok(Self::Adjusted),
            "hybrid" => Ok(Self::Hybrid),
            "equal" => Ok(Self::Equal),
            other => Err(EngineError::InvalidMethod(other.to_string())),
        }
    }
}

/// Runs every method of the table on the same input.
///
/// The requested method is paired with each result: the adjusted calculator
/// reports itself as `proportional`, so the result's own `method` field
/// cannot tell the two apart.
#[must_use]
pub fn calculate_all(input: &CalculationInput) -> Vec<(DivisionMethod, CalculationResult)> {
    METHODS
        .iter()
        .map(|info| (info.method, (info.calculate)(input)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_all() {
        let methods: Vec<_> = METHODS.iter().map(|info| info.method).collect();
        assert_eq!(methods, DivisionMethod::ALL);
        for method in DivisionMethod::ALL {
            assert_eq!(method.info().method, method);
        }
    }

    #[test]
    fn parse_round_trips_tags() {
        for method in DivisionMethod::ALL {
            assert_eq!(method.as_str().parse::<DivisionMethod>(), Ok(method));
        }
        assert_eq!(" Hybrid ".parse::<DivisionMethod>(), Ok(DivisionMethod::Hybrid));
        assert_eq!(
            "fair".parse::<DivisionMethod>(),
            Err(EngineError::InvalidMethod("fair".to_string()))
        );
    }

    #[test]
    fn serde_uses_wire_tags() {
        let json = serde_json::to_string(&DivisionMethod::Hybrid).unwrap();
        assert_eq!(json, "\"hybrid\"");
    }

    #[test]
    fn dispatch_runs_registered_calculator() {
        let input = CalculationInput {
            income_a: 900_000,
            income_b: 100_000,
            expenses: 100_000,
            ..Default::default()
        };
        assert_eq!(
            DivisionMethod::Hybrid.calculate(&input),
            calculate_hybrid(&input)
        );
        assert_eq!(DivisionMethod::Equal.calculate(&input).person_a.contribution, 50_000);
        assert_eq!(
            DivisionMethod::Adjusted.calculate(&input).method,
            DivisionMethod::Proportional
        );
        assert_eq!(calculate_all(&input).len(), 4);
    }
}
