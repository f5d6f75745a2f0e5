use serde::{Deserialize, Serialize};

/// Division method tag as exposed on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Proportional,
    Adjusted,
    Hybrid,
    Equal,
}

pub mod calculation {
    use super::*;

    /// Request body for `POST /calculate`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CalculateRequest {
        pub income_a: i64,
        pub income_b: i64,
        pub expenses: i64,
        #[serde(default)]
        pub housework_a: u32,
        #[serde(default)]
        pub housework_b: u32,
        /// Minimum wage in cents. The server's current rate is used when absent.
        pub minimum_wage: Option<i64>,
        pub method: Method,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct PersonView {
        pub contribution: i64,
        pub expense_percentage: f64,
        pub income_percentage: f64,
        pub remaining: i64,
        pub housework_value: i64,
    }

    /// One method's split.
    ///
    /// `method` is what the engine reports for the result; the adjusted
    /// calculation reports `proportional`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct CalculationView {
        pub person_a: PersonView,
        pub person_b: PersonView,
        pub method: Method,
    }

    /// Entry of the results page: the requested method with its labels.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MethodResult {
        pub method: Method,
        pub title: String,
        pub description: String,
        pub result: CalculationView,
    }

    /// Response body for `GET /results`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ResultsResponse {
        pub data: share::ShareData,
        pub minimum_wage_cents: i64,
        pub share_url: String,
        pub results: Vec<MethodResult>,
    }
}

pub mod share {
    use super::*;

    /// Inputs of a share link, with long field names.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ShareData {
        pub name_a: String,
        pub income_a: i64,
        pub name_b: String,
        pub income_b: i64,
        pub expenses: i64,
        #[serde(default)]
        pub housework_a: u32,
        #[serde(default)]
        pub housework_b: u32,
    }

    /// Response body for `POST /share`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ShareUrl {
        pub url: String,
    }

    /// Error body returned when a share link fails validation.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct InvalidShareLink {
        pub error: String,
        /// One entry per rejected field, e.g. `ra: must be greater than zero`.
        pub issues: Vec<String>,
    }
}

pub mod preview {
    use super::*;

    /// Data for the social preview image.
    ///
    /// When `fallback` is `true` every other field is absent and the renderer
    /// should draw the generic branded graphic. Names are HTML-escaped.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct PreviewCard {
        pub fallback: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name_a: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name_b: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub contribution_a: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub contribution_b: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub expense_percentage_a: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub expense_percentage_b: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub expenses: Option<i64>,
    }
}

pub mod minimum_wage {
    use super::*;

    /// Response body for `GET /minimum-wage`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MinimumWage {
        pub year: i32,
        pub minimum_wage_cents: i64,
        pub hourly_rate_cents: f64,
    }
}
