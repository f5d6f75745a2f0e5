//! Share-link codec.
//!
//! A share link carries the inputs of a calculation as a query string on
//! `/results`, with short keys:
//!
//! | key  | field         | rule                                   |
//! |------|---------------|----------------------------------------|
//! | `a`  | `name_a`      | required, non-empty after trimming     |
//! | `ra` | `income_a`    | required, positive integer cents       |
//! | `b`  | `name_b`      | required, non-empty after trimming     |
//! | `rb` | `income_b`    | required, positive integer cents       |
//! | `e`  | `expenses`    | required, positive integer cents       |
//! | `ha` | `housework_a` | optional, non-negative weekly hours    |
//! | `hb` | `housework_b` | optional, non-negative weekly hours    |
//!
//! `ha`/`hb` are only written when greater than zero; absence means `0`.
//!
//! Two decoders exist on purpose. [`ShareParams`] is strict and reports every
//! problem it finds. [`parse_share_params_lenient`] is for the social preview
//! path: it never errors, returns `None` on bad input and returns names that
//! are safe to embed in markup.
use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::form_urlencoded;

use crate::calculations::CalculationInput;

/// Longest name (in characters) kept by the lenient decoder.
pub const MAX_PREVIEW_NAME_CHARS: usize = 50;

/// Inputs carried by a share link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
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

impl ShareData {
    /// Builds the calculator input. The minimum wage is not part of a share
    /// link and comes from the caller.
    #[must_use]
    pub fn to_input(&self, minimum_wage: i64) -> CalculationInput {
        CalculationInput {
            income_a: self.income_a,
            income_b: self.income_b,
            expenses: self.expenses,
            housework_a: self.housework_a,
            housework_b: self.housework_b,
            minimum_wage,
        }
    }

    /// Encodes the data as an `application/x-www-form-urlencoded` query.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer
            .append_pair(ShareField::NameA.key(), &self.name_a)
            .append_pair(ShareField::IncomeA.key(), &self.income_a.to_string())
            .append_pair(ShareField::NameB.key(), &self.name_b)
            .append_pair(ShareField::IncomeB.key(), &self.income_b.to_string())
            .append_pair(ShareField::Expenses.key(), &self.expenses.to_string());
        if self.housework_a > 0 {
            serializer.append_pair(ShareField::HouseworkA.key(), &self.housework_a.to_string());
        }
        if self.housework_b > 0 {
            serializer.append_pair(ShareField::HouseworkB.key(), &self.housework_b.to_string());
        }
        serializer.finish()
    }

    /// Runs the data through the strict decoder, so only data that would
    /// survive a share link round trip is accepted.
    pub fn validated(&self) -> Result<ShareData, ShareParamsError> {
        ShareParams::parse_query(&self.to_query())
    }
}

/// Builds `{base_url}/results?{query}` for `data`.
///
/// ```rust
/// use engine::{ShareData, build_share_url};
///
/// let data = ShareData {
///     name_a: "Ana".to_string(),
///     income_a: 500_000,
///     name_b: "Bia".to_string(),
///     income_b: 300_000,
///     expenses: 200_000,
///     ..Default::default()
/// };
/// assert_eq!(
///     build_share_url(&data, "https://example.com"),
///     "https://example.com/results?a=Ana&ra=500000&b=Bia&rb=300000&e=200000"
/// );
/// ```
#[must_use]
pub fn build_share_url(data: &ShareData, base_url: &str) -> String {
    format!("{}/results?{}", base_url.trim_end_matches('/'), data.to_query())
}

/// Collects the pairs of a raw query string into a map.
///
/// The input is the query itself (`a=..&ra=..`, optionally with a leading
/// `?`); a literal `?` inside a value is kept. Use [`url_query`] first when
/// holding a whole link. When a key is repeated, the first occurrence wins.
#[must_use]
pub fn query_map(query: &str) -> HashMap<String, String> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut map = HashMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        map.entry(key.into_owned()).or_insert_with(|| value.into_owned());
    }
    map
}

/// Extracts the query of a share link.
///
/// Accepts a whole URL, a path such as `/results?..`, or a bare query. The
/// text before the first `?` is only treated as a URL when it has no `=` or
/// `&`, so `a=Ana?&ra=..` stays a query. The fragment of a URL is dropped.
///
/// ```rust
/// use engine::url_query;
///
/// assert_eq!(url_query("https://rateio.app/results?a=Ana#top"), "a=Ana");
/// assert_eq!(url_query("a=Ana?&ra=1"), "a=Ana?&ra=1");
/// ```
#[must_use]
pub fn url_query(link: &str) -> &str {
    let link = link.trim();
    match link.split_once('?') {
        Some((head, rest)) if !head.contains(['=', '&']) => {
            rest.split_once('#').map_or(rest, |(query, _)| query)
        }
        _ => link,
    }
}

/// A field of the share-link schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShareField {
    NameA,
    IncomeA,
    NameB,
    IncomeB,
    Expenses,
    HouseworkA,
    HouseworkB,
}

impl ShareField {
    /// Query key of the field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::NameA => "a",
            Self::IncomeA => "ra",
            Self::NameB => "b",
            Self::IncomeB => "rb",
            Self::Expenses => "e",
            Self::HouseworkA => "ha",
            Self::HouseworkB => "hb",
        }
    }
}

impl fmt::Display for ShareField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One reason a share link was rejected.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareIssue {
    #[error("{0}: required")]
    Missing(ShareField),
    #[error("{0}: name must not be empty")]
    EmptyName(ShareField),
    #[error("{0}: expected an integer")]
    NotAnInteger(ShareField),
    #[error("{0}: must be greater than zero")]
    NotPositive(ShareField),
    #[error("{0}: must not be negative")]
    Negative(ShareField),
    #[error("{0}: value out of range")]
    OutOfRange(ShareField),
}

impl ShareIssue {
    /// Field the issue refers to.
    #[must_use]
    pub const fn field(self) -> ShareField {
        match self {
            Self::Missing(field)
            | Self::EmptyName(field)
            | Self::NotAnInteger(field)
            | Self::NotPositive(field)
            | Self::Negative(field)
            | Self::OutOfRange(field) => field,
        }
    }
}

/// Strict validation failure: not a valid share link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareParamsError {
    pub issues: Vec<ShareIssue>,
}

impl fmt::Display for ShareParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid share link")?;
        for (idx, issue) in self.issues.iter().enumerate() {
            let sep = if idx == 0 { ": " } else { "; " };
            write!(f, "{sep}{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ShareParamsError {}

/// Strict share-link schema.
///
/// ```rust
/// use engine::ShareParams;
///
/// let data = ShareParams::parse_query("a=Ana&ra=500000&b=Bia&rb=300000&e=200000&ha=10").unwrap();
/// assert_eq!(data.housework_a, 10);
/// assert_eq!(data.housework_b, 0);
///
/// assert!(ShareParams::parse_query("a=Ana&ra=0&b=Bia&rb=300000&e=200000").is_err());
/// ```
///
/// `ha`/`hb` that are missing or empty count as `0`, as in
/// [`parse_share_params_lenient`].
#[derive(Debug)]
pub struct ShareParams;

impl ShareParams {
    /// Validates a decoded key/value map.
    pub fn parse(query: &HashMap<String, String>) -> Result<ShareData, ShareParamsError> {
        let mut issues = Vec::new();

        let name_a = strict_name(query, ShareField::NameA, &mut issues);
        let income_a = strict_positive(query, ShareField::IncomeA, &mut issues);
        let name_b = strict_name(query, ShareField::NameB, &mut issues);
        let income_b = strict_positive(query, ShareField::IncomeB, &mut issues);
        let expenses = strict_positive(query, ShareField::Expenses, &mut issues);
        let housework_a = strict_hours(query, ShareField::HouseworkA, &mut issues);
        let housework_b = strict_hours(query, ShareField::HouseworkB, &mut issues);

        match (name_a, income_a, name_b, income_b, expenses, housework_a, housework_b) {
            (
                Some(name_a),
                Some(income_a),
                Some(name_b),
                Some(income_b),
                Some(expenses),
                Some(housework_a),
                Some(housework_b),
            ) if issues.is_empty() => Ok(ShareData {
                name_a,
                income_a,
                name_b,
                income_b,
                expenses,
                housework_a,
                housework_b,
            }),
            _ => Err(ShareParamsError { issues }),
        }
    }

    /// Validates a raw query string, see [`query_map`].
    pub fn parse_query(query: &str) -> Result<ShareData, ShareParamsError> {
        Self::parse(&query_map(query))
    }

    /// Validates the query of a whole share link, see [`url_query`].
    pub fn parse_url(link: &str) -> Result<ShareData, ShareParamsError> {
        Self::parse_query(url_query(link))
    }
}

fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

fn strict_name(
    query: &HashMap<String, String>,
    field: ShareField,
    issues: &mut Vec<ShareIssue>,
) -> Option<String> {
    let Some(raw) = query.get(field.key()) else {
        issues.push(ShareIssue::Missing(field));
        return None;
    };
    let name = raw.trim();
    if name.is_empty() {
        issues.push(ShareIssue::EmptyName(field));
        return None;
    }
    Some(name.to_string())
}

fn strict_positive(
    query: &HashMap<String, String>,
    field: ShareField,
    issues: &mut Vec<ShareIssue>,
) -> Option<i64> {
    let Some(raw) = query.get(field.key()) else {
        issues.push(ShareIssue::Missing(field));
        return None;
    };
    match parse_integer(raw) {
        None => {
            issues.push(ShareIssue::NotAnInteger(field));
            None
        }
        Some(value) if value <= 0 => {
            issues.push(ShareIssue::NotPositive(field));
            None
        }
        Some(value) => Some(value),
    }
}

fn strict_hours(
    query: &HashMap<String, String>,
    field: ShareField,
    issues: &mut Vec<ShareIssue>,
) -> Option<u32> {
    let raw = match query.get(field.key()).map(|value| value.trim()) {
        None | Some("") => return Some(0),
        Some(raw) => raw,
    };
    match parse_integer(raw) {
        None => {
            issues.push(ShareIssue::NotAnInteger(field));
            None
        }
        Some(value) if value < 0 => {
            issues.push(ShareIssue::Negative(field));
            None
        }
        Some(value) => match u32::try_from(value) {
            Ok(hours) => Some(hours),
            Err(_) => {
                issues.push(ShareIssue::OutOfRange(field));
                None
            }
        },
    }
}

/// Lenient decoder for the social preview path.
///
/// Returns `None` instead of an error whenever a required field is missing
/// or invalid, or any present value is not a number, so the caller can fall
/// back to a generic graphic. Names are trimmed, cut to
/// [`MAX_PREVIEW_NAME_CHARS`] characters and HTML-escaped; missing or empty
/// `ha`/`hb` count as `0`.
#[must_use]
pub fn parse_share_params_lenient(query: &HashMap<String, String>) -> Option<ShareData> {
    Some(ShareData {
        name_a: preview_name(query.get(ShareField::NameA.key())?)?,
        income_a: lenient_positive(query.get(ShareField::IncomeA.key())?)?,
        name_b: preview_name(query.get(ShareField::NameB.key())?)?,
        income_b: lenient_positive(query.get(ShareField::IncomeB.key())?)?,
        expenses: lenient_positive(query.get(ShareField::Expenses.key())?)?,
        housework_a: lenient_hours(query.get(ShareField::HouseworkA.key()))?,
        housework_b: lenient_hours(query.get(ShareField::HouseworkB.key()))?,
    })
}

fn preview_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let truncated: String = trimmed.chars().take(MAX_PREVIEW_NAME_CHARS).collect();
    Some(html_escape::encode_quoted_attribute(&truncated).into_owned())
}

fn lenient_positive(raw: &str) -> Option<i64> {
    parse_integer(raw).filter(|value| *value > 0)
}

fn lenient_hours(raw: Option<&String>) -> Option<u32> {
    match raw.map(|value| value.trim()) {
        None | Some("") => Some(0),
        Some(value) => u32::try_from(parse_integer(value)?).ok(),
    }
}
