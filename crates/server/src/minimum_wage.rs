//! Minimum-wage lookup.
//!
//! The calculators only need a number. This module resolves that number for
//! the current calendar year: first from a [`MinimumWageCache`] owned by the
//! server state, then from a remote series, and when everything else fails
//! from the configured default rate. A lookup never fails. A failed fetch is
//! remembered for a short `retry_after` so a dead source is not hit on every
//! request.
use std::{collections::HashMap, time::Duration};

use chrono::{DateTime, Datelike, TimeDelta, Utc};
use engine::{EngineError, MoneyCents};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_RETRY_AFTER: TimeDelta = TimeDelta::seconds(60);

/// A rate fetched at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CachedWage {
    pub cents: i64,
    pub fetched_at: DateTime<Utc>,
    /// The default rate stored after a failed fetch.
    pub fallback: bool,
}

/// Minimum wage per calendar year.
///
/// A fetched entry is served while it is younger than `max_age`, a fallback
/// entry while it is younger than `retry_after`.
#[derive(Debug)]
pub struct MinimumWageCache {
    entries: HashMap<i32, CachedWage>,
    max_age: TimeDelta,
    retry_after: TimeDelta,
}

impl MinimumWageCache {
    pub fn new(max_age: TimeDelta) -> Self {
        Self {
            entries: HashMap::new(),
            max_age,
            retry_after: DEFAULT_RETRY_AFTER.min(max_age),
        }
    }

    #[must_use]
    pub fn with_retry_after(mut self, retry_after: TimeDelta) -> Self {
        self.retry_after = retry_after;
        self
    }

    /// Freshness predicate applied on every read.
    pub fn is_fresh(&self, entry: &CachedWage, now: DateTime<Utc>) -> bool {
        let ttl = if entry.fallback {
            self.retry_after
        } else {
            self.max_age
        };
        now.signed_duration_since(entry.fetched_at) < ttl
    }

    /// Returns the cached rate for `year` if still fresh.
    pub fn get(&self, year: i32, now: DateTime<Utc>) -> Option<i64> {
        self.entries
            .get(&year)
            .filter(|entry| self.is_fresh(entry, now))
            .map(|entry| entry.cents)
    }

    pub fn insert(&mut self, year: i32, cents: i64, now: DateTime<Utc>) {
        self.entries.insert(
            year,
            CachedWage {
                cents,
                fetched_at: now,
                fallback: false,
            },
        );
    }

    pub fn insert_fallback(&mut self, year: i32, cents: i64, now: DateTime<Utc>) {
        self.entries.insert(
            year,
            CachedWage {
                cents,
                fetched_at: now,
                fallback: true,
            },
        );
    }
}

#[derive(Debug, Error)]
pub enum WageError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("empty series")]
    Empty,
    #[error(transparent)]
    Amount(#[from] EngineError),
    #[error("non-positive minimum wage: {0}")]
    NotPositive(i64),
}

/// One point of the remote series, e.g. `{"data":"01/01/2025","valor":"1518.00"}`.
#[derive(Debug, Deserialize)]
struct SeriesPoint {
    valor: String,
}

/// Resolves the minimum wage, failing open to a default rate.
#[derive(Debug)]
pub struct MinimumWageProvider {
    client: reqwest::Client,
    source_url: Option<String>,
    default_cents: i64,
    cache: RwLock<MinimumWageCache>,
    fetching: Mutex<()>,
}

impl MinimumWageProvider {
    pub fn new(
        client: reqwest::Client,
        source_url: Option<String>,
        default_cents: i64,
        cache: MinimumWageCache,
    ) -> Self {
        Self {
            client,
            source_url,
            default_cents,
            cache: RwLock::new(cache),
            fetching: Mutex::new(()),
        }
    }

    /// Provider that never leaves the process: always the default rate.
    pub fn fixed(default_cents: i64) -> Self {
        Self::new(
            reqwest::Client::new(),
            None,
            default_cents,
            MinimumWageCache::new(TimeDelta::zero()),
        )
    }

    pub fn default_cents(&self) -> i64 {
        self.default_cents
    }

    /// Rate for the current calendar year.
    pub async fn current(&self) -> i64 {
        let now = Utc::now();
        self.for_year(now.year(), now).await
    }

    /// Rate for `year`, served from the cache while fresh.
    pub async fn for_year(&self, year: i32, now: DateTime<Utc>) -> i64 {
        if let Some(cents) = self.cache.read().await.get(year, now) {
            return cents;
        }

        let Some(url) = self.source_url.as_deref() else {
            return self.default_cents;
        };

        // One fetch at a time; waiters re-read what the winner stored.
        let _guard = self.fetching.lock().await;
        if let Some(cents) = self.cache.read().await.get(year, now) {
            return cents;
        }

        match self.fetch(url).await {
            Ok(cents) => {
                tracing::debug!("minimum wage for {year} fetched: {cents}");
                self.cache.write().await.insert(year, cents, now);
                cents
            }
            Err(err) => {
                tracing::warn!(
                    "minimum wage lookup failed, using default {}: {err}",
                    self.default_cents
                );
                self.cache
                    .write()
                    .await
                    .insert_fallback(year, self.default_cents, now);
                self.default_cents
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<i64, WageError> {
        let points: Vec<SeriesPoint> = self
            .client
            .get(url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let latest = points.last().ok_or(WageError::Empty)?;
        let cents = latest.valor.parse::<MoneyCents>()?.cents();
        if cents <= 0 {
            return Err(WageError::NotPositive(cents));
        }
        Ok(cents)
    }
}
