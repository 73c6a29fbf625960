use super::value_objects::TimeLabel;
use crate::domain::errors::AppError;
use serde::{Deserialize, Serialize};

/// Wire shape of `/api/prices`, before the length check.
#[derive(Debug, Deserialize)]
pub struct RawPriceSeries {
    pub times: Vec<TimeLabel>,
    pub prices: Vec<f64>,
}

/// Domain entity - price history of one symbol, as two parallel columns.
///
/// `times.len() == prices.len()` always holds; ordering is whatever the
/// server returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPriceSeries")]
pub struct PriceSeries {
    times: Vec<TimeLabel>,
    prices: Vec<f64>,
}

impl PriceSeries {
    pub fn new(times: Vec<TimeLabel>, prices: Vec<f64>) -> Result<Self, AppError> {
        if times.len() != prices.len() {
            return Err(AppError::ValidationError(format!(
                "price series has {} times but {} prices",
                times.len(),
                prices.len()
            )));
        }
        Ok(Self { times, prices })
    }

    pub fn times(&self) -> &[TimeLabel] {
        &self.times
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Lowest and highest finite price, `None` for an empty series.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        self.prices.iter().copied().filter(|p| p.is_finite()).fold(None, |acc, p| match acc {
            None => Some((p, p)),
            Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
        })
    }
}

impl TryFrom<RawPriceSeries> for PriceSeries {
    type Error = AppError;

    fn try_from(raw: RawPriceSeries) -> Result<Self, Self::Error> {
        PriceSeries::new(raw.times, raw.prices)
    }
}
