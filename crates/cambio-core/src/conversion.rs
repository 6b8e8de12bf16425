//! Conversion between reais and dollars at a fixed reference rate.

use crate::url_model::{CambioUrl, ParameterError};

/// Default reference rate: reais per dollar.
pub const DOLLAR_RATE: f64 = 5.50;

/// Destination currency name that selects multiplication by the rate.
const DOLLAR: &str = "dolar";

/// Query parameter names read from a câmbio URL.
pub const AMOUNT_PARAM: &str = "quantidade";
pub const ORIGIN_PARAM: &str = "moedaOrigem";
pub const DESTINATION_PARAM: &str = "moedaDestino";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error("amount `{value}` is not a number")]
    InvalidAmount { value: String },
    #[error("rate {rate} must be a finite positive number")]
    InvalidRate { rate: f64 },
}

/// Which way the rate is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Destination is `dolar`: amount is multiplied by the rate.
    ToDollar,
    /// Any other destination: amount is divided by the rate.
    FromDollar,
}

impl Direction {
    pub fn for_destination(destination: &str) -> Self {
        if destination.eq_ignore_ascii_case(DOLLAR) {
            Direction::ToDollar
        } else {
            Direction::FromDollar
        }
    }
}

/// Amount and currencies extracted from a câmbio URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    /// Carried for display; does not affect the arithmetic.
    pub origin: String,
    pub destination: String,
}

impl ConversionRequest {
    pub fn from_url(url: &CambioUrl) -> Result<Self, ConversionError> {
        let raw_amount = url.parameter(AMOUNT_PARAM)?;
        let amount = raw_amount
            .trim()
            .parse::<f64>()
            .map_err(|_| ConversionError::InvalidAmount {
                value: raw_amount.to_string(),
            })?;
        let origin = url.parameter(ORIGIN_PARAM)?.to_string();
        let destination = url.parameter(DESTINATION_PARAM)?.to_string();

        Ok(Self {
            amount,
            origin,
            destination,
        })
    }

    pub fn direction(&self) -> Direction {
        Direction::for_destination(&self.destination)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub converted: f64,
    pub rate: f64,
    pub direction: Direction,
}

/// Applies `rate` to the request's amount according to its destination.
pub fn convert(request: &ConversionRequest, rate: f64) -> Result<Conversion, ConversionError> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(ConversionError::InvalidRate { rate });
    }

    let direction = request.direction();
    let converted = match direction {
        Direction::ToDollar => request.amount * rate,
        Direction::FromDollar => request.amount / rate,
    };
    tracing::debug!(
        amount = request.amount,
        converted,
        rate,
        ?direction,
        "converted amount"
    );

    Ok(Conversion {
        amount: request.amount,
        converted,
        rate,
        direction,
    })
}
