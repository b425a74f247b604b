//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are plain integers assigned by the store on insert (stable,
//! monotonically increasing). The newtypes keep a product id from being
//! handed to an order lookup by accident.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

/// Identifier of an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

/// Identifier of an order item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemId(u64);

macro_rules! impl_u64_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = u64::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_u64_newtype!(ProductId, "ProductId");
impl_u64_newtype!(OrderId, "OrderId");
impl_u64_newtype!(OrderItemId, "OrderItemId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_ids() {
        let id: ProductId = "42".parse().unwrap();
        assert_eq!(id.as_u64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = "abc".parse::<OrderId>().unwrap_err();
        match err {
            DomainError::InvalidId(_) => {}
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }
}
