//! TGS library entry points.
//!
//! This crate turns raw TGS API payloads into validated sports-reference
//! entities. The conversion layer ([`convert_country`], [`convert_organization`])
//! is pure and synchronous; [`TgsClient`] wraps the HTTP fetch and hands each
//! record to the converters. Higher-level consumers (CLI, Lambdas) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod api;
pub mod coerce;
pub mod converters;
pub mod error;
pub mod models;
pub mod record;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_helpers;

pub use api::{
    countries_from_response, country_from_response, extract_data, organizations_from_response,
    ClientConfig, TgsClient,
};
pub use coerce::{coerce_int, coerce_string};
pub use converters::{convert_country, convert_organization};
pub use error::{Error, Result};
pub use models::{Country, Organization};
pub use record::{lookup, record_from_value, require_fields, Field, RawRecord};
pub use validation::{CoercionError, ValidationError};
