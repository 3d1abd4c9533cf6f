//! Raw record to domain entity converters.
//!
//! Each converter runs the same one-shot pipeline: absent check, ordered
//! presence checks, coercion, construction. They never log; the caller
//! decides whether a failed record is fatal.

mod country;
mod organization;

pub use country::{convert_country, COUNTRY_ID_KEY, COUNTRY_NAME_KEY};
pub use organization::{
    convert_organization, ORG_ID_KEY, ORG_NAME_KEY, ORG_SEASON_GROUP_ID_KEY, ORG_SEASON_ID_KEY,
};
