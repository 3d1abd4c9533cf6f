use crate::coerce::{coerce_int, coerce_string};
use crate::models::Country;
use crate::record::{require_fields, RawRecord};
use crate::validation::ValidationError;

pub const COUNTRY_ID_KEY: &str = "countryID";
pub const COUNTRY_NAME_KEY: &str = "countryName";

const ENTITY: &str = "Country";

/// Convert a raw TGS country record into a [`Country`].
///
/// Any non-null name is accepted: non-string values are rendered as JSON text.
/// The name is then trimmed and must not be blank. The identifier may be a
/// number or a numeric string; whitespace around it is ignored.
///
/// # Errors
///
/// Returns [`ValidationError::Absent`] for `None`, then the first missing key
/// among `countryID` and `countryName`, then a blank-name error, and finally
/// `"Country validation failed"` when the identifier cannot be coerced.
pub fn convert_country(raw: Option<&RawRecord>) -> Result<Country, ValidationError> {
    let record = raw.ok_or(ValidationError::Absent)?;
    let [id, name] = require_fields(record, [COUNTRY_ID_KEY, COUNTRY_NAME_KEY])?;

    let name = coerce_string(name);
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyField {
            field: COUNTRY_NAME_KEY,
        });
    }

    let id = coerce_int(COUNTRY_ID_KEY, id).map_err(|source| ValidationError::Invalid {
        entity: ENTITY,
        source,
    })?;

    Ok(Country {
        id,
        name: name.to_string(),
    })
}
