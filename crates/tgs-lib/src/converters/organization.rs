use crate::coerce::{coerce_int, coerce_string};
use crate::models::Organization;
use crate::record::{require_fields, RawRecord};
use crate::validation::{CoercionError, ValidationError};

pub const ORG_ID_KEY: &str = "orgID";
pub const ORG_NAME_KEY: &str = "orgName";
pub const ORG_SEASON_ID_KEY: &str = "orgSeasonID";
pub const ORG_SEASON_GROUP_ID_KEY: &str = "orgSeasonGroupID";

const ENTITY: &str = "Organization";

/// Convert a raw TGS organization record into an [`Organization`].
///
/// Keys are checked in the order `orgID`, `orgName`, `orgSeasonID`,
/// `orgSeasonGroupID` and only the first missing one is reported. Names get
/// the same trim and non-empty treatment as country names.
pub fn convert_organization(raw: Option<&RawRecord>) -> Result<Organization, ValidationError> {
    let record = raw.ok_or(ValidationError::Absent)?;
    let [id, name, season_id, season_group_id] = require_fields(
        record,
        [
            ORG_ID_KEY,
            ORG_NAME_KEY,
            ORG_SEASON_ID_KEY,
            ORG_SEASON_GROUP_ID_KEY,
        ],
    )?;

    let invalid = |source: CoercionError| ValidationError::Invalid {
        entity: ENTITY,
        source,
    };

    let id = coerce_int(ORG_ID_KEY, id).map_err(invalid)?;
    let name = coerce_string(name);
    let season_id = coerce_int(ORG_SEASON_ID_KEY, season_id).map_err(invalid)?;
    let season_group_id = coerce_int(ORG_SEASON_GROUP_ID_KEY, season_group_id).map_err(invalid)?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyField {
            field: ORG_NAME_KEY,
        });
    }

    Ok(Organization {
        id,
        name: name.to_string(),
        season_id,
        season_group_id,
    })
}
