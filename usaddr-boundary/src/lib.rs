use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// Address fields as exchanged with parsers and other collaborators.
///
/// Unknown keys are rejected. Absent fields serialize as `null`.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(deny_unknown_fields)]
pub struct Address {
    pub number                : Option<String>,
    pub prefix                : Option<String>,
    pub street                : Option<String>,
    pub street_type           : Option<String>,
    pub suffix                : Option<String>,
    pub unit_prefix           : Option<String>,
    pub unit                  : Option<String>,
    pub city                  : Option<String>,
    pub state                 : Option<String>,
    pub postal_code           : Option<String>,
    pub postal_code_ext       : Option<String>,
    pub street2               : Option<String>,
    pub street_type2          : Option<String>,
    pub prefix2               : Option<String>,
    pub suffix2               : Option<String>,
    pub redundant_street_type : Option<bool>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct RenderedAddress {
    pub line1: String,
    pub line1_without_unit: String,
    pub line2: String,
    pub full: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_fips: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
    pub intersection: bool,
}
