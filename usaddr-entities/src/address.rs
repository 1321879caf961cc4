use std::{
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use itertools::Itertools;
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

use crate::state;

/// A parsed United States postal address.
///
/// All fields are optional and can be assigned directly.
/// Equality compares the rendered text (see [`Format::Default`]),
/// not the individual fields.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
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

/// The closed set of address fields in declaration order.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Number,
    Prefix,
    Street,
    StreetType,
    Suffix,
    UnitPrefix,
    Unit,
    City,
    State,
    PostalCode,
    PostalCodeExt,
    #[strum(serialize = "street2")]
    Street2,
    #[strum(serialize = "street_type2")]
    StreetType2,
    #[strum(serialize = "prefix2")]
    Prefix2,
    #[strum(serialize = "suffix2")]
    Suffix2,
    RedundantStreetType,
}

impl Field {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub const fn is_flag(self) -> bool {
        matches!(self, Self::RedundantStreetType)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown address field: {0}")]
pub struct UnknownFieldError(pub String);

impl FromStr for Field {
    type Err = UnknownFieldError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<String> for FieldValue {
    fn from(from: String) -> Self {
        Self::Text(from)
    }
}

impl From<&str> for FieldValue {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<bool> for FieldValue {
    fn from(from: bool) -> Self {
        Self::Flag(from)
    }
}

#[derive(Debug, Error)]
pub enum FieldError {
    #[error(transparent)]
    Unknown(#[from] UnknownFieldError),
    #[error("Invalid value for address field {field}")]
    InvalidValue { field: Field },
}

/// Every field with its current value, absent fields included.
pub type FieldMap = BTreeMap<Field, Option<FieldValue>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    /// Primary line: number and street, or the intersection.
    Line1,
    /// Secondary line: city, state and postal code.
    Line2,
    /// Both lines separated by a comma.
    #[default]
    Default,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Address {
    /// Creates an address from `(field name, value)` pairs.
    ///
    /// Fails on the first name that is not a [`Field`] or on a value
    /// of the wrong kind. Later duplicates overwrite earlier ones.
    pub fn try_from_fields<I, K, V>(fields: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        fields
            .into_iter()
            .try_fold(Self::default(), |mut addr, (name, value)| {
                let field = name.as_ref().parse::<Field>()?;
                addr.set(field, value)?;
                Ok(addr)
            })
    }

    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) -> Result<(), FieldError> {
        match value.into() {
            FieldValue::Flag(flag) if field.is_flag() => {
                self.redundant_street_type = Some(flag);
            }
            FieldValue::Text(text) => {
                let slot = self
                    .text_mut(field)
                    .ok_or(FieldError::InvalidValue { field })?;
                *slot = Some(text);
            }
            FieldValue::Flag(_) => return Err(FieldError::InvalidValue { field }),
        }
        Ok(())
    }

    pub fn get(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::RedundantStreetType => self.redundant_street_type.map(FieldValue::Flag),
            Field::Number => self.number.clone().map(FieldValue::Text),
            Field::Prefix => self.prefix.clone().map(FieldValue::Text),
            Field::Street => self.street.clone().map(FieldValue::Text),
            Field::StreetType => self.street_type.clone().map(FieldValue::Text),
            Field::Suffix => self.suffix.clone().map(FieldValue::Text),
            Field::UnitPrefix => self.unit_prefix.clone().map(FieldValue::Text),
            Field::Unit => self.unit.clone().map(FieldValue::Text),
            Field::City => self.city.clone().map(FieldValue::Text),
            Field::State => self.state.clone().map(FieldValue::Text),
            Field::PostalCode => self.postal_code.clone().map(FieldValue::Text),
            Field::PostalCodeExt => self.postal_code_ext.clone().map(FieldValue::Text),
            Field::Street2 => self.street2.clone().map(FieldValue::Text),
            Field::StreetType2 => self.street_type2.clone().map(FieldValue::Text),
            Field::Prefix2 => self.prefix2.clone().map(FieldValue::Text),
            Field::Suffix2 => self.suffix2.clone().map(FieldValue::Text),
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut Option<String>> {
        let text = match field {
            Field::Number => &mut self.number,
            Field::Prefix => &mut self.prefix,
            Field::Street => &mut self.street,
            Field::StreetType => &mut self.street_type,
            Field::Suffix => &mut self.suffix,
            Field::UnitPrefix => &mut self.unit_prefix,
            Field::Unit => &mut self.unit,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::PostalCode => &mut self.postal_code,
            Field::PostalCodeExt => &mut self.postal_code_ext,
            Field::Street2 => &mut self.street2,
            Field::StreetType2 => &mut self.street_type2,
            Field::Prefix2 => &mut self.prefix2,
            Field::Suffix2 => &mut self.suffix2,
            Field::RedundantStreetType => return None,
        };
        Some(text)
    }

    pub fn to_mapping(&self) -> FieldMap {
        Field::iter().map(|field| (field, self.get(field))).collect()
    }

    pub fn is_empty(&self) -> bool {
        Field::iter().all(|field| self.get(field).is_none())
    }

    pub fn full_postal_code(&self) -> Option<String> {
        let postal_code = non_blank(&self.postal_code)?;
        let full = match non_blank(&self.postal_code_ext) {
            Some(ext) => format!("{postal_code}-{ext}"),
            None => postal_code.to_owned(),
        };
        Some(full)
    }

    pub fn state_fips(&self) -> Option<&'static str> {
        self.state.as_deref().and_then(state::fips_code)
    }

    pub fn state_name(&self) -> Option<String> {
        self.state
            .as_deref()
            .and_then(state::name)
            .map(state::capitalize_first)
    }

    pub fn is_intersection(&self) -> bool {
        self.street2.is_some()
    }

    pub fn is_redundant_street_type(&self) -> bool {
        self.redundant_street_type.unwrap_or(false)
    }

    fn rendered_street_type(&self) -> Option<&str> {
        self.street_type
            .as_deref()
            .filter(|_| !self.is_redundant_street_type())
    }

    /// The primary line without any unit information.
    pub fn line1_without_unit(&self) -> String {
        join_tokens(
            [
                self.number.as_deref(),
                self.prefix.as_deref(),
                self.street.as_deref(),
                self.rendered_street_type(),
                self.suffix.as_deref(),
            ],
            " ",
        )
    }

    pub fn line1(&self) -> String {
        if self.is_intersection() {
            return join_tokens(
                [
                    self.prefix.as_deref(),
                    self.street.as_deref(),
                    self.street_type.as_deref(),
                    self.suffix.as_deref(),
                    Some("and"),
                    self.prefix2.as_deref(),
                    self.street2.as_deref(),
                    self.street_type2.as_deref(),
                    self.suffix2.as_deref(),
                ],
                " ",
            );
        }
        // USPS Publication 28: a unit without designator gets a "#"
        let unit = non_blank(&self.unit);
        let (unit_prefix, unit_marker) = match (unit, non_blank(&self.unit_prefix)) {
            (None, _) => (None, None),
            (Some(_), Some(unit_prefix)) => (Some(unit_prefix), None),
            (Some(_), None) => (None, Some("#")),
        };
        join_tokens(
            [
                self.number.as_deref(),
                self.prefix.as_deref(),
                self.street.as_deref(),
                self.rendered_street_type(),
                self.suffix.as_deref(),
                unit_prefix,
                unit_marker,
                unit,
            ],
            " ",
        )
    }

    pub fn line2(&self) -> String {
        let mut line = join_tokens([self.city.as_deref(), self.state.as_deref()], ", ");
        if let Some(postal_code) = self.full_postal_code() {
            line.push(' ');
            line.push_str(&postal_code);
        }
        line.trim().to_owned()
    }

    pub fn render(&self, format: Format) -> String {
        match format {
            Format::Line1 => self.line1(),
            Format::Line2 => self.line2(),
            Format::Default => [self.line1(), self.line2()]
                .into_iter()
                .filter(|line| !line.is_empty())
                .join(", "),
        }
    }
}

// Blank text counts as absent.
fn non_blank(text: &Option<String>) -> Option<&str> {
    text.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn join_tokens<'a>(tokens: impl IntoIterator<Item = Option<&'a str>>, sep: &str) -> String {
    tokens
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .join(sep)
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Format::Default))
    }
}

// Representation equality: the rendered text decides.
impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.render(Format::Default) == other.render(Format::Default)
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.render(Format::Default).hash(state);
    }
}
