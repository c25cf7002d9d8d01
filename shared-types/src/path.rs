//! Validated field paths into a [`Profile`].
//!
//! Form rows address the draft with dotted keys such as `address.city`. The
//! key is parsed once into a [`FieldPath`]; writes then go through a typed
//! setter instead of re-splitting the string on every keystroke.

use std::fmt;
use std::str::FromStr;

use crate::{Address, Profile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Street,
    City,
    State,
    Zip,
    Country,
}

impl AddressField {
    pub const ALL: [AddressField; 5] = [
        AddressField::Street,
        AddressField::City,
        AddressField::State,
        AddressField::Zip,
        AddressField::Country,
    ];

    pub fn key(self) -> &'static str {
        match self {
            AddressField::Street => "street",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::Zip => "zip",
            AddressField::Country => "country",
        }
    }

    fn slot(self, address: &mut Address) -> &mut String {
        match self {
            AddressField::Street => &mut address.street,
            AddressField::City => &mut address.city,
            AddressField::State => &mut address.state,
            AddressField::Zip => &mut address.zip,
            AddressField::Country => &mut address.country,
        }
    }

    fn value(self, address: &Address) -> &str {
        match self {
            AddressField::Street => &address.street,
            AddressField::City => &address.city,
            AddressField::State => &address.state,
            AddressField::Zip => &address.zip,
            AddressField::Country => &address.country,
        }
    }
}

/// A writable location inside a profile. `id` and the timestamps are
/// server-owned and therefore not addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Name,
    Phone,
    Department,
    Address(AddressField),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("empty field path")]
    Empty,
    #[error("unknown field path '{0}'")]
    Unknown(String),
}

impl FieldPath {
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        let mut segments = raw.split('.');
        let head = segments.next().filter(|s| !s.is_empty()).ok_or(PathError::Empty)?;
        let tail = segments.next();
        if segments.next().is_some() {
            return Err(PathError::Unknown(raw.to_string()));
        }

        match (head, tail) {
            ("name", None) => Ok(FieldPath::Name),
            ("phone", None) => Ok(FieldPath::Phone),
            ("department", None) => Ok(FieldPath::Department),
            ("address", Some(leaf)) => AddressField::ALL
                .into_iter()
                .find(|field| field.key() == leaf)
                .map(FieldPath::Address)
                .ok_or_else(|| PathError::Unknown(raw.to_string())),
            _ => Err(PathError::Unknown(raw.to_string())),
        }
    }

    /// Overwrite the addressed field, leaving every other field untouched.
    pub fn set(self, profile: &mut Profile, value: impl Into<String>) {
        let value = value.into();
        match self {
            FieldPath::Name => profile.name = value,
            FieldPath::Phone => profile.phone = value,
            FieldPath::Department => profile.department = value,
            FieldPath::Address(field) => *field.slot(&mut profile.address) = value,
        }
    }

    pub fn get(self, profile: &Profile) -> &str {
        match self {
            FieldPath::Name => &profile.name,
            FieldPath::Phone => &profile.phone,
            FieldPath::Department => &profile.department,
            FieldPath::Address(field) => field.value(&profile.address),
        }
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Name => f.write_str("name"),
            FieldPath::Phone => f.write_str("phone"),
            FieldPath::Department => f.write_str("department"),
            FieldPath::Address(field) => write!(f, "address.{}", field.key()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_top_level_and_nested_keys() {
        assert_eq!(FieldPath::parse("name"), Ok(FieldPath::Name));
        assert_eq!(
            FieldPath::parse("address.city"),
            Ok(FieldPath::Address(AddressField::City))
        );
        assert_eq!(
            "address.country".parse::<FieldPath>(),
            Ok(FieldPath::Address(AddressField::Country))
        );
    }

    #[test]
    fn rejects_unknown_or_malformed_keys() {
        assert_eq!(FieldPath::parse(""), Err(PathError::Empty));
        assert!(matches!(FieldPath::parse("id"), Err(PathError::Unknown(_))));
        assert!(matches!(FieldPath::parse("address"), Err(PathError::Unknown(_))));
        assert!(matches!(FieldPath::parse("name.first"), Err(PathError::Unknown(_))));
        assert!(matches!(
            FieldPath::parse("address.city.extra"),
            Err(PathError::Unknown(_))
        ));
    }

    #[test]
    fn display_matches_parse_input() {
        for raw in ["name", "phone", "department", "address.street", "address.zip"] {
            assert_eq!(FieldPath::parse(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn set_nested_field_leaves_siblings_alone() {
        let mut profile = Profile {
            id: "1".to_string(),
            name: "A".to_string(),
            address: Address {
                street: "Main".to_string(),
                city: "C".to_string(),
                ..Address::default()
            },
            ..Profile::default()
        };
        let before = profile.clone();

        FieldPath::Address(AddressField::City).set(&mut profile, "X");

        assert_eq!(profile.address.city, "X");
        assert_eq!(profile.address.street, before.address.street);
        assert_eq!(profile.name, before.name);
        assert_eq!(profile.id, before.id);
        assert_eq!(FieldPath::Address(AddressField::City).get(&profile), "X");
    }
}
