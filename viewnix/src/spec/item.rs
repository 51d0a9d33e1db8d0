//! Tag directory items.

use std::{error, fmt, num, str::FromStr};

/// A field tag: a group number and an element number within it.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tag {
    group: u16,
    element: u16,
}

impl Tag {
    /// Creates a tag.
    pub const fn new(group: u16, element: u16) -> Self {
        Self { group, element }
    }

    /// Returns the group number.
    pub const fn group(self) -> u16 {
        self.group
    }

    /// Returns the element number.
    pub const fn element(self) -> u16 {
        self.element
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:04x},{:04x})", self.group, self.element)
    }
}

/// How strongly a field is required to be present.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Requirement {
    /// The field must be present (type `1`).
    Required,
    /// The field must be present, and a default is substituted when it is
    /// not (type `1D`).
    RequiredWithDefault,
    /// The field may be absent (type `2`).
    Optional,
    /// The field may be absent, and a default is substituted when it is
    /// not present (type `2D`).
    OptionalWithDefault,
    /// The field may be absent depending on other fields (type `3`).
    Conditional,
}

impl Requirement {
    fn from_token(s: &str) -> Option<Self> {
        match s {
            "1" => Some(Self::Required),
            "1D" => Some(Self::RequiredWithDefault),
            "2" => Some(Self::Optional),
            "2D" => Some(Self::OptionalWithDefault),
            "3" => Some(Self::Conditional),
            _ => None,
        }
    }
}

/// One expected field of a record: its tag and requirement level.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Item {
    tag: Tag,
    requirement: Requirement,
}

impl Item {
    /// Creates an item.
    pub const fn new(tag: Tag, requirement: Requirement) -> Self {
        Self { tag, requirement }
    }

    /// Returns the tag.
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns the group number.
    pub const fn group(&self) -> u16 {
        self.tag.group()
    }

    /// Returns the element number.
    pub const fn element(&self) -> u16 {
        self.tag.element()
    }

    /// Returns the requirement level.
    pub const fn requirement(&self) -> Requirement {
        self.requirement
    }
}

/// An error returned when an item fails to parse.
#[derive(Debug)]
pub enum ParseError {
    /// The line has fewer than four whitespace-separated fields.
    MissingField,
    /// The group or element number is not hexadecimal.
    InvalidTag(num::ParseIntError),
    /// The requirement token is unknown.
    InvalidRequirement,
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidTag(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "missing field"),
            Self::InvalidTag(_) => write!(f, "invalid tag"),
            Self::InvalidRequirement => write!(f, "invalid requirement"),
        }
    }
}

impl FromStr for Item {
    type Err = ParseError;

    // `group element requirement label`, e.g. `0029 8000 1 dimension`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();

        let group = parse_hex(fields.next().ok_or(ParseError::MissingField)?)?;
        let element = parse_hex(fields.next().ok_or(ParseError::MissingField)?)?;

        let requirement = fields
            .next()
            .ok_or(ParseError::MissingField)
            .map(Requirement::from_token)?
            .ok_or(ParseError::InvalidRequirement)?;

        let _label = fields.next().ok_or(ParseError::MissingField)?;

        Ok(Self::new(Tag::new(group, element), requirement))
    }
}

fn parse_hex(s: &str) -> Result<u16, ParseError> {
    u16::from_str_radix(s, 16).map_err(ParseError::InvalidTag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() -> Result<(), ParseError> {
        let item: Item = "0029 8000 1 dimension".parse()?;
        assert_eq!(item.tag(), Tag::new(0x0029, 0x8000));
        assert_eq!(item.requirement(), Requirement::Required);

        let item: Item = "002B 8065 1D TSE_measurement_unit".parse()?;
        assert_eq!(item.tag(), Tag::new(0x002b, 0x8065));
        assert_eq!(item.requirement(), Requirement::RequiredWithDefault);

        Ok(())
    }

    #[test]
    fn test_from_str_with_invalid_input() {
        assert!(matches!(
            "0029 8000 1".parse::<Item>(),
            Err(ParseError::MissingField)
        ));

        assert!(matches!(
            "zz 8000 1 dimension".parse::<Item>(),
            Err(ParseError::InvalidTag(_))
        ));

        assert!(matches!(
            "0029 8000 4 dimension".parse::<Item>(),
            Err(ParseError::InvalidRequirement)
        ));
    }

    #[test]
    fn test_tag_ordering() {
        assert!(Tag::new(0x0008, 0x0010) < Tag::new(0x0008, 0x0040));
        assert!(Tag::new(0x0008, 0xffff) < Tag::new(0x0009, 0x0000));
    }
}
