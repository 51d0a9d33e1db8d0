//! Errors and field-level reports.

use std::{error, fmt, io};

use bstr::BString;

use crate::spec::{Item, Requirement, Tag};

/// An error returned when a header or its data cannot be read or written.
#[derive(Debug)]
pub enum Error {
    /// A read from the underlying stream failed.
    Read(io::Error),
    /// A write to the underlying stream failed.
    Write(io::Error),
    /// A seek on the underlying stream failed.
    Seek(io::Error),
    /// The `VIEWNIX_ENV` environment variable is not set.
    MissingEnvironment,
    /// The stream does not follow the 3DVIEWNIX file format.
    InvalidFormat,
    /// The data set type is not a known value.
    InvalidDataSetType(i16),
    /// The tag directory resource could not be opened or parsed.
    Directory(io::Error),
    /// The recognition code is not `VIEWNIX1.0`.
    InvalidRecognitionCode(BString),
}

impl Error {
    /// Returns the numeric status code of this error.
    pub fn code(&self) -> u16 {
        match self {
            Self::Read(_) => 2,
            Self::Write(_) => 3,
            Self::Seek(_) => 5,
            Self::MissingEnvironment => 7,
            Self::InvalidFormat => 100,
            Self::InvalidDataSetType(_) => 102,
            Self::Directory(_) => 103,
            Self::InvalidRecognitionCode(_) => 105,
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Read(e) | Self::Write(e) | Self::Seek(e) | Self::Directory(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(_) => write!(f, "read error"),
            Self::Write(_) => write!(f, "write error"),
            Self::Seek(_) => write!(f, "improper seek"),
            Self::MissingEnvironment => write!(f, "VIEWNIX_ENV is not set"),
            Self::InvalidFormat => write!(f, "invalid file format"),
            Self::InvalidDataSetType(n) => write!(f, "invalid data set type: {n}"),
            Self::Directory(_) => write!(f, "invalid specification file"),
            Self::InvalidRecognitionCode(code) => {
                write!(f, "invalid recognition code: {code}")
            }
        }
    }
}

/// The severity of a missing or malformed field.
///
/// Ordered from least to most severe, so escalation is a plain comparison.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum FieldErrorKind {
    /// An optional field was absent or malformed.
    MissingOptional,
    /// A required field with a default was absent or malformed.
    MissingDefaulted,
    /// A required field was absent or malformed.
    MissingRequired,
}

impl FieldErrorKind {
    /// Returns the numeric status code of this report.
    pub fn code(self) -> u16 {
        match self {
            Self::MissingOptional => 107,
            Self::MissingDefaulted => 106,
            Self::MissingRequired => 104,
        }
    }

    fn from_requirement(requirement: Requirement) -> Self {
        match requirement {
            Requirement::Required => Self::MissingRequired,
            Requirement::RequiredWithDefault => Self::MissingDefaulted,
            Requirement::Optional | Requirement::OptionalWithDefault | Requirement::Conditional => {
                Self::MissingOptional
            }
        }
    }
}

/// The worst field-level problem seen while reading or writing a header.
///
/// A header read or write that completes still reports the most severe field
/// it found absent or malformed, with the tag recorded when that severity was
/// first reached.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldError {
    kind: FieldErrorKind,
    tag: Tag,
}

impl FieldError {
    /// Returns the severity of the report.
    pub fn kind(&self) -> FieldErrorKind {
        self.kind
    }

    /// Returns the tag of the field that set the severity.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns the numeric status code of this report.
    pub fn code(&self) -> u16 {
        self.kind.code()
    }

    // Records a problem with the given field, keeping the worst severity. The
    // tag only moves when the severity escalates.
    pub(crate) fn note(slot: &mut Option<FieldError>, item: &Item) {
        let kind = FieldErrorKind::from_requirement(item.requirement());

        if slot.is_none_or(|e| kind > e.kind) {
            *slot = Some(FieldError {
                kind,
                tag: item.tag(),
            });
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self.kind {
            FieldErrorKind::MissingOptional => "optional field missing",
            FieldErrorKind::MissingDefaulted => "defaulted field missing",
            FieldErrorKind::MissingRequired => "required field missing",
        };

        write!(f, "{description}: {}", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(element: u16, requirement: Requirement) -> Item {
        Item::new(Tag::new(0x0029, element), requirement)
    }

    #[test]
    fn test_note_escalates() {
        let mut slot = None;

        FieldError::note(&mut slot, &item(0x8100, Requirement::Optional));
        let e = slot.unwrap();
        assert_eq!(e.kind(), FieldErrorKind::MissingOptional);
        assert_eq!(e.tag(), Tag::new(0x0029, 0x8100));

        FieldError::note(&mut slot, &item(0x8020, Requirement::RequiredWithDefault));
        let e = slot.unwrap();
        assert_eq!(e.kind(), FieldErrorKind::MissingDefaulted);
        assert_eq!(e.tag(), Tag::new(0x0029, 0x8020));

        FieldError::note(&mut slot, &item(0x8000, Requirement::Required));
        let e = slot.unwrap();
        assert_eq!(e.kind(), FieldErrorKind::MissingRequired);
        assert_eq!(e.tag(), Tag::new(0x0029, 0x8000));
    }

    #[test]
    fn test_note_does_not_downgrade() {
        let mut slot = None;

        FieldError::note(&mut slot, &item(0x8000, Requirement::Required));
        FieldError::note(&mut slot, &item(0x8020, Requirement::RequiredWithDefault));
        FieldError::note(&mut slot, &item(0x8100, Requirement::Optional));

        let e = slot.unwrap();
        assert_eq!(e.kind(), FieldErrorKind::MissingRequired);
        assert_eq!(e.tag(), Tag::new(0x0029, 0x8000));
    }

    #[test]
    fn test_note_keeps_first_tag_at_same_severity() {
        let mut slot = None;

        FieldError::note(&mut slot, &item(0x8020, Requirement::RequiredWithDefault));
        FieldError::note(&mut slot, &item(0x8070, Requirement::RequiredWithDefault));

        assert_eq!(slot.unwrap().tag(), Tag::new(0x0029, 0x8020));
    }

    #[test]
    fn test_codes() {
        assert_eq!(FieldErrorKind::MissingRequired.code(), 104);
        assert_eq!(FieldErrorKind::MissingDefaulted.code(), 106);
        assert_eq!(FieldErrorKind::MissingOptional.code(), 107);
        assert_eq!(Error::InvalidFormat.code(), 100);
        assert_eq!(Error::MissingEnvironment.code(), 7);
    }
}
