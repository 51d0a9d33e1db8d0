//! Data set type.

/// The kind of record a header carries after the general information.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RecordKind {
    /// Scan data: a multidimensional grid of density values.
    Scene,
    /// Structure system data: surfaces, shells, and curves.
    Structure,
    /// Display data: rendered image sequences.
    Display,
}

/// The data set type stored at (0x0008, 0x0040).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DataSetType {
    /// An unprocessed scene.
    Image0,
    /// A filtered, interpolated, or otherwise processed scene.
    Image1,
    /// A curve structure.
    Curve0,
    /// A surface structure without normal estimates.
    Surface0,
    /// A surface structure with normal estimates.
    Surface1,
    /// A shell structure, representation 0.
    Shell0,
    /// A shell structure, representation 1.
    Shell1,
    /// A shell structure, representation 2.
    Shell2,
    /// A rendered movie.
    Movie0,
}

impl DataSetType {
    /// Converts a stored value to a data set type.
    pub fn from_value(n: i16) -> Option<Self> {
        match n {
            0 => Some(Self::Image0),
            1 => Some(Self::Image1),
            100 => Some(Self::Curve0),
            110 => Some(Self::Surface0),
            111 => Some(Self::Surface1),
            120 => Some(Self::Shell0),
            121 => Some(Self::Shell1),
            122 => Some(Self::Shell2),
            200 => Some(Self::Movie0),
            _ => None,
        }
    }

    /// Returns the stored value.
    pub fn value(self) -> i16 {
        match self {
            Self::Image0 => 0,
            Self::Image1 => 1,
            Self::Curve0 => 100,
            Self::Surface0 => 110,
            Self::Surface1 => 111,
            Self::Shell0 => 120,
            Self::Shell1 => 121,
            Self::Shell2 => 122,
            Self::Movie0 => 200,
        }
    }

    /// Returns the record kind this type selects.
    pub fn kind(self) -> RecordKind {
        match self {
            Self::Image0 | Self::Image1 => RecordKind::Scene,
            Self::Curve0
            | Self::Surface0
            | Self::Surface1
            | Self::Shell0
            | Self::Shell1
            | Self::Shell2 => RecordKind::Structure,
            Self::Movie0 => RecordKind::Display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value() {
        assert_eq!(DataSetType::from_value(0), Some(DataSetType::Image0));
        assert_eq!(DataSetType::from_value(111), Some(DataSetType::Surface1));
        assert_eq!(DataSetType::from_value(200), Some(DataSetType::Movie0));
        assert!(DataSetType::from_value(2).is_none());
        assert!(DataSetType::from_value(-1).is_none());
    }

    #[test]
    fn test_kind() {
        assert_eq!(DataSetType::Image1.kind(), RecordKind::Scene);
        assert_eq!(DataSetType::Shell2.kind(), RecordKind::Structure);
        assert_eq!(DataSetType::Movie0.kind(), RecordKind::Display);
    }

    #[test]
    fn test_value_round_trip() {
        for n in [0, 1, 100, 110, 111, 120, 121, 122, 200] {
            let data_set_type = DataSetType::from_value(n).unwrap();
            assert_eq!(data_set_type.value(), n);
        }
    }
}
