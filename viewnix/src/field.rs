//! Header field values with validity.

/// A header field value paired with its validity.
///
/// Every field of a 3DVIEWNIX header carries a flag recording whether the
/// value was actually present in the file (or supplied by the caller). An
/// invalid field may still hold a usable placeholder, e.g. a defaulted
/// dimension count or an array padded out to its expected length.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Field<T> {
    value: T,
    valid: bool,
}

impl<T> Field<T> {
    /// Creates a valid field.
    pub fn new(value: T) -> Self {
        Self { value, valid: true }
    }

    /// Creates an invalid field that still carries a placeholder value.
    pub fn fallback(value: T) -> Self {
        Self {
            value,
            valid: false,
        }
    }

    /// Returns a reference to the value, whether or not it is valid.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns whether the value was actually present.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the value only if it is valid.
    pub fn get(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    /// Consumes the field, returning the value and its validity.
    pub fn into_parts(self) -> (T, bool) {
        (self.value, self.valid)
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let field: Field<i16> = Field::default();
        assert_eq!(field.value(), &0);
        assert!(!field.is_valid());
        assert!(field.get().is_none());
    }

    #[test]
    fn test_fallback() {
        let field = Field::fallback(vec![3, 3]);
        assert_eq!(field.value(), &[3, 3]);
        assert!(!field.is_valid());
        assert!(field.get().is_none());
    }

    #[test]
    fn test_new() {
        let field = Field::new(8i16);
        assert_eq!(field.get(), Some(&8));
        assert!(field.is_valid());
    }
}
