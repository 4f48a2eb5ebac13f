use super::YearRangeError;

/// An inclusive range of release years used to filter a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub first: i32,
    pub second: i32,
}

impl YearRange {
    /// Creates a new year range, validating that first <= second.
    pub fn new(first: i32, second: i32) -> Result<Self, YearRangeError> {
        if first > second {
            return Err(YearRangeError::Inverted { first, second });
        }
        Ok(Self { first, second })
    }

    /// Returns true if the year falls inside the range, bounds included.
    pub fn contains(&self, year: i32) -> bool {
        self.first <= year && year <= self.second
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range_construction() {
        let range = YearRange::new(1990, 1999).unwrap();

        assert_eq!(range.first, 1990);
        assert_eq!(range.second, 1999);
    }

    #[test]
    fn test_single_year_range_is_valid() {
        let range = YearRange::new(2013, 2013).unwrap();

        assert!(range.contains(2013));
        assert!(!range.contains(2012));
        assert!(!range.contains(2014));
    }

    #[test]
    fn test_inverted_range_returns_error() {
        let result = YearRange::new(2000, 1990);

        assert_eq!(
            result,
            Err(YearRangeError::Inverted {
                first: 2000,
                second: 1990
            })
        );
    }

    #[test]
    fn test_contains_includes_both_bounds() {
        let range = YearRange::new(1990, 1995).unwrap();

        assert!(range.contains(1990));
        assert!(range.contains(1993));
        assert!(range.contains(1995));
        assert!(!range.contains(1989));
        assert!(!range.contains(1996));
    }

    #[test]
    fn test_display() {
        let range = YearRange::new(1990, 1995).unwrap();
        assert_eq!(range.to_string(), "1990-1995");
    }
}
