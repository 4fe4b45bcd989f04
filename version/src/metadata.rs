use rev_semver_parser::{has_leading_zero, is_identifier, is_numeric, Error, ErrorKind, Field};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A single dot-separated pre-release identifier.
///
/// Numeric identifiers are compared numerically, alphanumeric identifiers are compared
/// lexically in ASCII sort order. Numeric identifiers always have lower precedence
/// than alphanumeric identifiers, hence `Numeric` is the first variant.
///
/// ## Examples
///
/// ```rust
/// # use rev_version::Identifier;
/// assert!(Identifier::new("2").unwrap() < Identifier::new("11").unwrap());
/// assert!(Identifier::new("11").unwrap() < Identifier::new("1a").unwrap());
/// assert!(Identifier::new("alpha").unwrap() < Identifier::new("beta").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    /// An identifier of only digits, `0` or without leading zeroes.
    Numeric(u64),
    /// An identifier of `[0-9A-Za-z-]` with at least one non-digit.
    AlphaNumeric(String),
}

impl Identifier {
    /// Parse a single pre-release identifier.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use rev_version::{ErrorKind, Identifier};
    /// assert_eq!(Identifier::new("42").unwrap(), Identifier::Numeric(42));
    /// assert_eq!(Identifier::new("rc-1").unwrap(), Identifier::AlphaNumeric("rc-1".into()));
    ///
    /// assert_eq!(Identifier::new("").unwrap_err().error_kind(), ErrorKind::EmptyIdentifier);
    /// assert_eq!(Identifier::new("01").unwrap_err().error_kind(), ErrorKind::LeadingZero);
    /// assert_eq!(Identifier::new("rc_1").unwrap_err().error_kind(), ErrorKind::InvalidCharacter);
    /// ```
    pub fn new(identifier: &str) -> Result<Self, Error> {
        classify(identifier).map_err(|kind| Error::new(identifier, 0..identifier.len(), kind))
    }

    pub(crate) fn from_field(field: Field<'_>, input: &str) -> Result<Self, Error> {
        classify(field.as_str()).map_err(|kind| Error::new(input, field.span(), kind))
    }

    /// Returns true if this is a numeric identifier.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    /// Checks the characters of an alphanumeric identifier that was constructed directly.
    pub(crate) fn check(&self) -> Result<(), Error> {
        match self {
            Identifier::Numeric(_) => Ok(()),
            Identifier::AlphaNumeric(text) if text.is_empty() => {
                Err(Error::new("", 0..0, ErrorKind::EmptyIdentifier))
            }
            Identifier::AlphaNumeric(text) if !is_identifier(text) => Err(Error::new(
                text.as_str(),
                0..text.len(),
                ErrorKind::InvalidCharacter,
            )),
            Identifier::AlphaNumeric(_) => Ok(()),
        }
    }
}

fn classify(identifier: &str) -> Result<Identifier, ErrorKind> {
    if identifier.is_empty() {
        return Err(ErrorKind::EmptyIdentifier);
    }
    if is_numeric(identifier) {
        if has_leading_zero(identifier) {
            return Err(ErrorKind::LeadingZero);
        }
        return identifier
            .parse()
            .map(Identifier::Numeric)
            .map_err(|_| ErrorKind::NumericOverflow);
    }
    if is_identifier(identifier) {
        Ok(Identifier::AlphaNumeric(String::from(identifier)))
    } else {
        Err(ErrorKind::InvalidCharacter)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => Display::fmt(n, f),
            Identifier::AlphaNumeric(s) => f.pad(s),
        }
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::new(s)
    }
}

impl From<u64> for Identifier {
    fn from(n: u64) -> Self {
        Identifier::Numeric(n)
    }
}

/// Validate a single build identifier.
///
/// Build identifiers consist of `[0-9A-Za-z-]`, leading zeroes are allowed.
///
/// ## Examples
///
/// ```rust
/// # use rev_version::{build_identifier, ErrorKind};
/// assert_eq!(build_identifier("007").unwrap(), "007");
/// assert_eq!(build_identifier("").unwrap_err().error_kind(), ErrorKind::InvalidBuildSegment);
/// assert_eq!(build_identifier("a.b").unwrap_err().error_kind(), ErrorKind::InvalidBuildSegment);
/// ```
pub fn build_identifier(identifier: &str) -> Result<String, Error> {
    check_build(identifier)?;
    Ok(String::from(identifier))
}

pub(crate) fn build_from_field(field: Field<'_>, input: &str) -> Result<String, Error> {
    if is_identifier(field.as_str()) {
        Ok(String::from(field.as_str()))
    } else {
        Err(Error::new(input, field.span(), ErrorKind::InvalidBuildSegment))
    }
}

pub(crate) fn check_build(identifier: &str) -> Result<(), Error> {
    if is_identifier(identifier) {
        Ok(())
    } else {
        Err(Error::new(
            identifier,
            0..identifier.len(),
            ErrorKind::InvalidBuildSegment,
        ))
    }
}

#[cfg(feature = "semver")]
pub(crate) fn from_semver(s: &str) -> Identifier {
    match s.parse::<u64>() {
        Ok(n) if !has_leading_zero(s) => Identifier::Numeric(n),
        _ => Identifier::AlphaNumeric(String::from(s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;
    use test_case::test_case;

    #[test_case("0" => Identifier::Numeric(0))]
    #[test_case("42" => Identifier::Numeric(42))]
    #[test_case("18446744073709551615" => Identifier::Numeric(u64::MAX))]
    #[test_case("alpha" => Identifier::AlphaNumeric(String::from("alpha")))]
    #[test_case("0a" => Identifier::AlphaNumeric(String::from("0a")))]
    #[test_case("01a" => Identifier::AlphaNumeric(String::from("01a")))]
    #[test_case("-" => Identifier::AlphaNumeric(String::from("-")))]
    fn test_new(input: &str) -> Identifier {
        Identifier::new(input).unwrap()
    }

    #[test_case("" => ErrorKind::EmptyIdentifier; "empty")]
    #[test_case("00" => ErrorKind::LeadingZero; "double zero")]
    #[test_case("01" => ErrorKind::LeadingZero; "leading zero")]
    #[test_case("18446744073709551616" => ErrorKind::NumericOverflow; "overflow")]
    #[test_case("a.b" => ErrorKind::InvalidCharacter; "dot")]
    #[test_case("a+b" => ErrorKind::InvalidCharacter; "plus")]
    #[test_case("ä" => ErrorKind::InvalidCharacter; "unicode")]
    fn test_new_error(input: &str) -> ErrorKind {
        Identifier::new(input).unwrap_err().error_kind()
    }

    #[test_case("1", "2" => Ordering::Less)]
    #[test_case("2", "11" => Ordering::Less)]
    #[test_case("11", "11" => Ordering::Equal)]
    #[test_case("999", "a" => Ordering::Less)]
    #[test_case("a", "999" => Ordering::Greater)]
    #[test_case("alpha", "beta" => Ordering::Less)]
    #[test_case("beta", "Beta" => Ordering::Greater)]
    #[test_case("11a", "2a" => Ordering::Less)]
    #[test_case("rc", "rc" => Ordering::Equal)]
    fn test_cmp(lhs: &str, rhs: &str) -> Ordering {
        Identifier::new(lhs)
            .unwrap()
            .cmp(&Identifier::new(rhs).unwrap())
    }

    #[test]
    fn test_display() {
        assert_eq!(Identifier::Numeric(42).to_string(), "42");
        assert_eq!(format!("{:>6}", Identifier::Numeric(42)), "    42");
        assert_eq!(
            format!("{:*<6}", Identifier::AlphaNumeric(String::from("rc"))),
            "rc****"
        );
    }

    #[test]
    fn test_check_manually_constructed() {
        assert!(Identifier::AlphaNumeric(String::from("ok-1")).check().is_ok());
        assert_eq!(
            Identifier::AlphaNumeric(String::new())
                .check()
                .unwrap_err()
                .error_kind(),
            ErrorKind::EmptyIdentifier
        );
        let error = Identifier::AlphaNumeric(String::from("no way"))
            .check()
            .unwrap_err();
        assert_eq!(error.error_kind(), ErrorKind::InvalidCharacter);
        assert_eq!(error.input(), "no way");
    }

    #[test]
    fn test_is_numeric() {
        assert!(Identifier::from(7).is_numeric());
        assert!(!"x7".parse::<Identifier>().unwrap().is_numeric());
    }
}
