//! Grammars for semantic version numbers with an optional fourth revision number.
//!
//! There are two independent grammars:
//!
//! - [`strict`] accepts `MAJOR.MINOR.PATCH[.REVISION][-PRERELEASE][+BUILD]`, where every number is
//!   either `0` or has no leading zero, numeric pre-release identifiers have no leading zero,
//!   and all identifiers consist of `[0-9A-Za-z-]`.
//! - [`tolerant`] additionally accepts a leading `v` or leading whitespace, trailing whitespace,
//!   missing major, minor or patch numbers and leading zeroes in any number.
//!
//! Both grammars only extract the textual fields. Turning them into numbers and identifiers
//! is up to the caller. A tolerant match can be turned into the strict textual form with
//! [`TolerantFields::normalize`].
//!
//! ## Examples
//!
//! ```rust
//! let fields = rev_semver_parser::strict("1.2.3.4-rc.1+build.42").unwrap();
//! assert_eq!(fields.major.as_str(), "1");
//! assert_eq!(fields.revision.map(|r| r.as_str()), Some("4"));
//! assert_eq!(fields.pre_release.map(|p| p.as_str()), Some("rc.1"));
//! assert_eq!(fields.build.map(|b| b.as_str()), Some("build.42"));
//!
//! assert_eq!(rev_semver_parser::normalize("v01.2 ").unwrap(), "1.2.0");
//! ```
#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

use std::{
    fmt::{self, Display},
    ops::Range,
};

/// Match the input against the strict grammar.
///
/// ## Examples
///
/// ```rust
/// use rev_semver_parser::{strict, ErrorKind};
///
/// let fields = strict("1.2.3").unwrap();
/// assert_eq!(fields.patch.as_str(), "3");
/// assert!(fields.revision.is_none());
///
/// assert_eq!(strict("").unwrap_err().error_kind(), ErrorKind::EmptyInput);
/// assert_eq!(strict("01.2.3").unwrap_err().error_kind(), ErrorKind::GrammarMismatch);
/// assert_eq!(strict("1.2").unwrap_err().error_kind(), ErrorKind::GrammarMismatch);
/// ```
pub fn strict(input: &str) -> Result<Fields<'_>, Error> {
    if input.is_empty() {
        return Err(Error::empty());
    }

    let mut cursor = Cursor::new(input);
    let major = cursor.number()?;
    cursor.expect(b'.')?;
    let minor = cursor.number()?;
    cursor.expect(b'.')?;
    let patch = cursor.number()?;
    let revision = if cursor.eat(b'.') {
        Some(cursor.number()?)
    } else {
        None
    };
    let pre_release = if cursor.eat(b'-') {
        Some(cursor.identifiers(Numbers::Strict)?)
    } else {
        None
    };
    let build = if cursor.eat(b'+') {
        Some(cursor.identifiers(Numbers::Lenient)?)
    } else {
        None
    };
    cursor.finish()?;

    Ok(Fields {
        input,
        major,
        minor,
        patch,
        revision,
        pre_release,
        build,
    })
}

/// Match the input against the tolerant grammar.
///
/// Any of major, minor and patch may be missing, but at least one number has to be present.
/// Input without any number, such as `v`, `.` or only whitespace, is rejected with
/// [`ErrorKind::GrammarMismatch`] instead of being read as `0.0.0`.
///
/// ## Examples
///
/// ```rust
/// let fields = rev_semver_parser::tolerant("v1.02").unwrap();
/// assert_eq!(fields.major.map(|m| m.as_str()), Some("1"));
/// assert_eq!(fields.minor.map(|m| m.as_str()), Some("02"));
/// assert!(fields.patch.is_none());
///
/// assert!(rev_semver_parser::tolerant("v").is_err());
/// assert!(rev_semver_parser::tolerant(".").is_err());
/// ```
pub fn tolerant(input: &str) -> Result<TolerantFields<'_>, Error> {
    if input.is_empty() {
        return Err(Error::empty());
    }

    let mut cursor = Cursor::new(input);
    if !cursor.eat(b'v') {
        cursor.skip_whitespace();
    }
    let major = cursor.digits();
    let _ = cursor.eat(b'.');
    let minor = cursor.digits();
    let _ = cursor.eat(b'.');
    let patch = cursor.digits();
    let revision = if cursor.eat(b'.') {
        Some(cursor.digits().ok_or_else(|| cursor.unexpected())?)
    } else {
        None
    };
    let pre_release = if cursor.eat(b'-') {
        Some(cursor.identifiers(Numbers::Lenient)?)
    } else {
        None
    };
    let build = if cursor.eat(b'+') {
        Some(cursor.identifiers(Numbers::Lenient)?)
    } else {
        None
    };
    cursor.skip_whitespace();
    cursor.finish()?;

    let fields = TolerantFields {
        input,
        major,
        minor,
        patch,
        revision,
        pre_release,
        build,
    };
    if fields.is_blank() {
        return Err(Error::new(
            input,
            0..input.len(),
            ErrorKind::GrammarMismatch,
        ));
    }
    Ok(fields)
}

/// Match the input against the tolerant grammar and return its strict textual form.
///
/// See [`TolerantFields::normalize`].
///
/// ## Examples
///
/// ```rust
/// use rev_semver_parser::{normalize, ErrorKind};
///
/// assert_eq!(normalize("v1").unwrap(), "1.0.0");
/// assert_eq!(normalize("  1.02.003.0004-pre+007  ").unwrap(), "1.2.3.4-pre+007");
/// assert_eq!(normalize("1.2-pre").unwrap_err().error_kind(), ErrorKind::ShortFormWithSuffix);
/// ```
pub fn normalize(input: &str) -> Result<String, Error> {
    tolerant(input)?.normalize()
}

/// Returns true if the input is a non-empty sequence of `[0-9A-Za-z-]`.
///
/// ## Examples
///
/// ```rust
/// assert!(rev_semver_parser::is_identifier("alpha-1"));
/// assert!(!rev_semver_parser::is_identifier("alpha.1"));
/// assert!(!rev_semver_parser::is_identifier(""));
/// ```
pub fn is_identifier(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(is_identifier_byte)
}

/// Returns true if the input is a non-empty sequence of ASCII digits.
pub fn is_numeric(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if the input is a number with more than one digit that starts with `0`.
pub fn has_leading_zero(input: &str) -> bool {
    input.len() > 1 && input.starts_with('0')
}

/// A single textual field that was extracted from the input, together with its location.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Field<'input> {
    text: &'input str,
    start: usize,
}

impl<'input> Field<'input> {
    /// The text of this field.
    pub fn as_str(&self) -> &'input str {
        self.text
    }

    /// The byte range of this field within the matched input.
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }

    /// Splits this field at every `.`, keeping track of the location of every part.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// let fields = rev_semver_parser::strict("1.2.3-alpha.1").unwrap();
    /// let pre = fields.pre_release.unwrap();
    /// let parts = pre.identifiers().map(|p| (p.as_str(), p.span())).collect::<Vec<_>>();
    /// assert_eq!(parts, vec![("alpha", 6..11), ("1", 12..13)]);
    /// ```
    pub fn identifiers(&self) -> impl Iterator<Item = Field<'input>> {
        let mut start = self.start;
        self.text.split('.').map(move |text| {
            let field = Field { text, start };
            start += text.len() + 1;
            field
        })
    }
}

impl Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.text)
    }
}

/// The fields of a version that matched the strict grammar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Fields<'input> {
    input: &'input str,
    /// The major number, `0` or without leading zeroes.
    pub major: Field<'input>,
    /// The minor number, `0` or without leading zeroes.
    pub minor: Field<'input>,
    /// The patch number, `0` or without leading zeroes.
    pub patch: Field<'input>,
    /// The optional revision number, `0` or without leading zeroes.
    pub revision: Option<Field<'input>>,
    /// The pre-release identifiers, without the leading `-`.
    pub pre_release: Option<Field<'input>>,
    /// The build identifiers, without the leading `+`.
    pub build: Option<Field<'input>>,
}

impl<'input> Fields<'input> {
    /// The input that was matched.
    pub fn input(&self) -> &'input str {
        self.input
    }
}

/// The fields of a version that matched the tolerant grammar.
///
/// Numbers may contain leading zeroes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TolerantFields<'input> {
    input: &'input str,
    /// The major number, if present.
    pub major: Option<Field<'input>>,
    /// The minor number, if present.
    pub minor: Option<Field<'input>>,
    /// The patch number, if present.
    pub patch: Option<Field<'input>>,
    /// The revision number, if present.
    pub revision: Option<Field<'input>>,
    /// The pre-release identifiers, without the leading `-`.
    pub pre_release: Option<Field<'input>>,
    /// The build identifiers, without the leading `+`.
    pub build: Option<Field<'input>>,
}

impl<'input> TolerantFields<'input> {
    /// The input that was matched.
    pub fn input(&self) -> &'input str {
        self.input
    }

    /// Returns true if any of major, minor, or patch is missing.
    pub fn is_short(&self) -> bool {
        self.major.is_none() || self.minor.is_none() || self.patch.is_none()
    }

    /// Assemble the strict textual form of these fields.
    ///
    /// Leading zeroes are removed from all numbers, an all-zero number becomes `0`.
    /// Missing major, minor, or patch numbers are filled with `0`, which is only allowed
    /// if neither pre-release nor build identifiers are present.
    ///
    /// The result is not validated against the strict grammar, e.g. a numeric pre-release
    /// identifier may still have a leading zero.
    pub fn normalize(&self) -> Result<String, Error> {
        if self.is_short() {
            if let Some(suffix) = self.pre_release.or(self.build) {
                return Err(Error::new(
                    self.input,
                    suffix.span(),
                    ErrorKind::ShortFormWithSuffix,
                ));
            }
        }

        let mut normalized = String::with_capacity(self.input.len() + 4);
        normalized.push_str(canonical_number(self.major));
        normalized.push('.');
        normalized.push_str(canonical_number(self.minor));
        normalized.push('.');
        normalized.push_str(canonical_number(self.patch));
        if let Some(revision) = self.revision {
            normalized.push('.');
            normalized.push_str(trim_leading_zeroes(revision.as_str()));
        }
        if let Some(pre_release) = self.pre_release {
            normalized.push('-');
            normalized.push_str(pre_release.as_str());
        }
        if let Some(build) = self.build {
            normalized.push('+');
            normalized.push_str(build.as_str());
        }
        Ok(normalized)
    }

    fn is_blank(&self) -> bool {
        self.major.is_none()
            && self.minor.is_none()
            && self.patch.is_none()
            && self.revision.is_none()
            && self.pre_release.is_none()
            && self.build.is_none()
    }
}

fn canonical_number(field: Option<Field<'_>>) -> &str {
    field.map_or("0", |f| trim_leading_zeroes(f.text))
}

fn trim_leading_zeroes(number: &str) -> &str {
    match number.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    }
}

/// A failure to parse or validate a version,
/// together with the location in the input where the failure was detected.
///
/// # Example
///
/// ```rust
/// let error = rev_semver_parser::strict("1.2.3.x").unwrap_err();
/// assert_eq!(error.to_string(), "Unexpected `x`");
/// assert_eq!(error.error_span(), 6..7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    input: String,
    span: Span,
    kind: ErrorKind,
}

impl Error {
    /// Creates a new error for the given input.
    ///
    /// The span is a byte range into the input and should point to the erroneous part.
    pub fn new(input: impl Into<String>, span: Range<usize>, kind: ErrorKind) -> Self {
        Self {
            input: input.into(),
            span: Span::from(span),
            kind,
        }
    }

    fn empty() -> Self {
        Self::new(String::new(), 0..0, ErrorKind::EmptyInput)
    }

    /// Returns the input in which the error was detected.
    ///
    /// For tolerant parsing, this might be the normalized input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = rev_semver_parser::strict("1+").unwrap_err();
    /// assert_eq!(error.input(), "1+");
    /// ```
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns range into the input string that points to the erroneous input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = rev_semver_parser::strict("1.2.3+").unwrap_err();
    /// assert_eq!(error.error_span(), 6..6);
    /// ```
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.span.into()
    }

    /// Returns the kind of error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rev_semver_parser::{normalize, strict, ErrorKind};
    ///
    /// assert_eq!(strict("").unwrap_err().error_kind(), ErrorKind::EmptyInput);
    /// assert_eq!(strict("1.2.3-").unwrap_err().error_kind(), ErrorKind::GrammarMismatch);
    /// assert_eq!(normalize("1-pre").unwrap_err().error_kind(), ErrorKind::ShortFormWithSuffix);
    /// ```
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns a slice from the input that triggered the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = rev_semver_parser::strict("1.2.3-01").unwrap_err();
    /// assert_eq!(error.erroneous_input(), "01");
    /// ```
    #[inline]
    pub fn erroneous_input(&self) -> &str {
        self.input.get(self.error_span()).unwrap_or_default()
    }

    /// Returns a text representation of the error.
    ///
    /// This is equivalent to the [`Display`] implementation, which can be further customized with format specifiers.
    ///
    /// ```rust
    /// let error = rev_semver_parser::strict("1.2.3?").unwrap_err();
    /// assert_eq!(error.error_line(), "Unexpected `?`");
    /// assert_eq!(format!("{:!^20}", error), String::from("!!!Unexpected `?`!!!"));
    /// ```
    pub fn error_line(&self) -> String {
        let erroneous = self.erroneous_input();
        match self.kind {
            ErrorKind::EmptyInput => String::from("Version string is empty"),
            ErrorKind::GrammarMismatch if erroneous.is_empty() => {
                String::from("Unexpected end of input")
            }
            ErrorKind::GrammarMismatch => format!("Unexpected `{}`", erroneous),
            ErrorKind::NumericOverflow => {
                format!("Could not parse `{}`: number too large", erroneous)
            }
            ErrorKind::LeadingZero => format!(
                "Numeric pre-release identifier `{}` must not contain leading zeroes",
                erroneous
            ),
            ErrorKind::InvalidCharacter => format!(
                "Invalid character(s) found in pre-release identifier `{}`",
                erroneous
            ),
            ErrorKind::EmptyIdentifier => String::from("Pre-release identifier can not be empty"),
            ErrorKind::InvalidBuildSegment if erroneous.is_empty() => {
                String::from("Build metadata can not be empty")
            }
            ErrorKind::InvalidBuildSegment => format!(
                "Invalid character(s) found in build metadata `{}`",
                erroneous
            ),
            ErrorKind::ShortFormWithSuffix => format!(
                "Short version cannot contain pre-release or build metadata `{}`",
                erroneous
            ),
        }
    }

    /// Returns a caret line indicating the erroneous input if it was written under the input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = rev_semver_parser::strict("1.2.3 bar").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "~~~~~^");
    ///
    /// let error = rev_semver_parser::strict("1.2.3-").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "~~~~~~^");
    /// ```
    pub fn indicate_erroneous_input(&self) -> String {
        format!(
            "{0:~<start$}{0:^<width$}",
            "",
            start = self.span.start,
            width = (self.span.end - self.span.start).max(1)
        )
    }
}

/// The kind of failure.
///
/// These don't include the erroneous input as that is covered by [`Error::erroneous_input`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was empty
    EmptyInput,
    /// The input does not match the grammar
    GrammarMismatch,
    /// A number does not fit into its integer type
    NumericOverflow,
    /// A numeric pre-release identifier has a leading zero
    LeadingZero,
    /// A pre-release identifier contains characters outside of `[0-9A-Za-z-]`
    InvalidCharacter,
    /// A pre-release identifier is empty
    EmptyIdentifier,
    /// A build identifier is empty or contains characters outside of `[0-9A-Za-z-]`
    InvalidBuildSegment,
    /// A short version like `1.2` was given together with pre-release or build identifiers
    ShortFormWithSuffix,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.error_line())?;
        if f.alternate() {
            writeln!(f)?;
            writeln!(f, "|    {}", self.input)?;
            writeln!(f, "|    {}", self.indicate_erroneous_input())?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(s: Span) -> Self {
        s.start..s.end
    }
}

/// How numeric identifiers in a list of identifiers are checked.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Numbers {
    /// `0` or no leading zero
    Strict,
    /// any number of digits
    Lenient,
}

#[derive(Debug)]
struct Cursor<'input> {
    input: &'input str,
    pos: usize,
}

impl<'input> Cursor<'input> {
    fn new(input: &'input str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), Error> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    // only ever advances over ASCII, so `pos` stays on a char boundary
    fn take_while(&mut self, accept: impl Fn(u8) -> bool) -> Field<'input> {
        let start = self.pos;
        while self.peek().map_or(false, &accept) {
            self.pos += 1;
        }
        Field {
            text: &self.input[start..self.pos],
            start,
        }
    }

    fn skip_whitespace(&mut self) {
        let _ = self.take_while(is_whitespace);
    }

    fn digits(&mut self) -> Option<Field<'input>> {
        Some(self.take_while(|b| b.is_ascii_digit())).filter(|d| !d.text.is_empty())
    }

    fn number(&mut self) -> Result<Field<'input>, Error> {
        let number = self.digits().ok_or_else(|| self.unexpected())?;
        if has_leading_zero(number.text) {
            return Err(self.mismatch(number.span()));
        }
        Ok(number)
    }

    fn identifiers(&mut self, numbers: Numbers) -> Result<Field<'input>, Error> {
        let start = self.pos;
        loop {
            let identifier = self.take_while(is_identifier_byte);
            if identifier.text.is_empty() {
                return Err(self.unexpected());
            }
            if numbers == Numbers::Strict
                && is_numeric(identifier.text)
                && has_leading_zero(identifier.text)
            {
                return Err(self.mismatch(identifier.span()));
            }
            if !self.eat(b'.') {
                break;
            }
        }
        Ok(Field {
            text: &self.input[start..self.pos],
            start,
        })
    }

    fn finish(&self) -> Result<(), Error> {
        if self.pos == self.input.len() {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> Error {
        let width = self.input[self.pos..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        self.mismatch(self.pos..self.pos + width)
    }

    fn mismatch(&self, span: Range<usize>) -> Error {
        Error::new(self.input, span, ErrorKind::GrammarMismatch)
    }
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0C' | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn strict_parts(input: &str) -> [Option<&str>; 6] {
        let fields = strict(input).unwrap();
        [
            Some(fields.major.as_str()),
            Some(fields.minor.as_str()),
            Some(fields.patch.as_str()),
            fields.revision.map(|f| f.as_str()),
            fields.pre_release.map(|f| f.as_str()),
            fields.build.map(|f| f.as_str()),
        ]
    }

    fn tolerant_parts(input: &str) -> [Option<&str>; 6] {
        let fields = tolerant(input).unwrap();
        [
            fields.major.map(|f| f.as_str()),
            fields.minor.map(|f| f.as_str()),
            fields.patch.map(|f| f.as_str()),
            fields.revision.map(|f| f.as_str()),
            fields.pre_release.map(|f| f.as_str()),
            fields.build.map(|f| f.as_str()),
        ]
    }

    #[test_case("0.0.0" => [Some("0"), Some("0"), Some("0"), None, None, None])]
    #[test_case("1.2.3" => [Some("1"), Some("2"), Some("3"), None, None, None])]
    #[test_case("10.20.30" => [Some("10"), Some("20"), Some("30"), None, None, None])]
    #[test_case("1.2.3.4" => [Some("1"), Some("2"), Some("3"), Some("4"), None, None])]
    #[test_case("1.2.3.0" => [Some("1"), Some("2"), Some("3"), Some("0"), None, None])]
    #[test_case("1.2.3-alpha" => [Some("1"), Some("2"), Some("3"), None, Some("alpha"), None])]
    #[test_case("1.2.3-alpha.1.0" => [Some("1"), Some("2"), Some("3"), None, Some("alpha.1.0"), None])]
    #[test_case("1.2.3--" => [Some("1"), Some("2"), Some("3"), None, Some("-"), None])]
    #[test_case("1.2.3-0a.01a" => [Some("1"), Some("2"), Some("3"), None, Some("0a.01a"), None])]
    #[test_case("1.2.3+001.sha-1" => [Some("1"), Some("2"), Some("3"), None, None, Some("001.sha-1")])]
    #[test_case("1.2.3.4-rc.1+build.5" => [Some("1"), Some("2"), Some("3"), Some("4"), Some("rc.1"), Some("build.5")])]
    #[test_case("1.2.3-rc+build-1-" => [Some("1"), Some("2"), Some("3"), None, Some("rc"), Some("build-1-")])]
    fn test_strict(input: &str) -> [Option<&str>; 6] {
        strict_parts(input)
    }

    #[test_case("" => ErrorKind::EmptyInput; "empty")]
    #[test_case(" " => ErrorKind::GrammarMismatch; "whitespace")]
    #[test_case("1" => ErrorKind::GrammarMismatch; "major only")]
    #[test_case("1.2" => ErrorKind::GrammarMismatch; "major minor only")]
    #[test_case("1.2.3." => ErrorKind::GrammarMismatch; "trailing dot")]
    #[test_case("1.2.3.4.5" => ErrorKind::GrammarMismatch; "five numbers")]
    #[test_case("01.2.3" => ErrorKind::GrammarMismatch; "leading zero major")]
    #[test_case("1.02.3" => ErrorKind::GrammarMismatch; "leading zero minor")]
    #[test_case("1.2.03" => ErrorKind::GrammarMismatch; "leading zero patch")]
    #[test_case("1.2.3.04" => ErrorKind::GrammarMismatch; "leading zero revision")]
    #[test_case("1.2.3-01" => ErrorKind::GrammarMismatch; "leading zero pre-release")]
    #[test_case("1.2.3-alpha..1" => ErrorKind::GrammarMismatch; "empty pre-release identifier")]
    #[test_case("1.2.3-" => ErrorKind::GrammarMismatch; "missing pre-release")]
    #[test_case("1.2.3+" => ErrorKind::GrammarMismatch; "missing build")]
    #[test_case("1.2.3+a..b" => ErrorKind::GrammarMismatch; "empty build identifier")]
    #[test_case("1.2.3-a_b" => ErrorKind::GrammarMismatch; "underscore")]
    #[test_case("v1.2.3" => ErrorKind::GrammarMismatch; "leading v")]
    #[test_case(" 1.2.3" => ErrorKind::GrammarMismatch; "leading whitespace")]
    #[test_case("1.2.3 " => ErrorKind::GrammarMismatch; "trailing whitespace")]
    #[test_case("1.2.3-ä" => ErrorKind::GrammarMismatch; "unicode")]
    fn test_strict_error(input: &str) -> ErrorKind {
        strict(input).unwrap_err().error_kind()
    }

    #[test_case("1" => [Some("1"), None, None, None, None, None])]
    #[test_case("v1" => [Some("1"), None, None, None, None, None])]
    #[test_case("  1.2  " => [Some("1"), Some("2"), None, None, None, None])]
    #[test_case("01.002.0003" => [Some("01"), Some("002"), Some("0003"), None, None, None])]
    #[test_case("1.2.3.04" => [Some("1"), Some("2"), Some("3"), Some("04"), None, None])]
    #[test_case(".5" => [None, Some("5"), None, None, None, None])]
    #[test_case("1..3" => [Some("1"), None, Some("3"), None, None, None])]
    #[test_case("1.2." => [Some("1"), Some("2"), None, None, None, None]; "trailing dot")]
    #[test_case("1.2.3-01.02" => [Some("1"), Some("2"), Some("3"), None, Some("01.02"), None])]
    #[test_case("v1.2.3.4-rc.1+b.7 " => [Some("1"), Some("2"), Some("3"), Some("4"), Some("rc.1"), Some("b.7")])]
    #[test_case("1-pre" => [Some("1"), None, None, None, Some("pre"), None])]
    fn test_tolerant(input: &str) -> [Option<&str>; 6] {
        tolerant_parts(input)
    }

    #[test_case("" => ErrorKind::EmptyInput; "empty")]
    #[test_case("v" => ErrorKind::GrammarMismatch; "only v is not read as zero")]
    #[test_case("." => ErrorKind::GrammarMismatch; "only dot is not read as zero")]
    #[test_case("v.." => ErrorKind::GrammarMismatch; "v and dots are not read as zero")]
    #[test_case("   " => ErrorKind::GrammarMismatch; "only whitespace is not read as zero")]
    #[test_case(" v1.2.3" => ErrorKind::GrammarMismatch; "whitespace before v")]
    #[test_case("V1.2.3" => ErrorKind::GrammarMismatch; "capital v")]
    #[test_case("1.2.3." => ErrorKind::GrammarMismatch; "trailing dot")]
    #[test_case("1.2.3.4.5" => ErrorKind::GrammarMismatch; "five numbers")]
    #[test_case("1.2.3-" => ErrorKind::GrammarMismatch; "missing pre-release")]
    #[test_case("1.2.3+a+b" => ErrorKind::GrammarMismatch; "two builds")]
    #[test_case("1.2.3 x" => ErrorKind::GrammarMismatch; "trailing garbage")]
    fn test_tolerant_error(input: &str) -> ErrorKind {
        tolerant(input).unwrap_err().error_kind()
    }

    #[test_case("1" => "1.0.0")]
    #[test_case("v1.2" => "1.2.0")]
    #[test_case(".5" => "0.5.0")]
    #[test_case("00.000.0" => "0.0.0")]
    #[test_case("01.0.0" => "1.0.0")]
    #[test_case("1.2.3.007" => "1.2.3.7")]
    #[test_case(" 1.2.3-rc.01+007 " => "1.2.3-rc.01+007")]
    #[test_case("1..3.4" => "1.0.3.4")]
    fn test_normalize(input: &str) -> String {
        normalize(input).unwrap()
    }

    #[test_case("1-pre" => "pre")]
    #[test_case("1.2+build" => "build")]
    #[test_case("1.2-pre+build" => "pre")]
    #[test_case(".1.2-pre" => "pre")]
    fn test_normalize_short_form_with_suffix(input: &str) -> String {
        let error = normalize(input).unwrap_err();
        assert_eq!(error.error_kind(), ErrorKind::ShortFormWithSuffix);
        error.erroneous_input().to_string()
    }

    #[test]
    fn test_field_identifiers_have_spans() {
        let fields = strict("1.2.3+a.bc.d").unwrap();
        let build = fields.build.unwrap();
        assert_eq!(build.span(), 6..12);
        let parts = build
            .identifiers()
            .map(|f| (f.as_str(), f.span()))
            .collect::<Vec<_>>();
        assert_eq!(parts, vec![("a", 6..7), ("bc", 8..10), ("d", 11..12)]);
    }

    #[test_case("1.2.3x", 5..6, "Unexpected `x`")]
    #[test_case("1.2.3-", 6..6, "Unexpected end of input")]
    #[test_case("1.2.3-01", 6..8, "Unexpected `01`")]
    #[test_case("1.2.3-ä", 6..8, "Unexpected `ä`")]
    #[test_case("01.2.3", 0..2, "Unexpected `01`")]
    fn test_error_span(input: &str, span: Range<usize>, line: &str) {
        let error = strict(input).unwrap_err();
        assert_eq!(error.input(), input);
        assert_eq!(error.error_span(), span);
        assert_eq!(error.error_line(), line);
    }

    #[test]
    fn test_error_display_alternate() {
        let error = strict("1.2.3-alpha_1").unwrap_err();
        assert_eq!(
            format!("{:#}", error),
            "Unexpected `_`\n|    1.2.3-alpha_1\n|    ~~~~~~~~~~~^\n"
        );
    }

    #[test]
    fn test_error_with_out_of_bounds_span() {
        let error = Error::new("1.2.3", 3..42, ErrorKind::NumericOverflow);
        assert_eq!(error.erroneous_input(), "");
        let error = Error::new("1.2.3", 4..2, ErrorKind::GrammarMismatch);
        assert_eq!(error.error_span(), 4..4);
    }

    #[test_case("0" => true; "zero")]
    #[test_case("a-Z-9" => true; "mixed")]
    #[test_case("-" => true; "hyphen")]
    #[test_case("" => false; "empty")]
    #[test_case("a.b" => false; "dot")]
    #[test_case("a+b" => false; "plus")]
    #[test_case("ß" => false; "unicode")]
    fn test_is_identifier(input: &str) -> bool {
        is_identifier(input)
    }

    #[test_case("0" => false)]
    #[test_case("10" => false)]
    #[test_case("01" => true)]
    #[test_case("007" => true)]
    fn test_has_leading_zero(input: &str) -> bool {
        has_leading_zero(input)
    }
}
