//! Semantic Version numbers with an optional fourth revision number.
//!
//! ## Motivation
//!
//! Plenty of software is versioned as `MAJOR.MINOR.PATCH.REVISION`, which is not accepted
//! by a semver parser. This crate extends semantic versioning with an optional revision,
//! while staying compatible with regular three-number versions.
//!
//! The differences to semver include:
//!
//! - An optional revision may follow the patch number (e.g. "1.2.3.4")
//! - The revision is only compared if both versions have one, so "1.2.3" and "1.2.3.4" are equal
//! - A tolerant parser accepts a leading `v`, surrounding whitespace, leading zeroes,
//!   and missing minor or patch numbers (e.g. "v1.02" parses as "1.2.0")
//!
//! ## Examples
//!
//! ```rust
//! use rev_semver::Version;
//!
//! let version = rev_semver::parse("1.2.3.4-rc.1+build.42").unwrap();
//! assert_eq!(version.revision, Some(4));
//! assert_eq!(version.to_string(), "1.2.3.4-rc.1+build.42");
//!
//! // the revision decides only if both versions have one
//! assert!(rev_semver::must_parse("1.2.3.4") < rev_semver::must_parse("1.2.3.5"));
//! assert_eq!(rev_semver::must_parse("1.2.3.4"), rev_semver::must_parse("1.2.3"));
//!
//! // tolerant parsing normalizes the input first
//! assert_eq!(rev_semver::parse_tolerant("v01.2 ").unwrap(), Version::new(1, 2, 0));
//! assert!(rev_semver::parse("v01.2").is_err());
//! ```
//!
//! Errors point to the offending part of the input:
//!
//! ```rust
//! let error = rev_semver::parse("1.2.3-alpha_1").unwrap_err();
//! assert_eq!(error.to_string(), "Unexpected `_`");
//! assert_eq!(
//!     format!("{:#}", error),
//!     "Unexpected `_`\n|    1.2.3-alpha_1\n|    ~~~~~~~~~~~^\n"
//! );
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serializes a [`Version`] as its string form, using strict parsing
//! - `semver`: conversions from and to [`semver::Version`](https://docs.rs/semver)
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

pub use rev_semver_parser::{normalize, Error, ErrorKind};
pub use rev_version::{build_identifier, Identifier, Version, MAX_REVISION, SPEC_VERSION};

/// Parse a string slice into a Version, using the strict grammar.
///
/// ## Examples
///
/// ```rust
/// use rev_semver::{ErrorKind, Version};
///
/// assert_eq!(rev_semver::parse("1.2.3"), Ok(Version::new(1, 2, 3)));
/// assert_eq!(rev_semver::parse("1.2").unwrap_err().error_kind(), ErrorKind::GrammarMismatch);
/// ```
pub fn parse(input: &str) -> Result<Version, Error> {
    Version::parse(input)
}

/// Parse a string slice into a Version, using the tolerant grammar.
///
/// ## Examples
///
/// ```rust
/// use rev_semver::{ErrorKind, Version};
///
/// assert_eq!(rev_semver::parse_tolerant("v1"), Ok(Version::new(1, 0, 0)));
/// assert_eq!(
///     rev_semver::parse_tolerant("v1-rc").unwrap_err().error_kind(),
///     ErrorKind::ShortFormWithSuffix
/// );
/// ```
pub fn parse_tolerant(input: &str) -> Result<Version, Error> {
    Version::parse_tolerant(input)
}

/// Parse a string slice into a Version, using the strict grammar.
///
/// # Panics
///
/// Panics if the input is not a valid version.
///
/// ```rust,should_panic
/// let _ = rev_semver::must_parse("1.2.3-");
/// ```
pub fn must_parse(input: &str) -> Version {
    Version::must_parse(input)
}

/// Parse a string slice and render only its major, minor, patch, and revision numbers.
///
/// ## Examples
///
/// ```rust
/// assert_eq!(rev_semver::finalize_version("1.2.3.4-rc.1+b").unwrap(), "1.2.3.4");
/// assert!(rev_semver::finalize_version("1.2.3.").is_err());
/// ```
pub fn finalize_version(input: &str) -> Result<String, Error> {
    parse(input).map(|v| v.finalize_version())
}

/// Sorts the versions in ascending order.
///
/// See [`rev_version::sort`].
pub fn sort(versions: &mut [Version]) {
    rev_version::sort(versions)
}
