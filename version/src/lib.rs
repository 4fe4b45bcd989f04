//! Semantic version with an optional revision.
//!
//! Compared to a regular semver version, this version:
//!  - Supports an optional fourth numeric component, the revision (e.g. 1.2.3.4)
//!  - Considers a version without revision and a version with revision equal,
//!    if they only differ in the revision (e.g. 1.2.3 == 1.2.3.4)
//!
//! Parsing is done by [`rev_semver_parser`], either in strict or in tolerant mode.
//!
//! ## Examples
//!
//! ```rust
//! # use rev_version::Version;
//! let version = Version::parse("1.2.3.4-rc.1+build.42").unwrap();
//! assert_eq!(version.revision, Some(4));
//! assert!(version < Version::parse("1.2.3.4").unwrap());
//!
//! let version = Version::parse_tolerant("v1.2").unwrap();
//! assert_eq!(version, Version::new(1, 2, 0));
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

use rev_semver_parser::{Field, Fields};
use std::{
    cmp::Ordering,
    convert::TryFrom,
    fmt::{self, Display, Write},
    hash,
    str::FromStr,
};

mod metadata;
pub use metadata::{build_identifier, Identifier};
pub use rev_semver_parser::{Error, ErrorKind};

/// The version of the semantic versioning specification that is supported.
pub const SPEC_VERSION: Version = Version::new(2, 0, 0);

/// The largest revision that can be parsed, the revision is limited to the range of an `i64`.
///
/// Constructors and mutators clamp the revision to this value.
pub const MAX_REVISION: u64 = i64::MAX as u64;

/// Represents a semantic version number with an optional revision.
///
/// Equality and ordering ignore the build identifiers.
/// The revision is only compared if both versions have one.
#[derive(Debug, Clone)]
pub struct Version {
    /// The major version.
    pub major: u64,
    /// The minor version.
    pub minor: u64,
    /// The patch version.
    pub patch: u64,
    /// The revision, a fourth number following the patch version.
    ///
    /// Never larger than [`MAX_REVISION`], see [`Version::validate`].
    pub revision: Option<u64>,
    /// The pre-release identifiers.
    pub pre: Vec<Identifier>,
    /// The build identifiers.
    pub build: Vec<String>,
}

impl Version {
    /// Constructs a new, empty version
    ///
    /// ## Examples
    ///
    /// ```
    /// # use rev_version::Version;
    /// let version = Version::empty();
    /// assert_eq!(version.to_string(), "0.0.0")
    /// ```
    pub const fn empty() -> Self {
        Version::new(0, 0, 0)
    }

    /// Constructs a new version out of the three regular version components
    ///
    /// ## Examples
    ///
    /// ```
    /// # use rev_version::Version;
    /// let version = Version::new(1, 2, 3);
    /// assert_eq!(version.to_string(), "1.2.3")
    /// ```
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            revision: None,
            pre: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Returns this version with the given revision, clamped to [`MAX_REVISION`].
    ///
    /// ## Examples
    ///
    /// ```
    /// # use rev_version::{Version, MAX_REVISION};
    /// let version = Version::new(1, 2, 3).with_revision(4);
    /// assert_eq!(version.to_string(), "1.2.3.4");
    ///
    /// let version = Version::new(1, 2, 3).with_revision(u64::MAX);
    /// assert_eq!(version.revision, Some(MAX_REVISION));
    /// ```
    pub fn with_revision(mut self, revision: u64) -> Self {
        self.revision = Some(revision.min(MAX_REVISION));
        self
    }

    /// Parse a string slice into a Version, using the strict grammar.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use rev_version::{ErrorKind, Version};
    /// let version = Version::parse("1.2.3.4-pre+build.42").unwrap();
    /// assert_eq!(version.to_string(), "1.2.3.4-pre+build.42");
    ///
    /// let error = Version::parse("v1.2.3").unwrap_err();
    /// assert_eq!(error.error_kind(), ErrorKind::GrammarMismatch);
    ///
    /// let error = Version::parse("1.2.18446744073709551616").unwrap_err();
    /// assert_eq!(error.error_kind(), ErrorKind::NumericOverflow);
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        Self::from_fields(&rev_semver_parser::strict(input)?)
    }

    /// Parse a string slice into a Version, using the tolerant grammar.
    ///
    /// The input is normalized into the strict form first, see [`rev_semver_parser::normalize`].
    /// Any error that happens after the normalization refers to the normalized input.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use rev_version::{ErrorKind, Version};
    /// let version = Version::parse_tolerant("v01.2 ").unwrap();
    /// assert_eq!(version.to_string(), "1.2.0");
    ///
    /// let error = Version::parse_tolerant("1.2-pre").unwrap_err();
    /// assert_eq!(error.error_kind(), ErrorKind::ShortFormWithSuffix);
    /// ```
    pub fn parse_tolerant(input: &str) -> Result<Self, Error> {
        Self::parse(&rev_semver_parser::normalize(input)?)
    }

    /// Parse a string slice into a Version, using the strict grammar,
    /// and panic if the input is not a valid version.
    ///
    /// Only meant for inputs that are known to be valid, such as literals.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use rev_version::Version;
    /// assert_eq!(Version::must_parse("1.2.3"), Version::new(1, 2, 3));
    /// ```
    ///
    /// ```rust,should_panic
    /// # use rev_version::Version;
    /// let _ = Version::must_parse("1.2");
    /// ```
    pub fn must_parse(input: &str) -> Self {
        match Self::parse(input) {
            Ok(version) => version,
            Err(error) => panic!("rev_version: parse({:?}): {}", input, error),
        }
    }

    /// Build a version out of the fields of a strict grammar match.
    pub fn from_fields(fields: &Fields<'_>) -> Result<Self, Error> {
        let input = fields.input();
        let number = |field: Field<'_>| {
            field
                .as_str()
                .parse::<u64>()
                .map_err(|_| Error::new(input, field.span(), ErrorKind::NumericOverflow))
        };

        let major = number(fields.major)?;
        let minor = number(fields.minor)?;
        let patch = number(fields.patch)?;
        let revision = fields
            .revision
            .map(|field| match number(field) {
                Ok(revision) if revision > MAX_REVISION => Err(Error::new(
                    input,
                    field.span(),
                    ErrorKind::NumericOverflow,
                )),
                revision => revision,
            })
            .transpose()?;

        let pre = fields
            .pre_release
            .into_iter()
            .flat_map(|pre| pre.identifiers())
            .map(|id| Identifier::from_field(id, input))
            .collect::<Result<Vec<_>, _>>()?;
        let build = fields
            .build
            .into_iter()
            .flat_map(|build| build.identifiers())
            .map(|id| metadata::build_from_field(id, input))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Version {
            major,
            minor,
            patch,
            revision,
            pre,
            build,
        })
    }

    /// Checks the revision and the pre-release and build identifiers.
    ///
    /// Parsed versions are always valid, but the identifiers might have been modified afterwards.
    /// Returns the first violation that is found.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use rev_version::{ErrorKind, Identifier, Version};
    /// let mut version = Version::parse("1.2.3-pre+build").unwrap();
    /// assert!(version.validate().is_ok());
    ///
    /// version.build.push(String::from("not valid"));
    /// assert_eq!(version.validate().unwrap_err().error_kind(), ErrorKind::InvalidBuildSegment);
    /// ```
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(revision) = self.revision.filter(|&r| r > MAX_REVISION) {
            let revision = revision.to_string();
            let span = 0..revision.len();
            return Err(Error::new(revision, span, ErrorKind::NumericOverflow));
        }
        for pre in &self.pre {
            pre.check()?;
        }
        for build in &self.build {
            metadata::check_build(build)?;
        }
        Ok(())
    }

    /// Increments the major version.
    ///
    /// Sets minor and patch to 0, as well as the revision, if there is one.
    /// Pre-release and build identifiers are kept.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use rev_version::Version;
    /// let mut version = Version::parse("1.2.3.4-pre+build").unwrap();
    /// version.increment_major();
    /// assert_eq!(version.to_string(), "2.0.0.0-pre+build");
    /// ```
    pub fn increment_major(&mut self) {
        self.major = self.major.saturating_add(1);
        self.minor = 0;
        self.patch = 0;
        self.reset_revision();
    }

    /// Returns a new version with the major version incremented.
    ///
    /// See [`Version::increment_major`].
    pub fn incremented_major(&self) -> Self {
        let mut version = self.clone();
        version.increment_major();
        version
    }

    /// Increments the minor version.
    ///
    /// Sets patch to 0, as well as the revision, if there is one.
    /// Pre-release and build identifiers are kept.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use rev_version::Version;
    /// let mut version = Version::parse("1.2.3-pre").unwrap();
    /// version.increment_minor();
    /// assert_eq!(version.to_string(), "1.3.0-pre");
    /// ```
    pub fn increment_minor(&mut self) {
        self.minor = self.minor.saturating_add(1);
        self.patch = 0;
        self.reset_revision();
    }

    /// Returns a new version with the minor version incremented.
    ///
    /// See [`Version::increment_minor`].
    pub fn incremented_minor(&self) -> Self {
        let mut version = self.clone();
        version.increment_minor();
        version
    }

    /// Increments the patch version.
    ///
    /// Sets the revision to 0, if there is one.
    /// Pre-release and build identifiers are kept.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use rev_version::Version;
    /// let mut version = Version::parse("1.2.3.4").unwrap();
    /// version.increment_patch();
    /// assert_eq!(version.to_string(), "1.2.4.0");
    /// ```
    pub fn increment_patch(&mut self) {
        self.patch = self.patch.saturating_add(1);
        self.reset_revision();
    }

    /// Returns a new version with the patch version incremented.
    ///
    /// See [`Version::increment_patch`].
    pub fn incremented_patch(&self) -> Self {
        let mut version = self.clone();
        version.increment_patch();
        version
    }

    /// Increments the revision, if there is one.
    ///
    /// A version without revision is left as is.
    /// The revision does not grow beyond [`MAX_REVISION`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use rev_version::Version;
    /// let mut version = Version::parse("1.2.3.4").unwrap();
    /// version.increment_revision();
    /// assert_eq!(version.to_string(), "1.2.3.5");
    ///
    /// let mut version = Version::parse("1.2.3").unwrap();
    /// version.increment_revision();
    /// assert_eq!(version.to_string(), "1.2.3");
    /// ```
    pub fn increment_revision(&mut self) {
        if let Some(revision) = self.revision.as_mut() {
            *revision = revision.saturating_add(1).min(MAX_REVISION);
        }
    }

    /// Returns a new version with the revision incremented.
    ///
    /// See [`Version::increment_revision`].
    pub fn incremented_revision(&self) -> Self {
        let mut version = self.clone();
        version.increment_revision();
        version
    }

    /// Returns true if this version has pre-release identifiers, i.e. it represents a pre-release.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use rev_version::Version;
    /// assert!(!Version::must_parse("1.2.3").is_pre_release());
    /// assert!(Version::must_parse("1.2.3-pre").is_pre_release());
    /// assert!(!Version::must_parse("1.2.3+build").is_pre_release());
    /// ```
    pub fn is_pre_release(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Returns true if this version has a revision.
    pub fn has_revision(&self) -> bool {
        self.revision.is_some()
    }

    /// Returns a copy of this version without pre-release and build identifiers.
    pub fn finalized(&self) -> Self {
        Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            revision: self.revision,
            pre: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Renders only the major, minor, patch, and revision numbers.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use rev_version::Version;
    /// let version = Version::parse("1.2.3.4-pre+build").unwrap();
    /// assert_eq!(version.finalize_version(), "1.2.3.4");
    /// assert_eq!(version.to_string(), "1.2.3.4-pre+build");
    /// ```
    pub fn finalize_version(&self) -> String {
        self.finalized().to_string()
    }

    fn reset_revision(&mut self) {
        if let Some(revision) = self.revision.as_mut() {
            *revision = 0;
        }
    }
}

/// Sorts the versions in ascending order.
///
/// The sort is stable, versions that compare equal keep their relative order.
///
/// Versions with and without a revision may tie where versions that both have a revision
/// do not (see the [`Ord`] implementation of [`Version`]), so the order is not transitive
/// for such mixes. Unlike [`slice::sort`], which may panic on such an order, this sort
/// never panics and leaves every pair of neighbours in order.
///
/// ## Examples
///
/// ```rust
/// # use rev_version::Version;
/// let mut versions = vec![
///     Version::must_parse("1.0.0"),
///     Version::must_parse("0.1.0"),
///     Version::must_parse("0.0.1"),
/// ];
/// rev_version::sort(&mut versions);
/// assert_eq!(versions, vec![Version::new(0, 0, 1), Version::new(0, 1, 0), Version::new(1, 0, 0)]);
/// ```
pub fn sort(versions: &mut [Version]) {
    let taken = versions.iter_mut().map(std::mem::take).collect::<Vec<_>>();
    for (slot, version) in versions.iter_mut().zip(merge_sort(taken)) {
        *slot = version;
    }
}

fn merge_sort(mut versions: Vec<Version>) -> Vec<Version> {
    if versions.len() <= 1 {
        return versions;
    }
    let right = versions.split_off(versions.len() / 2);
    merge(merge_sort(versions), merge_sort(right))
}

// takes from the left unless the right is strictly smaller, which keeps the merge stable
fn merge(left: Vec<Version>, right: Vec<Version>) -> Vec<Version> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r.cmp(l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged
}

impl Default for Version {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<(u64, u64, u64)> for Version {
    fn from((x, y, z): (u64, u64, u64)) -> Self {
        Version::new(x, y, z)
    }
}

impl From<(u64, u64, u64, u64)> for Version {
    fn from((x, y, z, r): (u64, u64, u64, u64)) -> Self {
        Version::new(x, y, z).with_revision(r)
    }
}

impl From<[u64; 3]> for Version {
    fn from(v: [u64; 3]) -> Self {
        Version::new(v[0], v[1], v[2])
    }
}

impl From<[u64; 4]> for Version {
    fn from(v: [u64; 4]) -> Self {
        Version::new(v[0], v[1], v[2]).with_revision(v[3])
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = String::with_capacity(16);
        write!(result, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(revision) = self.revision {
            write!(result, ".{}", revision)?;
        }

        for (i, pre) in self.pre.iter().enumerate() {
            result.push(if i == 0 { '-' } else { '.' });
            write!(result, "{}", pre)?;
        }
        for (i, build) in self.build.iter().enumerate() {
            result.push(if i == 0 { '+' } else { '.' });
            result.push_str(build);
        }

        f.pad(result.as_ref())
    }
}

impl PartialEq for Version {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compares major, minor, and patch, then the revision, then the pre-release identifiers.
///
/// The revision is only compared if both versions have one, otherwise it is a tie.
/// This makes `1.2.3.1 == 1.2.3 == 1.2.3.2` while `1.2.3.1 < 1.2.3.2`, so among versions
/// that mix three and four numbers the order is not transitive.
/// [`slice::sort`], `BTreeMap`, `BinaryHeap` and the like may panic or misbehave on such a mix,
/// use [`sort`] to sort them.
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| match (self.revision, other.revision) {
                (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
                // a missing revision ties with any revision
                _ => Ordering::Equal,
            })
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(&other.pre),
            })
    }
}

// revision and build do not participate, so that equal versions hash equally
impl hash::Hash for Version {
    fn hash<H: hash::Hasher>(&self, into: &mut H) {
        self.major.hash(into);
        self.minor.hash(into);
        self.patch.hash(into);
        self.pre.hash(into);
    }
}

#[cfg(feature = "serde")]
use serde::de::{self, Deserialize, Deserializer, Visitor};
#[cfg(feature = "serde")]
use serde::ser::{Serialize, Serializer};
#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a version string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Version::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

/// The revision is carried over as the first build identifier.
#[cfg(feature = "semver")]
impl TryFrom<&Version> for semver::Version {
    type Error = semver::Error;

    fn try_from(v: &Version) -> Result<Self, Self::Error> {
        let pre = v
            .pre
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".");
        let build = v
            .revision
            .map(|r| r.to_string())
            .into_iter()
            .chain(v.build.iter().cloned())
            .collect::<Vec<_>>()
            .join(".");
        Ok(semver::Version {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            pre: semver::Prerelease::new(&pre)?,
            build: semver::BuildMetadata::new(&build)?,
        })
    }
}

#[cfg(feature = "semver")]
impl From<semver::Version> for Version {
    fn from(v: semver::Version) -> Self {
        let pre = match v.pre.as_str() {
            "" => Vec::new(),
            pre => pre.split('.').map(metadata::from_semver).collect(),
        };
        let build = match v.build.as_str() {
            "" => Vec::new(),
            build => build.split('.').map(String::from).collect(),
        };
        Version {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            revision: None,
            pre,
            build,
        }
    }
}
