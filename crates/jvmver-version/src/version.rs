//! The public version value.
//!
//! Versions order the way Maven and Ivy resolve them, which is a superset of
//! SemVer precedence:
//! - numeric segments compare as numbers, with no width limit;
//! - trailing `.0` segments do not matter (`1.0.0` == `1`);
//! - qualifiers order `dev` < other < `alpha` < `beta` < `rc` < `snapshot`
//!   < release (`ga`, `final`) < `sp`;
//! - `min`/`max` (and `.x`, `.*`, `.+`) sort below/above any real segment;
//! - build metadata after `+` never affects precedence.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::compare::compare_items;
use crate::item::Item;
use crate::process::post_process;
use crate::tokenizer::tokenize;

/// An artifact version. Any string is accepted.
///
/// The item sequence is parsed on first use and cached. Equality is
/// ordering equality, so `Version::new("1.0") == Version::new("1")`.
#[derive(Clone, Default)]
pub struct Version {
    repr: String,
    items: OnceLock<Vec<Item>>,
}

impl Version {
    pub fn new(repr: impl Into<String>) -> Self {
        Self {
            repr: repr.into(),
            items: OnceLock::new(),
        }
    }

    /// The version string exactly as given.
    pub fn as_str(&self) -> &str {
        &self.repr
    }

    /// Canonical item sequence. Never empty.
    pub fn items(&self) -> &[Item] {
        self.items.get_or_init(|| {
            let items = post_process(tokenize(&self.repr));
            tracing::trace!(version = %self.repr, items = items.len(), "parsed version");
            items
        })
    }

    /// Whether this version is equivalent to the neutral element, e.g.
    /// `""`, `"0"` or `"0.0.final"`.
    pub fn is_empty(&self) -> bool {
        self.items().iter().all(Item::is_empty)
    }

    /// Whether any qualifier sorts below the plain release, e.g. `1.0-rc1`,
    /// `2.0-SNAPSHOT` or `31.0-jre`.
    pub fn is_pre_release(&self) -> bool {
        self.items()
            .iter()
            .any(|item| matches!(item, Item::Tag(tag) if tag.is_pre_release()))
    }

    pub fn is_snapshot(&self) -> bool {
        matches!(self.items().last(), Some(Item::Tag(tag)) if tag.value() == "snapshot")
    }

    /// The version without a trailing `-SNAPSHOT` (any case).
    pub fn base_version(&self) -> &str {
        const SUFFIX: &str = "-snapshot";
        let split = self.repr.len().saturating_sub(SUFFIX.len());
        match self.repr.get(split..) {
            Some(tail) if tail.eq_ignore_ascii_case(SUFFIX) => &self.repr[..split],
            _ => &self.repr,
        }
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_items(self.items(), other.items())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Version").field(&self.repr).finish()
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.repr)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}
