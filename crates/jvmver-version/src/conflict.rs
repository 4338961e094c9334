//! Version selection helpers for dependency resolution: picking the highest
//! candidate, sorting, and reporting when dependers disagree.

use std::fmt;

use serde::Serialize;

use crate::version::Version;

/// The highest version, or `None` for an empty input.
///
/// Among versions that compare equal the first one wins, so `["1.0", "1"]`
/// selects `"1.0"`.
pub fn highest<'a, I>(versions: I) -> Option<&'a Version>
where
    I: IntoIterator<Item = &'a Version>,
{
    versions
        .into_iter()
        .reduce(|best, candidate| if candidate > best { candidate } else { best })
}

/// Sort versions ascending. Equal versions keep their relative order.
///
/// Build metadata makes the ordering non-transitive (`1+a` == `1` ==
/// `1.0.0+b` but `1+a` > `1.0.0+b`), so this inserts into a sorted prefix
/// instead of using `slice::sort`, which may panic on such orderings.
pub fn sort_versions(versions: &mut [Version]) {
    for i in 1..versions.len() {
        let pos = versions[..i].partition_point(|placed| placed <= &versions[i]);
        versions[pos..=i].rotate_right(1);
    }
}

/// Whether a version should be treated as absent (e.g. `""` or `"0"`).
pub fn is_unspecified(version: &Version) -> bool {
    version.is_empty()
}

/// The outcome of choosing one version of a module among several requests.
#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    pub module: String,
    pub selected: Version,
    pub conflict: Option<VersionConflict>,
}

/// Several dependers requested versions of the same module that do not
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionConflict {
    pub module: String,
    /// Distinct requested version strings, in request order.
    pub requested: Vec<String>,
    pub selected: String,
}

/// Select the highest requested version of `module`.
///
/// Returns `None` when nothing was requested.
pub fn select(module: &str, requested: &[Version]) -> Option<Selection> {
    let selected = highest(requested)?.clone();
    let disagree = requested.iter().any(|v| v != &selected);

    let conflict = disagree.then(|| {
        let mut distinct: Vec<String> = Vec::new();
        for v in requested {
            if !distinct.iter().any(|seen| seen == v.as_str()) {
                distinct.push(v.as_str().to_string());
            }
        }
        tracing::debug!(
            module,
            selected = %selected,
            candidates = distinct.len(),
            "selected highest of conflicting versions"
        );
        VersionConflict {
            module: module.to_string(),
            requested: distinct,
            selected: selected.as_str().to_string(),
        }
    });

    Some(Selection {
        module: module.to_string(),
        selected,
        conflict,
    })
}

/// All conflicts encountered while selecting versions.
#[derive(Debug, Default, Serialize)]
pub struct ConflictReport {
    pub conflicts: Vec<VersionConflict>,
}

impl ConflictReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, conflict: VersionConflict) {
        self.conflicts.push(conflict);
    }

    /// Record the conflict carried by `selection`, if any.
    pub fn record(&mut self, selection: &Selection) {
        if let Some(conflict) = &selection.conflict {
            self.add(conflict.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conflicts.is_empty() {
            return write!(f, "No version conflicts.");
        }
        writeln!(f, "Version conflicts ({}):", self.conflicts.len())?;
        for c in &self.conflicts {
            writeln!(f, "  {c}")?;
        }
        Ok(())
    }
}

impl fmt::Display for VersionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: requested {} -> selected {}",
            self.module,
            self.requested.join(", "),
            self.selected
        )
    }
}
