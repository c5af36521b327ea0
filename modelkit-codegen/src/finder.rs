//! File enumeration for before/after snapshots and base class discovery.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use globset::{Glob, GlobMatcher};
use log::{debug, trace};
use modelkit_manifest::{Error, Result};
use walkdir::WalkDir;

/// Version control directories that are never descended into unless a
/// filter asks for them.
pub const VCS_DIRS: &[&str] = &[
    ".svn",
    "_svn",
    "CVS",
    "_darcs",
    ".arch-params",
    ".monotone",
    ".bzr",
    ".git",
    ".hg",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// What a [`FileFinder`] should return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindFilter {
    /// Kind of entry to return
    pub kind: EntryKind,
    /// Glob matched against the entry's file name
    pub name: Option<String>,
    /// Directory names not descended into
    pub prune: Vec<String>,
    /// Whether [`VCS_DIRS`] are skipped along with their contents
    pub ignore_version_control: bool,
}

impl FindFilter {
    /// Match files.
    pub fn files() -> Self {
        Self {
            kind: EntryKind::File,
            name: None,
            prune: Vec::new(),
            ignore_version_control: true,
        }
    }

    /// Match directories.
    pub fn dirs() -> Self {
        Self {
            kind: EntryKind::Dir,
            ..Self::files()
        }
    }

    /// Only match entries whose name matches `pattern`.
    pub fn name(mut self, pattern: impl Into<String>) -> Self {
        self.name = Some(pattern.into());
        self
    }

    /// Do not descend into directories named `dir`.
    pub fn prune(mut self, dir: impl Into<String>) -> Self {
        self.prune.push(dir.into());
        self
    }

    /// Also walk version control directories.
    pub fn include_version_control(mut self) -> Self {
        self.ignore_version_control = false;
        self
    }

    fn is_version_control(&self, name: &str) -> bool {
        self.ignore_version_control && VCS_DIRS.contains(&name)
    }

    fn is_pruned(&self, name: &str) -> bool {
        self.prune.iter().any(|p| p == name)
    }
}

/// Enumerates filesystem entries below a root.
///
/// The build pipeline depends on this trait so tests can substitute a
/// fixed file set.
pub trait FileFinder {
    /// Entries below `root` (excluding `root` itself) matching `filter`.
    fn find(&self, root: &Path, filter: &FindFilter) -> Result<BTreeSet<PathBuf>>;

    /// Union of [`find`](FileFinder::find) over several roots.
    fn find_in(&self, roots: &BTreeSet<PathBuf>, filter: &FindFilter) -> Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        for root in roots {
            found.extend(self.find(root, filter)?);
        }
        Ok(found)
    }
}

/// Walks the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkdirFinder;

impl FileFinder for WalkdirFinder {
    fn find(&self, root: &Path, filter: &FindFilter) -> Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        if !root.is_dir() {
            debug!("Skipping missing directory: {}", root.display());
            return Ok(found);
        }

        let matcher = filter.name.as_deref().map(compile_glob).transpose()?;

        let mut entries = WalkDir::new(root).min_depth(1).follow_links(true).into_iter();
        while let Some(entry) = entries.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let is_dir = entry.file_type().is_dir();
            let name = entry.file_name().to_string_lossy();
            if is_dir && filter.is_version_control(&name) {
                trace!("Skipping version control directory: {}", entry.path().display());
                entries.skip_current_dir();
                continue;
            }

            let kind_matches = match filter.kind {
                EntryKind::File => entry.file_type().is_file(),
                EntryKind::Dir => is_dir,
            };
            let name_matches = matcher
                .as_ref()
                .is_none_or(|m| m.is_match(Path::new(&*name)));

            if kind_matches && name_matches {
                trace!("Found: {}", entry.path().display());
                found.insert(entry.path().to_path_buf());
            }

            if is_dir && filter.is_pruned(&name) {
                entries.skip_current_dir();
            }
        }

        debug!("Found {} entries under {}", found.len(), root.display());
        Ok(found)
    }
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher> {
    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|e| {
            Box::new(Error::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
        })
}
