//! Literal template token replacement.

use std::path::Path;

use log::debug;
use modelkit_manifest::{ProjectConfig, Result};

use crate::file::SourceFile;

/// Token for the project name.
pub const PACKAGE: &str = "##PACKAGE##";
/// Token for the class subpackage.
pub const SUBPACKAGE: &str = "##SUBPACKAGE##";
/// Token for the author name.
pub const AUTHOR: &str = "##NAME##";
/// Author email token, removed together with its leading space and brackets.
pub const EMAIL: &str = " <##EMAIL##>";
/// An empty class body as the generator writes it.
pub const EMPTY_BODY: &str = "{\n\n}";
/// Compact form of an empty class body.
pub const COMPACT_BODY: &str = "{\n}\n";

/// Subpackage of every class once per-model subpackages have been applied.
pub const DEFAULT_SUBPACKAGE: &str = "model";

/// Ordered literal `(search, replace)` pairs.
///
/// Entries are applied one after the other: every occurrence of the first
/// search string is replaced before the second is looked for, so a
/// replacement containing a later search string will be replaced again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMap {
    entries: Vec<(String, String)>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens applied to stub and base classes after generation.
    pub fn for_project(project: &ProjectConfig) -> Self {
        Self::new()
            .with(PACKAGE, project.name())
            .with(SUBPACKAGE, DEFAULT_SUBPACKAGE)
            .with(AUTHOR, project.author())
            .with(EMAIL, "")
            .with(EMPTY_BODY, COMPACT_BODY)
    }

    /// Add an entry, builder style.
    pub fn with(mut self, search: impl Into<String>, replace: impl Into<String>) -> Self {
        self.push(search, replace);
        self
    }

    /// Add an entry.
    pub fn push(&mut self, search: impl Into<String>, replace: impl Into<String>) {
        self.entries.push((search.into(), replace.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, r)| (s.as_str(), r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every token in `text`.
    pub fn apply(&self, text: &str) -> String {
        self.apply_wrapped(text, "", "")
    }

    /// Replace every token in `text`, with each search string wrapped in
    /// `begin` and `end`.
    pub fn apply_wrapped(&self, text: &str, begin: &str, end: &str) -> String {
        let mut result = text.to_string();
        for (search, replace) in self.iter() {
            let needle = format!("{begin}{search}{end}");
            if needle.is_empty() {
                continue;
            }
            result = result.replace(&needle, replace);
        }
        result
    }
}

/// Rewrite each file with its tokens replaced.
///
/// Every file is read and written back even when no token occurs in it.
pub fn replace_tokens<'a>(
    files: impl IntoIterator<Item = &'a Path>,
    begin: &str,
    end: &str,
    tokens: &TokenMap,
) -> Result<usize> {
    let mut count = 0;
    for path in files {
        let mut file = SourceFile::open(path)?;
        let replaced = tokens.apply_wrapped(file.content(), begin, end);
        file.set_content(replaced);
        debug!(
            "Replaced tokens in {}{}",
            path.display(),
            if file.is_modified() { "" } else { " (unchanged)" }
        );
        file.save()?;
        count += 1;
    }
    Ok(count)
}
