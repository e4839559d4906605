//! # Table Engine
//!
//! [`Table`] is an ordered collection of one kind of [`Entry`], persisted as a
//! single CSV file. It is the mini database every domain service builds on.
//!
//! ## Ordering and Identity
//!
//! Insertion order is preserved and is the default iteration and save order.
//! A table holds at most one entry per id: [`Table::add_entry`] rejects an id
//! that is already present, and loading goes through the same check.
//!
//! ## File Format
//!
//! ```text
//! id,name,stock,lowStockAlert      <- header line, written raw
//! 1,"Paracetamol, 500mg",120,20    <- one encoded row per entry
//! 2,Ibuprofen,8,10
//! ```
//!
//! Saving rewrites the whole file. Loading skips the header unconditionally
//! and fails on the first bad row; there is no partial table.
//!
//! ## Queries
//!
//! Typed queries take key extractor closures (`sort_by`, `search_by_attribute`,
//! `filter_by_condition`). The column based variants (`search_by_column`,
//! `sort_by_column`) work on the string row and exist for callers that only
//! know a column name at runtime, such as the CLI.

use crate::codec::{decode_line, encode_record};
use crate::entry::{Entry, EntryId};
use crate::error::{HmsError, Result};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Table<E: Entry> {
    entries: Vec<E>,
    headers: Vec<String>,
    file_path: Option<PathBuf>,
}

impl<E: Entry> Default for Table<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entry> Table<E> {
    /// An empty, purely in-memory table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            headers: E::HEADERS.iter().map(|h| h.to_string()).collect(),
            file_path: None,
        }
    }

    /// An empty table whose default persistence target is `path`.
    pub fn with_file_path(path: impl Into<PathBuf>) -> Self {
        let mut table = Self::new();
        table.file_path = Some(path.into());
        table
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.iter()
    }

    /// A copy of the live entries. Mutating it does not touch the table.
    pub fn entries(&self) -> Vec<E> {
        self.entries.clone()
    }

    /// Append an entry. Fails with `DuplicateId` if the id is taken.
    pub fn add_entry(&mut self, entry: E) -> Result<()> {
        if self.get_entry(entry.id()).is_some() {
            return Err(HmsError::DuplicateId(entry.id()));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Remove the entry with `id`. Returns whether anything was removed.
    pub fn remove_entry(&mut self, id: EntryId) -> bool {
        match self.position(id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replace the entry sharing `entry`'s id, keeping its position.
    /// Returns `false` if no entry has that id.
    pub fn replace_entry(&mut self, entry: E) -> bool {
        match self.position(entry.id()) {
            Some(pos) => {
                self.entries[pos] = entry;
                true
            }
            None => false,
        }
    }

    pub fn get_entry(&self, id: EntryId) -> Option<&E> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn get_entry_mut(&mut self, id: EntryId) -> Option<&mut E> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    /// Stable ascending sort by the extracted key, in place.
    pub fn sort_by<K, F>(&mut self, key_fn: F)
    where
        K: Ord,
        F: FnMut(&E) -> K,
    {
        self.entries.sort_by_key(key_fn);
    }

    /// All entries whose key equals `value`, in table order.
    pub fn search_by_attribute<K, F>(&self, key_fn: F, value: &K) -> Vec<E>
    where
        K: PartialEq,
        F: Fn(&E) -> K,
    {
        self.entries
            .iter()
            .filter(|e| key_fn(e) == *value)
            .cloned()
            .collect()
    }

    /// A new in-memory table holding the entries for which
    /// `predicate(key, threshold)` holds. The source is left untouched.
    pub fn filter_by_condition<K, T, F, P>(&self, key_fn: F, predicate: P, threshold: &T) -> Self
    where
        T: ?Sized,
        F: Fn(&E) -> K,
        P: Fn(&K, &T) -> bool,
    {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|e| predicate(&key_fn(e), threshold))
                .cloned()
                .collect(),
            headers: self.headers.clone(),
            file_path: None,
        }
    }

    /// An id that no current entry uses: one past the largest id, or 1 for
    /// an empty table. At the top of the id range the smallest free id is
    /// returned instead.
    pub fn unused_id(&self) -> EntryId {
        let max = self.entries.iter().map(|e| e.id()).max().unwrap_or(0);
        match max.checked_add(1) {
            Some(next) => next,
            None => (1..=EntryId::MAX)
                .find(|candidate| self.get_entry(*candidate).is_none())
                .unwrap_or(0),
        }
    }

    /// Index of the column named `column`.
    pub fn column_index(&self, column: &str) -> Result<usize> {
        if column.is_empty() {
            return Err(HmsError::InvalidArgument("column name is empty".into()));
        }
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(column))
            .ok_or_else(|| {
                HmsError::InvalidArgument(format!(
                    "unknown column {:?} for {} (expected one of: {})",
                    column,
                    E::KIND,
                    self.headers.join(", ")
                ))
            })
    }

    /// Entries whose raw value in `column` equals `value`.
    pub fn search_by_column(&self, column: &str, value: &str) -> Result<Vec<E>> {
        let idx = self.column_index(column)?;
        Ok(self.search_by_attribute(|e| e.to_row().swap_remove(idx), &value.to_string()))
    }

    /// Stable sort by the value in `column`. Numeric cells compare as numbers
    /// and come before text cells.
    pub fn sort_by_column(&mut self, column: &str) -> Result<()> {
        let idx = self.column_index(column)?;
        self.entries
            .sort_by(|a, b| compare_cells(&a.to_row()[idx], &b.to_row()[idx]));
        Ok(())
    }

    fn target<'a>(&'a self, path: Option<&'a Path>) -> Result<&'a Path> {
        path.or(self.file_path.as_deref()).ok_or_else(|| {
            HmsError::InvalidArgument(format!("{} table has no file path", E::KIND))
        })
    }

    /// Write the header line and every entry, overwriting the file.
    pub fn save_to_file(&self, path: Option<&Path>) -> Result<()> {
        let target = self.target(path)?;
        let mut content = self.headers.join(",");
        content.push('\n');
        for entry in &self.entries {
            content.push_str(&encode_record(&entry.to_row()));
            content.push('\n');
        }
        fs::write(target, content).map_err(HmsError::Io)?;
        debug!(path = %target.display(), rows = self.entries.len(), kind = E::KIND, "saved table");
        Ok(())
    }

    /// Replace the entries with the file's content. The first line is the
    /// header and is skipped. Any bad row aborts the load and leaves the
    /// table as it was.
    pub fn load_from_file(&mut self, path: Option<&Path>) -> Result<()> {
        let target = self.target(path)?.to_path_buf();
        let content = fs::read_to_string(&target).map_err(HmsError::Io)?;
        let entries = parse_rows::<E>(&content).map_err(|(line, source)| HmsError::Row {
            path: target.clone(),
            line,
            source: Box::new(source),
        })?;
        debug!(path = %target.display(), rows = entries.len(), kind = E::KIND, "loaded table");
        self.entries = entries;
        Ok(())
    }
}

/// Parse every data line of a table file. On failure returns the 1-based
/// line number together with the error.
fn parse_rows<E: Entry>(content: &str) -> std::result::Result<Vec<E>, (usize, HmsError)> {
    let mut staged: Table<E> = Table::new();
    for (idx, line) in content.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let entry = E::from_row(&decode_line(line)).map_err(|e| (line_no, e))?;
        staged.add_entry(entry).map_err(|e| (line_no, e))?;
    }
    Ok(staged.entries)
}

fn numeric_cell(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Numbers compare numerically and sort before text; text compares bytewise.
fn compare_cells(a: &str, b: &str) -> Ordering {
    match (numeric_cell(a), numeric_cell(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
