//! # Storage Layer
//!
//! [`Store`] owns one [`Table`] per [`TableKind`] and knows where each one
//! lives on disk. Services borrow the tables they need, mutate them and ask
//! the store to save the ones they touched.
//!
//! ## Data Directory
//!
//! The data directory is resolved once at startup and passed in explicitly;
//! nothing below this layer looks at the working directory or environment.
//!
//! ```text
//! <data dir>/
//! ├── config.json                   # Table file names
//! ├── drugs.csv
//! ├── replenishment_requests.csv
//! ├── patients.csv
//! ├── contacts.csv
//! └── staff.csv
//! ```
//!
//! A table whose file does not exist yet opens empty. Saving rewrites the
//! whole file.
//!
//! ## In-Memory Mode
//!
//! [`Store::in_memory`] builds the same tables with no backing files and
//! turns [`Store::save`] into a no-op. Command tests run against it.

use crate::config::HmsConfig;
use crate::entry::Entry;
use crate::error::{HmsError, Result};
use crate::model::{
    ContactInformation, Drug, PatientParticulars, ReplenishmentRequest, Staff, TableKind,
};
use crate::table::Table;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct Store {
    root: Option<PathBuf>,
    pub drugs: Table<Drug>,
    pub requests: Table<ReplenishmentRequest>,
    pub patients: Table<PatientParticulars>,
    pub contacts: Table<ContactInformation>,
    pub staff: Table<Staff>,
}

impl Store {
    /// Open every table from `data_dir`, using the file names in `config`.
    pub fn open(data_dir: &Path, config: &HmsConfig) -> Result<Self> {
        let path = |kind| config.table_path(data_dir, kind);
        Ok(Self {
            root: Some(data_dir.to_path_buf()),
            drugs: open_table(path(TableKind::Drugs))?,
            requests: open_table(path(TableKind::Requests))?,
            patients: open_table(path(TableKind::Patients))?,
            contacts: open_table(path(TableKind::Contacts))?,
            staff: open_table(path(TableKind::Staff))?,
        })
    }

    pub fn in_memory() -> Self {
        Self {
            root: None,
            drugs: Table::new(),
            requests: Table::new(),
            patients: Table::new(),
            contacts: Table::new(),
            staff: Table::new(),
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn file_path(&self, kind: TableKind) -> Option<&Path> {
        match kind {
            TableKind::Drugs => self.drugs.file_path(),
            TableKind::Requests => self.requests.file_path(),
            TableKind::Patients => self.patients.file_path(),
            TableKind::Contacts => self.contacts.file_path(),
            TableKind::Staff => self.staff.file_path(),
        }
    }

    /// Write one table back to its file.
    pub fn save(&self, kind: TableKind) -> Result<()> {
        let Some(root) = self.root.as_deref() else {
            return Ok(());
        };
        ensure_dir(root)?;
        match kind {
            TableKind::Drugs => self.drugs.save_to_file(None),
            TableKind::Requests => self.requests.save_to_file(None),
            TableKind::Patients => self.patients.save_to_file(None),
            TableKind::Contacts => self.contacts.save_to_file(None),
            TableKind::Staff => self.staff.save_to_file(None),
        }
    }

    /// Create the data directory and a header-only file for every table
    /// that has none. Returns the paths created.
    pub fn init(&self) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        for kind in TableKind::ALL {
            if let Some(path) = self.file_path(kind) {
                if !path.exists() {
                    self.save(kind)?;
                    created.push(path.to_path_buf());
                }
            }
        }
        Ok(created)
    }
}

fn open_table<E: Entry>(path: PathBuf) -> Result<Table<E>> {
    let mut table = Table::with_file_path(path);
    match table.file_path() {
        Some(p) if p.exists() => table.load_from_file(None)?,
        Some(p) => debug!(path = %p.display(), "no table file yet, starting empty"),
        None => {}
    }
    Ok(table)
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(HmsError::Io)?;
    }
    Ok(())
}
