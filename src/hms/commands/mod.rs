use crate::config::HmsConfig;
use crate::entry::{Entry, EntryId};
use crate::model::TableKind;
use crate::table::Table;
use std::path::PathBuf;

pub mod config;
pub mod dispensary;
pub mod init;
pub mod records;
pub mod staff;
pub mod tables;

#[derive(Debug, Clone)]
pub struct HmsPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A table snapshot ready for display: headers plus raw rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub kind: TableKind,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn from_entries<'a, E, I>(kind: TableKind, headers: &[String], entries: I) -> Self
    where
        E: Entry + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        Self {
            kind,
            headers: headers.to_vec(),
            rows: entries.into_iter().map(|e| e.to_row()).collect(),
        }
    }

    pub fn from_table<E: Entry>(kind: TableKind, table: &Table<E>) -> Self {
        Self::from_entries(kind, table.headers(), table.iter())
    }

    pub fn ids(&self) -> Vec<String> {
        self.rows.iter().filter_map(|r| r.first().cloned()).collect()
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_ids: Vec<EntryId>,
    pub listed: Vec<TableView>,
    pub created_paths: Vec<PathBuf>,
    pub config: Option<HmsConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected(mut self, ids: Vec<EntryId>) -> Self {
        self.affected_ids = ids;
        self
    }

    pub fn with_listed(mut self, view: TableView) -> Self {
        self.listed.push(view);
        self
    }

    pub fn with_created_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.created_paths = paths;
        self
    }

    pub fn with_config(mut self, config: HmsConfig) -> Self {
        self.config = Some(config);
        self
    }
}
