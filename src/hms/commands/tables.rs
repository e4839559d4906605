//! Generic operations over any table, addressed by [`TableKind`] and column
//! name at runtime.

use crate::commands::{records, CmdMessage, CmdResult, TableView};
use crate::entry::{Entry, EntryId};
use crate::error::Result;
use crate::model::TableKind;
use crate::store::Store;
use crate::table::Table;
use tracing::{info, warn};

fn sorted_view<E: Entry>(kind: TableKind, table: &Table<E>, sort: Option<&str>) -> Result<TableView> {
    match sort {
        Some(column) => {
            let mut sorted = table.clone();
            sorted.sort_by_column(column)?;
            Ok(TableView::from_table(kind, &sorted))
        }
        None => Ok(TableView::from_table(kind, table)),
    }
}

fn search_view<E: Entry>(
    kind: TableKind,
    table: &Table<E>,
    column: &str,
    value: &str,
) -> Result<TableView> {
    let found = table.search_by_column(column, value)?;
    Ok(TableView::from_entries(kind, table.headers(), &found))
}

pub fn list(store: &Store, kind: TableKind, sort: Option<&str>) -> Result<CmdResult> {
    let view = match kind {
        TableKind::Drugs => sorted_view(kind, &store.drugs, sort)?,
        TableKind::Requests => sorted_view(kind, &store.requests, sort)?,
        TableKind::Patients => sorted_view(kind, &store.patients, sort)?,
        TableKind::Contacts => sorted_view(kind, &store.contacts, sort)?,
        TableKind::Staff => sorted_view(kind, &store.staff, sort)?,
    };
    Ok(CmdResult::default().with_listed(view))
}

pub fn search(store: &Store, kind: TableKind, column: &str, value: &str) -> Result<CmdResult> {
    let view = match kind {
        TableKind::Drugs => search_view(kind, &store.drugs, column, value)?,
        TableKind::Requests => search_view(kind, &store.requests, column, value)?,
        TableKind::Patients => search_view(kind, &store.patients, column, value)?,
        TableKind::Contacts => search_view(kind, &store.contacts, column, value)?,
        TableKind::Staff => search_view(kind, &store.staff, column, value)?,
    };
    let mut result = CmdResult::default();
    if view.rows.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No {} entries with {} = {}",
            kind, column, value
        )));
    }
    Ok(result.with_listed(view))
}

/// Remove one entry. A missing id is reported as a warning, not an error.
/// Removing a patient also removes the contact row sharing its id.
pub fn remove(store: &mut Store, kind: TableKind, id: EntryId) -> Result<CmdResult> {
    if kind == TableKind::Patients && store.patients.get_entry(id).is_some() {
        return records::remove_patient(store, id);
    }

    let removed = match kind {
        TableKind::Drugs => store.drugs.remove_entry(id),
        TableKind::Requests => store.requests.remove_entry(id),
        TableKind::Patients => false,
        TableKind::Contacts => store.contacts.remove_entry(id),
        TableKind::Staff => store.staff.remove_entry(id),
    };

    if !removed {
        warn!(%kind, id, "nothing to remove");
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "No {} entry with id {}",
            kind, id
        ))));
    }

    store.save(kind)?;
    info!(%kind, id, "entry removed");
    Ok(CmdResult::default()
        .with_affected(vec![id])
        .with_message(CmdMessage::success(format!("Removed {} entry {}", kind, id))))
}
