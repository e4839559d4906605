use crate::commands::{CmdMessage, CmdResult, TableView};
use crate::entry::{single_line, Entry, EntryId};
use crate::error::{HmsError, Result};
use crate::model::{Gender, Role, Staff, TableKind};
use crate::store::Store;
use tracing::info;

pub fn add_staff(
    store: &mut Store,
    name: &str,
    role: Role,
    gender: Gender,
    age: u8,
) -> Result<CmdResult> {
    single_line("staff name", name)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(HmsError::Api("Staff name cannot be empty".into()));
    }

    let id = store.staff.unused_id();
    let staff = Staff::new(id, name, role, gender, age);
    store.staff.add_entry(staff.clone())?;
    store.save(TableKind::Staff)?;
    info!(id, %role, "staff added");

    Ok(CmdResult::default()
        .with_affected(vec![id])
        .with_message(CmdMessage::success(format!("Staff added: {}", staff))))
}

pub fn remove_staff(store: &mut Store, id: EntryId) -> Result<CmdResult> {
    let staff = store
        .staff
        .get_entry(id)
        .cloned()
        .ok_or(HmsError::NotFound {
            kind: Staff::KIND,
            id,
        })?;
    store.staff.remove_entry(id);
    store.save(TableKind::Staff)?;
    info!(id, "staff removed");

    Ok(CmdResult::default()
        .with_affected(vec![id])
        .with_message(CmdMessage::success(format!("Staff removed: {}", staff))))
}

/// List staff, optionally only one role, optionally sorted by a column.
pub fn list_staff(store: &Store, role: Option<Role>, sort: Option<&str>) -> Result<CmdResult> {
    let mut listed = match role {
        Some(role) => store
            .staff
            .filter_by_condition(|s| s.role, |r, wanted| r == wanted, &role),
        None => store.staff.clone(),
    };
    if let Some(column) = sort {
        listed.sort_by_column(column)?;
    }
    Ok(CmdResult::default().with_listed(TableView::from_table(TableKind::Staff, &listed)))
}
