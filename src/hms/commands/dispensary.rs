//! Drug inventory and replenishment workflow.
//!
//! Requests reference drugs by name, so drug names are unique
//! (case-insensitive) within the inventory.

use crate::commands::{CmdMessage, CmdResult, TableView};
use crate::entry::{single_line, Entry, EntryId};
use crate::error::{HmsError, Result};
use crate::model::{Drug, ReplenishmentRequest, RequestStatus, TableKind};
use crate::store::Store;
use tracing::info;

pub fn add_drug(
    store: &mut Store,
    name: &str,
    stock: u32,
    low_stock_alert: u32,
) -> Result<CmdResult> {
    single_line("drug name", name)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(HmsError::Api("Drug name cannot be empty".into()));
    }
    if store
        .drugs
        .iter()
        .any(|d| d.name.eq_ignore_ascii_case(name))
    {
        return Err(HmsError::Api(format!("Drug already in inventory: {}", name)));
    }

    let id = store.drugs.unused_id();
    store
        .drugs
        .add_entry(Drug::new(id, name, stock, low_stock_alert))?;
    store.save(TableKind::Drugs)?;
    info!(id, name, stock, "drug added");

    Ok(CmdResult::default()
        .with_affected(vec![id])
        .with_message(CmdMessage::success(format!("Drug added ({}): {}", id, name))))
}

pub fn dispense(store: &mut Store, drug_id: EntryId, quantity: u32) -> Result<CmdResult> {
    if quantity == 0 {
        return Err(HmsError::Api("Quantity must be greater than zero".into()));
    }
    let previous = store
        .drugs
        .get_entry(drug_id)
        .cloned()
        .ok_or(HmsError::NotFound {
            kind: Drug::KIND,
            id: drug_id,
        })?;
    if previous.stock < quantity {
        return Err(HmsError::Api(format!(
            "Insufficient stock for {}: {} available, {} requested",
            previous.name, previous.stock, quantity
        )));
    }
    let mut drug = previous.clone();
    drug.stock -= quantity;
    store.drugs.replace_entry(drug.clone());
    if let Err(e) = store.save(TableKind::Drugs) {
        store.drugs.replace_entry(previous);
        return Err(e);
    }
    info!(id = drug_id, quantity, remaining = drug.stock, "drug dispensed");

    let mut result = CmdResult::default().with_affected(vec![drug_id]);
    result.add_message(CmdMessage::success(format!(
        "Dispensed {} x {} ({} left)",
        quantity, drug.name, drug.stock
    )));
    if drug.is_low() {
        result.add_message(CmdMessage::warning(format!(
            "{}, consider a replenishment request",
            drug
        )));
    }
    Ok(result)
}

/// Drugs whose stock is at or below their alert level.
pub fn low_stock(store: &Store) -> Result<CmdResult> {
    let low = store.drugs.filter_by_condition(
        |d| i64::from(d.stock) - i64::from(d.low_stock_alert),
        |margin, limit| margin <= limit,
        &0_i64,
    );
    let mut result =
        CmdResult::default().with_listed(TableView::from_table(TableKind::Drugs, &low));
    if low.is_empty() {
        result.add_message(CmdMessage::info("All drugs are above their alert level."));
    }
    Ok(result)
}

pub fn request_replenishment(
    store: &mut Store,
    drug_id: EntryId,
    quantity: u32,
) -> Result<CmdResult> {
    if quantity == 0 {
        return Err(HmsError::Api("Quantity must be greater than zero".into()));
    }
    let drug_name = store
        .drugs
        .get_entry(drug_id)
        .map(|d| d.name.clone())
        .ok_or(HmsError::NotFound {
            kind: Drug::KIND,
            id: drug_id,
        })?;

    let id = store.requests.unused_id();
    let request = ReplenishmentRequest::new(id, drug_name, quantity);
    store.requests.add_entry(request.clone())?;
    store.save(TableKind::Requests)?;
    info!(id, drug = %request.drug_name, quantity, "replenishment requested");

    Ok(CmdResult::default()
        .with_affected(vec![id])
        .with_message(CmdMessage::success(format!(
            "Replenishment request submitted: {}",
            request
        ))))
}

pub fn list_requests(store: &Store, status: Option<RequestStatus>) -> Result<CmdResult> {
    let entries = match status {
        Some(status) => store.requests.search_by_attribute(|r| r.status, &status),
        None => store.requests.entries(),
    };
    Ok(CmdResult::default().with_listed(TableView::from_entries(
        TableKind::Requests,
        store.requests.headers(),
        &entries,
    )))
}

fn pending_request(store: &Store, id: EntryId) -> Result<ReplenishmentRequest> {
    let request = store
        .requests
        .get_entry(id)
        .cloned()
        .ok_or(HmsError::NotFound {
            kind: ReplenishmentRequest::KIND,
            id,
        })?;
    if request.status != RequestStatus::Pending {
        return Err(HmsError::Api(format!(
            "Request {} is already {}",
            id, request.status
        )));
    }
    Ok(request)
}

/// Approve a pending request and add its quantity to the drug's stock.
pub fn approve_request(store: &mut Store, id: EntryId) -> Result<CmdResult> {
    let mut request = pending_request(store, id)?;

    let previous = store
        .drugs
        .search_by_attribute(|d| d.name.clone(), &request.drug_name)
        .into_iter()
        .next()
        .ok_or_else(|| {
            HmsError::Api(format!(
                "Drug {} is no longer in the inventory",
                request.drug_name
            ))
        })?;
    let mut drug = previous.clone();
    drug.stock = drug.stock.checked_add(request.quantity).ok_or_else(|| {
        HmsError::Api(format!("Stock of {} would overflow", request.drug_name))
    })?;
    let new_stock = drug.stock;
    let drug_id = drug.id();
    store.drugs.replace_entry(drug);

    if let Err(e) = store.save(TableKind::Drugs) {
        store.drugs.replace_entry(previous);
        return Err(e);
    }

    request.status = RequestStatus::Approved;
    store.requests.replace_entry(request.clone());
    store.save(TableKind::Requests)?;
    info!(id, drug_id, new_stock, "replenishment approved");

    Ok(CmdResult::default()
        .with_affected(vec![id])
        .with_message(CmdMessage::success(format!(
            "Request {} approved: {} stock is now {}",
            id, request.drug_name, new_stock
        ))))
}

pub fn reject_request(store: &mut Store, id: EntryId) -> Result<CmdResult> {
    let mut request = pending_request(store, id)?;
    request.status = RequestStatus::Rejected;
    store.requests.replace_entry(request.clone());
    store.save(TableKind::Requests)?;
    info!(id, "replenishment rejected");

    Ok(CmdResult::default()
        .with_affected(vec![id])
        .with_message(CmdMessage::success(format!("Request rejected: {}", request))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::HmsConfig;
    use std::fs;
    use tempfile::TempDir;

    fn stocked() -> Store {
        let mut store = Store::in_memory();
        add_drug(&mut store, "Paracetamol", 100, 20).unwrap();
        add_drug(&mut store, "Amoxicillin", 5, 10).unwrap();
        store
    }

    #[test]
    fn add_drug_allocates_sequential_ids() {
        let store = stocked();
        assert_eq!(store.drugs.get_entry(1).unwrap().name, "Paracetamol");
        assert_eq!(store.drugs.get_entry(2).unwrap().name, "Amoxicillin");
    }

    #[test]
    fn add_drug_rejects_duplicate_name() {
        let mut store = stocked();
        let err = add_drug(&mut store, "paracetamol", 1, 1).unwrap_err();
        assert!(matches!(err, HmsError::Api(_)));
        assert_eq!(store.drugs.len(), 2);
    }

    #[test]
    fn add_drug_rejects_line_breaks_in_name() {
        let mut store = Store::in_memory();
        for name in ["Para\ncetamol", "Paracetamol\r"] {
            assert!(matches!(
                add_drug(&mut store, name, 10, 1),
                Err(HmsError::InvalidArgument(_))
            ));
        }
        assert!(store.drugs.is_empty());
    }

    #[test]
    fn add_drug_rejects_blank_name() {
        let mut store = Store::in_memory();
        assert!(add_drug(&mut store, "   ", 1, 1).is_err());
    }

    #[test]
    fn dispense_reduces_stock_and_warns_when_low() {
        let mut store = stocked();
        let result = dispense(&mut store, 1, 85).unwrap();
        assert_eq!(store.drugs.get_entry(1).unwrap().stock, 15);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }

    #[test]
    fn low_stock_warning_renders_the_drug() {
        let mut store = stocked();
        let result = dispense(&mut store, 2, 1).unwrap();
        assert_eq!(
            result.messages[1].content,
            "[2] Amoxicillin (stock: 4, alert at: 10) LOW, consider a replenishment request"
        );
    }

    #[test]
    fn failed_save_keeps_stock_in_memory() {
        let dir = TempDir::new().unwrap();
        let mut store = Store::open(dir.path(), &HmsConfig::default()).unwrap();
        add_drug(&mut store, "Aspirin", 40, 10).unwrap();
        let path = store.file_path(TableKind::Drugs).unwrap().to_path_buf();
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(matches!(dispense(&mut store, 1, 5), Err(HmsError::Io(_))));
        assert_eq!(store.drugs.get_entry(1).unwrap().stock, 40);
    }

    #[test]
    fn dispense_more_than_stock_fails() {
        let mut store = stocked();
        assert!(dispense(&mut store, 2, 6).is_err());
        assert_eq!(store.drugs.get_entry(2).unwrap().stock, 5);
    }

    #[test]
    fn dispense_unknown_drug_is_not_found() {
        let mut store = stocked();
        let err = dispense(&mut store, 9, 1).unwrap_err();
        assert!(matches!(err, HmsError::NotFound { id: 9, .. }));
    }

    #[test]
    fn low_stock_lists_only_drugs_at_alert() {
        let store = stocked();
        let result = low_stock(&store).unwrap();
        assert_eq!(result.listed[0].ids(), vec!["2"]);
        assert_eq!(store.drugs.len(), 2);
    }

    #[test]
    fn approve_adds_stock_and_marks_request() {
        let mut store = stocked();
        request_replenishment(&mut store, 2, 50).unwrap();
        approve_request(&mut store, 1).unwrap();

        assert_eq!(store.drugs.get_entry(2).unwrap().stock, 55);
        assert_eq!(
            store.requests.get_entry(1).unwrap().status,
            RequestStatus::Approved
        );
    }

    #[test]
    fn decided_request_cannot_be_decided_again() {
        let mut store = stocked();
        request_replenishment(&mut store, 2, 50).unwrap();
        let result = reject_request(&mut store, 1).unwrap();
        assert_eq!(
            result.messages[0].content,
            "Request rejected: [1] Amoxicillin x50 (REJECTED)"
        );

        assert!(approve_request(&mut store, 1).is_err());
        assert_eq!(store.drugs.get_entry(2).unwrap().stock, 5);
    }

    #[test]
    fn approve_fails_when_drug_was_removed() {
        let mut store = stocked();
        request_replenishment(&mut store, 2, 50).unwrap();
        store.drugs.remove_entry(2);

        assert!(approve_request(&mut store, 1).is_err());
        assert_eq!(
            store.requests.get_entry(1).unwrap().status,
            RequestStatus::Pending
        );
    }

    #[test]
    fn request_for_unknown_drug_fails() {
        let mut store = stocked();
        assert!(request_replenishment(&mut store, 7, 10).is_err());
        assert!(request_replenishment(&mut store, 1, 0).is_err());
        assert!(store.requests.is_empty());
    }

    #[test]
    fn list_requests_filters_by_status() {
        let mut store = stocked();
        request_replenishment(&mut store, 1, 10).unwrap();
        request_replenishment(&mut store, 2, 10).unwrap();
        approve_request(&mut store, 2).unwrap();

        let pending = list_requests(&store, Some(RequestStatus::Pending)).unwrap();
        assert_eq!(pending.listed[0].ids(), vec!["1"]);
        let all = list_requests(&store, None).unwrap();
        assert_eq!(all.listed[0].rows.len(), 2);
    }
}
