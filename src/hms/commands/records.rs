//! Patient medical records: particulars and contact information.
//!
//! A patient's particulars and contact row share one id across the two tables.

use crate::commands::{CmdMessage, CmdResult, TableView};
use crate::entry::{single_line, Entry, EntryId};
use crate::error::{HmsError, Result};
use crate::model::{
    BloodType, ContactInformation, Gender, PatientParticulars, TableKind,
};
use crate::store::Store;
use chrono::NaiveDate;
use tracing::info;

#[derive(Debug, Clone)]
pub struct NewPatient {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub blood_type: BloodType,
    pub phone: String,
    pub email: String,
}

pub fn register_patient(store: &mut Store, patient: NewPatient) -> Result<CmdResult> {
    single_line("patient name", &patient.name)?;
    single_line("phone", &patient.phone)?;
    single_line("email", &patient.email)?;
    let name = patient.name.trim();
    if name.is_empty() {
        return Err(HmsError::Api("Patient name cannot be empty".into()));
    }

    let id = store.patients.unused_id().max(store.contacts.unused_id());
    let particulars = PatientParticulars::new(
        id,
        name,
        patient.date_of_birth,
        patient.gender,
        patient.blood_type,
    );
    store.patients.add_entry(particulars.clone())?;
    store
        .contacts
        .add_entry(ContactInformation::new(id, patient.phone, patient.email))?;
    store.save(TableKind::Patients)?;
    store.save(TableKind::Contacts)?;
    info!(id, "patient registered");

    Ok(CmdResult::default()
        .with_affected(vec![id])
        .with_message(CmdMessage::success(format!(
            "Patient registered: {}",
            particulars
        ))))
}

pub fn update_contact(
    store: &mut Store,
    id: EntryId,
    phone: Option<String>,
    email: Option<String>,
) -> Result<CmdResult> {
    if phone.is_none() && email.is_none() {
        return Err(HmsError::Api("Nothing to update".into()));
    }
    if let Some(phone) = &phone {
        single_line("phone", phone)?;
    }
    if let Some(email) = &email {
        single_line("email", email)?;
    }
    let mut contact = store
        .contacts
        .get_entry(id)
        .cloned()
        .ok_or(HmsError::NotFound {
            kind: ContactInformation::KIND,
            id,
        })?;
    if let Some(phone) = phone {
        contact.phone = phone;
    }
    if let Some(email) = email {
        contact.email = email;
    }
    store.contacts.replace_entry(contact.clone());
    store.save(TableKind::Contacts)?;
    info!(id, "contact updated");

    Ok(CmdResult::default()
        .with_affected(vec![id])
        .with_message(CmdMessage::success(format!(
            "Contact information updated: {}",
            contact
        ))))
}

pub fn show_patient(store: &Store, id: EntryId) -> Result<CmdResult> {
    let particulars = store.patients.get_entry(id).ok_or(HmsError::NotFound {
        kind: PatientParticulars::KIND,
        id,
    })?;

    let mut result = CmdResult::default()
        .with_affected(vec![id])
        .with_listed(TableView::from_entries(
            TableKind::Patients,
            store.patients.headers(),
            [particulars],
        ));

    match store.contacts.get_entry(id) {
        Some(contact) => {
            result = result.with_listed(TableView::from_entries(
                TableKind::Contacts,
                store.contacts.headers(),
                [contact],
            ));
        }
        None => result.add_message(CmdMessage::warning(format!(
            "No contact information on file for patient {}",
            id
        ))),
    }
    Ok(result)
}

/// Remove a patient's particulars and contact row.
pub fn remove_patient(store: &mut Store, id: EntryId) -> Result<CmdResult> {
    if !store.patients.remove_entry(id) {
        return Err(HmsError::NotFound {
            kind: PatientParticulars::KIND,
            id,
        });
    }
    let had_contact = store.contacts.remove_entry(id);
    store.save(TableKind::Patients)?;
    if had_contact {
        store.save(TableKind::Contacts)?;
    }
    info!(id, "patient removed");

    Ok(CmdResult::default()
        .with_affected(vec![id])
        .with_message(CmdMessage::success(format!("Patient {} removed", id))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_patient(name: &str) -> NewPatient {
        NewPatient {
            name: name.into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 1).unwrap(),
            gender: Gender::Male,
            blood_type: BloodType::OPositive,
            phone: "+65 8123 4567".into(),
            email: "lim@example.com".into(),
        }
    }

    #[test]
    fn register_writes_both_tables_with_shared_id() {
        let mut store = Store::in_memory();
        register_patient(&mut store, new_patient("Lim, Wei")).unwrap();

        assert_eq!(store.patients.get_entry(1).unwrap().name, "Lim, Wei");
        assert_eq!(store.contacts.get_entry(1).unwrap().email, "lim@example.com");
    }

    #[test]
    fn register_message_renders_particulars() {
        let mut store = Store::in_memory();
        let result = register_patient(&mut store, new_patient("Lim, Wei")).unwrap();
        assert_eq!(
            result.messages[0].content,
            "Patient registered: [1] Lim, Wei, born 1990-06-01, MALE, blood type O+"
        );
    }

    #[test]
    fn register_rejects_line_breaks_in_every_text_field() {
        let mut store = Store::in_memory();
        let mut broken_name = new_patient("Lim\nWei");
        assert!(matches!(
            register_patient(&mut store, broken_name.clone()),
            Err(HmsError::InvalidArgument(_))
        ));
        broken_name.name = "Lim\r".into();
        assert!(register_patient(&mut store, broken_name).is_err());

        let mut broken_phone = new_patient("Lim");
        broken_phone.phone = "8123\r\n4567".into();
        assert!(matches!(
            register_patient(&mut store, broken_phone),
            Err(HmsError::InvalidArgument(_))
        ));

        let mut broken_email = new_patient("Lim");
        broken_email.email = "lim@example.com\r".into();
        assert!(matches!(
            register_patient(&mut store, broken_email),
            Err(HmsError::InvalidArgument(_))
        ));

        assert!(store.patients.is_empty());
        assert!(store.contacts.is_empty());
    }

    #[test]
    fn update_contact_rejects_line_breaks() {
        let mut store = Store::in_memory();
        register_patient(&mut store, new_patient("Lim")).unwrap();
        assert!(matches!(
            update_contact(&mut store, 1, Some("1\n2".into()), None),
            Err(HmsError::InvalidArgument(_))
        ));
        assert!(matches!(
            update_contact(&mut store, 1, None, Some("a@b.c\r".into())),
            Err(HmsError::InvalidArgument(_))
        ));
        assert_eq!(store.contacts.get_entry(1).unwrap().phone, "+65 8123 4567");
    }

    #[test]
    fn register_picks_id_free_in_both_tables() {
        let mut store = Store::in_memory();
        store
            .contacts
            .add_entry(ContactInformation::new(4, "1", "stray@example.com"))
            .unwrap();
        let result = register_patient(&mut store, new_patient("Ong")).unwrap();
        assert_eq!(result.affected_ids, vec![5]);
    }

    #[test]
    fn update_contact_changes_only_given_fields() {
        let mut store = Store::in_memory();
        register_patient(&mut store, new_patient("Lim")).unwrap();
        update_contact(&mut store, 1, None, Some("wei@example.com".into())).unwrap();

        let contact = store.contacts.get_entry(1).unwrap();
        assert_eq!(contact.phone, "+65 8123 4567");
        assert_eq!(contact.email, "wei@example.com");
    }

    #[test]
    fn update_contact_needs_a_field() {
        let mut store = Store::in_memory();
        register_patient(&mut store, new_patient("Lim")).unwrap();
        assert!(update_contact(&mut store, 1, None, None).is_err());
    }

    #[test]
    fn show_patient_lists_both_views() {
        let mut store = Store::in_memory();
        register_patient(&mut store, new_patient("Lim")).unwrap();
        let result = show_patient(&store, 1).unwrap();
        assert_eq!(result.listed.len(), 2);
        assert_eq!(result.listed[1].kind, TableKind::Contacts);
    }

    #[test]
    fn show_patient_without_contact_warns() {
        let mut store = Store::in_memory();
        register_patient(&mut store, new_patient("Lim")).unwrap();
        store.contacts.remove_entry(1);
        let result = show_patient(&store, 1).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn remove_patient_drops_both_rows() {
        let mut store = Store::in_memory();
        register_patient(&mut store, new_patient("Lim")).unwrap();
        remove_patient(&mut store, 1).unwrap();
        assert!(store.patients.is_empty());
        assert!(store.contacts.is_empty());
        assert!(matches!(
            remove_patient(&mut store, 1),
            Err(HmsError::NotFound { .. })
        ));
    }
}
