//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every hms operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (table names and closed-set values from text)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints and holds no business logic; that belongs in
//! `commands/*.rs`. Tests here check dispatch and input parsing only.

use crate::commands;
use crate::entry::{ClosedSet, EntryId};
use crate::error::Result;
use crate::model::{RequestStatus, Role, TableKind};
use crate::store::Store;
use std::str::FromStr;

pub struct HmsApi {
    store: Store,
    paths: commands::HmsPaths,
}

impl HmsApi {
    pub fn new(store: Store, paths: commands::HmsPaths) -> Self {
        Self { store, paths }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.store, &self.paths)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn list(&self, table: &str, sort: Option<&str>) -> Result<commands::CmdResult> {
        commands::tables::list(&self.store, TableKind::from_str(table)?, sort)
    }

    pub fn search(&self, table: &str, column: &str, value: &str) -> Result<commands::CmdResult> {
        commands::tables::search(&self.store, TableKind::from_str(table)?, column, value)
    }

    pub fn remove(&mut self, table: &str, id: EntryId) -> Result<commands::CmdResult> {
        commands::tables::remove(&mut self.store, TableKind::from_str(table)?, id)
    }

    pub fn add_drug(
        &mut self,
        name: &str,
        stock: u32,
        low_stock_alert: u32,
    ) -> Result<commands::CmdResult> {
        commands::dispensary::add_drug(&mut self.store, name, stock, low_stock_alert)
    }

    pub fn dispense(&mut self, drug_id: EntryId, quantity: u32) -> Result<commands::CmdResult> {
        commands::dispensary::dispense(&mut self.store, drug_id, quantity)
    }

    pub fn low_stock(&self) -> Result<commands::CmdResult> {
        commands::dispensary::low_stock(&self.store)
    }

    pub fn request_replenishment(
        &mut self,
        drug_id: EntryId,
        quantity: u32,
    ) -> Result<commands::CmdResult> {
        commands::dispensary::request_replenishment(&mut self.store, drug_id, quantity)
    }

    pub fn list_requests(&self, status: Option<&str>) -> Result<commands::CmdResult> {
        let status = status.map(parse_member::<RequestStatus>).transpose()?;
        commands::dispensary::list_requests(&self.store, status)
    }

    pub fn approve_request(&mut self, id: EntryId) -> Result<commands::CmdResult> {
        commands::dispensary::approve_request(&mut self.store, id)
    }

    pub fn reject_request(&mut self, id: EntryId) -> Result<commands::CmdResult> {
        commands::dispensary::reject_request(&mut self.store, id)
    }

    pub fn register_patient(&mut self, patient: NewPatientInput) -> Result<commands::CmdResult> {
        let patient = commands::records::NewPatient {
            name: patient.name,
            date_of_birth: crate::model::parse_date("patient", &patient.date_of_birth)?,
            gender: parse_member(&patient.gender)?,
            blood_type: parse_member(&patient.blood_type)?,
            phone: patient.phone,
            email: patient.email,
        };
        commands::records::register_patient(&mut self.store, patient)
    }

    pub fn update_contact(
        &mut self,
        id: EntryId,
        phone: Option<String>,
        email: Option<String>,
    ) -> Result<commands::CmdResult> {
        commands::records::update_contact(&mut self.store, id, phone, email)
    }

    pub fn show_patient(&self, id: EntryId) -> Result<commands::CmdResult> {
        commands::records::show_patient(&self.store, id)
    }

    pub fn remove_patient(&mut self, id: EntryId) -> Result<commands::CmdResult> {
        commands::records::remove_patient(&mut self.store, id)
    }

    pub fn add_staff(
        &mut self,
        name: &str,
        role: &str,
        gender: &str,
        age: u8,
    ) -> Result<commands::CmdResult> {
        commands::staff::add_staff(
            &mut self.store,
            name,
            parse_member::<Role>(role)?,
            parse_member(gender)?,
            age,
        )
    }

    pub fn remove_staff(&mut self, id: EntryId) -> Result<commands::CmdResult> {
        commands::staff::remove_staff(&mut self.store, id)
    }

    pub fn list_staff(
        &self,
        role: Option<&str>,
        sort: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let role = role.map(parse_member::<Role>).transpose()?;
        commands::staff::list_staff(&self.store, role, sort)
    }
}

/// Patient registration as typed by a user: every field is still text.
#[derive(Debug, Clone)]
pub struct NewPatientInput {
    pub name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub blood_type: String,
    pub phone: String,
    pub email: String,
}

/// Closed-set values are stored upper case; user input may be any case.
fn parse_member<T: ClosedSet>(input: &str) -> Result<T> {
    T::parse_member(&input.trim().to_uppercase())
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, HmsPaths, MessageLevel, TableView};
