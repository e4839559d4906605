//! # Table Variants
//!
//! Concrete record kinds stored by the hospital services. Each one is a thin
//! [`Entry`](crate::entry::Entry) implementation: a column layout, a row
//! conversion and a `Display` rendering for the console.
//!
//! | Kind | File | Columns |
//! |------|------|---------|
//! | [`Drug`] | `drugs.csv` | `id,name,stock,lowStockAlert` |
//! | [`ReplenishmentRequest`] | `replenishment_requests.csv` | `id,drugName,quantity,status` |
//! | [`PatientParticulars`] | `patients.csv` | `id,name,dateOfBirth,gender,bloodType` |
//! | [`ContactInformation`] | `contacts.csv` | `id,phone,email` |
//! | [`Staff`] | `staff.csv` | `id,name,role,gender,age` |

use crate::entry::ClosedSet;
use crate::error::{HmsError, Result};
use std::fmt;
use std::str::FromStr;

mod contact;
mod drug;
mod patient;
mod request;
mod staff;

pub use contact::ContactInformation;
pub use drug::Drug;
pub use patient::{BloodType, PatientParticulars};
pub(crate) use patient::parse_date;
pub use request::{ReplenishmentRequest, RequestStatus};
pub use staff::{Role, Staff};

/// The tables the application keeps, one CSV file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Drugs,
    Requests,
    Patients,
    Contacts,
    Staff,
}

impl TableKind {
    pub const ALL: [TableKind; 5] = [
        TableKind::Drugs,
        TableKind::Requests,
        TableKind::Patients,
        TableKind::Contacts,
        TableKind::Staff,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TableKind::Drugs => "drugs",
            TableKind::Requests => "requests",
            TableKind::Patients => "patients",
            TableKind::Contacts => "contacts",
            TableKind::Staff => "staff",
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            TableKind::Drugs => "drugs.csv",
            TableKind::Requests => "replenishment_requests.csv",
            TableKind::Patients => "patients.csv",
            TableKind::Contacts => "contacts.csv",
            TableKind::Staff => "staff.csv",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableKind {
    type Err = HmsError;

    fn from_str(s: &str) -> Result<Self> {
        TableKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| HmsError::InvalidArgument(format!("unknown table: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl ClosedSet for Gender {
    const KIND: &'static str = "gender";
    const ALL: &'static [Self] = &[Gender::Male, Gender::Female, Gender::Other];

    fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_kind_parses_case_insensitively() {
        assert_eq!("Drugs".parse::<TableKind>().unwrap(), TableKind::Drugs);
        assert_eq!("staff".parse::<TableKind>().unwrap(), TableKind::Staff);
        assert!("wards".parse::<TableKind>().is_err());
    }

    #[test]
    fn table_kinds_have_distinct_files() {
        let mut files: Vec<_> = TableKind::ALL
            .iter()
            .map(|k| k.default_file_name())
            .collect();
        files.sort();
        files.dedup();
        assert_eq!(files.len(), TableKind::ALL.len());
    }
}
