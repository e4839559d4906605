use crate::entry::{expect_columns, parse_number, ClosedSet, Entry, EntryId};
use crate::error::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ClosedSet for RequestStatus {
    const KIND: &'static str = "request status";
    const ALL: &'static [Self] = &[
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pharmacist's request to restock a drug, decided by an administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplenishmentRequest {
    id: EntryId,
    pub drug_name: String,
    pub quantity: u32,
    pub status: RequestStatus,
}

impl ReplenishmentRequest {
    pub fn new(id: EntryId, drug_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            drug_name: drug_name.into(),
            quantity,
            status: RequestStatus::Pending,
        }
    }
}

impl Entry for ReplenishmentRequest {
    const KIND: &'static str = "replenishment request";
    const HEADERS: &'static [&'static str] = &["id", "drugName", "quantity", "status"];

    fn id(&self) -> EntryId {
        self.id
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.drug_name.clone(),
            self.quantity.to_string(),
            self.status.as_str().to_string(),
        ]
    }

    fn from_row(fields: &[String]) -> Result<Self> {
        expect_columns::<Self>(fields)?;
        Ok(Self {
            id: parse_number::<Self, _>(0, &fields[0])?,
            drug_name: fields[1].clone(),
            quantity: parse_number::<Self, _>(2, &fields[2])?,
            status: RequestStatus::parse_member(&fields[3])?,
        })
    }
}

impl fmt::Display for ReplenishmentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} x{} ({})",
            self.id, self.drug_name, self.quantity, self.status
        )
    }
}
