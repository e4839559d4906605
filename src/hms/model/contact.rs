use crate::entry::{expect_columns, parse_number, Entry, EntryId};
use crate::error::Result;
use std::fmt;

/// How to reach a patient. Shares its id with the patient's particulars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInformation {
    id: EntryId,
    pub phone: String,
    pub email: String,
}

impl ContactInformation {
    pub fn new(id: EntryId, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            phone: phone.into(),
            email: email.into(),
        }
    }
}

impl Entry for ContactInformation {
    const KIND: &'static str = "contact";
    const HEADERS: &'static [&'static str] = &["id", "phone", "email"];

    fn id(&self) -> EntryId {
        self.id
    }

    fn to_row(&self) -> Vec<String> {
        vec![self.id.to_string(), self.phone.clone(), self.email.clone()]
    }

    fn from_row(fields: &[String]) -> Result<Self> {
        expect_columns::<Self>(fields)?;
        Ok(Self {
            id: parse_number::<Self, _>(0, &fields[0])?,
            phone: fields[1].clone(),
            email: fields[2].clone(),
        })
    }
}

impl fmt::Display for ContactInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] phone: {}, email: {}", self.id, self.phone, self.email)
    }
}
