use super::Gender;
use crate::entry::{expect_columns, parse_number, ClosedSet, Entry, EntryId};
use crate::error::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Doctor,
    Pharmacist,
    Administrator,
}

impl ClosedSet for Role {
    const KIND: &'static str = "role";
    const ALL: &'static [Self] = &[Role::Doctor, Role::Pharmacist, Role::Administrator];

    fn as_str(&self) -> &'static str {
        match self {
            Role::Doctor => "DOCTOR",
            Role::Pharmacist => "PHARMACIST",
            Role::Administrator => "ADMINISTRATOR",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staff {
    id: EntryId,
    pub name: String,
    pub role: Role,
    pub gender: Gender,
    pub age: u8,
}

impl Staff {
    pub fn new(id: EntryId, name: impl Into<String>, role: Role, gender: Gender, age: u8) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            gender,
            age,
        }
    }
}

impl Entry for Staff {
    const KIND: &'static str = "staff";
    const HEADERS: &'static [&'static str] = &["id", "name", "role", "gender", "age"];

    fn id(&self) -> EntryId {
        self.id
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.role.as_str().to_string(),
            self.gender.as_str().to_string(),
            self.age.to_string(),
        ]
    }

    fn from_row(fields: &[String]) -> Result<Self> {
        expect_columns::<Self>(fields)?;
        Ok(Self {
            id: parse_number::<Self, _>(0, &fields[0])?,
            name: fields[1].clone(),
            role: Role::parse_member(&fields[2])?,
            gender: Gender::parse_member(&fields[3])?,
            age: parse_number::<Self, _>(4, &fields[4])?,
        })
    }
}

impl fmt::Display for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}, {}, {})",
            self.id, self.name, self.role, self.gender, self.age
        )
    }
}
