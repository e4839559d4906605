use super::Gender;
use crate::entry::{expect_columns, parse_number, ClosedSet, Entry, EntryId};
use crate::error::{HmsError, Result};
use chrono::NaiveDate;
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BloodType {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    OPositive,
    ONegative,
}

impl ClosedSet for BloodType {
    const KIND: &'static str = "blood type";
    const ALL: &'static [Self] = &[
        BloodType::APositive,
        BloodType::ANegative,
        BloodType::BPositive,
        BloodType::BNegative,
        BloodType::AbPositive,
        BloodType::AbNegative,
        BloodType::OPositive,
        BloodType::ONegative,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::AbPositive => "AB+",
            BloodType::AbNegative => "AB-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity and medical particulars of a registered patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientParticulars {
    id: EntryId,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub blood_type: BloodType,
}

impl PatientParticulars {
    pub fn new(
        id: EntryId,
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        gender: Gender,
        blood_type: BloodType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            date_of_birth,
            gender,
            blood_type,
        }
    }
}

pub(crate) fn parse_date(kind: &'static str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| HmsError::malformed(kind, format!("not a YYYY-MM-DD date: {:?}", value)))
}

impl Entry for PatientParticulars {
    const KIND: &'static str = "patient";
    const HEADERS: &'static [&'static str] = &["id", "name", "dateOfBirth", "gender", "bloodType"];

    fn id(&self) -> EntryId {
        self.id
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.date_of_birth.format(DATE_FORMAT).to_string(),
            self.gender.as_str().to_string(),
            self.blood_type.as_str().to_string(),
        ]
    }

    fn from_row(fields: &[String]) -> Result<Self> {
        expect_columns::<Self>(fields)?;
        Ok(Self {
            id: parse_number::<Self, _>(0, &fields[0])?,
            name: fields[1].clone(),
            date_of_birth: parse_date(Self::KIND, &fields[2])?,
            gender: Gender::parse_member(&fields[3])?,
            blood_type: BloodType::parse_member(&fields[4])?,
        })
    }
}

impl fmt::Display for PatientParticulars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}, born {}, {}, blood type {}",
            self.id,
            self.name,
            self.date_of_birth.format(DATE_FORMAT),
            self.gender,
            self.blood_type
        )
    }
}
