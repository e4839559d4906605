use crate::entry::{expect_columns, parse_number, Entry, EntryId};
use crate::error::Result;
use std::fmt;

/// A medicine held by the dispensary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drug {
    id: EntryId,
    pub name: String,
    pub stock: u32,
    /// Stock at or below this level counts as low.
    pub low_stock_alert: u32,
}

impl Drug {
    pub fn new(id: EntryId, name: impl Into<String>, stock: u32, low_stock_alert: u32) -> Self {
        Self {
            id,
            name: name.into(),
            stock,
            low_stock_alert,
        }
    }

    pub fn is_low(&self) -> bool {
        self.stock <= self.low_stock_alert
    }
}

impl Entry for Drug {
    const KIND: &'static str = "drug";
    const HEADERS: &'static [&'static str] = &["id", "name", "stock", "lowStockAlert"];

    fn id(&self) -> EntryId {
        self.id
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.stock.to_string(),
            self.low_stock_alert.to_string(),
        ]
    }

    fn from_row(fields: &[String]) -> Result<Self> {
        expect_columns::<Self>(fields)?;
        Ok(Self {
            id: parse_number::<Self, _>(0, &fields[0])?,
            name: fields[1].clone(),
            stock: parse_number::<Self, _>(2, &fields[2])?,
            low_stock_alert: parse_number::<Self, _>(3, &fields[3])?,
        })
    }
}

impl fmt::Display for Drug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (stock: {}, alert at: {})",
            self.id, self.name, self.stock, self.low_stock_alert
        )?;
        if self.is_low() {
            write!(f, " LOW")?;
        }
        Ok(())
    }
}
