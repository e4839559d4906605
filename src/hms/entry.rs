//! # Entry Contract
//!
//! Every record stored in a [`Table`](crate::table::Table) implements [`Entry`]:
//! a stable integer identity plus the hooks that turn the record into a row of
//! string fields and back. The column layout is fixed per record kind and is
//! declared once in [`Entry::HEADERS`].
//!
//! Fields that map onto a closed set of symbolic values (statuses, roles,
//! blood types) implement [`ClosedSet`], which gives them a shared parser that
//! fails with [`HmsError::InvalidEnumValue`] on unknown members.

use crate::error::{HmsError, Result};
use std::str::FromStr;

pub type EntryId = u32;

pub trait Entry: Clone {
    /// Human-readable name of the record kind, used in error messages.
    const KIND: &'static str;

    /// Column names in row order. `to_row` must produce exactly this many fields.
    const HEADERS: &'static [&'static str];

    fn id(&self) -> EntryId;

    fn to_row(&self) -> Vec<String>;

    /// Build a record from a decoded row.
    ///
    /// Must accept anything `to_row` produces. Fails with `MalformedRecord`
    /// on a wrong field count or unparsable field, and with
    /// `InvalidEnumValue` on an unknown closed-set member.
    fn from_row(fields: &[String]) -> Result<Self>;
}

/// A closed set of symbolic values stored as text.
pub trait ClosedSet: Sized + Copy + 'static {
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn parse_member(value: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.as_str() == value)
            .ok_or_else(|| HmsError::InvalidEnumValue {
                kind: Self::KIND,
                value: value.to_string(),
            })
    }
}

/// Check that a row carries exactly the columns of `E`.
pub fn expect_columns<E: Entry>(fields: &[String]) -> Result<()> {
    if fields.len() != E::HEADERS.len() {
        return Err(HmsError::malformed(
            E::KIND,
            format!(
                "expected {} fields, found {}",
                E::HEADERS.len(),
                fields.len()
            ),
        ));
    }
    Ok(())
}

/// Parse a numeric column, reporting failures as a malformed record.
pub fn parse_number<E: Entry, T: FromStr>(column: usize, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        HmsError::malformed(
            E::KIND,
            format!("column {} is not a number: {:?}", E::HEADERS[column], value),
        )
    })
}

/// Reject free text that would split a record across lines in a table file.
pub fn single_line(field: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(HmsError::InvalidArgument(format!(
            "{} must not contain line breaks: {:?}",
            field, value
        )));
    }
    Ok(())
}
