//! Parsed message abstraction
use std::collections::HashMap;

use crate::{
    error::Error,
    prelude::{Constellation, SV},
};

/// Implement [ParsedMessage] on top of your RTCM framer, to present
/// one framed message as a set of named fields (`DF009`, `CELLPRN_01`, `DF405_03`..).
/// An absent field must remain distinguishable from a null value.
pub trait ParsedMessage {
    /// Message type identifier, for example "1019" or "1077".
    fn identity(&self) -> &str;

    /// Returns numerical value of this field, if it exists.
    fn value(&self, name: &str) -> Option<f64>;

    /// Returns textual value of this field, if it exists.
    /// This is used by signal identifiers (`CELLSIG_xx`).
    fn text(&self, name: &str) -> Option<String>;
}

/// One [FieldRecord] entry
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Number(f64),
    Text(String),
}

/// Named-field record: the simplest [ParsedMessage].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRecord {
    identity: String,
    fields: HashMap<String, Field>,
}

impl FieldRecord {
    /// Builds a new [FieldRecord] for this message type, without any field.
    pub fn new(identity: &str) -> Self {
        Self {
            identity: identity.to_string(),
            fields: Default::default(),
        }
    }

    /// Defines (or overwrites) one numerical field
    pub fn insert_number(&mut self, name: &str, value: f64) {
        self.fields.insert(name.to_string(), Field::Number(value));
    }

    /// Defines (or overwrites) one textual field
    pub fn insert_text(&mut self, name: &str, value: &str) {
        self.fields
            .insert(name.to_string(), Field::Text(value.to_string()));
    }

    /// Removes one field, returns it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Field> {
        self.fields.remove(name)
    }

    /// Copies and returns [FieldRecord] with one more numerical field
    pub fn with_number(&self, name: &str, value: f64) -> Self {
        let mut s = self.clone();
        s.insert_number(name, value);
        s
    }

    /// Copies and returns [FieldRecord] with one more textual field
    pub fn with_text(&self, name: &str, value: &str) -> Self {
        let mut s = self.clone();
        s.insert_text(name, value);
        s
    }

    /// Copies and returns [FieldRecord] without this field
    pub fn without(&self, name: &str) -> Self {
        let mut s = self.clone();
        s.remove(name);
        s
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if this record has no field
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl ParsedMessage for FieldRecord {
    fn identity(&self) -> &str {
        &self.identity
    }

    fn value(&self, name: &str) -> Option<f64> {
        match self.fields.get(name)? {
            Field::Number(value) => Some(*value),
            Field::Text(text) => text.trim().parse::<f64>().ok(),
        }
    }

    fn text(&self, name: &str) -> Option<String> {
        match self.fields.get(name)? {
            Field::Text(text) => Some(text.clone()),
            Field::Number(value) => Some(value.to_string()),
        }
    }
}

/// Mandatory numerical field
pub(crate) fn field(msg: &dyn ParsedMessage, name: &str) -> Result<f64, Error> {
    msg.value(name)
        .ok_or_else(|| Error::MissingField(name.to_string()))
}

/// Mandatory integer field
pub(crate) fn integer(msg: &dyn ParsedMessage, name: &str) -> Result<i64, Error> {
    Ok(field(msg, name)?.round() as i64)
}

/// Mandatory integer field, that must fit in `T`
pub(crate) fn bounded<T: TryFrom<i64>>(msg: &dyn ParsedMessage, name: &str) -> Result<T, Error> {
    T::try_from(integer(msg, name)?).map_err(|_| Error::InvalidField(name.to_string()))
}

/// Builds [SV] from a satellite number field
pub(crate) fn satellite(
    msg: &dyn ParsedMessage,
    constellation: Constellation,
    name: &str,
) -> Result<SV, Error> {
    let prn = integer(msg, name)?;
    satellite_from_prn(constellation, prn)
}

pub(crate) fn satellite_from_prn(constellation: Constellation, prn: i64) -> Result<SV, Error> {
    if (1..=63).contains(&prn) {
        Ok(SV::new(constellation, prn as u8))
    } else {
        Err(Error::InvalidSatelliteNumber(prn))
    }
}
