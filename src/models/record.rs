//! Typed records and their field values.

use chrono::{NaiveDate, NaiveTime};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::kind::RecordKind;
use super::schema::field;

/// The value held by one field of a [`Record`].
///
/// Attendance dates and times are parsed; everything else is kept as the
/// text that was persisted, including any thousands separators.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Plain text, exactly as read (minus wrapping quotes).
    Text(String),
    /// A calendar date, or `None` if the source was empty or malformed.
    Date(Option<NaiveDate>),
    /// A time of day, or `None` if the source was empty or malformed.
    Time(Option<NaiveTime>),
}

impl FieldValue {
    /// Returns the text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    /// Formats the value the way it is persisted in the CSV files.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Date(Some(d)) => write!(f, "{}", d.format("%m/%d/%Y")),
            FieldValue::Time(Some(t)) => write!(f, "{}", t.format("%-H:%M")),
            FieldValue::Date(None) | FieldValue::Time(None) => Ok(()),
        }
    }
}

/// One parsed line of a CSV file.
///
/// A record always holds exactly as many values as its kind's schema has
/// fields; values are addressed by field name through the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    kind: RecordKind,
    values: Vec<FieldValue>,
}

impl Record {
    /// Creates a record, padding missing values with empty text and
    /// dropping any beyond the schema length.
    pub fn new(kind: RecordKind, mut values: Vec<FieldValue>) -> Self {
        values.resize(kind.schema().len(), FieldValue::Text(String::new()));
        Self { kind, values }
    }

    /// Creates a text-only record from positional tokens.
    pub fn from_texts<I, S>(kind: RecordKind, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = texts
            .into_iter()
            .map(|s| FieldValue::Text(s.into()))
            .collect();
        Self::new(kind, values)
    }

    /// Returns the kind of this record.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Returns the values in schema order.
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    /// Returns the value of a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.kind
            .schema()
            .index_of(name)
            .and_then(|i| self.values.get(i))
    }

    /// Returns the text of a field, or `None` if absent or not text.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// Returns the parsed date of a field, if present.
    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        match self.get(name) {
            Some(FieldValue::Date(d)) => *d,
            _ => None,
        }
    }

    /// Returns the parsed time of a field, if present.
    pub fn time(&self, name: &str) -> Option<NaiveTime> {
        match self.get(name) {
            Some(FieldValue::Time(t)) => *t,
            _ => None,
        }
    }

    /// Replaces a field's value. Returns false if the schema has no such field.
    pub fn set(&mut self, name: &str, value: FieldValue) -> bool {
        match self.kind.schema().index_of(name) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    /// Replaces a field with text. Returns false if the schema has no such field.
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.set(name, FieldValue::Text(value.into()))
    }

    /// Returns the employee ID, which every kind carries.
    pub fn employee_id(&self) -> &str {
        self.text(field::EMPLOYEE_ID).unwrap_or_default()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.kind.schema().fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (name, value) in fields.iter().zip(&self.values) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
