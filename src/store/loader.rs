//! The generic CSV loader.
//!
//! One function serves all four record kinds: it resolves the file, skips
//! the header line, dispatches each remaining line to the parser for the
//! kind, and returns a fresh collection. Data-quality problems, including
//! bytes that are not valid UTF-8, are logged and repaired; only an
//! unexpected I/O failure on a file that was found is returned as an error.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::{FieldValue, Record, RecordKind, field};
use crate::parsing::{
    EMPLOYEE_FIELD_COUNT, EmployeeRepair, coerce_date, coerce_time, has_status_marker,
    naive_split, position_needs_inference, split_and_unquote,
};

use super::resource::{DataSource, Resolution};

/// Summary of one load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// The kind that was loaded.
    pub kind: RecordKind,
    /// The file read, or `None` if no file was found.
    pub source: Option<PathBuf>,
    /// Data lines read (header excluded).
    pub lines_read: usize,
    /// Records produced.
    pub loaded: usize,
    /// Lines that had fewer tokens than the schema has fields.
    pub misaligned: usize,
}

impl LoadReport {
    fn empty(kind: RecordKind) -> Self {
        Self {
            kind,
            source: None,
            lines_read: 0,
            loaded: 0,
            misaligned: 0,
        }
    }
}

/// The records produced by a load together with its report.
#[derive(Debug, Clone)]
pub struct Loaded {
    /// Records in file order.
    pub records: Vec<Record>,
    /// What happened.
    pub report: LoadReport,
}

/// Loads every record of a kind from the data source.
///
/// If no candidate file exists, the result is empty and the attempted
/// locations are logged; callers should treat zero records as a normal,
/// degraded state.
pub fn load(
    source: &DataSource,
    kind: RecordKind,
    repair: &dyn EmployeeRepair,
) -> StoreResult<Loaded> {
    let path = match source.resolve(kind) {
        Resolution::Found(path) => path,
        Resolution::NotFound { attempted } => {
            warn!(
                kind = %kind,
                attempts = attempted.len(),
                "No data file found, continuing with an empty collection"
            );
            return Ok(Loaded {
                records: Vec::new(),
                report: LoadReport::empty(kind),
            });
        }
    };

    let file = File::open(&path).map_err(|e| StoreError::Io {
        path: path.clone(),
        source: e,
    })?;

    load_from_reader(kind, BufReader::new(file), path, repair)
}

/// Loads records of a kind from any buffered reader.
///
/// `origin` is used in the report and in error messages.
pub fn load_from_reader<R: BufRead>(
    kind: RecordKind,
    mut reader: R,
    origin: PathBuf,
    repair: &dyn EmployeeRepair,
) -> StoreResult<Loaded> {
    let mut records = Vec::new();
    let mut report = LoadReport::empty(kind);
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| StoreError::Io {
                path: origin.clone(),
                source: e,
            })?;
        if read == 0 {
            break;
        }
        line_number += 1;
        let line = decode_line(&buf, kind, line_number);
        if line_number == 1 {
            continue;
        }
        report.lines_read += 1;

        if let Some(parsed) = parse_line(kind, &line, line_number, repair) {
            if parsed.misaligned {
                report.misaligned += 1;
            }
            records.push(parsed.record);
        }
    }

    report.loaded = records.len();
    report.source = Some(origin);
    info!(
        kind = %kind,
        path = ?report.source,
        loaded = report.loaded,
        misaligned = report.misaligned,
        "Loaded records"
    );

    Ok(Loaded { records, report })
}

/// Decodes one raw line, replacing invalid UTF-8 and dropping the line ending.
fn decode_line(raw: &[u8], kind: RecordKind, line_number: usize) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    match String::from_utf8_lossy(raw) {
        Cow::Borrowed(line) => line.to_string(),
        Cow::Owned(line) => {
            warn!(
                kind = %kind,
                line = line_number,
                "Line is not valid UTF-8, replacing undecodable bytes"
            );
            line
        }
    }
}

/// A parsed line and whether it was short of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// The record, always padded to the full schema length.
    pub record: Record,
    /// True if the line had fewer tokens than the schema has fields.
    pub misaligned: bool,
}

/// Parses one data line of a kind; blank lines yield `None`.
pub fn parse_line(
    kind: RecordKind,
    line: &str,
    line_number: usize,
    repair: &dyn EmployeeRepair,
) -> Option<ParsedLine> {
    if line.trim().is_empty() {
        return None;
    }

    let parsed = match kind {
        RecordKind::Employee => parse_employee(line, line_number, repair),
        RecordKind::Attendance => {
            let tokens = tokenize(kind, line, line_number);
            let values = kind
                .schema()
                .fields()
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let raw = tokens.values.get(i).map(String::as_str).unwrap_or_default();
                    match *name {
                        field::DATE => FieldValue::Date(coerce_date(raw)),
                        field::LOG_IN | field::LOG_OUT => FieldValue::Time(coerce_time(raw)),
                        _ => FieldValue::Text(raw.to_string()),
                    }
                })
                .collect();
            ParsedLine {
                record: Record::new(kind, values),
                misaligned: tokens.misaligned,
            }
        }
        RecordKind::LeaveRequest | RecordKind::Credential => {
            let tokens = tokenize(kind, line, line_number);
            ParsedLine {
                record: Record::from_texts(kind, tokens.values),
                misaligned: tokens.misaligned,
            }
        }
    };

    Some(parsed)
}

struct Tokens {
    values: Vec<String>,
    misaligned: bool,
}

fn tokenize(kind: RecordKind, line: &str, line_number: usize) -> Tokens {
    let values = split_and_unquote(line);
    let expected = kind.schema().len();
    let misaligned = values.len() < expected;
    if misaligned {
        warn!(
            kind = %kind,
            line = line_number,
            found = values.len(),
            expected,
            "Line has fewer fields than the schema, padding with empty values"
        );
    }
    Tokens { values, misaligned }
}

fn parse_employee(line: &str, line_number: usize, repair: &dyn EmployeeRepair) -> ParsedLine {
    let kind = RecordKind::Employee;
    let (fields, misaligned) = if has_status_marker(line) {
        let columns = repair.reconstruct(line).unwrap_or_else(|e| {
            warn!(
                line = line_number,
                error = %e,
                "Employee line repair failed, copying fields positionally"
            );
            naive_split(line)
        });
        let misaligned = !columns.is_complete();
        if misaligned {
            warn!(
                kind = %kind,
                line = line_number,
                missing = columns.missing,
                expected = EMPLOYEE_FIELD_COUNT,
                "Employee line is missing columns, padding with empty values"
            );
        }
        (columns.fields, misaligned)
    } else {
        let tokens = tokenize(kind, line, line_number);
        (tokens.values, tokens.misaligned)
    };

    let mut record = Record::from_texts(kind, fields);
    repair_position(&mut record, repair);

    ParsedLine { record, misaligned }
}

/// Replaces a numeric or empty Position with an inferred title.
///
/// Returns true if the record was changed.
pub fn repair_position(record: &mut Record, repair: &dyn EmployeeRepair) -> bool {
    let position = record.text(field::POSITION).unwrap_or_default();
    if !position_needs_inference(position) {
        return false;
    }

    let inferred = repair.infer_position(
        record.text(field::IMMEDIATE_SUPERVISOR).unwrap_or_default(),
        record.text(field::BASIC_SALARY).unwrap_or_default(),
    );
    debug!(
        employee_id = %record.employee_id(),
        corrupted = %position,
        inferred = %inferred,
        "Inferred position"
    );
    record.set_text(field::POSITION, inferred)
}
