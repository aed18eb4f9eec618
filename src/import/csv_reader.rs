use csv::{ReaderBuilder, Trim};
use encoding_rs_io::DecodeReaderBytesBuilder;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One row of a hardware hash export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceRecord {
    #[serde(rename = "Device Serial Number")]
    pub serial_number: String,
    #[serde(rename = "Hardware Hash")]
    pub hardware_hash: String,
    #[serde(rename = "Group Tag", default)]
    pub group_tag: Option<String>,
    #[serde(rename = "OrderID", default)]
    pub order_id: Option<String>,
    #[serde(rename = "Assigned User", default)]
    pub assigned_user: Option<String>,
}

impl DeviceRecord {
    /// Group tag to import with: the override, then the record's own tag, then its order id.
    pub fn effective_group_tag<'a>(&'a self, group_tag_override: Option<&'a str>) -> Option<&'a str> {
        non_empty(group_tag_override)
            .or_else(|| non_empty(self.group_tag.as_deref()))
            .or_else(|| non_empty(self.order_id.as_deref()))
    }

    pub fn assigned_user(&self) -> Option<&str> {
        non_empty(self.assigned_user.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

pub fn read_device_records(path: &Path) -> Result<Vec<DeviceRecord>, CsvError> {
    let file = std::fs::File::open(path).map_err(|source| CsvError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_device_records(file)
}

/// Accepts UTF-8 and, when a byte order mark says so, UTF-16 exports.
fn parse_device_records<R: io::Read>(reader: R) -> Result<Vec<DeviceRecord>, CsvError> {
    let decoded = DecodeReaderBytesBuilder::new().strip_bom(true).build(reader);
    let mut reader = ReaderBuilder::new().trim(Trim::All).flexible(true).from_reader(decoded);

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<DeviceRecord>().enumerate() {
        // Line 1 is the header
        let line = index + 2;
        let record = result.map_err(|source| CsvError::Parse { source, line })?;

        if record.serial_number.is_empty() {
            return Err(CsvError::MissingValue { column: "Device Serial Number", line });
        }
        if record.hardware_hash.is_empty() {
            return Err(CsvError::MissingValue { column: "Hardware Hash", line });
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(CsvError::Empty);
    }
    Ok(records)
}

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("unable to read '{}': {source}", path.display())]
    Io { source: io::Error, path: PathBuf },
    #[error("line {line}: {source}")]
    Parse { source: csv::Error, line: usize },
    #[error("line {line}: missing '{column}'")]
    MissingValue { column: &'static str, line: usize },
    #[error("no devices found in the file")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn record(group_tag: Option<&str>, order_id: Option<&str>) -> DeviceRecord {
        DeviceRecord {
            serial_number: "SN001".to_string(),
            hardware_hash: "HASH1".to_string(),
            group_tag: group_tag.map(str::to_string),
            order_id: order_id.map(str::to_string),
            assigned_user: None,
        }
    }

    #[rstest]
    #[case::override_wins(Some("Kiosk"), Some("Sales"), Some("PO-1"), Some("Kiosk"))]
    #[case::record_tag_before_order_id(None, Some("Sales"), Some("PO-1"), Some("Sales"))]
    #[case::order_id_as_fallback(None, None, Some("PO-1"), Some("PO-1"))]
    #[case::empty_values_are_absent(Some(""), Some(" "), Some("PO-1"), Some("PO-1"))]
    #[case::nothing(None, None, None, None)]
    fn effective_group_tag_precedence(
        #[case] group_tag_override: Option<&str>,
        #[case] group_tag: Option<&str>,
        #[case] order_id: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let record = record(group_tag, order_id);

        assert_eq!(record.effective_group_tag(group_tag_override), expected);
    }

    #[test]
    fn reads_the_hardware_hash_export() -> Result<(), CsvError> {
        let path = PathBuf::from(format!("{}/tests/resources/devices.csv", env!("CARGO_MANIFEST_DIR")));

        let records = read_device_records(&path)?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].serial_number, "SN001");
        assert_eq!(records[0].hardware_hash, "HASH1");
        assert_eq!(records[0].effective_group_tag(None), None);
        assert_eq!(records[1].effective_group_tag(None), Some("Sales"));
        assert_eq!(records[1].assigned_user(), Some("adele@contoso.com"));

        Ok(())
    }

    #[test]
    fn reads_a_utf16_export_with_a_byte_order_mark() -> Result<(), CsvError> {
        let path = PathBuf::from(format!("{}/tests/resources/devices_utf16.csv", env!("CARGO_MANIFEST_DIR")));

        let records = read_device_records(&path)?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].serial_number, "SN101");
        assert_eq!(records[0].hardware_hash, "HASH101");
        assert_eq!(records[0].effective_group_tag(None), Some("Kiosk"));
        assert_eq!(records[1].serial_number, "SN102");
        assert_eq!(records[1].effective_group_tag(None), None);

        Ok(())
    }

    #[test]
    fn utf16_rows_are_decoded_before_parsing() -> Result<(), CsvError> {
        let text = "Device Serial Number,Windows Product ID,Hardware Hash\r\nSN001,,HASH1\r\n";
        let mut bytes = vec![0xFF, 0xFE];
        bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));

        let records = parse_device_records(bytes.as_slice())?;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].serial_number, "SN001");
        assert_eq!(records[0].hardware_hash, "HASH1");

        Ok(())
    }

    #[test]
    fn optional_columns_may_be_missing() -> Result<(), CsvError> {
        let csv = "Device Serial Number,Windows Product ID,Hardware Hash\nSN001,,HASH1\n";

        let records = parse_device_records(csv.as_bytes())?;

        assert_eq!(records, vec![record(None, None)]);
        Ok(())
    }

    #[test]
    fn rows_without_a_hash_are_rejected() {
        let csv = "Device Serial Number,Hardware Hash\nSN001,HASH1\nSN002,\n";

        let result = parse_device_records(csv.as_bytes());

        assert!(matches!(result, Err(CsvError::MissingValue { column: "Hardware Hash", line: 3 })));
    }

    #[test]
    fn a_file_without_rows_is_rejected() {
        let result = parse_device_records("Device Serial Number,Hardware Hash\n".as_bytes());

        assert!(matches!(result, Err(CsvError::Empty)));
    }
}
