use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::builder::RecordBuilder;
use crate::record::InterfaceRecord;

/// Errors that can occur while loading interface configuration.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the input file or it was not valid UTF-8.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse configuration text into interface records, in input order.
///
/// Parsing itself never fails: unrecognized or malformed lines are skipped.
pub fn parse(text: &str) -> Vec<InterfaceRecord> {
    let mut builder = RecordBuilder::new();
    for line in text.lines() {
        builder.feed(line);
    }
    let records = builder.finish();
    debug!(count = records.len(), "parsed interface records");
    records
}

/// Read and parse a configuration file.
pub fn parse_file(path: &Path) -> Result<Vec<InterfaceRecord>, ParseError> {
    let text = fs::read_to_string(path)?;
    Ok(parse(&text))
}

/// Uplink interface name carried on the first line of the input, trimmed.
///
/// Empty input yields an empty name.
pub fn uplink_name(text: &str) -> String {
    text.lines().next().unwrap_or_default().trim().to_string()
}

/// Read only the first line of a configuration file as the uplink name.
pub fn read_uplink(path: &Path) -> Result<String, ParseError> {
    let mut first = String::new();
    BufReader::new(File::open(path)?).read_line(&mut first)?;
    Ok(uplink_name(&first))
}

#[cfg(test)]
mod tests {
    use super::{parse, uplink_name};

    #[test]
    fn uplink_is_first_line_trimmed() {
        assert_eq!(uplink_name("  Port-channel1 \ninterface Vlan10\n"), "Port-channel1");
        assert_eq!(uplink_name(""), "");
    }

    #[test]
    fn handles_crlf_line_endings() {
        let records = parse("Port-channel1\r\ninterface Vlan10\r\n ip address 10.0.0.1/24\r\n!\r\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subnet_mask.as_deref(), Some("24"));
    }

    #[test]
    fn open_block_is_flushed_at_end_of_input() {
        let records = parse("interface Vlan10\n  description tail");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description.as_deref(), Some("tail"));
    }
}
