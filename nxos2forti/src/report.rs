use colored::Colorize;
use nxos_config_core::InterfaceRecord;
use serde::Serialize;

use crate::summary::{render as render_summary_line, ConversionSummary};

/// Parsed input as printed by `inspect --format json`.
#[derive(Debug, Serialize)]
pub struct InspectReport<'a> {
    pub uplink: &'a str,
    pub interfaces: Vec<InspectEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct InspectEntry<'a> {
    #[serde(flatten)]
    pub record: &'a InterfaceRecord,
    pub dhcp_relay_exists: bool,
}

impl<'a> InspectReport<'a> {
    pub fn new(uplink: &'a str, records: &'a [InterfaceRecord]) -> Self {
        Self {
            uplink,
            interfaces: records
                .iter()
                .map(|record| InspectEntry {
                    record,
                    dhcp_relay_exists: record.has_dhcp_relay(),
                })
                .collect(),
        }
    }
}

/// Render parsed records for terminal output.
pub fn render_records(uplink: &str, records: &[InterfaceRecord]) -> String {
    let mut out = Vec::new();
    out.push(format!("uplink={}", display_or_dash(Some(uplink))).cyan().to_string());

    for record in records {
        let ip = match (&record.ip_address, &record.subnet_mask) {
            (Some(ip), Some(mask)) if mask.contains('.') => format!("{ip} {mask}"),
            (Some(ip), Some(mask)) => format!("{ip}/{mask}"),
            (Some(ip), None) => format!("{ip} (no mask)"),
            (None, _) => "-".to_string(),
        };
        let relay = if record.has_dhcp_relay() {
            record.dhcp_relay_list.join(",")
        } else {
            "-".to_string()
        };
        let line = format!(
            "- vlan={} ip={} secondary={} relay={} alias={:?}",
            record.vlan_label(),
            ip,
            display_or_dash(record.secondary.as_deref()),
            relay,
            record.description.as_deref().unwrap_or_default()
        );
        if emittable(record) {
            out.push(line);
        } else {
            out.push(format!("{line} (incomplete)").yellow().to_string());
        }
    }

    out.join("\n")
}

/// Render the conversion summary line for terminal output.
pub fn render_summary(summary: ConversionSummary) -> String {
    let line = render_summary_line(summary);
    if summary.skipped > 0 {
        line.yellow().to_string()
    } else {
        line.green().to_string()
    }
}

fn emittable(record: &InterfaceRecord) -> bool {
    record.vlan_id.is_some() && record.ip_address.is_some() && record.subnet_mask.is_some()
}

fn display_or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_record() {
        colored::control::set_override(false);
        let mut complete = InterfaceRecord::new(Some("10".to_string()));
        complete.ip_address = Some("10.0.10.1".to_string());
        complete.subnet_mask = Some("24".to_string());
        complete.dhcp_relay_list = vec!["10.0.0.53".to_string(), "10.0.0.54".to_string()];
        let incomplete = InterfaceRecord::new(Some("20".to_string()));

        let text = render_records("Port-channel1", &[complete, incomplete]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "uplink=Port-channel1");
        assert_eq!(
            lines[1],
            "- vlan=10 ip=10.0.10.1/24 secondary=- relay=10.0.0.53,10.0.0.54 alias=\"\""
        );
        assert_eq!(
            lines[2],
            "- vlan=20 ip=- secondary=- relay=- alias=\"\" (incomplete)"
        );
    }

    #[test]
    fn json_report_includes_relay_flag() {
        let mut record = InterfaceRecord::new(Some("10".to_string()));
        record.dhcp_relay_list.push("10.0.0.53".to_string());
        let records = vec![record];
        let report = InspectReport::new("po1", &records);
        let value = serde_json::to_value(&report).expect("serialize");

        assert_eq!(value["uplink"], "po1");
        assert_eq!(value["interfaces"][0]["vlan_id"], "10");
        assert_eq!(value["interfaces"][0]["dhcp_relay_exists"], true);
        assert_eq!(value["interfaces"][0]["ip_address"], serde_json::Value::Null);
    }
}
