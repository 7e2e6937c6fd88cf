use nxos_config_core::InterfaceRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub interfaces: usize,
    pub emitted: usize,
    pub skipped: usize,
    pub relay: usize,
    pub secondary: usize,
}

/// Count records and rendered blocks. `blocks` is parallel to `records`.
pub fn summarize(records: &[InterfaceRecord], blocks: &[String]) -> ConversionSummary {
    let emitted = blocks.iter().filter(|b| !b.is_empty()).count();
    ConversionSummary {
        interfaces: records.len(),
        emitted,
        skipped: records.len().saturating_sub(emitted),
        relay: records.iter().filter(|r| r.has_dhcp_relay()).count(),
        secondary: records.iter().filter(|r| r.secondary.is_some()).count(),
    }
}

pub fn render(summary: ConversionSummary) -> String {
    format!(
        "convert_summary interfaces={} emitted={} skipped={} relay={} secondary={}",
        summary.interfaces, summary.emitted, summary.skipped, summary.relay, summary.secondary
    )
}
