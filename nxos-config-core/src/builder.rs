//! State machine folding classified lines into [`InterfaceRecord`]s.
//!
//! The builder is either outside any block or building one record. While
//! building, a relay keyword line without addresses arms a pending-relay flag:
//! the next line's IPv4 literals are then taken as the wrapped relay list.

use tracing::{debug, trace};

use crate::address::extract_ipv4;
use crate::classify::{classify, LineKind};
use crate::record::InterfaceRecord;

/// Sequential builder for interface records.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    current: Option<InterfaceRecord>,
    pending_relay: bool,
    done: Vec<InterfaceRecord>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim, classify and apply one raw input line.
    pub fn feed(&mut self, raw: &str) {
        let line = raw.trim();
        let kind = classify(line);
        self.apply(line, kind);
    }

    /// Apply one already classified, trimmed line.
    pub fn apply(&mut self, line: &str, kind: LineKind<'_>) {
        match kind {
            LineKind::BlockEnd => {
                self.flush();
                self.pending_relay = false;
            }
            LineKind::InterfaceStart { vlan_id } => {
                self.flush();
                self.current = Some(InterfaceRecord::new(vlan_id));
                self.pending_relay = false;
            }
            kind => {
                let Some(record) = self.current.as_mut() else {
                    trace!(line, "ignoring line outside interface block");
                    return;
                };
                if self.pending_relay {
                    let continued = extract_ipv4(line);
                    if !continued.is_empty() {
                        record.push_relays(continued);
                        self.pending_relay = false;
                    }
                }
                self.pending_relay = apply_to_record(record, line, kind, self.pending_relay);
            }
        }
    }

    /// Whether a relay keyword is still waiting for its addresses.
    pub fn is_pending_relay(&self) -> bool {
        self.pending_relay
    }

    /// The record currently being built, if any.
    pub fn current(&self) -> Option<&InterfaceRecord> {
        self.current.as_ref()
    }

    /// Flush the open record, if any, and return every completed record.
    pub fn finish(mut self) -> Vec<InterfaceRecord> {
        self.flush();
        self.done
    }

    fn flush(&mut self) {
        if let Some(record) = self.current.take() {
            debug!(vlan = record.vlan_label(), "interface block complete");
            self.done.push(record);
        }
    }
}

/// Apply a field-level line to the open record and return the new
/// pending-relay state.
fn apply_to_record(
    record: &mut InterfaceRecord,
    line: &str,
    kind: LineKind<'_>,
    pending_relay: bool,
) -> bool {
    match kind {
        LineKind::Description(text) => record.set_description(text),
        LineKind::IpAddress => apply_ip_address(record, line),
        LineKind::DhcpRelay => {
            let addresses = extract_ipv4(line);
            if addresses.is_empty() {
                return true;
            }
            record.push_relays(addresses);
            return false;
        }
        LineKind::StandbyLegacy => apply_standby(record, line),
        LineKind::GenericIp => apply_generic_ip(record, line),
        LineKind::HsrpBlockHeader | LineKind::NoOp | LineKind::Unrecognized => {}
        LineKind::BlockEnd | LineKind::InterfaceStart { .. } => {}
    }
    pending_relay
}

fn apply_ip_address(record: &mut InterfaceRecord, line: &str) {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if line.contains('/') {
        let split = tokens
            .get(2)
            .and_then(|token| token.split_once('/'))
            .filter(|(ip, mask)| !ip.is_empty() && !mask.is_empty());
        match split {
            Some((ip, mask)) => {
                record.ip_address = Some(ip.to_string());
                record.subnet_mask = Some(mask.to_string());
            }
            None => debug!(line, "ignoring malformed CIDR address line"),
        }
        return;
    }

    if let [_, _, ip, mask, ..] = tokens.as_slice() {
        record.ip_address = Some((*ip).to_string());
        record.subnet_mask = Some((*mask).to_string());
    } else {
        debug!(line, "ignoring address line without mask");
    }
}

fn apply_standby(record: &mut InterfaceRecord, line: &str) {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if let [_, _, "ip", ip, ..] = tokens.as_slice() {
        record.ip_address = Some((*ip).to_string());
    }
}

fn apply_generic_ip(record: &mut InterfaceRecord, line: &str) {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(candidate) = tokens.get(1).filter(|token| token.contains('.')) else {
        return;
    };
    if tokens.get(2) == Some(&"secondary") {
        record.secondary = Some((*candidate).to_string());
    } else {
        record.ip_address = Some((*candidate).to_string());
    }
}
