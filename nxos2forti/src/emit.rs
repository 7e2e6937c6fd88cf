//! Rendering of interface records as FortiGate `config system interface`
//! entries.
//!
//! Each record becomes one `edit "<prefix><vlan>"` block attached to the
//! uplink interface. Records with DHCP relay targets use the relay template;
//! all others use the plain template, which may carry a secondary address.
//! A dotted mask renders every address as `ip mask`, a prefix length as
//! `ip/prefix`.

use std::fmt::Write;

use nxos_config_core::InterfaceRecord;
use thiserror::Error;
use tracing::{info, warn};

use crate::settings::EmitSettings;

/// Reasons a record cannot be rendered.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("missing VLAN id")]
    MissingVlanId,
    #[error("missing IP address")]
    MissingIpAddress,
    #[error("missing subnet mask")]
    MissingSubnetMask,
    #[error("failed to format interface block: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Render one record, or explain why it cannot be rendered.
pub fn render_interface(
    record: &InterfaceRecord,
    uplink: &str,
    settings: &EmitSettings,
) -> Result<String, EmitError> {
    let ip = record
        .ip_address
        .as_deref()
        .ok_or(EmitError::MissingIpAddress)?;
    let mask = record
        .subnet_mask
        .as_deref()
        .ok_or(EmitError::MissingSubnetMask)?;
    let vlan = record.vlan_id.as_deref().ok_or(EmitError::MissingVlanId)?;

    let mut out = String::new();
    writeln!(out, "    edit \"{}{vlan}\"", settings.name_prefix)?;
    writeln!(out, "        set vdom \"{}\"", settings.vdom)?;
    if record.has_dhcp_relay() {
        writeln!(out, "        set dhcp-relay-service enable")?;
    }
    writeln!(out, "        set ip {}", address_with_mask(ip, mask))?;
    writeln!(out, "        set allowaccess {}", settings.allowaccess)?;
    writeln!(out, "        set status {}", settings.status)?;
    writeln!(
        out,
        "        set alias \"{}\"",
        quote_escape(record.description.as_deref().unwrap_or_default())
    )?;
    writeln!(out, "        set device-identification enable")?;
    writeln!(out, "        set role {}", settings.role)?;

    if record.has_dhcp_relay() {
        writeln!(
            out,
            "        set dhcp-relay-ip {}",
            quoted_list(&record.dhcp_relay_list)
        )?;
        writeln!(out, "        set dhcp-relay-request-all-server enable")?;
    }

    writeln!(out, "        set interface \"{}\"", quote_escape(uplink))?;
    writeln!(out, "        set vlanid {vlan}")?;

    if !record.has_dhcp_relay() {
        if let Some(secondary) = record.secondary.as_deref() {
            writeln!(out, "        set secondary-IP enable")?;
            writeln!(out, "        config secondaryip")?;
            writeln!(out, "            edit 1")?;
            writeln!(
                out,
                "                set ip {}",
                address_with_mask(secondary, mask)
            )?;
            writeln!(out, "                set allowaccess {}", settings.allowaccess)?;
            writeln!(out, "            next")?;
            writeln!(out, "        end")?;
        }
    }

    writeln!(out, "    next")?;
    Ok(out)
}

/// Render one record, logging and returning an empty block when it is skipped.
pub fn emit_interface(record: &InterfaceRecord, uplink: &str, settings: &EmitSettings) -> String {
    match render_interface(record, uplink, settings) {
        Ok(block) => block,
        Err(err) => {
            warn!("skipping VLAN {}: {err}", record.vlan_label());
            String::new()
        }
    }
}

/// Render every record in order. Skipped records yield empty blocks.
pub fn emit_all(records: &[InterfaceRecord], uplink: &str, settings: &EmitSettings) -> Vec<String> {
    records
        .iter()
        .map(|record| {
            info!("processing VLAN {}", record.vlan_label());
            emit_interface(record, uplink, settings)
        })
        .collect()
}

/// Join rendered blocks into the output document.
///
/// With `wrap`, the blocks are enclosed in `config system interface` / `end`.
pub fn render_document(blocks: &[String], wrap: bool) -> String {
    let body: String = blocks.concat();
    if wrap {
        format!("config system interface\n{body}end\n")
    } else {
        body
    }
}

fn address_with_mask(ip: &str, mask: &str) -> String {
    if mask.contains('.') {
        format!("{ip} {mask}")
    } else {
        format!("{ip}/{mask}")
    }
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\"{item}\""))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
