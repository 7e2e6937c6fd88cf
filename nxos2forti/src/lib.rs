//! Conversion of NX-OS VLAN interfaces into FortiGate VLAN interfaces.
//!
//! Parsing lives in [`nxos_config_core`]; this crate renders the parsed
//! records as FortiGate CLI ([`emit`]), loads the fixed per-interface values
//! ([`settings`]) and reports on a run ([`summary`], [`report`]).
//!
//! ```ignore
//! use nxos_config_core::parse;
//! use nxos2forti::emit::{emit_all, render_document};
//! use nxos2forti::settings::default_settings;
//!
//! let records = parse(&text);
//! let blocks = emit_all(&records, "Port-channel1", &default_settings());
//! let output = render_document(&blocks, true);
//! ```

pub mod emit;
pub mod report;
pub mod settings;
pub mod summary;
