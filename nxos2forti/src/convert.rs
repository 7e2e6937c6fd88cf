//! The `convert` command: parse, render, write.

use std::fs;

use anyhow::{Context, Result};
use nxos2forti::emit::{emit_all, render_document};
use nxos2forti::report::render_summary;
use nxos2forti::settings::{default_settings, load_settings, EmitSettings};
use nxos2forti::summary::summarize;
use nxos_config_core::{parse_file, read_uplink};
use tracing::{info, warn};

use crate::cli::ConvertArgs;
use crate::path_guard::ensure_output_not_same;

/// Convert one NX-OS config file into a FortiGate config file.
///
/// Records that cannot be rendered are skipped with a warning; only I/O
/// failures, an unreadable settings file or an output path equal to the
/// input abort the run.
///
/// # Errors
///
/// Returns error if the input or settings file cannot be read, the output
/// would overwrite the input, or the output cannot be written.
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    ensure_output_not_same(&args.output, &args.input)?;

    let records = parse_file(&args.input)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;
    info!("{} interfaces detected", records.len());

    let uplink = match args.uplink.as_deref() {
        Some(name) => name.to_string(),
        None => read_uplink(&args.input)
            .with_context(|| format!("failed to read uplink from {}", args.input.display()))?,
    };
    if uplink.is_empty() {
        warn!("uplink interface name is empty");
    }

    let settings = resolve_settings(&args)?;
    let blocks = emit_all(&records, &uplink, &settings);
    let document = render_document(&blocks, args.wrap);

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }
    fs::write(&args.output, document)
        .with_context(|| format!("failed to write output {}", args.output.display()))?;
    info!("configuration written to {}", args.output.display());

    let summary = summarize(&records, &blocks);
    if args.summary_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", render_summary(summary));
    }
    Ok(())
}

fn resolve_settings(args: &ConvertArgs) -> Result<EmitSettings> {
    match &args.settings {
        Some(path) => Ok(load_settings(path)?),
        None => Ok(default_settings()),
    }
}
