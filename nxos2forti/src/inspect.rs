use anyhow::{Context, Result};
use nxos2forti::report::{render_records, InspectReport};
use nxos_config_core::{parse_file, read_uplink};

use crate::cli::{InspectArgs, OutputFormat};

pub fn run_inspect(args: InspectArgs) -> Result<()> {
    let records = parse_file(&args.input)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;
    let uplink = read_uplink(&args.input)
        .with_context(|| format!("failed to read uplink from {}", args.input.display()))?;

    match args.format {
        OutputFormat::Text => println!("{}", render_records(&uplink, &records)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&InspectReport::new(&uplink, &records))?
        ),
    }
    Ok(())
}
