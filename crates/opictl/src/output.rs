//! Output renderers and formatting helpers for CLI commands.

use anyhow::anyhow;
use opi_client::models::{MultipathMode, NvmeController, Vrf};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

pub(crate) fn render_vrf(label: &str, vrf: &Vrf, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(vrf),
        OutputFormat::Table => {
            println!("{label}");
            println!("name: {}", vrf.name);
            if let Some(vni) = vrf.vni {
                println!("vni: {vni}");
            }
            if !vrf.loopback.is_empty() {
                println!("loopback: {}", vrf.loopback);
            }
            if let Some(vtep) = &vrf.vtep {
                println!("vtep: {vtep}");
            }
            if let Some(status) = &vrf.status {
                println!("status: {status}");
            }
            Ok(())
        }
    }
}

pub(crate) fn render_controller(
    label: &str,
    controller: &NvmeController,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(controller),
        OutputFormat::Table => {
            println!("{label}");
            println!("name: {}", controller.name);
            println!("multipath: {}", multipath_to_str(controller.multipath));
            if let Some(status) = &controller.status {
                println!("status: {status}");
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to render JSON output: {err}")))?;
    println!("{rendered}");
    Ok(())
}

#[must_use]
pub(crate) const fn multipath_to_str(mode: MultipathMode) -> &'static str {
    match mode {
        MultipathMode::Disable => "disable",
        MultipathMode::Failover => "failover",
        MultipathMode::Multipath => "multipath",
    }
}
