use opi_client::models::MultipathMode;

use crate::cli::{
    ControllerCreateArgs, ControllerDeleteArgs, ControllerGetArgs, ControllerListArgs,
    MultipathArg, OutputFormat,
};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_controller;

pub(crate) async fn handle_controller_create(
    ctx: &AppContext,
    args: &ControllerCreateArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let client = ctx.controllers()?;
    let controller = client
        .create(&args.id, multipath_mode(args.multipath))
        .await?;

    render_controller("Created NVMe controller:", &controller, output)
}

pub(crate) async fn handle_controller_delete(
    ctx: &AppContext,
    args: &ControllerDeleteArgs,
) -> CliResult<()> {
    let client = ctx.controllers()?;
    client.delete(&args.name, args.allow_missing).await?;

    println!("Deleted NVMe controller: {}", args.name);
    Ok(())
}

pub(crate) async fn handle_controller_get(
    ctx: &AppContext,
    args: &ControllerGetArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let client = ctx.controllers()?;
    let controller = client.get(&args.name).await?;

    render_controller("Get NVMe controller:", &controller, output)
}

pub(crate) async fn handle_controller_list(
    ctx: &AppContext,
    args: &ControllerListArgs,
    output: OutputFormat,
) -> CliResult<()> {
    if args.pagesize < 0 {
        return Err(CliError::validation("pagesize must be zero or positive"));
    }

    let client = ctx.controllers()?;
    let mut page_token = args.pagetoken.clone();

    loop {
        let page = client.list(args.pagesize, &page_token).await?;
        if matches!(output, OutputFormat::Table) {
            println!("list NVMe controllers:");
        }
        for controller in &page.controllers {
            render_controller("NVMe controller with:", controller, output)?;
        }

        if page.next_page_token.is_empty() {
            break;
        }
        page_token = page.next_page_token;
    }

    Ok(())
}

pub(crate) const fn multipath_mode(arg: MultipathArg) -> MultipathMode {
    match arg {
        MultipathArg::Disable => MultipathMode::Disable,
        MultipathArg::Failover => MultipathMode::Failover,
        MultipathArg::Multipath => MultipathMode::Multipath,
    }
}
