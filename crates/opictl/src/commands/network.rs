use crate::cli::{
    CreateVrfArgs, DeleteVrfArgs, GetVrfArgs, ListVrfsArgs, OutputFormat, UpdateVrfArgs,
};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_vrf;

pub(crate) async fn handle_vrf_create(
    ctx: &AppContext,
    args: &CreateVrfArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let client = ctx.vrfs()?;

    let vni = (args.vni != 0).then_some(args.vni);
    let vrf = client
        .create(&args.name, vni, &args.loopback, &args.vtep)
        .await?;

    render_vrf("Created VRF:", &vrf, output)
}

pub(crate) async fn handle_vrf_delete(ctx: &AppContext, args: &DeleteVrfArgs) -> CliResult<()> {
    let client = ctx.vrfs()?;
    client.delete(&args.name, args.allow_missing).await?;

    println!("Deleted VRF: {}", args.name);
    Ok(())
}

pub(crate) async fn handle_vrf_get(
    ctx: &AppContext,
    args: &GetVrfArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let client = ctx.vrfs()?;
    let vrf = client.get(&args.name).await?;

    render_vrf("Get VRF:", &vrf, output)
}

pub(crate) async fn handle_vrf_list(
    ctx: &AppContext,
    args: &ListVrfsArgs,
    output: OutputFormat,
) -> CliResult<()> {
    if args.pagesize < 0 {
        return Err(CliError::validation("pagesize must be zero or positive"));
    }

    let client = ctx.vrfs()?;
    let mut page_token = args.pagetoken.clone();

    loop {
        let page = client.list(args.pagesize, &page_token).await?;
        if matches!(output, OutputFormat::Table) {
            println!("list VRFs:");
        }
        for vrf in &page.vrfs {
            render_vrf("VRF with:", vrf, output)?;
        }

        if page.next_page_token.is_empty() {
            break;
        }
        page_token = page.next_page_token;
    }

    Ok(())
}

pub(crate) async fn handle_vrf_update(
    ctx: &AppContext,
    args: &UpdateVrfArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let client = ctx.vrfs()?;
    let vrf = client
        .update(&args.name, &args.update_mask, args.allow_missing)
        .await?;

    render_vrf("Updated VRF:", &vrf, output)
}
