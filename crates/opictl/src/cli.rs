//! Argument surface and command dispatch for `opictl`.

use std::time::Duration;

use anyhow::anyhow;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::client::{AppContext, CliError, CliResult, init_logging, with_deadline};
use crate::commands::{network, storage};

const DEFAULT_ADDR: &str = "localhost:50151";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Parses CLI arguments, executes the requested command, and maps the outcome
/// to a process exit code.
pub async fn run() -> i32 {
    init_logging();

    let cli = Cli::parse();
    match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    let Some(command) = cli.command else {
        return print_subtree_help(&[]);
    };

    tracing::debug!(command = command_label(&command), "dispatching command");

    let deadline = Duration::from_secs(cli.timeout);
    let output = cli.output;
    let ctx = AppContext { addr: cli.addr };

    match command {
        Command::CreateVrf(args) => {
            with_deadline(deadline, network::handle_vrf_create(&ctx, &args, output)).await
        }
        Command::DeleteVrf(args) => {
            with_deadline(deadline, network::handle_vrf_delete(&ctx, &args)).await
        }
        Command::GetVrf(args) => {
            with_deadline(deadline, network::handle_vrf_get(&ctx, &args, output)).await
        }
        Command::ListVrfs(args) => {
            with_deadline(deadline, network::handle_vrf_list(&ctx, &args, output)).await
        }
        Command::UpdateVrf(args) => {
            with_deadline(deadline, network::handle_vrf_update(&ctx, &args, output)).await
        }
        Command::Backend(backend) => match backend.command {
            None => print_subtree_help(&["backend"]),
            Some(BackendCommand::Nvme(nvme)) => match nvme.command {
                None => print_subtree_help(&["backend", "nvme"]),
                Some(NvmeCommand::Controller(controller)) => match controller.command {
                    None => print_subtree_help(&["backend", "nvme", "controller"]),
                    Some(ControllerCommand::Create(args)) => {
                        with_deadline(
                            deadline,
                            storage::handle_controller_create(&ctx, &args, output),
                        )
                        .await
                    }
                    Some(ControllerCommand::Delete(args)) => {
                        with_deadline(deadline, storage::handle_controller_delete(&ctx, &args))
                            .await
                    }
                    Some(ControllerCommand::Get(args)) => {
                        with_deadline(
                            deadline,
                            storage::handle_controller_get(&ctx, &args, output),
                        )
                        .await
                    }
                    Some(ControllerCommand::List(args)) => {
                        with_deadline(
                            deadline,
                            storage::handle_controller_list(&ctx, &args, output),
                        )
                        .await
                    }
                },
            },
        },
    }
}

fn print_subtree_help(path: &[&str]) -> CliResult<()> {
    let mut command = Cli::command();
    for name in path {
        command = command
            .find_subcommand(name)
            .cloned()
            .ok_or_else(|| CliError::failure(anyhow!("unknown command group '{name}'")))?;
    }

    command
        .print_help()
        .map_err(|err| CliError::failure(anyhow!("failed to render help: {err}")))
}

#[derive(Parser)]
#[command(name = "opictl", version, about = "CLI front-end for an OPI resource server")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "OPICTL_ADDR",
        default_value = DEFAULT_ADDR,
        help = "Address of the OPI server"
    )]
    pub(crate) addr: String,
    #[arg(
        long,
        global = true,
        env = "OPICTL_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "Deadline in seconds applied to each command"
    )]
    pub(crate) timeout: u64,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render records"
    )]
    pub(crate) output: OutputFormat,
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    #[command(about = "Create a VRF")]
    CreateVrf(CreateVrfArgs),
    #[command(about = "Delete a VRF")]
    DeleteVrf(DeleteVrfArgs),
    #[command(about = "Get a VRF")]
    GetVrf(GetVrfArgs),
    #[command(about = "List VRFs")]
    ListVrfs(ListVrfsArgs),
    #[command(about = "Update a VRF")]
    UpdateVrf(UpdateVrfArgs),
    #[command(visible_alias = "b", about = "Storage backend resources")]
    Backend(BackendArgs),
}

#[derive(Args)]
pub(crate) struct CreateVrfArgs {
    #[arg(short = 'n', long, default_value = "", help = "Descriptive name")]
    pub(crate) name: String,
    #[arg(
        short = 'v',
        long,
        default_value_t = 0,
        help = "VNI for the vrf, zero leaves it unset"
    )]
    pub(crate) vni: u32,
    #[arg(long, help = "Loopback IP address")]
    pub(crate) loopback: String,
    #[arg(long, default_value = "", help = "VTEP IP address")]
    pub(crate) vtep: String,
}

#[derive(Args)]
pub(crate) struct DeleteVrfArgs {
    #[arg(short = 'n', long, default_value = "", help = "Specify the name of the vrf")]
    pub(crate) name: String,
    #[arg(
        short = 'a',
        long = "allowMissing",
        help = "Succeed even if the vrf is missing"
    )]
    pub(crate) allow_missing: bool,
}

#[derive(Args)]
pub(crate) struct GetVrfArgs {
    #[arg(short = 'n', long, help = "Specify the name of the vrf")]
    pub(crate) name: String,
}

#[derive(Args)]
pub(crate) struct ListVrfsArgs {
    #[arg(
        short = 's',
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Specify page size"
    )]
    pub(crate) pagesize: i32,
    #[arg(short = 't', long, default_value = "", help = "Specify the page token")]
    pub(crate) pagetoken: String,
}

#[derive(Args)]
pub(crate) struct UpdateVrfArgs {
    #[arg(short = 'n', long, default_value = "", help = "Specify the name of the vrf")]
    pub(crate) name: String,
    #[arg(long, value_delimiter = ',', help = "Fields to apply in the update")]
    pub(crate) update_mask: Vec<String>,
    #[arg(
        short = 'a',
        long = "allowMissing",
        help = "Succeed even if the vrf is missing"
    )]
    pub(crate) allow_missing: bool,
}

#[derive(Args)]
pub(crate) struct BackendArgs {
    #[command(subcommand)]
    pub(crate) command: Option<BackendCommand>,
}

#[derive(Subcommand)]
pub(crate) enum BackendCommand {
    #[command(visible_alias = "n", about = "NVMe over Fabrics resources")]
    Nvme(NvmeArgs),
}

#[derive(Args)]
pub(crate) struct NvmeArgs {
    #[command(subcommand)]
    pub(crate) command: Option<NvmeCommand>,
}

#[derive(Subcommand)]
pub(crate) enum NvmeCommand {
    #[command(visible_alias = "c", about = "Remote NVMe controller operations")]
    Controller(ControllerArgs),
}

#[derive(Args)]
pub(crate) struct ControllerArgs {
    #[command(subcommand)]
    pub(crate) command: Option<ControllerCommand>,
}

#[derive(Subcommand)]
pub(crate) enum ControllerCommand {
    #[command(about = "Create a remote NVMe controller")]
    Create(ControllerCreateArgs),
    #[command(about = "Delete a remote NVMe controller")]
    Delete(ControllerDeleteArgs),
    #[command(about = "Get a remote NVMe controller")]
    Get(ControllerGetArgs),
    #[command(about = "List remote NVMe controllers")]
    List(ControllerListArgs),
}

#[derive(Args)]
pub(crate) struct ControllerCreateArgs {
    #[arg(long, default_value = "", help = "Client supplied controller identifier")]
    pub(crate) id: String,
    #[arg(
        long,
        value_enum,
        default_value_t = MultipathArg::Multipath,
        help = "Multipath mode for the controller"
    )]
    pub(crate) multipath: MultipathArg,
}

#[derive(Args)]
pub(crate) struct ControllerDeleteArgs {
    #[arg(short = 'n', long, default_value = "", help = "Specify the name of the controller")]
    pub(crate) name: String,
    #[arg(
        short = 'a',
        long = "allowMissing",
        help = "Succeed even if the controller is missing"
    )]
    pub(crate) allow_missing: bool,
}

#[derive(Args)]
pub(crate) struct ControllerGetArgs {
    #[arg(short = 'n', long, help = "Specify the name of the controller")]
    pub(crate) name: String,
}

#[derive(Args)]
pub(crate) struct ControllerListArgs {
    #[arg(
        short = 's',
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Specify page size"
    )]
    pub(crate) pagesize: i32,
    #[arg(short = 't', long, default_value = "", help = "Specify the page token")]
    pub(crate) pagetoken: String,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub(crate) enum MultipathArg {
    Disable,
    Failover,
    #[default]
    Multipath,
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::CreateVrf(_) => "create_vrf",
        Command::DeleteVrf(_) => "delete_vrf",
        Command::GetVrf(_) => "get_vrf",
        Command::ListVrfs(_) => "list_vrfs",
        Command::UpdateVrf(_) => "update_vrf",
        Command::Backend(backend) => match &backend.command {
            None => "backend",
            Some(BackendCommand::Nvme(nvme)) => match &nvme.command {
                None => "backend_nvme",
                Some(NvmeCommand::Controller(controller)) => match &controller.command {
                    None => "backend_nvme_controller",
                    Some(ControllerCommand::Create(_)) => "controller_create",
                    Some(ControllerCommand::Delete(_)) => "controller_delete",
                    Some(ControllerCommand::Get(_)) => "controller_get",
                    Some(ControllerCommand::List(_)) => "controller_list",
                },
            },
        },
    }
}
