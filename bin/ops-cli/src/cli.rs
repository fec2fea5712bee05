use std::path::PathBuf;

use akro_bridge_primitives::{operation_key::OperationKey, types::ValidatorId};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "validator-ops-cli",
    about = "Propose, approve and inspect quorum-gated validator operations",
    version
)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) files: FileArgs,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
    Init(InitArgs),

    Status(StatusArgs),

    Call(CallArgs),

    Cancel(CancelArgs),

    Transfer(TransferArgs),
}

#[derive(Args, Debug, Clone)]
pub(crate) struct FileArgs {
    #[arg(
        long,
        global = true,
        env = "OPS_STATE",
        default_value = "validator-ops.json",
        help = "the path to the engine state file"
    )]
    pub(crate) state: PathBuf,

    #[arg(
        long,
        global = true,
        env = "OPS_PARAMS",
        help = "the path to the params file; built-in defaults are used if omitted"
    )]
    pub(crate) params: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Create a state file whose only validator is the deployer", version)]
pub(crate) struct InitArgs {
    #[arg(
        long,
        env = "OPS_DEPLOYER",
        value_parser = clap::value_parser!(ValidatorId),
        help = "the identity that deploys the engine"
    )]
    pub(crate) deployer: ValidatorId,

    #[arg(long, help = "overwrite an existing state file")]
    pub(crate) force: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Show the validators and the pending operations", version)]
pub(crate) struct StatusArgs {
    #[arg(long, help = "print the state as JSON")]
    pub(crate) json: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Propose or approve a call to a protected operation", version)]
pub(crate) struct CallArgs {
    #[arg(
        long,
        env = "OPS_CALLER",
        value_parser = clap::value_parser!(ValidatorId),
        help = "the identity making the call"
    )]
    pub(crate) caller: ValidatorId,

    #[arg(long, help = "the tag of the protected operation")]
    pub(crate) tag: String,

    #[arg(
        long,
        conflicts_with = "value",
        help = "the borsh-encoded arguments of the call as hex"
    )]
    pub(crate) args: Option<String>,

    #[arg(long, help = "a single u64 argument of the call")]
    pub(crate) value: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Retract an approval of a pending operation", version)]
pub(crate) struct CancelArgs {
    #[arg(
        long,
        env = "OPS_CALLER",
        value_parser = clap::value_parser!(ValidatorId),
        help = "the identity retracting its approval"
    )]
    pub(crate) caller: ValidatorId,

    #[arg(
        long,
        value_parser = clap::value_parser!(OperationKey),
        help = "the key of the pending operation"
    )]
    pub(crate) key: OperationKey,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Propose or approve replacing the validator set", version)]
pub(crate) struct TransferArgs {
    #[arg(
        long,
        env = "OPS_CALLER",
        value_parser = clap::value_parser!(ValidatorId),
        help = "the identity making the call"
    )]
    pub(crate) caller: ValidatorId,

    #[arg(
        long,
        value_delimiter = ',',
        required = true,
        value_parser = clap::value_parser!(ValidatorId),
        help = "the new validators, comma separated"
    )]
    pub(crate) validators: Vec<ValidatorId>,

    #[arg(long, help = "the number of approvals that gates the next transfer")]
    pub(crate) threshold: Option<usize>,
}
