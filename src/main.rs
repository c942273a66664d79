mod api;
mod kms;
mod logs;
mod misc;
mod models;
mod policy;
mod protection_job;
mod session;

use clap::Parser;

#[derive(Debug, Parser)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
enum Command {
    ProtectionJob(protection_job::Args),
    Policy(policy::Args),
    Kms(kms::Args),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logs::init()?;

    let args = Args::parse();
    match args.command {
        Command::ProtectionJob(args) => protection_job::main(args).await,
        Command::Policy(args) => policy::main(args).await,
        Command::Kms(args) => kms::main(args).await,
    }
}
