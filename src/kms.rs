use crate::api;
use crate::session::Session;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
enum Command {
    Status,
}

pub async fn main(args: Args) -> anyhow::Result<()> {
    let session = Session::from_env().await?;
    match args.command {
        Command::Status => {
            let status = api::kms::status(&session).await?;
            println!("{status}");
        }
    }
    Ok(())
}
