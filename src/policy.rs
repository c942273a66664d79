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
    List {
        #[clap(long)]
        names: Vec<String>,
    },
    Get {
        id: String,
    },
}

pub async fn main(args: Args) -> anyhow::Result<()> {
    let session = Session::from_env().await?;
    match args.command {
        Command::List { names } => {
            let policies = api::policies::list(&session, &names).await?;
            println!("{}", serde_json::to_string_pretty(&policies)?);
        }
        Command::Get { id } => {
            let policy = api::policies::get(&session, &id).await?;
            println!("{policy}");
        }
    }
    Ok(())
}
