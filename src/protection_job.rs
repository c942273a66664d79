
use crate::api;
use crate::models::protection_jobs::{
    ChangeProtectionJobStateParam, DeleteProtectionJobParam, RunProtectionJobParam,
};
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
        #[clap(value_parser = clap::value_parser!(i64).range(1..))]
        id: i64,
    },
    Delete {
        #[clap(value_parser = clap::value_parser!(i64).range(1..))]
        id: i64,
        /// Also delete the snapshots generated by the job.
        #[clap(long, action = clap::ArgAction::Set, default_value_t = true)]
        delete_snapshots: bool,
    },
    Run {
        #[clap(value_parser = clap::value_parser!(i64).range(1..))]
        id: i64,
        #[clap(long)]
        run_type: Option<String>,
    },
    Pause {
        #[clap(value_parser = clap::value_parser!(i64).range(1..))]
        id: i64,
    },
    Resume {
        #[clap(value_parser = clap::value_parser!(i64).range(1..))]
        id: i64,
    },
}

pub async fn main(args: Args) -> anyhow::Result<()> {
    let session = Session::from_env().await?;
    match args.command {
        Command::List { names } => {
            let jobs = api::protection_jobs::list(&session, &names).await?;
            println!("{}", serde_json::to_string_pretty(&jobs)?);
        }
        Command::Get { id } => {
            let job = api::protection_jobs::get(&session, id).await?;
            println!("{job}");
        }
        Command::Delete {
            id,
            delete_snapshots,
        } => {
            api::protection_jobs::delete(
                &session,
                id,
                &DeleteProtectionJobParam {
                    delete_snapshots: Some(delete_snapshots),
                },
            )
            .await?;
            println!("Protection Job has been deleted.");
        }
        Command::Run { id, run_type } => {
            api::protection_jobs::run(&session, id, &RunProtectionJobParam { run_type }).await?;
            println!("Protection Job run has been started.");
        }
        Command::Pause { id } => {
            api::protection_jobs::change_state(
                &session,
                id,
                &ChangeProtectionJobStateParam { pause: Some(true) },
            )
            .await?;
            println!("Protection Job has been paused.");
        }
        Command::Resume { id } => {
            api::protection_jobs::change_state(
                &session,
                id,
                &ChangeProtectionJobStateParam { pause: Some(false) },
            )
            .await?;
            println!("Protection Job has been resumed.");
        }
    }
    Ok(())
}
