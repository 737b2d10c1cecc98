//! patroni_ctl: perform a single Patroni API call against a cluster member.
//!
//! The member ip address and name can be set with `--ip` and `--name`,
//! or with `PATRONI_IP` and `PATRONI_NAME` in the environment or in `.env`.
//!
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::collections::HashMap;
use log::*;
use anyhow::{Context, Result};
use patroni_client::{ClusterMember, MemberData, Patroni, PatroniApi};

mod utility;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Opts {
    /// ip address of the member, for example: 10.0.0.1 or fd00::1
    #[arg(long, value_name = "ip address")]
    ip: Option<String>,
    /// name of the member, required for switchover
    #[arg(short, long, value_name = "name")]
    name: Option<String>,
    /// write the ip address and name that are set as argument to .env
    #[arg(long)]
    write_dotenv: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// print the status (/patroni)
    Status,
    /// print the member data
    Member,
    /// print the dynamic configuration (/config)
    Config,
    /// patch the dynamic configuration with a json object
    SetConfig {
        #[arg(value_name = "json")]
        config: String,
    },
    /// set postgresql parameters in the dynamic configuration
    SetParameters {
        #[arg(value_name = "name=value", required = true)]
        parameters: Vec<String>,
    },
    /// hand over the leader role from the member to the candidate
    Switchover {
        #[arg(value_name = "candidate")]
        candidate: String,
    },
    /// restart postgresql, if the member has a pending restart
    Restart,
}

fn print_json(map: &serde_json::Map<String, serde_json::Value>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(map).with_context(|| "Error formatting json")?);
    Ok(())
}

fn print_member_data(member: &ClusterMember, data: &MemberData) {
    let state = if data.is_running() {
        data.state.green()
    } else {
        data.state.red()
    };
    println!("{:20} {:10} {:10} {:>8} {:15} {:10} {:10}",
             member.name,
             state,
             data.role,
             data.server_version,
             if data.pending_restart { "pending_restart" } else { "" },
             data.patroni.scope,
             data.patroni.version,
    );
}

fn main() -> Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();
    let options = Opts::parse();

    let mut changed_options = HashMap::new();
    let ip = utility::set_member_ip(&options.ip, &mut changed_options)?;
    let name = utility::set_member_name(&options.name, &mut changed_options);
    let member = ClusterMember::new(&name, &ip);

    let patroni = Patroni::new()?;
    info!("{:?} against {} ({})", options.command, member.name, member.ip);

    match &options.command {
        Command::Status => print_json(&patroni.get_status(&member)?)?,
        Command::Config => print_json(&patroni.get_config(&member)?)?,
        Command::Member => print_member_data(&member, &patroni.get_member_data(&member)?),
        Command::SetConfig { config } => {
            let config = utility::parse_config(config)?;
            patroni.set_config(&member, &config)?;
        }
        Command::SetParameters { parameters } => {
            let parameters = utility::parse_parameters(parameters)?;
            patroni.set_postgres_parameters(&member, &parameters)?;
        }
        Command::Switchover { candidate } => {
            if member.name.is_empty() {
                anyhow::bail!("Switchover requires the name of the current leader: use --name or set {} in .env", utility::PATRONI_NAME);
            }
            patroni.switchover(&member, candidate)
                .with_context(|| format!("Switchover from {} to {} failed", member.name, candidate))?;
        }
        Command::Restart => patroni.restart(&member)
            .with_context(|| format!("Restart of {} failed", member.name))?,
    }

    utility::dotenv_writer(options.write_dotenv, changed_options)?;
    Ok(())
}
