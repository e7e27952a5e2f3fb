//! Command line interface.

use crate::config::Config;
use crate::error::SubnetError;
use crate::output::{write_subnets, OutputFormat};
use crate::{describe_cidr, subnets_by_host_count, subnets_by_prefix, subnets_by_subnet_count};
use clap::{Args, Parser, Subcommand};
use std::error::Error;

/// IPv4 subnet calculator: describe, enumerate and split CIDR blocks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format, defaults to SUBNET_CALC_FORMAT or text
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show network, broadcast, host range and host counts of a block
    Describe { cidr: String },
    /// List every usable host address of a block
    Hosts { cidr: String },
    /// Split a block into equally sized subnets
    Split {
        cidr: String,
        #[command(flatten)]
        size: SplitSize,
        /// Number of subnets to return, all that fit by default
        #[arg(short, long)]
        count: Option<usize>,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SplitSize {
    /// New prefix length of the subnets
    #[arg(long)]
    pub prefix: Option<u8>,
    /// Minimum number of addresses per subnet
    #[arg(long)]
    pub hosts: Option<u32>,
    /// Number of subnets to divide the block into
    #[arg(long)]
    pub subnets: Option<usize>,
}

/// Sizing strategy picked on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Prefix(u8),
    Hosts(u32),
    Subnets(usize),
}

impl SplitSize {
    pub fn strategy(&self) -> Option<Strategy> {
        match (self.prefix, self.hosts, self.subnets) {
            (Some(prefix), None, None) => Some(Strategy::Prefix(prefix)),
            (None, Some(hosts), None) => Some(Strategy::Hosts(hosts)),
            (None, None, Some(subnets)) => Some(Strategy::Subnets(subnets)),
            _ => None,
        }
    }
}

/// Run the parsed command, printing results to stdout.
pub fn run(cli: Cli, config: &Config) -> Result<(), Box<dyn Error>> {
    let format = cli.format.unwrap_or(config.format);
    match cli.command {
        Command::Describe { cidr } => {
            log::info!("describe {cidr}");
            let subnet = describe_cidr(&cidr)?;
            write_subnets(std::slice::from_ref(&subnet), format)?;
        }
        Command::Hosts { cidr } => {
            log::info!("hosts {cidr}");
            let subnet = describe_cidr(&cidr)?;
            match format {
                OutputFormat::Json => {
                    let hosts: Vec<_> = subnet.hosts().collect();
                    println!("{}", serde_json::to_string_pretty(&hosts)?);
                }
                OutputFormat::Text | OutputFormat::Csv => {
                    for ip in subnet.hosts() {
                        println!("{ip}");
                    }
                }
            }
        }
        Command::Split { cidr, size, count } => {
            let strategy = size
                .strategy()
                .ok_or("Exactly one of --prefix, --hosts or --subnets is required")?;
            log::info!("split {cidr} by {strategy:?} count={count:?}");
            let subnets = split(&cidr, strategy, count)?;
            write_subnets(&subnets, format)?;
        }
    }
    Ok(())
}

fn split(
    cidr: &str,
    strategy: Strategy,
    count: Option<usize>,
) -> Result<Vec<crate::Subnet>, SubnetError> {
    match strategy {
        Strategy::Prefix(prefix) => subnets_by_prefix(cidr, prefix, count),
        Strategy::Hosts(hosts) => subnets_by_host_count(cidr, hosts, count),
        Strategy::Subnets(subnets) => subnets_by_subnet_count(cidr, subnets, count),
    }
}
