use std::fs;
use std::io::{self, Read};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use triage_core::{Chain, CustomerId, Handler, Outcome, Request, RequestCategory};

/// Route customer-service requests through the support chain.
#[derive(Debug, Parser)]
#[command(name = "triage", version)]
struct Cli {
    /// Log level when RUST_LOG is not set.
    #[arg(short, long, global = true, default_value = "warn",
          value_parser = ["trace", "debug", "info", "warn", "error"])]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Route a single request.
    Route {
        /// complaint | question | update_information | malfunctioning | refund
        #[arg(short, long)]
        category: RequestCategory,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Originating customer, e.g. customer-01ARZ3NDEKTSV4RRFFQ69G5FAV
        #[arg(long)]
        customer: Option<CustomerId>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Route every request of a JSON array, read from FILE or `-` for stdin.
    Batch {
        file: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the chain, head first.
    Links,
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Link that receives the request (defaults to the head of the chain).
    #[arg(short, long)]
    entry: Option<String>,

    /// Print one JSON outcome per line instead of the bare response.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let chain = Chain::canonical();
    debug!(links = ?chain.names(), "chain assembled");

    match cli.command {
        Command::Route {
            category,
            description,
            customer,
            output,
        } => {
            let entry = entry_link(&chain, output.entry.as_deref())?;
            let request = Request::new(category, description, customer);
            print_outcome(entry.dispatch(&request), output.json)?;
        }
        Command::Batch { file, output } => {
            let entry = entry_link(&chain, output.entry.as_deref())?;
            let requests = read_requests(&file)?;
            info!(count = requests.len(), source = %file, "routing batch");
            for request in &requests {
                print_outcome(entry.dispatch(request), output.json)?;
            }
        }
        Command::Links => {
            for (position, name) in chain.names().into_iter().enumerate() {
                println!("{position}: {name}");
            }
        }
    }

    Ok(())
}

fn init_logging(log_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

fn entry_link(chain: &Chain, name: Option<&str>) -> Result<Arc<dyn Handler>> {
    match name {
        Some(name) => Ok(Arc::clone(chain.entry(name)?)),
        None => Ok(Arc::clone(chain.head())),
    }
}

fn read_requests(source: &str) -> Result<Vec<Request>> {
    let raw = if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read requests from stdin")?;
        buf
    } else {
        fs::read_to_string(source).with_context(|| format!("failed to read {source}"))?
    };

    serde_json::from_str(&raw).with_context(|| format!("invalid request list in {source}"))
}

/// One output line: the JSON outcome, or the bare response text.
fn render_outcome(outcome: Outcome, json: bool) -> Result<String> {
    if json {
        serde_json::to_string(&outcome).context("failed to encode outcome")
    } else {
        Ok(outcome.into_response())
    }
}

fn print_outcome(outcome: Outcome, json: bool) -> Result<()> {
    println!("{}", render_outcome(outcome, json)?);
    Ok(())
}
