mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

use mathbox::api;
use mathbox::config::Config;
use mathbox::ledger::OpLogStore;
use mathbox::service::{MathService, OperationRequest};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => api::run(args.address).await?,
        Commands::Pow(args) => run_operation(OperationRequest::Power {
            base: args.base,
            exponent: args.exponent,
        })?,
        Commands::Fib(args) => run_operation(OperationRequest::Fibonacci { n: args.n })?,
        Commands::Fact(args) => run_operation(OperationRequest::Factorial { n: args.n })?,
    }

    Ok(())
}

/// Compute one operation from the command line, append it to the local
/// operation log, and print the result.
///
/// A logging failure is reported as a warning; the computed value is still
/// printed.
fn run_operation(request: OperationRequest) -> Result<(), AnyError> {
    let config = Config::load()?;

    let store = OpLogStore::open(&config.server.ledger_path)?;
    store.initialize()?;

    let service = MathService::new(store);
    let outcome = service.execute(request)?;

    println!("Result: {}", outcome.value);
    Ok(())
}
