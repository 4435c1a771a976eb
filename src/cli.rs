use clap::{Parser, Subcommand};
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(name = "mathbox")]
#[command(about = "Math CLI tool and HTTP service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// Calculate BASE to the power of EXPONENT
    Pow(PowArgs),
    /// Calculate the N-th Fibonacci number
    Fib(SingleIntArgs),
    /// Calculate the factorial of N
    Fact(SingleIntArgs),
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Address to bind the HTTP server to (overrides the configured bind_addr)
    #[arg(long)]
    pub address: Option<SocketAddr>,
}

#[derive(clap::Args, Debug)]
pub struct PowArgs {
    #[arg(allow_negative_numbers = true)]
    pub base: i64,
    /// Negative exponents are rejected as a domain error; only integer
    /// results are supported.
    #[arg(allow_negative_numbers = true)]
    pub exponent: i64,
}

#[derive(clap::Args, Debug)]
pub struct SingleIntArgs {
    #[arg(allow_negative_numbers = true)]
    pub n: i64,
}
