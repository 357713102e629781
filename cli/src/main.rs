mod probe;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cache-check", about = "One-shot liveness check against the cache service")]
struct Cli {
    #[arg(long, env = "CACHE_HOST", default_value = "127.0.0.1")]
    host: String,

    #[arg(long, env = "CACHE_PORT", default_value_t = 6379)]
    port: u16,

    #[arg(long, default_value_t = 2000, help = "Total time allowed for connect and reply, in milliseconds")]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let addr = format!("{}:{}", cli.host, cli.port);

    match probe::ping(&addr, Duration::from_millis(cli.timeout_ms)).await {
        Ok(reply) => {
            println!("Connected to cache at {addr} ({reply})");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Cache connection failed: {e}");
            ExitCode::FAILURE
        }
    }
}
