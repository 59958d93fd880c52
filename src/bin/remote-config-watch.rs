use clap::Parser;
use remote_config::observability::{logging::init_logging, metrics::init_metrics};
use remote_config::{RefreshEvent, RemoteConfig, Snapshot};
use serde_json::Value;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "remote-config-watch")]
#[command(about = "Fetch a remote JSON config and print it whenever it changes", long_about = None)]
struct Cli {
    /// URL of the JSON document.
    #[arg(short, long)]
    url: String,

    /// Seconds between refreshes.
    #[arg(short, long, default_value_t = 60)]
    interval_secs: u64,

    /// Per-request timeout in seconds (none by default).
    #[arg(short, long)]
    timeout_secs: Option<u64>,

    /// Expose Prometheus metrics on this address.
    #[arg(long)]
    metrics_address: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging("remote_config=info,remote_config_watch=info")?;

    if let Some(addr) = cli.metrics_address {
        init_metrics(addr);
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut builder = RemoteConfig::builder(cli.url)
        .refresh_interval(Duration::from_secs(cli.interval_secs))
        .sink(move |event: &RefreshEvent| {
            let _ = tx.send(event.clone());
        });
    if let Some(secs) = cli.timeout_secs {
        builder = builder.request_timeout(Duration::from_secs(secs));
    }

    let config = builder.build().await?;
    print_snapshot(&config)?;

    loop {
        tokio::select! {
            Some(event) = rx.recv() => {
                if event.is_success() {
                    if let Err(e) = print_snapshot(&config) {
                        tracing::warn!(error = %e, "Fetched document is not printable JSON");
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => break,
            else => break,
        }
    }

    config.close().await;
    Ok(())
}

fn print_snapshot(config: &RemoteConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render_snapshot(&config.snapshot())?);
    Ok(())
}

/// Header and body both come from the same snapshot.
fn render_snapshot(snapshot: &Snapshot) -> Result<String, Box<dyn std::error::Error>> {
    let value: Value = snapshot.decode()?;
    Ok(format!(
        "# generation {}\n{}",
        snapshot.generation(),
        serde_json::to_string_pretty(&value)?
    ))
}
