use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3001)]
    port: u16,

    /// Directory holding the JSON data files
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    if let Err(e) = live_quiz::server::run(args.port, &args.data_dir).await {
        eprintln!("Error running quiz server: {e}");
        std::process::exit(1);
    }
}
