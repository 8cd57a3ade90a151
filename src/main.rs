// Sat Aug 29 2026 - Alex

use btc_collider::config::Config;
use btc_collider::supervisor::Supervisor;
use btc_collider::ui::Banner;
use btc_collider::utils::LoggingUtils;
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version)]
#[command(about = "Concurrent Bitcoin keypair balance probe", long_about = None)]
struct Args {
    /// Number of worker threads to start (0 = one per CPU)
    #[arg(short, long, default_value_t = 4)]
    threads: usize,

    /// Path to the endpoint configuration
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let args = Args::parse();

    if !args.no_banner {
        Banner::print_default();
    }

    LoggingUtils::init_logger(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!(
                "{} cannot start from {}: {}",
                "[!]".red().bold(),
                args.config.display(),
                err
            );
            std::process::exit(1);
        }
    };

    let supervisor = Supervisor::new(config).with_threads(args.threads);

    match supervisor.run() {
        Ok(summary) => {
            println!(
                "{} checked {} addresses, found {}",
                "[DONE]".green().bold(),
                summary.checked,
                summary.found
            );
        }
        Err(err) => {
            eprintln!("{} {}", "[!]".red().bold(), err);
            std::process::exit(1);
        }
    }
}
