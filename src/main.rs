//! Hash wallet CLI
//!
//! Usage:
//!   hash_wallet                  # Derive a key set and show its QR code
//!   hash_wallet -p               # ...then fetch the bitcoin/usd price
//!   hash_wallet -i               # Interactive: Enter fetches the price
//!   hash_wallet --hash keccak256 --qr-svg address.svg

use std::process;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use hash_wallet::{Config, OsEntropy, PriceClient, Session};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = Config::parse();

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    let (diag_tx, diag_rx) = crossbeam_channel::unbounded();
    let session = Session::new(
        config.session_config(),
        PriceClient::new(config.price_config()),
    )
    .with_diagnostics(diag_tx);

    println!("Hash Wallet (demo keys only, not a real wallet)");
    println!("===============================================");
    println!("Hash:   {}", config.hash);
    println!("Price:  {}/{}", config.asset, config.currency);
    println!();

    let loaded = load_page(&session, &config);

    if config.fetch_price {
        session.fetch_price().await;
    }

    if config.interactive {
        run_prompt(&session, &config).await;
    } else {
        print_page(&session, &config);
    }

    let failures = diag_rx.try_iter().count();
    if failures > 0 {
        eprintln!("{} price request(s) failed", failures);
    }

    if !loaded {
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the page-load entry point. Returns false if nothing was published.
fn load_page(session: &Session, config: &Config) -> bool {
    if let Err(e) = session.load(&mut OsEntropy) {
        tracing::error!("Key derivation failed: {e}");
        return false;
    }

    if let Some(path) = &config.qr_svg {
        let page = session.page();
        if let Some(qr) = &page.address_qr_code {
            if let Err(e) = std::fs::write(path, &qr.svg) {
                tracing::error!("Failed to write {}: {e}", path.display());
                return false;
            }
            tracing::info!("QR code written to {}", path.display());
        }
    }

    true
}

fn print_page(session: &Session, config: &Config) {
    let mut page = session.page();
    if config.no_qr {
        page.address_qr_code = None;
    }
    print!("{}", page);
    println!();
}

async fn run_prompt(session: &Session, config: &Config) {
    print_page(session, config);
    println!("[Enter/p] fetch price  [r] new keys  [s] show  [q] quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Failed to read input: {e}");
                break;
            }
        };

        match line.trim() {
            "" | "p" => {
                // Each press is an independent request; older replies never
                // overwrite newer ones.
                let fetch = session.fetch_price();
                tokio::spawn(async move {
                    let update = fetch.await;
                    if update.applied {
                        println!("Price: {}", update.display_text());
                    }
                });
            }
            "r" => {
                if load_page(session, config) {
                    print_page(session, config);
                }
            }
            "s" => print_page(session, config),
            "q" => break,
            other => println!("Unknown command: {}", other),
        }
    }
}
