#[macro_use]
extern crate rocket;

use clap::Parser;
use rocket::figment::Figment;
use server::SharedStore;
use server::validate::YearPolicy;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// In-memory movie catalog HTTP API
#[derive(Parser, Debug)]
#[command(name = "moviehub")]
#[command(version, about, long_about = None)]
struct Args {
    /// Address to bind the HTTP listener to
    #[arg(long, default_value = "127.0.0.1")]
    address: String,

    /// Port to bind the HTTP listener to
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Earliest release year accepted when adding a movie
    #[arg(long, default_value = "1888")]
    min_year: i32,

    /// Years past the current year still accepted, for announced releases
    #[arg(long, default_value = "1")]
    year_headroom: i32,
}

/// Initialize tracing subscriber for structured logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[launch]
fn rocket() -> _ {
    init_tracing();

    let args = Args::parse();

    let policy = YearPolicy {
        min_year: args.min_year,
        headroom: args.year_headroom,
    };

    info!(
        address = %args.address,
        port = args.port,
        min_year = policy.min_year,
        "Starting movie catalog server"
    );

    // Configure Rocket with colors disabled
    let figment = Figment::from(rocket::Config::default())
        .merge(("address", args.address))
        .merge(("port", args.port))
        .merge(("cli_colors", false));

    server::mount_api(rocket::custom(figment), SharedStore::default(), policy)
}
