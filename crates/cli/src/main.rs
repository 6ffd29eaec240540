//! Blaze Pizza terminal storefront.
//!
//! # Usage
//!
//! ```bash
//! # Landing page and menu
//! blaze home
//! blaze menu
//!
//! # Product page, then add two large pizzas
//! blaze product 3
//! blaze add 3 --size large --quantity 2
//!
//! # Review and place the order
//! blaze cart
//! blaze checkout --name "Ada" --phone "555-0100" --address "1 Main St"
//! ```
//!
//! The cart lives in `$BLAZE_DATA_DIR/cart.json` and survives between runs.
//! See `blaze_pizza_storefront::config` for every environment variable.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::process::ExitCode;

use blaze_pizza_core::{PizzaId, Size};
use blaze_pizza_storefront::{AppState, StorefrontConfig};
use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod views;

use commands::checkout::CheckoutForm;
use error::{CliError, Result};
use views::{Footer, Navbar};

#[derive(Parser)]
#[command(name = "blaze")]
#[command(author, version, about = "Blaze Pizza - order from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the landing page with featured pizzas
    Home,
    /// Show the full menu
    Menu,
    /// Show one pizza with its price in every size
    Product {
        /// Pizza ID
        id: PizzaId,

        /// Size to highlight
        #[arg(short, long, default_value = "Medium")]
        size: Size,
    },
    /// Add a pizza to the cart
    Add {
        /// Pizza ID
        id: PizzaId,

        /// Pizza size (`small`, `medium`, `large`)
        #[arg(short, long, default_value = "Medium")]
        size: Size,

        /// Number of pizzas
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,
    },
    /// Remove a pizza from the cart
    Remove {
        /// Pizza ID
        id: PizzaId,

        /// Size of the line to remove
        #[arg(short, long)]
        size: Size,
    },
    /// Show the cart
    Cart,
    /// Empty the cart
    Clear,
    /// Place the cart as a delivery order
    Checkout {
        /// Full name
        #[arg(short, long)]
        name: String,

        /// Phone number
        #[arg(short, long)]
        phone: String,

        /// Delivery address
        #[arg(short, long)]
        address: String,

        /// Notes for the kitchen or driver
        #[arg(long, default_value = "")]
        notes: String,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Map tracing levels to Sentry: warnings and errors become events, the
/// rest become breadcrumbs.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing() {
    // Logs go to stderr so stdout carries only the rendered page
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "blaze_pizza_storefront=info,blaze=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let err = CliError::from(e);
            let _ = writeln!(std::io::stderr().lock(), "{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    let _sentry_guard = init_sentry(&config);
    init_tracing();

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.report();
            let _ = writeln!(std::io::stderr().lock(), "Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli, config: StorefrontConfig) -> Result<()> {
    let state = AppState::new(config)?;
    let mut cart = state.open_cart();

    let body = match cli.command {
        Commands::Home => commands::catalog::home(&state).await,
        Commands::Menu => commands::catalog::menu(&state).await,
        Commands::Product { id, size } => commands::catalog::product(&state, &id, size).await,
        Commands::Add { id, size, quantity } => {
            commands::cart::add(&state, &mut cart, &id, size, quantity).await?
        }
        Commands::Remove { id, size } => commands::cart::remove(&mut cart, &id, size),
        Commands::Cart => commands::cart::show(&cart),
        Commands::Clear => commands::cart::clear(&mut cart),
        Commands::Checkout {
            name,
            phone,
            address,
            notes,
        } => {
            let form = CheckoutForm {
                name,
                phone,
                address,
                notes,
            };
            commands::checkout::checkout(&state, &mut cart, &form).await?
        }
    };

    if cart.persistence_degraded() {
        tracing::warn!(
            path = %state.config().cart_path().display(),
            "Cart could not be persisted; changes last only for this run"
        );
    }

    let mut out = std::io::stdout().lock();
    write!(
        out,
        "{}{body}{}",
        Navbar {
            cart_count: cart.item_count()
        },
        Footer::now()
    )?;
    out.flush()?;
    Ok(())
}
