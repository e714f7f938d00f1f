//! Hearthwood CLI - catalog browsing and session demo tools.
//!
//! # Usage
//!
//! ```bash
//! # List the category taxonomy
//! hw-cli categories
//!
//! # List products in a category, cheapest first
//! hw-cli catalog list --category living-room --sort price-low
//!
//! # Search the whole catalog
//! hw-cli catalog search "oak" --sort rating
//!
//! # Show a single product
//! hw-cli catalog show velvet-sofa
//!
//! # Run a scripted cart/wishlist/auth session
//! hw-cli demo
//! ```
//!
//! The catalog directory defaults to `data/catalog` and can be overridden
//! with `HEARTHWOOD_CATALOG_DIR` (a `.env` file is honored).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use hearthwood_storefront::config::StorefrontConfig;
use hearthwood_storefront::{Catalog, StorefrontError};

mod commands;

#[derive(Parser)]
#[command(name = "hw-cli")]
#[command(author, version, about = "Hearthwood CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and query the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Print the category taxonomy
    Categories,
    /// Run a scripted session exercising cart, wishlist, and auth
    Demo,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products, optionally filtered and sorted
    List {
        /// Restrict to one category
        #[arg(short, long)]
        category: Option<String>,

        /// Restrict to one subcategory
        #[arg(short, long)]
        subcategory: Option<String>,

        /// Inclusive lower price bound
        #[arg(long)]
        min_price: Option<u64>,

        /// Inclusive upper price bound
        #[arg(long)]
        max_price: Option<u64>,

        /// Sort order (`newest`, `price-low`, `price-high`, `rating`, `discount`, `name`)
        #[arg(long, default_value = "newest")]
        sort: String,
    },
    /// Search products by free text
    Search {
        /// Search term, matched case-insensitively
        term: String,

        /// Inclusive upper price bound
        #[arg(long)]
        max_price: Option<u64>,

        /// Sort order (`relevance`, `name`, `price-low`, `price-high`, `rating`, `discount`)
        #[arg(long, default_value = "relevance")]
        sort: String,
    },
    /// Show one product by identifier
    Show {
        /// Product identifier
        id: String,
    },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), StorefrontError> {
    let cli = Cli::parse();
    let config = StorefrontConfig::from_env()?;
    let catalog = Catalog::load(&config.catalog_dir)?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                category,
                subcategory,
                min_price,
                max_price,
                sort,
            } => commands::catalog::list(
                &catalog,
                category.as_deref(),
                subcategory.as_deref(),
                min_price,
                max_price,
                &sort,
            ),
            CatalogAction::Search {
                term,
                max_price,
                sort,
            } => commands::catalog::search(&catalog, &term, max_price, &sort),
            CatalogAction::Show { id } => commands::catalog::show(&catalog, &id),
        },
        Commands::Categories => {
            commands::catalog::categories(&catalog);
            Ok(())
        }
        Commands::Demo => commands::demo::run(&catalog),
    }
}
