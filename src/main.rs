use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use savory_balance_rs::catalog::{load_catalog, FoodCatalog};
use savory_balance_rs::cli::{Cli, Command};
use savory_balance_rs::error::Result;
use savory_balance_rs::interface::{collect_profile, display_catalog, display_plan, write_shopping_csv};
use savory_balance_rs::planner::generate_plan;
use savory_balance_rs::server;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let catalog = load_catalog(&cli.catalog)?;
    info!("loaded {} foods from {}", catalog.len(), cli.catalog);

    match command {
        Command::Serve { port } => cmd_serve(catalog, port),
        Command::Plan { export } => cmd_plan(&catalog, export.as_deref()),
        Command::Catalog { find } => cmd_catalog(&catalog, find.as_deref()),
    }
}

/// Run the HTTP server until shutdown.
fn cmd_serve(catalog: FoodCatalog, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(catalog, port))
}

/// Generate a plan from an interactively collected profile.
fn cmd_plan(catalog: &FoodCatalog, export: Option<&str>) -> Result<()> {
    let profile = collect_profile()?;

    println!();
    println!("Planning for {:?} goal...", profile.goal);

    let plan = generate_plan(catalog, &profile)?;
    display_plan(&plan);

    if let Some(path) = export {
        write_shopping_csv(&plan.shopping_list, Path::new(path))?;
        println!("Shopping list written to {path}");
    }

    Ok(())
}

/// List the catalog, or fuzzy-find foods by name.
fn cmd_catalog(catalog: &FoodCatalog, find: Option<&str>) -> Result<()> {
    match find {
        Some(query) => {
            let matches: Vec<_> = catalog
                .find_fuzzy(query)
                .into_iter()
                .map(|(food, _)| food.clone())
                .collect();
            if matches.is_empty() {
                println!("No foods matching '{query}'");
            } else {
                display_catalog(&matches, &format!("Matches for '{query}'"));
            }
        }
        None => display_catalog(catalog.items(), "Food Catalog"),
    }

    Ok(())
}
