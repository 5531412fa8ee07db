use clap::{Parser, Subcommand};

/// SavoryBalance, a nutrition planner that pairs calorie/macro targets
/// with waste-minimizing shopping lists.
#[derive(Parser, Debug)]
#[command(name = "savory_balance")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog JSON file.
    #[arg(short, long, default_value = "data/food_catalog.json")]
    pub catalog: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP planning server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value_t = 5000)]
        port: u16,
    },

    /// Generate a plan interactively and render it in the terminal.
    Plan {
        /// Also write the shopping list to this CSV file.
        #[arg(long)]
        export: Option<String>,
    },

    /// Inspect the food catalog.
    Catalog {
        /// Fuzzy-find foods by name instead of listing everything.
        #[arg(long)]
        find: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Serve { port: 5000 }
    }
}
