use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "morent")]
#[command(about = "Browse, filter and wishlist rental cars from the command line", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog document to read (overrides the configured path)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Verbose output (shows records excluded at the decode boundary)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List cars matching the active filters
    #[command(alias = "ls")]
    List {
        /// Filter by car type (sport, suv, sedan, hybrid, hatchback, luxury)
        #[arg(long = "type", value_name = "TYPE")]
        car_type: Option<String>,

        /// Filter by seating capacity bucket (2, 4, 5, 6 or 7 = "7 or more")
        #[arg(long)]
        capacity: Option<String>,

        /// Only show cars at or below this price per day (0-500)
        #[arg(long = "max-price", value_name = "PRICE")]
        max_price: Option<f64>,

        /// Filter by exact fuel capacity in liters
        #[arg(long, value_name = "LITERS")]
        fuel: Option<f64>,

        /// Search by name or type
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by editorial tag (popular, recommended, new)
        #[arg(long)]
        tag: Option<String>,
    },

    /// Show one car's details by slug or id
    #[command(alias = "s")]
    Show {
        /// Slug or id of the car
        key: String,
    },

    /// List the wishlist
    #[command(alias = "w")]
    Wishlist,

    /// Toggle a car in or out of the wishlist
    #[command(alias = "fav")]
    Toggle {
        /// Slug or id of the car
        key: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., catalog)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
