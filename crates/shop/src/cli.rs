//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the shop CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use storefront_catalog::auth::AuthVariant;
use storefront_catalog::models::FilterKey;
use storefront_query::SortKey;

/// shop - Browse the storefront catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Catalog JSON file (default: config, then the data directory, then built-in)
    #[arg(long, global = true, env = "SHOP_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products matching a query string
    #[command(alias = "ls")]
    Products {
        /// Query string (e.g., "gender=men,women&sort=price_desc")
        #[arg(default_value = "")]
        query: String,

        /// Show at most this many products
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Toggle one filter value and print the next query string
    #[command(alias = "t")]
    Toggle {
        /// Current query string
        query: String,

        /// Filter key
        #[arg(value_enum)]
        key: FilterField,

        /// Option value (e.g., "red", "9", "150+")
        value: String,
    },

    /// Apply a sort and print the next query string
    Sort {
        /// Current query string
        query: String,

        /// Sort order
        #[arg(value_enum)]
        sort: SortField,
    },

    /// Remove every filter and print the next query string
    Clear {
        /// Current query string
        query: String,
    },

    /// List the active filter chips of a query
    Chips {
        /// Query string
        #[arg(default_value = "")]
        query: String,
    },

    /// List filter groups with the options selected by a query
    Groups {
        /// Query string
        #[arg(default_value = "")]
        query: String,
    },

    /// Build the listing URL for a query string
    Url {
        /// Query string
        query: String,

        /// Base path (default: from config, then "/products")
        #[arg(long)]
        pathname: Option<String>,
    },

    /// Validate sign-in or sign-up form values
    Auth {
        /// Form variant
        #[arg(value_enum)]
        mode: AuthMode,

        /// Email address
        #[arg(long, default_value = "")]
        email: String,

        /// Password
        #[arg(long, default_value = "")]
        password: String,

        /// Full name (sign-up only)
        #[arg(long, default_value = "")]
        name: String,

        /// Password confirmation (sign-up only)
        #[arg(long, default_value = "")]
        confirm_password: String,
    },

    /// Manage the catalog file
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Filter keys accepted by `toggle`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Gender,
    Size,
    Color,
    Price,
    Height,
}

impl From<FilterField> for FilterKey {
    fn from(field: FilterField) -> Self {
        match field {
            FilterField::Gender => FilterKey::Gender,
            FilterField::Size => FilterKey::Size,
            FilterField::Color => FilterKey::Color,
            FilterField::Price => FilterKey::Price,
            FilterField::Height => FilterKey::Height,
        }
    }
}

/// Sort orders accepted by `sort`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Featured,
    Newest,
    #[value(alias = "price_desc")]
    PriceDesc,
    #[value(alias = "price_asc")]
    PriceAsc,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Featured => SortKey::Featured,
            SortField::Newest => SortKey::Newest,
            SortField::PriceDesc => SortKey::PriceDesc,
            SortField::PriceAsc => SortKey::PriceAsc,
        }
    }
}

/// Auth form variants
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl From<AuthMode> for AuthVariant {
    fn from(mode: AuthMode) -> Self {
        match mode {
            AuthMode::SignIn => AuthVariant::SignIn,
            AuthMode::SignUp => AuthVariant::SignUp,
        }
    }
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Catalog subcommands
#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// Write the built-in catalog as JSON (default: the data directory)
    Export {
        /// Destination file
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show where the catalog is loaded from
    Path,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Show config file path
    Path,
}
