use clap::Parser;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{CatalogCommands, Cli, Commands, ConfigCommands};
use commands::config::{load_config, Config};
use commands::{CommandContext, CommandError};
use storefront_catalog::auth::AuthFormValues;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "SHOP_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                let rendered = serde_json::to_string_pretty(&error_json)
                    .unwrap_or_else(|_| error_json.to_string());
                eprintln!("{rendered}");
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `SHOP_LOG` takes precedence; otherwise `--verbose` selects debug and
/// `--quiet` selects errors only.
fn init_tracing(cli: &Cli) {
    let default_directive = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let config = match load_config() {
        Ok(config) => config,
        // A broken config file must not lock the user out of fixing it.
        Err(e) if matches!(cli.command, Some(Commands::Config { .. })) => {
            tracing::warn!(error = %e, "ignoring unreadable config");
            Config::default()
        }
        Err(e) => return Err(e),
    };
    let ctx = CommandContext::from_cli(cli, &config);

    let Some(command) = &cli.command else {
        if !ctx.quiet {
            println!("shop - storefront catalog browser");
            println!("Use --help for usage information");
        }
        return Ok(());
    };

    match command {
        Commands::Products { query, limit } => {
            let opts = commands::products::ProductsOptions {
                query: query.clone(),
                limit: *limit,
            };
            commands::products::execute(&ctx, &opts).await
        }
        Commands::Toggle { query, key, value } => {
            let opts = commands::navigate::ToggleOptions {
                query: query.clone(),
                key: (*key).into(),
                value: value.clone(),
            };
            commands::navigate::execute_toggle(&ctx, &opts)
        }
        Commands::Sort { query, sort } => {
            commands::navigate::execute_sort(&ctx, query, (*sort).into())
        }
        Commands::Clear { query } => commands::navigate::execute_clear(&ctx, query),
        Commands::Url { query, pathname } => {
            commands::navigate::execute_url(&ctx, query, pathname.as_deref())
        }
        Commands::Chips { query } => commands::chips::execute(&ctx, query).await,
        Commands::Groups { query } => commands::groups::execute(&ctx, query).await,
        Commands::Auth {
            mode,
            email,
            password,
            name,
            confirm_password,
        } => {
            let opts = commands::auth::AuthOptions {
                variant: (*mode).into(),
                values: AuthFormValues {
                    name: name.clone(),
                    email: email.clone(),
                    password: password.clone(),
                    confirm_password: confirm_password.clone(),
                },
            };
            commands::auth::execute(&ctx, &opts)
        }
        Commands::Catalog { command } => match command {
            CatalogCommands::Export { path, force } => {
                let opts = commands::catalog::ExportOptions {
                    path: path.clone(),
                    force: *force,
                };
                commands::catalog::execute_export(&ctx, &opts)
            }
            CatalogCommands::Path => commands::catalog::execute_path(&ctx),
        },
        Commands::Config { command } => match command {
            Some(ConfigCommands::Show) | None => commands::config::execute_show(&ctx),
            Some(ConfigCommands::Set { key, value }) => {
                let opts = commands::config::ConfigSetOptions {
                    key: key.clone(),
                    value: value.clone(),
                };
                commands::config::execute_set(&ctx, &opts)
            }
            Some(ConfigCommands::Path) => commands::config::execute_path(&ctx),
        },
        Commands::Completions { shell } => {
            commands::completions::execute(shell).map_err(CommandError::Io)
        }
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Catalog(_) | CommandError::CatalogStore(_) => "CATALOG_ERROR",
        CommandError::Validation(_) => "VALIDATION_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Validation(_) => ExitCode::from(1),
        CommandError::Json(_) => ExitCode::from(1),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Catalog(_) | CommandError::CatalogStore(_) => ExitCode::from(4),
        CommandError::Config(_) => ExitCode::from(5),
    }
}
