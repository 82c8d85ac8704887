//! Catalog command implementation.
//!
//! Exports the built-in catalog as a starting point for a custom catalog file
//! and reports where the catalog is loaded from.

use std::io;
use std::path::{Path, PathBuf};

use storefront_catalog::Catalog;
use storefront_query::CatalogStore;

use super::{CommandContext, CommandError, Result};

/// Options for the catalog export command.
#[derive(Debug, Default)]
pub struct ExportOptions {
    /// Destination file; the default data path when absent.
    pub path: Option<PathBuf>,
    /// Overwrite an existing file.
    pub force: bool,
}

/// Executes the catalog export command.
///
/// # Errors
///
/// Returns an error if the destination exists and `force` is not set, or if
/// the file cannot be written.
pub fn execute_export(ctx: &CommandContext, opts: &ExportOptions) -> Result<()> {
    let store = match &opts.path {
        Some(path) => CatalogStore::with_path(path.clone()),
        None => CatalogStore::new()?,
    };

    if store.exists() && !opts.force {
        return Err(CommandError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!(
                "catalog file '{}' already exists, use --force to overwrite it",
                store.path().display()
            ),
        )));
    }

    let catalog = Catalog::builtin();
    store.save(&catalog)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "path": store.path().display().to_string(),
            "products": catalog.products.len(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!(
            "Wrote {} products to {}",
            catalog.products.len(),
            store.path().display()
        );
    }

    Ok(())
}

/// Where the catalog for this invocation comes from.
#[derive(Debug, PartialEq, Eq)]
enum CatalogSource {
    /// An explicit file from the flag, env or config.
    Explicit(PathBuf),
    /// The file in the data directory.
    DataDir(PathBuf),
    /// The built-in catalog, with the data path that would override it.
    Builtin(Option<PathBuf>),
}

fn resolve_source(explicit: Option<&Path>, default_path: Option<PathBuf>) -> CatalogSource {
    if let Some(path) = explicit {
        return CatalogSource::Explicit(path.to_path_buf());
    }
    match default_path {
        Some(path) if path.exists() => CatalogSource::DataDir(path),
        other => CatalogSource::Builtin(other),
    }
}

/// Executes the catalog path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let default_path = CatalogStore::default_path().ok();
    let source = resolve_source(ctx.catalog_path.as_deref(), default_path);

    let (kind, path) = match &source {
        CatalogSource::Explicit(path) => ("explicit", Some(path)),
        CatalogSource::DataDir(path) => ("data_dir", Some(path)),
        CatalogSource::Builtin(path) => ("builtin", path.as_ref()),
    };

    if ctx.json_output {
        let output = serde_json::json!({
            "source": kind,
            "path": path.map(|p| p.display().to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        match source {
            CatalogSource::Builtin(Some(path)) => {
                println!("built-in (create {} to override)", path.display())
            }
            CatalogSource::Builtin(None) => println!("built-in"),
            CatalogSource::Explicit(path) | CatalogSource::DataDir(path) => {
                println!("{}", path.display())
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_export_writes_loadable_catalog() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out").join("catalog.json");
        let mut ctx = CommandContext::for_test();
        ctx.quiet = true;

        let opts = ExportOptions {
            path: Some(path.clone()),
            force: false,
        };
        execute_export(&ctx, &opts).unwrap();

        let loaded = CatalogStore::with_path(path).load().unwrap();
        assert_eq!(loaded, Catalog::builtin());
    }

    #[test]
    fn test_export_refuses_to_overwrite_without_force() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("catalog.json");
        std::fs::write(&path, "{}").unwrap();
        let mut ctx = CommandContext::for_test();
        ctx.quiet = true;

        let opts = ExportOptions {
            path: Some(path.clone()),
            force: false,
        };
        assert!(matches!(
            execute_export(&ctx, &opts),
            Err(CommandError::Io(ref e)) if e.kind() == std::io::ErrorKind::AlreadyExists
        ));

        let opts = ExportOptions {
            path: Some(path),
            force: true,
        };
        assert!(execute_export(&ctx, &opts).is_ok());
    }

    #[test]
    fn test_resolve_source() {
        let temp_dir = tempdir().unwrap();
        let existing = temp_dir.path().join("catalog.json");
        std::fs::write(&existing, "{}").unwrap();
        let missing = temp_dir.path().join("missing.json");

        assert_eq!(
            resolve_source(Some(missing.as_path()), Some(existing.clone())),
            CatalogSource::Explicit(missing.clone())
        );
        assert_eq!(
            resolve_source(None, Some(existing.clone())),
            CatalogSource::DataDir(existing)
        );
        assert_eq!(
            resolve_source(None, Some(missing.clone())),
            CatalogSource::Builtin(Some(missing))
        );
        assert_eq!(resolve_source(None, None), CatalogSource::Builtin(None));
    }
}
