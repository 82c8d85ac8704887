//! Groups command implementation.
//!
//! Renders the filter sidebar: every group with its options, checked where
//! the query selects them.

use storefront_query::{option_views, FilterContext, FilterState};

use super::{CommandContext, Result};
use crate::output::{format_groups_json, format_groups_table};

/// Executes the groups command.
pub async fn execute(ctx: &CommandContext, query: &str) -> Result<()> {
    let catalog = ctx.load_catalog().await?;
    let context = FilterContext::from_catalog(&catalog);
    let groups = option_views(&FilterState::from_query(query), &context);

    if ctx.json_output {
        println!("{}", format_groups_json(&groups)?);
    } else if !ctx.quiet {
        print!("{}", format_groups_table(&groups, ctx.use_colors));
    }

    Ok(())
}
