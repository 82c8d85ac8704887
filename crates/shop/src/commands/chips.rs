//! Chips command implementation.
//!
//! Lists the active filter chips of a query, each removable with `shop toggle`.

use storefront_query::{active_chips, FilterContext, FilterState};

use super::{CommandContext, Result};
use crate::output::{format_chips_json, format_chips_table};

/// Executes the chips command.
pub async fn execute(ctx: &CommandContext, query: &str) -> Result<()> {
    let catalog = ctx.load_catalog().await?;
    let context = FilterContext::from_catalog(&catalog);
    let state = FilterState::from_query(query);
    let chips = active_chips(&state, &context);

    if ctx.json_output {
        println!("{}", format_chips_json(&chips)?);
    } else if !ctx.quiet {
        print!("{}", format_chips_table(&chips, ctx.use_colors));
    }

    Ok(())
}
