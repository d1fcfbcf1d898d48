//! List command implementations.

use ellie_api_rs::client::EllieClient;

use super::{CommandContext, Result};
use crate::output::{format_json, format_lists};

/// Executes the lists list command.
pub async fn execute_list(ctx: &CommandContext, client: &EllieClient) -> Result<()> {
    let lists = client.get_lists().await?;

    if ctx.json_output {
        ctx.emit(&format_json(&lists)?);
    } else {
        ctx.emit(&format_lists(&lists, ctx.use_colors));
    }
    Ok(())
}
