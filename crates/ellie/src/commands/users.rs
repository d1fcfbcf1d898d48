//! User command implementations.

use ellie_api_rs::client::EllieClient;

use super::{CommandContext, Result};
use crate::output::{format_json, format_usage, format_user};

/// Executes the users me command.
pub async fn execute_me(ctx: &CommandContext, client: &EllieClient) -> Result<()> {
    let user = client.get_current_user().await?;

    if ctx.json_output {
        ctx.emit(&format_json(&user)?);
    } else {
        ctx.emit(&format_user(&user));
    }
    Ok(())
}

/// Executes the users usage command.
pub async fn execute_usage(ctx: &CommandContext, client: &EllieClient) -> Result<()> {
    let usage = client.get_api_usage().await?;

    if ctx.json_output {
        ctx.emit(&format_json(&usage)?);
    } else {
        ctx.emit(&format_usage(&usage));
    }
    Ok(())
}
