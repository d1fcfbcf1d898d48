//! Label command implementations.

use ellie_api_rs::client::EllieClient;
use ellie_api_rs::labels::CreateLabelRequest;

use super::{require_non_blank, CommandContext, Result};
use crate::output::{format_json, format_label, format_labels};

/// Options for the labels create command.
#[derive(Debug, Clone)]
pub struct LabelsCreateOptions {
    /// Label name.
    pub name: String,
    /// Hex color, e.g. `#FF5733`.
    pub color: String,
}

impl LabelsCreateOptions {
    /// Rejects a blank name or color before any request is made.
    pub fn validate(&self) -> Result<()> {
        require_non_blank(&self.name, "--name")?;
        require_non_blank(&self.color, "--color")
    }
}

/// Executes the labels list command.
pub async fn execute_list(ctx: &CommandContext, client: &EllieClient) -> Result<()> {
    let labels = client.get_labels().await?;

    if ctx.json_output {
        ctx.emit(&format_json(&labels)?);
    } else {
        ctx.emit(&format_labels(&labels, ctx.use_colors));
    }
    Ok(())
}

/// Executes the labels create command.
pub async fn execute_create(
    ctx: &CommandContext,
    client: &EllieClient,
    opts: &LabelsCreateOptions,
) -> Result<()> {
    opts.validate()?;

    let request = CreateLabelRequest::new(opts.name.as_str(), opts.color.as_str());
    let label = client.create_label(&request).await?;

    if ctx.json_output {
        ctx.emit(&format_json(&label)?);
    } else {
        ctx.emit(&format_label(&label, ctx.use_colors));
    }
    Ok(())
}
