#![deny(missing_docs)]

//! # Inspection Commands
//!
//! `tags`, `webhooks` and `urls`: dump the core results for one document as JSON.

use std::path::PathBuf;

use apinav_core::{
    get_operation_urls, get_operations_by_tag, get_webhooks_operations, AppError, AppResult,
    Document, PathItemOperation,
};

use crate::output::{read_document, write_json};

/// Arguments shared by the inspection commands.
#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// Path to the OpenAPI/Swagger document (YAML or JSON).
    pub schema: PathBuf,

    /// Write the JSON here instead of stdout.
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

/// Arguments for the URL resolution command.
#[derive(clap::Args, Debug, Clone)]
pub struct UrlsArgs {
    /// Schema and output location.
    #[clap(flatten)]
    pub inspect: InspectArgs,

    /// Slug of the operation (e.g. `operations/listpets` or `webhooks/newpet`).
    #[clap(long)]
    pub slug: String,
}

/// Prints path operations grouped by tag.
pub fn execute_tags(args: &InspectArgs) -> AppResult<()> {
    let document = read_document(&args.schema)?;
    let grouped = get_operations_by_tag(&document);
    tracing::debug!(tags = grouped.len(), "grouped operations by tag");
    write_json(&grouped, args.output.as_ref())
}

/// Prints webhook operations in document order.
pub fn execute_webhooks(args: &InspectArgs) -> AppResult<()> {
    let document = read_document(&args.schema)?;
    let webhooks = get_webhooks_operations(&document);
    write_json(&webhooks, args.output.as_ref())
}

/// Prints the resolved URLs of the operation with the given slug.
pub fn execute_urls(args: &UrlsArgs) -> AppResult<()> {
    let document = read_document(&args.inspect.schema)?;
    let urls = resolve_urls(&document, &args.slug)?;
    write_json(&urls, args.inspect.output.as_ref())
}

fn resolve_urls(document: &Document, slug: &str) -> AppResult<Vec<apinav_core::OperationUrl>> {
    let grouped = get_operations_by_tag(document);
    let webhooks = get_webhooks_operations(document);

    let operation: Option<&PathItemOperation<'_>> = grouped
        .values()
        .flat_map(|group| group.entries.iter())
        .chain(webhooks.iter())
        .find(|operation| operation.slug == slug);

    operation
        .map(|operation| get_operation_urls(document, operation))
        .ok_or_else(|| AppError::General(format!("No operation with slug '{}'", slug)))
}
