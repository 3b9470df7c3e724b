//! WIQL Generator - Natural Language to Work Item Query
//!
//! Translates a single description into an Azure Boards WIQL query using an
//! Azure OpenAI chat deployment.
//!
//! # Usage
//!
//! ```bash
//! export AZURE_OPENAI_API_ENDPOINT=https://my-resource.openai.azure.com
//! export AZURE_OPENAI_API_KEY=...
//!
//! # Generate a query
//! wiql-generator "active bugs assigned to me, newest first"
//!
//! # Use another deployment
//! wiql-generator --deployment gpt-35-turbo "user stories without an estimate"
//! ```
//!
//! The query is printed in blue; usage and service errors are printed in red.
//! The exit status is 0 either way.

use clap::Parser;
use wiql_generator::{cli::Args, generate::run, logging, output};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    logging::init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let outcome = run(&args).await;
    if let Err(ref e) = outcome {
        tracing::debug!(error = ?e, "generation failed");
    }

    output::print(&outcome);
}
