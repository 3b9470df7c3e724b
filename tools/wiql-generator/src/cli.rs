//! Command-line arguments.

use clap::Parser;

use crate::{client::AzureOpenAiConfig, prompt};

/// Generates a WIQL query from a natural-language description.
#[derive(Parser, Debug, Clone)]
#[command(name = "wiql-generator")]
#[command(about = "Generates Azure Boards WIQL queries from natural language")]
pub struct Args {
    /// Description of the query to generate. Exactly one is expected.
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub texts: Vec<String>,

    /// Azure OpenAI resource endpoint.
    #[arg(long, env = "AZURE_OPENAI_API_ENDPOINT", hide_env_values = true)]
    pub endpoint: Option<String>,

    /// Azure OpenAI API key.
    #[arg(long, env = "AZURE_OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Deployment name of the chat model.
    #[arg(long, env = "WIQL_GENERATOR_DEPLOYMENT", default_value = prompt::DEFAULT_DEPLOYMENT)]
    pub deployment: String,

    /// Azure OpenAI REST api-version.
    #[arg(long, env = "WIQL_GENERATOR_API_VERSION", default_value = prompt::DEFAULT_API_VERSION)]
    pub api_version: String,

    /// Disable colored output (NO_COLOR is honored as well).
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn client_config(&self) -> AzureOpenAiConfig {
        AzureOpenAiConfig {
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone(),
            deployment: self.deployment.clone(),
            api_version: self.api_version.clone(),
        }
    }
}
