//! WIQL Generator - Natural Language to Work Item Query
//!
//! Sends a description together with the WIQL grammar to an Azure OpenAI
//! chat deployment and returns the first fenced code block of the reply.
//!
//! ```no_run
//! use wiql_generator::{AzureOpenAiClient, AzureOpenAiConfig, generate};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AzureOpenAiClient::new(&AzureOpenAiConfig {
//!     endpoint: Some("https://contoso.openai.azure.com".to_string()),
//!     api_key: Some("key".to_string()),
//!     deployment: "gpt-3".to_string(),
//!     api_version: "2023-05-15".to_string(),
//! })?;
//!
//! let query = generate(&client, &["bugs created this week".to_string()]).await?;
//! println!("{query}");
//! # Ok(())
//! # }
//! ```

pub mod chat;
pub mod cli;
pub mod client;
pub mod error;
pub mod extract;
pub mod generate;
pub mod logging;
pub mod output;
pub mod prompt;

pub use chat::{ChatMessage, ChatRequest, ChatResponse, Role};
pub use client::{AzureOpenAiClient, AzureOpenAiConfig, ChatCompletion};
pub use error::{ClientError, GenerateError, USAGE_MESSAGE};
pub use extract::first_fenced_block;
pub use generate::generate;
