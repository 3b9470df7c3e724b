//! Static instruction and sampling parameters sent with every request.

/// System instruction describing the WIQL grammar and where to read more.
pub const SYSTEM_INSTRUCTION: &str = include_str!("../prompts/system.md");

/// Deployment used when none is configured.
pub const DEFAULT_DEPLOYMENT: &str = "gpt-3";

/// Azure OpenAI REST api-version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2023-05-15";

pub const TEMPERATURE: f64 = 0.5;
pub const MAX_TOKENS: u32 = 800;
pub const TOP_P: f64 = 0.95;
pub const FREQUENCY_PENALTY: f64 = 0.0;
pub const PRESENCE_PENALTY: f64 = 0.0;
