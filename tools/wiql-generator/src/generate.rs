//! One generation run: argument check, request, remote call, extraction.

use tracing::debug;

use crate::{
    chat::ChatRequest,
    cli::Args,
    client::{AzureOpenAiClient, ChatCompletion},
    error::GenerateError,
    extract::first_fenced_block,
};

/// Runs the tool for parsed command-line arguments.
///
/// The argument count is checked before the Azure client is configured, so
/// a usage error is reported even when no endpoint or key is set.
pub async fn run(args: &Args) -> Result<String, GenerateError> {
    if args.texts.len() != 1 {
        return Err(GenerateError::Usage);
    }

    let client = AzureOpenAiClient::new(&args.client_config())?;
    generate(&client, &args.texts).await
}

/// Translates the single natural-language argument in `texts` into a query.
///
/// Anything other than exactly one argument fails with
/// [`GenerateError::Usage`] before the client is touched.
pub async fn generate<C>(client: &C, texts: &[String]) -> Result<String, GenerateError>
where
    C: ChatCompletion + ?Sized,
{
    let [text] = texts else {
        return Err(GenerateError::Usage);
    };

    let request = ChatRequest::for_query(text);
    let reply = client.complete(&request).await?;

    let query = first_fenced_block(&reply);
    if query.is_empty() {
        debug!(reply_len = reply.len(), "no fenced block in reply");
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;

    use super::*;
    use crate::{chat::Role, error::ClientError, prompt};

    /// Fake client that records requests and replays a canned outcome.
    struct FakeClient {
        reply: Result<String, u16>,
        calls: AtomicUsize,
        last_request: Mutex<Option<ChatRequest>>,
    }

    impl FakeClient {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChatCompletion for FakeClient {
        async fn complete(&self, request: &ChatRequest) -> Result<String, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(ClientError::Api {
                    status: *status,
                    message: "Access denied due to invalid subscription key.".to_string(),
                }),
            }
        }
    }

    fn args(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn unconfigured(texts: &[&str]) -> Args {
        Args {
            texts: args(texts),
            endpoint: None,
            api_key: None,
            deployment: prompt::DEFAULT_DEPLOYMENT.to_string(),
            api_version: prompt::DEFAULT_API_VERSION.to_string(),
            no_color: false,
        }
    }

    #[tokio::test]
    async fn usage_is_reported_before_missing_endpoint() {
        let err = run(&unconfigured(&[])).await.unwrap_err();
        assert!(matches!(err, GenerateError::Usage));

        let err = run(&unconfigured(&["open", "bugs"])).await.unwrap_err();
        assert!(matches!(err, GenerateError::Usage));
    }

    #[tokio::test]
    async fn single_text_without_endpoint_is_remote_error() {
        let err = run(&unconfigured(&["open bugs"])).await.unwrap_err();

        assert!(matches!(
            err,
            GenerateError::Remote(ClientError::MissingEndpoint)
        ));
        assert_eq!(
            err.to_string(),
            "endpoint is not set; export AZURE_OPENAI_API_ENDPOINT"
        );
    }

    #[tokio::test]
    async fn no_argument_is_usage_error_without_call() {
        let client = FakeClient::replying("```SELECT [Id] FROM WorkItems```");

        let err = generate(&client, &[]).await.unwrap_err();

        assert!(matches!(err, GenerateError::Usage));
        assert_eq!(err.to_string(), "Please input text to generate query.");
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn several_arguments_are_usage_error_without_call() {
        let client = FakeClient::replying("```SELECT [Id] FROM WorkItems```");

        let err = generate(&client, &args(&["open", "bugs"])).await.unwrap_err();

        assert!(matches!(err, GenerateError::Usage));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn tagged_block_is_extracted() {
        let client = FakeClient::replying("```wiql\nSELECT [Id] FROM WorkItems\n```");

        let query = generate(&client, &args(&["every work item id"])).await.unwrap();

        assert_eq!(query, "SELECT [Id] FROM WorkItems");
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn request_pairs_instruction_with_user_text() {
        let client = FakeClient::replying("");

        generate(&client, &args(&["bugs assigned to me"])).await.unwrap();

        let request = client.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, prompt::SYSTEM_INSTRUCTION);
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(request.messages[1].content, "bugs assigned to me");
        assert_eq!(request.max_tokens, 800);
    }

    #[tokio::test]
    async fn reply_without_fence_is_empty() {
        let client = FakeClient::replying("Sorry, I only speak WIQL.");

        let query = generate(&client, &args(&["hello"])).await.unwrap();

        assert_eq!(query, "");
    }

    #[tokio::test]
    async fn only_first_block_is_returned() {
        let client = FakeClient::replying(
            "Try:\n```\nSELECT [Id] FROM WorkItems\n```\nor:\n```\nSELECT [Title] FROM WorkItems\n```",
        );

        let query = generate(&client, &args(&["ids"])).await.unwrap();

        assert_eq!(query, "SELECT [Id] FROM WorkItems");
    }

    #[tokio::test]
    async fn remote_failure_surfaces_message() {
        let client = FakeClient::failing(401);

        let err = generate(&client, &args(&["ids"])).await.unwrap_err();

        assert!(matches!(
            err,
            GenerateError::Remote(ClientError::Api { status: 401, .. })
        ));
        assert_eq!(
            err.to_string(),
            "API error (401): Access denied due to invalid subscription key."
        );
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn repeated_runs_give_identical_output() {
        let client = FakeClient::replying("```wiql\nSELECT [Id] FROM WorkItems WHERE [State] = 'New'\n```");
        let input = args(&["new items"]);

        let first = generate(&client, &input).await.unwrap();
        let second = generate(&client, &input).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(client.calls(), 2);
    }
}
