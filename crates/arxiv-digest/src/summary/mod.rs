//! Summary extraction via structured chat completion.
//!
//! One abstract goes in, four named Japanese-language fields come out. The
//! response source is pluggable: [`OpenAiSource`] calls the live endpoint,
//! [`FixtureSource`] replays a captured response so the tool runs without
//! credentials. The source is selected once at session start.

mod fixture;
mod openai;
mod protocol;

pub use fixture::FixtureSource;
pub use openai::OpenAiSource;
pub use protocol::{
    ChatMessage, ChatRequest, ChatResponse, Choice, FunctionCall, FunctionDecl, ResponseMessage,
};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::error::{SummaryError, SummaryResult};
use crate::models::StructuredSummary;

/// Name of the declared output function.
pub const FUNCTION_NAME: &str = "output_format";

/// A source of chat-completion responses.
#[async_trait]
pub trait CompletionSource: Send + Sync {
    /// Source name for logging (`openai` or `fixture`).
    fn name(&self) -> &'static str;

    /// Produce one completion response for the request.
    async fn complete(&self, request: &ChatRequest) -> SummaryResult<ChatResponse>;
}

/// Extracts a [`StructuredSummary`] from one abstract.
pub struct SummaryExtractor {
    source: Box<dyn CompletionSource>,
    model: String,
}

impl SummaryExtractor {
    /// Create an extractor over the given response source.
    #[must_use]
    pub fn new(source: Box<dyn CompletionSource>, model: impl Into<String>) -> Self {
        Self { source, model: model.into() }
    }

    /// Name of the underlying response source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Summarize one abstract into the four-field schema.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Client`] on transport/status failure
    /// (recoverable) and a schema-family error if the structured payload is
    /// malformed or incomplete (propagates).
    pub async fn summarize(&self, abstract_text: &str) -> SummaryResult<StructuredSummary> {
        let request = build_request(&self.model, abstract_text);
        let response = self.source.complete(&request).await?;
        decode_summary(&response)
    }
}

impl std::fmt::Debug for SummaryExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryExtractor")
            .field("source", &self.source.name())
            .field("model", &self.model)
            .finish()
    }
}

/// Build the completion request: one user message plus the output schema.
fn build_request(model: &str, abstract_text: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![ChatMessage { role: "user".to_string(), content: abstract_text.to_string() }],
        functions: vec![output_format_decl()],
    }
}

/// The fixed four-question output schema, with Japanese field descriptions.
fn output_format_decl() -> FunctionDecl {
    FunctionDecl {
        name: FUNCTION_NAME.to_string(),
        description: "あなたは研究者です。以下の論文の要約文章を読んで、以下の4つの問いに日本語で答えてください。"
            .to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "short_summary": {
                    "type": "string",
                    "description": "この研究を一言で表すと",
                },
                "problem": {
                    "type": "string",
                    "description": "既存研究の問題点や課題は？",
                },
                "how": {
                    "type": "string",
                    "description": "この研究ではどのようなアプローチを行ったのか？",
                },
                "result": {
                    "type": "string",
                    "description": "どのような結果や結論が得られたか",
                },
            },
            "required": ["short_summary", "problem", "how", "result"],
        }),
    }
}

/// Decode `choices[0].message.function_call.arguments` into the summary.
fn decode_summary(response: &ChatResponse) -> SummaryResult<StructuredSummary> {
    let call = response
        .choices
        .first()
        .and_then(|choice| choice.message.function_call.as_ref())
        .ok_or_else(|| SummaryError::malformed("response carries no function call"))?;

    let args: Value = serde_json::from_str(&call.arguments)?;

    Ok(StructuredSummary {
        short_summary: required_field(&args, "short_summary")?,
        problem: required_field(&args, "problem")?,
        how: required_field(&args, "how")?,
        result: required_field(&args, "result")?,
    })
}

fn required_field(args: &Value, field: &'static str) -> SummaryResult<String> {
    args.get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(SummaryError::MissingField { field })
}
