//! Chat-completion wire types (function-calling dialect).
//!
//! Only the fields this tool consumes are modeled; the fixture file at
//! `fixtures/summary_response.json` is one serialized [`ChatResponse`].

use serde::{Deserialize, Serialize};

/// A chat-completion request with a structured-output function declaration.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,

    /// Conversation messages; this tool sends a single user message.
    pub messages: Vec<ChatMessage>,

    /// Declared output functions; this tool declares exactly one.
    pub functions: Vec<FunctionDecl>,
}

/// One conversation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role (`user`, `assistant`, ...).
    pub role: String,

    /// Message text.
    pub content: String,
}

/// A function-style output schema declaration.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDecl {
    /// Function name the model must call.
    pub name: String,

    /// Instruction describing the expected output.
    pub description: String,

    /// JSON Schema of the function parameters.
    pub parameters: serde_json::Value,
}

/// A chat-completion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Returned choices; the first one is consumed.
    pub choices: Vec<Choice>,
}

/// One completion choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// The assistant message.
    pub message: ResponseMessage,
}

/// The assistant message of one choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMessage {
    /// Structured function call, when the model produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
}

/// A structured function call emitted by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Called function name.
    pub name: String,

    /// Arguments payload as a JSON-encoded string.
    pub arguments: String,
}
