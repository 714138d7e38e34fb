//! `gen_ai.*` attributes: generative AI client operations.

use opentelemetry::{Array, Key, KeyValue, StringValue, Value};

/// Deprecated, use Event API to report completions contents.
///
/// # Examples
///
/// - `"[{'role': 'assistant', 'content': 'The capital of France is Paris.'}]"`
#[deprecated(note = "Removed, no replacement at this time.")]
pub const GEN_AI_COMPLETION: Key = Key::from_static_str("gen_ai.completion");

/// Builds a [`KeyValue`] for [`GEN_AI_COMPLETION`].
#[deprecated(note = "Removed, no replacement at this time.")]
pub fn gen_ai_completion(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(GEN_AI_COMPLETION, value.into())
}

/// The name of the operation being performed.
///
/// If one of the predefined values applies, but specific system uses a
/// different name it's recommended to document it in the semantic
/// conventions for specific GenAI system and use system-specific name in
/// the instrumentation. If a different name is not documented,
/// instrumentation libraries should use applicable predefined value.
pub const GEN_AI_OPERATION_NAME: Key = Key::from_static_str("gen_ai.operation.name");

/// Builds a [`KeyValue`] for [`GEN_AI_OPERATION_NAME`].
pub fn gen_ai_operation_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(GEN_AI_OPERATION_NAME, value.into())
}

/// Well-known values for [`GEN_AI_OPERATION_NAME`].
pub mod gen_ai_operation_name_values {
    /// Chat completion operation such as [OpenAI Chat API](https://platform.openai.com/docs/api-reference/chat).
    pub const CHAT: &str = "chat";
    /// Text completions operation such as [OpenAI Completions API (Legacy)](https://platform.openai.com/docs/api-reference/completions).
    pub const TEXT_COMPLETION: &str = "text_completion";
    /// Embeddings operation such as [OpenAI Create embeddings API](https://platform.openai.com/docs/api-reference/embeddings/create).
    pub const EMBEDDINGS: &str = "embeddings";
}

/// Deprecated, use Event API to report prompt contents.
///
/// # Examples
///
/// - `"[{'role': 'user', 'content': 'What is the capital of France?'}]"`
#[deprecated(note = "Removed, no replacement at this time.")]
pub const GEN_AI_PROMPT: Key = Key::from_static_str("gen_ai.prompt");

/// Builds a [`KeyValue`] for [`GEN_AI_PROMPT`].
#[deprecated(note = "Removed, no replacement at this time.")]
pub fn gen_ai_prompt(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(GEN_AI_PROMPT, value.into())
}

/// The encoding formats requested in an embeddings operation, if
/// specified.
///
/// In some GenAI systems the encoding formats are called embedding types.
/// Also, some GenAI systems only accept a single format per request.
///
/// # Examples
///
/// - `["base64"]`
/// - `["float", "binary"]`
pub const GEN_AI_REQUEST_ENCODING_FORMATS: Key =
    Key::from_static_str("gen_ai.request.encoding_formats");

/// Builds a [`KeyValue`] for [`GEN_AI_REQUEST_ENCODING_FORMATS`].
pub fn gen_ai_request_encoding_formats(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(
        GEN_AI_REQUEST_ENCODING_FORMATS,
        Value::Array(Array::String(value)),
    )
}

/// The frequency penalty setting for the GenAI request.
///
/// # Examples
///
/// - `0.1`
pub const GEN_AI_REQUEST_FREQUENCY_PENALTY: Key =
    Key::from_static_str("gen_ai.request.frequency_penalty");

/// Builds a [`KeyValue`] for [`GEN_AI_REQUEST_FREQUENCY_PENALTY`].
pub fn gen_ai_request_frequency_penalty(value: f64) -> KeyValue {
    KeyValue::new(GEN_AI_REQUEST_FREQUENCY_PENALTY, value)
}

/// The maximum number of tokens the model generates for a request.
///
/// # Examples
///
/// - `100`
pub const GEN_AI_REQUEST_MAX_TOKENS: Key = Key::from_static_str("gen_ai.request.max_tokens");

/// Builds a [`KeyValue`] for [`GEN_AI_REQUEST_MAX_TOKENS`].
pub fn gen_ai_request_max_tokens(value: i64) -> KeyValue {
    KeyValue::new(GEN_AI_REQUEST_MAX_TOKENS, value)
}

/// The name of the GenAI model a request is being made to.
///
/// # Examples
///
/// - `"gpt-4"`
pub const GEN_AI_REQUEST_MODEL: Key = Key::from_static_str("gen_ai.request.model");

/// Builds a [`KeyValue`] for [`GEN_AI_REQUEST_MODEL`].
pub fn gen_ai_request_model(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(GEN_AI_REQUEST_MODEL, value.into())
}

/// The presence penalty setting for the GenAI request.
///
/// # Examples
///
/// - `0.1`
pub const GEN_AI_REQUEST_PRESENCE_PENALTY: Key =
    Key::from_static_str("gen_ai.request.presence_penalty");

/// Builds a [`KeyValue`] for [`GEN_AI_REQUEST_PRESENCE_PENALTY`].
pub fn gen_ai_request_presence_penalty(value: f64) -> KeyValue {
    KeyValue::new(GEN_AI_REQUEST_PRESENCE_PENALTY, value)
}

/// Requests with same seed value more likely to return same result.
///
/// # Examples
///
/// - `100`
pub const GEN_AI_REQUEST_SEED: Key = Key::from_static_str("gen_ai.request.seed");

/// Builds a [`KeyValue`] for [`GEN_AI_REQUEST_SEED`].
pub fn gen_ai_request_seed(value: i64) -> KeyValue {
    KeyValue::new(GEN_AI_REQUEST_SEED, value)
}

/// List of sequences that the model will use to stop generating further
/// tokens.
///
/// # Examples
///
/// - `["forest", "lived"]`
pub const GEN_AI_REQUEST_STOP_SEQUENCES: Key =
    Key::from_static_str("gen_ai.request.stop_sequences");

/// Builds a [`KeyValue`] for [`GEN_AI_REQUEST_STOP_SEQUENCES`].
pub fn gen_ai_request_stop_sequences(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(
        GEN_AI_REQUEST_STOP_SEQUENCES,
        Value::Array(Array::String(value)),
    )
}

/// The temperature setting for the GenAI request.
///
/// # Examples
///
/// - `0.0`
pub const GEN_AI_REQUEST_TEMPERATURE: Key = Key::from_static_str("gen_ai.request.temperature");

/// Builds a [`KeyValue`] for [`GEN_AI_REQUEST_TEMPERATURE`].
pub fn gen_ai_request_temperature(value: f64) -> KeyValue {
    KeyValue::new(GEN_AI_REQUEST_TEMPERATURE, value)
}

/// The top_k sampling setting for the GenAI request.
///
/// # Examples
///
/// - `1.0`
pub const GEN_AI_REQUEST_TOP_K: Key = Key::from_static_str("gen_ai.request.top_k");

/// Builds a [`KeyValue`] for [`GEN_AI_REQUEST_TOP_K`].
pub fn gen_ai_request_top_k(value: f64) -> KeyValue {
    KeyValue::new(GEN_AI_REQUEST_TOP_K, value)
}

/// The top_p sampling setting for the GenAI request.
///
/// # Examples
///
/// - `1.0`
pub const GEN_AI_REQUEST_TOP_P: Key = Key::from_static_str("gen_ai.request.top_p");

/// Builds a [`KeyValue`] for [`GEN_AI_REQUEST_TOP_P`].
pub fn gen_ai_request_top_p(value: f64) -> KeyValue {
    KeyValue::new(GEN_AI_REQUEST_TOP_P, value)
}

/// Array of reasons the model stopped generating tokens, corresponding to
/// each generation received.
///
/// # Examples
///
/// - `["stop"]`
/// - `["stop", "length"]`
pub const GEN_AI_RESPONSE_FINISH_REASONS: Key =
    Key::from_static_str("gen_ai.response.finish_reasons");

/// Builds a [`KeyValue`] for [`GEN_AI_RESPONSE_FINISH_REASONS`].
pub fn gen_ai_response_finish_reasons(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(
        GEN_AI_RESPONSE_FINISH_REASONS,
        Value::Array(Array::String(value)),
    )
}

/// The unique identifier for the completion.
///
/// # Examples
///
/// - `"chatcmpl-123"`
pub const GEN_AI_RESPONSE_ID: Key = Key::from_static_str("gen_ai.response.id");

/// Builds a [`KeyValue`] for [`GEN_AI_RESPONSE_ID`].
pub fn gen_ai_response_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(GEN_AI_RESPONSE_ID, value.into())
}

/// The name of the model that generated the response.
///
/// # Examples
///
/// - `"gpt-4-0613"`
pub const GEN_AI_RESPONSE_MODEL: Key = Key::from_static_str("gen_ai.response.model");

/// Builds a [`KeyValue`] for [`GEN_AI_RESPONSE_MODEL`].
pub fn gen_ai_response_model(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(GEN_AI_RESPONSE_MODEL, value.into())
}

/// The Generative AI product as identified by the client or server
/// instrumentation.
///
/// The `gen_ai.system` describes a family of GenAI models with specific
/// model identified by `gen_ai.request.model` and `gen_ai.response.model`
/// attributes.
///
/// The actual GenAI product may differ from the one identified by the
/// client. For example, when using OpenAI client libraries to communicate
/// with Mistral, the `gen_ai.system` is set to `openai` based on the
/// instrumentation's best knowledge.
///
/// # Examples
///
/// - `"openai"`
pub const GEN_AI_SYSTEM: Key = Key::from_static_str("gen_ai.system");

/// Builds a [`KeyValue`] for [`GEN_AI_SYSTEM`].
pub fn gen_ai_system(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(GEN_AI_SYSTEM, value.into())
}

/// Well-known values for [`GEN_AI_SYSTEM`].
pub mod gen_ai_system_values {
    /// OpenAI.
    pub const OPENAI: &str = "openai";
    /// Vertex AI.
    pub const VERTEX_AI: &str = "vertex_ai";
    /// Gemini.
    pub const GEMINI: &str = "gemini";
    /// Anthropic.
    pub const ANTHROPIC: &str = "anthropic";
    /// Cohere.
    pub const COHERE: &str = "cohere";
    /// Azure AI Inference.
    pub const AZ_AI_INFERENCE: &str = "az.ai.inference";
    /// Azure OpenAI.
    pub const AZ_AI_OPENAI: &str = "az.ai.openai";
    /// IBM Watsonx AI.
    pub const IBM_WATSONX_AI: &str = "ibm.watsonx.ai";
    /// AWS Bedrock.
    pub const AWS_BEDROCK: &str = "aws.bedrock";
    /// Perplexity.
    pub const PERPLEXITY: &str = "perplexity";
    /// xAI.
    pub const XAI: &str = "xai";
    /// DeepSeek.
    pub const DEEPSEEK: &str = "deepseek";
    /// Groq.
    pub const GROQ: &str = "groq";
    /// Mistral AI.
    pub const MISTRAL_AI: &str = "mistral_ai";
}

/// The type of token being counted.
///
/// # Examples
///
/// - `"input"`
/// - `"output"`
pub const GEN_AI_TOKEN_TYPE: Key = Key::from_static_str("gen_ai.token.type");

/// Builds a [`KeyValue`] for [`GEN_AI_TOKEN_TYPE`].
pub fn gen_ai_token_type(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(GEN_AI_TOKEN_TYPE, value.into())
}

/// Well-known values for [`GEN_AI_TOKEN_TYPE`].
pub mod gen_ai_token_type_values {
    /// Input tokens (prompt, input, etc.).
    pub const INPUT: &str = "input";
    /// Output tokens (completion, response, etc.).
    pub const OUTPUT: &str = "output";
}

/// Deprecated, use `gen_ai.usage.output_tokens` instead.
///
/// # Examples
///
/// - `42`
#[deprecated(note = "Replaced by `gen_ai.usage.output_tokens`.")]
pub const GEN_AI_USAGE_COMPLETION_TOKENS: Key =
    Key::from_static_str("gen_ai.usage.completion_tokens");

/// Builds a [`KeyValue`] for [`GEN_AI_USAGE_COMPLETION_TOKENS`].
#[deprecated(note = "Replaced by `gen_ai.usage.output_tokens`.")]
pub fn gen_ai_usage_completion_tokens(value: i64) -> KeyValue {
    KeyValue::new(GEN_AI_USAGE_COMPLETION_TOKENS, value)
}

/// The number of tokens used in the GenAI input (prompt).
///
/// # Examples
///
/// - `100`
pub const GEN_AI_USAGE_INPUT_TOKENS: Key = Key::from_static_str("gen_ai.usage.input_tokens");

/// Builds a [`KeyValue`] for [`GEN_AI_USAGE_INPUT_TOKENS`].
pub fn gen_ai_usage_input_tokens(value: i64) -> KeyValue {
    KeyValue::new(GEN_AI_USAGE_INPUT_TOKENS, value)
}

/// The number of tokens used in the GenAI response (completion).
///
/// # Examples
///
/// - `180`
pub const GEN_AI_USAGE_OUTPUT_TOKENS: Key = Key::from_static_str("gen_ai.usage.output_tokens");

/// Builds a [`KeyValue`] for [`GEN_AI_USAGE_OUTPUT_TOKENS`].
pub fn gen_ai_usage_output_tokens(value: i64) -> KeyValue {
    KeyValue::new(GEN_AI_USAGE_OUTPUT_TOKENS, value)
}

/// Deprecated, use `gen_ai.usage.input_tokens` instead.
///
/// # Examples
///
/// - `42`
#[deprecated(note = "Replaced by `gen_ai.usage.input_tokens`.")]
pub const GEN_AI_USAGE_PROMPT_TOKENS: Key = Key::from_static_str("gen_ai.usage.prompt_tokens");

/// Builds a [`KeyValue`] for [`GEN_AI_USAGE_PROMPT_TOKENS`].
#[deprecated(note = "Replaced by `gen_ai.usage.input_tokens`.")]
pub fn gen_ai_usage_prompt_tokens(value: i64) -> KeyValue {
    KeyValue::new(GEN_AI_USAGE_PROMPT_TOKENS, value)
}
