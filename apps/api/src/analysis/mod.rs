// SRS analysis: prompt templates, the LLM invoker, and the HTTP handlers.
// All LLM calls go through llm_client; all parsing goes through parser_client.

pub mod handlers;
pub mod invoker;
pub mod prompts;
