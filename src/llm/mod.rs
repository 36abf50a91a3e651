//! LLM module for webslide
//!
//! Turns a topic and its search results into a structured slide outline
//! using an OpenAI chat-completions endpoint in JSON mode.

mod client;
mod openai;
mod prompts;

pub use client::{build_generator, OutlineGenerator, OutlineRequest};
pub use openai::OpenAiClient;
pub use prompts::{build_outline_prompt, system_instruction};
