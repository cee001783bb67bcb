//! Completion providers reachable over HTTP.

pub mod openai;

pub use openai::OpenAI;
