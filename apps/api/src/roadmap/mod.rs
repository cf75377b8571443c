// Career roadmap generation: request types, prompt construction, the model
// call, JSON extraction with a degraded fallback, and history persistence.
// All model calls go through llm_client.

pub mod extract;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
