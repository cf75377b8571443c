//! Course match API: AI career roadmaps for students choosing schools and
//! courses in Ghana, plus the catalog and history reads around them.

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod render;
pub mod roadmap;
pub mod routes;
pub mod state;
pub mod storage;

#[cfg(test)]
mod testing;
