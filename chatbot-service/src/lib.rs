//! chatbot-service: storefront assistant answering questions via the Gemini API.
//!
//! Exposes three JSON endpoints: the preset prompt catalog, free-form ask,
//! and a health check. Every answer-producing response uses the uniform
//! `{success, answer|error}` envelope.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;
