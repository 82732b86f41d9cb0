//! Voice Agent Leads
//!
//! Demo request intake for the Persian voice assistant landing page: a single
//! endpoint that validates a lead (name, email, phone) and relays it as a
//! notification email through a transactional-email provider, plus the
//! client-side form state machine that drives it.
//!
//! # Modules
//!
//! - `api`: API-layer namespace.
//! - `core`: Domain-layer namespace.
//! - `integrations`: External service integrations.
//! - `app`: Router assembly and OpenAPI document.
//! - `client`: HTTP client for the intake endpoint.
//! - `config`: Configuration management.
//! - `email_template`: Notification HTML and Persian dates.
//! - `errors`: Error handling types.
//! - `form`: Demo request form state machine.
//! - `handlers`: HTTP request handlers.
//! - `intake`: Validate, compose and deliver a lead.
//! - `mailer`: Delivery provider client.
//! - `models`: Wire and domain types.

pub mod api;
pub mod core;
pub mod integrations;

pub mod app;
pub mod client;
pub mod config;
pub mod email_template;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod intake;
pub mod mailer;
pub mod models;
