//! Termoweb library
//!
//! Web dashboard for a remote thermostat backend: an API client fetches the
//! backend's JSON, a thread-safe in-memory cache keeps the last good state
//! snapshot, and a domain service composes the two with a fallback policy
//! that the HTTP layer turns into pages and JSON envelopes.

pub mod cache;
pub mod client;
pub mod config;
pub mod service;
pub mod web;
