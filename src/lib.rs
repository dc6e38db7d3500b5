//! Gatekeeper - Session-Management Core
//!
//! This crate implements the session lifecycle of the Gatekeeper
//! authentication service: creation on sign-in, refresh-token rotation,
//! and revocation, with every state transition recorded as a domain event.
//!
//! Transport, credential storage, and persistence are external collaborators
//! reached through the traits in [`ports`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
