//! services/cli/src/adapters/mod.rs
//!
//! Contains the concrete implementations (adapters) of the service ports
//! defined in the `user_browser_core` crate.

pub mod random_data;
