//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `credentials`: Username/password pairing rules
//! - `derived`: Endpoint, policy, and timeout derivation
//! - `env_loading`: Loading from the environment and CLI arguments

mod helpers;
