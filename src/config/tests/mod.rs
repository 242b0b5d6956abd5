//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `loading`: Environment and CLI loading through `load_from_iter`
//! - `validation`: URL, token, timeout and tab validation

mod helpers;
mod loading;
mod precedence;
mod validation;
