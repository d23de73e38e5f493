//! fleetmeta-common - Shared error taxonomy and utilities
//!
//! This crate provides:
//! - `MetaError`: the application error enum
//! - `ErrorCode`: structured error codes for API responses
//! - Validation helpers for catalog names, host addresses and ports

pub mod error;
pub mod utils;

pub use error::{ErrorCode, MetaError};
pub use utils::{is_valid_host_ip, is_valid_name, is_valid_port};
