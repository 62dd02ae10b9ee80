//! Error types and error handling.
//!
//! This module defines the error types produced while tokenizing and while
//! turning literal tokens into AST nodes. It includes:
//!
//! - An error structure carrying the name of the source unit
//! - Specific error variants for each failure
//! - Error naming and suggestion tips for reporting

pub mod errors;
