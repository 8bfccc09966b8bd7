use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    Validation,
    NotFound,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Invalid request"),
            KernelError::NotFound => write!(f, "Entity not found"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
