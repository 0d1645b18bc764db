use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    Unauthorized,
    NotFound,
    Invalid,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Unauthorized => write!(f, "Missing or rejected session"),
            KernelError::NotFound => write!(f, "Resource not found"),
            KernelError::Invalid => write!(f, "Invalid input"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
