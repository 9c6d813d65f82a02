//! Checkout Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Errors raised along the checkout path
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Fetching the gateway configuration failed
    #[error("config fetch failed: {0}")]
    Config(String),

    /// Creating the checkout session failed
    #[error("checkout session request failed: {0}")]
    Session(String),

    /// The payment gateway rejected construction or redirect
    #[error("payment gateway error: {0}")]
    Gateway(String),

    /// A response body did not match the expected contract
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl CheckoutError {
    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            CheckoutError::Config(_) => "Checkout is unavailable right now. Please try again later.",
            CheckoutError::Session(_) | CheckoutError::Gateway(_) => {
                "We couldn't start your checkout. Please try again."
            }
            CheckoutError::Malformed(_) => "Something went wrong talking to the server.",
        }
    }
}
