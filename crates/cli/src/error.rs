//! Unified error handling with Sentry integration.
//!
//! Every command returns `Result<_, CliError>`. The dispatcher reports the
//! error (Sentry for backend-side failures) and maps it to an exit code.

use blaze_pizza_core::ContactError;
use blaze_pizza_storefront::{ApiError, CheckoutError, ConfigError};
use thiserror::Error;

/// Application-level error type for the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Backend call failed.
    #[error("Pizza API error: {0}")]
    Api(#[from] ApiError),

    /// Checkout failed.
    #[error("{}", .0.user_message())]
    Checkout(#[from] CheckoutError),

    /// Checkout contact details were incomplete.
    #[error("Invalid contact details: {0}")]
    Contact(#[from] ContactError),

    /// Requested pizza does not exist or could not be fetched.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input that is valid syntax but cannot be honoured.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Writing the rendered view failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 78, // EX_CONFIG
            Self::Api(_) | Self::Checkout(_) => 1,
            Self::Contact(_) | Self::NotFound(_) | Self::BadRequest(_) => 2,
            Self::Io(_) => 74, // EX_IOERR
        }
    }

    /// Whether the failure originates on the backend or in transport, and so
    /// is worth reporting.
    #[must_use]
    pub fn is_server_side(&self) -> bool {
        match self {
            Self::Api(e) | Self::Checkout(CheckoutError::Submit(e)) => e.is_server_side(),
            _ => false,
        }
    }

    /// Log the error, capturing backend-side failures to Sentry.
    pub fn report(&self) {
        if self.is_server_side() {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Command failed"
            );
        } else {
            tracing::debug!(error = %self, "Command rejected");
        }
    }
}

/// Result type alias for `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;

/// Add a breadcrumb for customer actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of actions
/// leading up to an error.
pub fn add_breadcrumb(category: &str, message: &str) {
    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    });
}
