//! Customer contact details collected at checkout.

use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`CustomerContact`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// The name is empty or whitespace.
    #[error("name cannot be empty")]
    EmptyName,
    /// The phone number is empty or whitespace.
    #[error("phone cannot be empty")]
    EmptyPhone,
    /// The delivery address is empty or whitespace.
    #[error("address cannot be empty")]
    EmptyAddress,
}

/// Who the order is for and where it goes.
///
/// ## Constraints
///
/// All three fields are trimmed and must be non-empty. No further format
/// checks are made; the order service owns phone and address validation.
///
/// ## Examples
///
/// ```
/// use blaze_pizza_core::CustomerContact;
///
/// assert!(CustomerContact::new("Ada", "555-0100", "1 Main St").is_ok());
/// assert!(CustomerContact::new("Ada", "  ", "1 Main St").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerContact {
    name: String,
    phone: String,
    address: String,
}

impl CustomerContact {
    /// Build contact details, trimming each field.
    ///
    /// # Errors
    ///
    /// Returns the first field found empty, checked in name, phone, address order.
    pub fn new(name: &str, phone: &str, address: &str) -> Result<Self, ContactError> {
        let name = name.trim();
        let phone = phone.trim();
        let address = address.trim();

        if name.is_empty() {
            return Err(ContactError::EmptyName);
        }
        if phone.is_empty() {
            return Err(ContactError::EmptyPhone);
        }
        if address.is_empty() {
            return Err(ContactError::EmptyAddress);
        }

        Ok(Self {
            name: name.to_owned(),
            phone: phone.to_owned(),
            address: address.to_owned(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}
