// Query — the two free-text fields a user submits for one lookup.

use crate::error::LookupError;

/// A product description and ideal-customer profile, accepted as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub product_description: String,
    pub customer_profile: String,
}

impl Query {
    /// Build a query, rejecting it if either field is empty.
    ///
    /// Only the empty string counts as empty; content is never inspected.
    pub fn new(
        product_description: impl Into<String>,
        customer_profile: impl Into<String>,
    ) -> Result<Self, LookupError> {
        let query = Self {
            product_description: product_description.into(),
            customer_profile: customer_profile.into(),
        };
        query.validate()?;
        Ok(query)
    }

    /// Check that both fields are filled in.
    pub fn validate(&self) -> Result<(), LookupError> {
        if self.product_description.is_empty() || self.customer_profile.is_empty() {
            return Err(LookupError::MissingInput);
        }
        Ok(())
    }
}
