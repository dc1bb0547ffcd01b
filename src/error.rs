// User-facing failure kinds for a single topic lookup.
//
// None of these are fatal to the process: the CLI prints them and exits
// normally, the web form re-renders with the message in place.

use thiserror::Error;

/// Hint shown after a resolution failure, inviting the user to retry.
pub const RETRY_HINT: &str = "Could not generate Wikipedia topics. The AI may be experiencing \
     issues or the response was malformed. Please try rephrasing your input or try again in a moment.";

#[derive(Debug, Error)]
pub enum LookupError {
    /// One or both form fields were empty. No request was made.
    #[error("Please fill out both the product description and customer profile.")]
    MissingInput,

    /// The configured API key failed the shape check. No request was made.
    #[error("The OpenAI API key appears to be invalid. Set OPENAI_API_KEY in your .env file.")]
    InvalidCredential,

    /// The completion call failed or its reply was malformed.
    /// Carries the underlying error text verbatim.
    #[error("An error occurred while contacting the OpenAI API: {0}")]
    ResolutionFailure(String),
}

impl LookupError {
    /// Missing input is a warning; everything else is an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, LookupError::MissingInput)
    }

    /// Short machine-readable name, used by the JSON API.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::MissingInput => "missing_input",
            LookupError::InvalidCredential => "invalid_credential",
            LookupError::ResolutionFailure(_) => "resolution_failure",
        }
    }
}
