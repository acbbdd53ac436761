use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results a in 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored reaction string is not a valid emoji spelling
    ///
    /// Only reachable if the store was written to outside of the admin API.
    #[error("Stored reaction '{value}' is not a valid emoji")]
    InvalidStoredReaction {
        /// The stored reaction string
        value: String,
    },
}
