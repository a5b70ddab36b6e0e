mod culture;
mod error_handling;

pub use culture::{Culture, CultureParseError};
pub use error_handling::{ErrorHandling, ErrorHandlingParseError, ResolvedErrorHandling};
