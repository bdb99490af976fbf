//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod contacts;
pub mod conversion;
pub mod email;
pub mod listing;
pub mod state;

// Re-export commonly used types
pub use contacts::{ContactDirectory, EMPTY_RESULT_ROW, match_contacts, normalize_term};
pub use conversion::Conversion;
pub use email::EmailValidation;
pub use listing::{DEFAULT_USER_LIMIT, parse_limit};
pub use state::{InteractionState, format_temperature};
