//! Validation system
//!
//! Declarative field constraints come from the `validator` derive and are run
//! by the [`Validated`] extractor. Cross-field business rules are run by the
//! handlers. Both report into the same [`Errors`] accumulator.

pub mod errors;
pub mod extractor;
pub mod validators;

pub use errors::{ErrorEntry, Errors};
pub use extractor::{ValidatablePayload, Validated};
