//! # solidlab
//!
//! A small training library that collects short text notes and renders them
//! as a single delimited string.
//!
//! ## Quick Start
//!
//! ```rust
//! use solidlab::{NoteList, SolidLabError};
//!
//! # fn main() -> Result<(), SolidLabError> {
//! let mut notes = NoteList::new();
//! notes.add_note("alpha");
//! notes.add_note("beta");
//! notes.add_note("gamma");
//!
//! assert_eq!(notes.size(), 3);
//! assert_eq!(notes.note(0)?, "alpha");
//! assert_eq!(notes.join(), "alpha,beta,gamma");
//! assert_eq!(notes.join_with('-'), "alpha-beta-gamma");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`notes`]**: the [`NoteList`] value type
//! - **[`error`]**: unified error handling
//! - **[`logging`]**: optional stderr logger bootstrap for binaries
//!
//! ## Error Handling
//!
//! Fallible operations return [`SolidLabResult<T>`]. Reading past the end of a
//! list is the only failure the note API can produce:
//!
//! ```rust
//! use solidlab::{NoteList, SolidLabError};
//!
//! let notes = NoteList::new();
//! assert!(matches!(
//!     notes.note(0),
//!     Err(SolidLabError::OutOfRange { index: 0, len: 0 })
//! ));
//! ```

pub mod error;
pub mod logging;
pub mod notes;

/// Re-exports the most commonly used types for convenience.
pub use error::{SolidLabError, SolidLabResult};
pub use notes::{DEFAULT_SEPARATOR, NoteList};

/// Library semantic version (`MAJOR.MINOR.PATCH`).
pub fn version() -> &'static str {
    NoteList::version()
}
