// Core Layer: Checked binding surface
//
// Safe wrappers over the raw ffi declarations: lifecycle, status
// classification, generation-checked handles and the matrix calls.

pub mod context;
pub mod element_type;
pub mod error;
pub mod handles;
pub mod matrix;
pub mod status;

// Re-export commonly used types
pub use context::{Context, Phase};
pub use element_type::ElementType;
pub use error::{ErrorKind, GraphBlasError, Result};
pub use handles::{Handle, HandleRegistry, Ownership, RawHandle};
pub use matrix::Matrix;
pub use status::Outcome;
