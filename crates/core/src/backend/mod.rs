mod error;
mod traits;
mod types;

pub use error::{BackendError, Result};
pub use traits::Backend;
pub use types::{Locale, Options, WritePolicy};
