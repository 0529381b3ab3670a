//! Explicit form state and the reactive layer that keeps displayed results current.

mod controller;
mod import;
mod sink;
mod state;

pub use controller::FormController;
pub use import::{FormImportError, FormImporter};
pub use sink::{DisplaySink, DisplayTarget, InMemoryDisplay};
pub use state::{Category, Field, FormError, FormState, InputChange, RowInput};
