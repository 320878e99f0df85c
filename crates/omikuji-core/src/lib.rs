pub mod config;
pub mod error;
pub mod format;
pub mod picker;
pub mod state;
pub mod view;

pub use error::{OmikujiError, PickError};
