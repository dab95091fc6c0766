//! Desktop front-end.

mod app;
mod style;
mod view_model;

pub use app::{CreditGuardApp, MIN_VIEWPORT_SIZE};
