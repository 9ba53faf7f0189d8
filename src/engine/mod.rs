//! State-transition engine: actions, the pure reducer and the controller
//! shell.
//!
//! `apply` is the single place new form states come from; everything else
//! either feeds it actions (`FormController`) or describes them
//! (`FormAction`).

mod action;
mod controller;
mod reducer;

pub use action::FormAction;
pub use controller::FormController;
pub use reducer::{apply, normalize_initial_state};
