//! Components that make up the Valor shell.
//!
//! The sheet primitives and the navigation list are reusable; the shell and
//! the pages compose them into the application frame.

pub mod button;
pub mod home;     // Dashboard at `/`
pub mod section;  // Every other routed path
pub mod sheet;
pub mod shell;
pub mod sidebar_nav;
