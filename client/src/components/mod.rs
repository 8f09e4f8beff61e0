//! Page sections and decorative overlays.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section owns its reveal trigger and renders static copy from
//! `content`. Decorative components read the shared pointer signal provided
//! by the page shell.

pub mod about;
pub mod automation_showcase;
pub mod background;
pub mod case_studies;
pub mod contact;
pub mod custom_cursor;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod services;
