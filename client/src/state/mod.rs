//! Client-side state machines for the landing page.
//!
//! DESIGN
//! ======
//! Each module is a plain Rust model with no browser dependency so the
//! behavior can be unit tested natively. Components own one instance per
//! mount inside a signal; browser bindings in `util` feed them events.

pub mod contact;
pub mod pointer;
pub mod stepper;
pub mod visibility;
