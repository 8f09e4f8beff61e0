//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (observers,
//! listeners, timers, canvas math) from page and component logic to improve
//! reuse and testability.

pub mod clock;
pub mod particles;
pub mod pointer;
pub mod reveal;
pub mod stepper;
pub mod subscriptions;
pub mod viewport;
