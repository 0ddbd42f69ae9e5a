//! Application state modules.
//!
//! DESIGN
//! ======
//! State is split between the record model (`user`: draft, validation
//! messages, submission gating) and the committed collection (`roster`).
//! Both are plain data so they test natively; browser concerns live in
//! `util::dom`.

pub mod roster;
pub mod user;
