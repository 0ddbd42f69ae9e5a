//! # user-registry
//!
//! Client-side user registration widget built with Leptos (CSR). A validated
//! form appends entries to an in-memory roster rendered alongside it; each
//! entry can be removed again after a confirmation prompt.
//!
//! There is no persistence and no network: the roster lives only for the
//! lifetime of a page load, owned by the root [`app::App`] component and
//! passed down to the form and list as a signal plus callbacks.

pub mod app;
pub mod components;
pub mod state;
pub mod util;
