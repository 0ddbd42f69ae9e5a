//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the roster signal and report user intent (submit, remove)
//! back to the root component through callbacks; none of them own shared
//! state beyond the form's draft record.

pub mod loading_dots;
pub mod user_form;
pub mod user_list;
