#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

/// A field on the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Note,
}

impl Field {
    /// Inline message shown when the field fails required-field validation.
    pub fn message(self) -> &'static str {
        match self {
            Self::FirstName => "Please enter a first name.",
            Self::LastName => "Please enter a last name.",
            Self::Email => "Please enter a valid email.",
            Self::Note => "Please enter a note.",
        }
    }
}

/// Per-field validation messages, populated only by native `invalid` events.
///
/// An entry is never cleared when its field is corrected; the whole map is
/// discarded with the draft on a successful submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub note: Option<&'static str>,
}

impl Validation {
    /// Record the static message for a field that failed required validation.
    pub fn record(&mut self, field: Field) {
        *self.slot(field) = Some(field.message());
    }

    /// The message currently recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::FirstName => self.first_name,
            Field::LastName => self.last_name,
            Field::Email => self.email,
            Field::Note => self.note,
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<&'static str> {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Note => &mut self.note,
        }
    }
}

/// A user record.
///
/// `created` is `None` while the record is still a draft and is stamped
/// exactly once, at submission time (epoch milliseconds). It doubles as the
/// record's identity for list rendering and removal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub note: String,
    pub created: Option<f64>,
    pub validation: Validation,
}

impl User {
    /// True once all four required text fields are non-empty; the submit
    /// button stays disabled until then. Values are taken verbatim, so
    /// whitespace counts as content.
    pub fn submittable(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.email.is_empty()
            && !self.note.is_empty()
    }

    /// Removal/row identity: the string form of the creation timestamp.
    ///
    /// Near-simultaneous submissions could in principle collide on this key;
    /// that risk is accepted for a single-session, human-paced form.
    pub fn created_key(&self) -> String {
        self.created.map(|ts| ts.to_string()).unwrap_or_default()
    }
}
