//! Registration form owning the draft record and its validation messages.

use leptos::prelude::*;

use crate::state::user::{Field, User};
use crate::util::dom;

/// Four-field registration form.
///
/// Keeps a draft [`User`] in a signal, mirrors every keystroke into it, and
/// records a static message per field when the browser fires a native
/// `invalid` event (the native popup is suppressed in favor of the inline
/// message). On submit the draft is stamped with the current time, handed to
/// `on_submit`, and replaced by a fresh empty draft; focus returns to the
/// first input.
#[component]
pub fn UserForm(on_submit: Callback<User>) -> impl IntoView {
    let draft = RwSignal::new(User::default());
    let first_name_ref = NodeRef::<leptos::html::Input>::new();

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut user = draft.get_untracked();
        user.created = Some(dom::now_millis());
        log::debug!("submitting user {} {}", user.first_name, user.last_name);
        on_submit.run(user);
        draft.set(User::default());
        if let Some(input) = first_name_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    // One handler per control: suppress the native popup and pin the static
    // message for that field into the draft.
    let invalid = move |field: Field| {
        move |ev: web_sys::Event| {
            ev.prevent_default();
            draft.update(|d| d.validation.record(field));
        }
    };

    let message_for = move |field: Field| {
        move || {
            draft
                .with(|d| d.validation.get(field))
                .map(|msg| view! { <small class="user-form__error">{msg}</small> })
        }
    };

    let field_invalid = move |field: Field| move || draft.with(|d| d.validation.get(field).is_some());

    view! {
        <form class="user-form" on:submit=on_form_submit>
            <div class="user-form__field">
                <label for=dom::FIRST_NAME_INPUT_ID>
                    "First Name" <span class="user-form__required">"*"</span>
                </label>
                <input
                    id=dom::FIRST_NAME_INPUT_ID
                    class="user-form__input"
                    class=("user-form__input--invalid", field_invalid(Field::FirstName))
                    type="text"
                    name="firstName"
                    placeholder="Your first name"
                    required=true
                    autofocus=true
                    node_ref=first_name_ref
                    prop:value=move || draft.with(|d| d.first_name.clone())
                    on:input=move |ev| draft.update(|d| d.first_name = event_target_value(&ev))
                    on:invalid=invalid(Field::FirstName)
                />
                {message_for(Field::FirstName)}
            </div>

            <div class="user-form__field">
                <label for="required-last-name">
                    "Last Name" <span class="user-form__required">"*"</span>
                </label>
                <input
                    id="required-last-name"
                    class="user-form__input"
                    class=("user-form__input--invalid", field_invalid(Field::LastName))
                    type="text"
                    name="lastName"
                    placeholder="Your last name"
                    required=true
                    prop:value=move || draft.with(|d| d.last_name.clone())
                    on:input=move |ev| draft.update(|d| d.last_name = event_target_value(&ev))
                    on:invalid=invalid(Field::LastName)
                />
                {message_for(Field::LastName)}
            </div>

            <div class="user-form__field">
                <label for="required-email">
                    "Email" <span class="user-form__required">"*"</span>
                </label>
                <input
                    id="required-email"
                    class="user-form__input"
                    class=("user-form__input--invalid", field_invalid(Field::Email))
                    type="email"
                    name="email"
                    placeholder="Your email"
                    required=true
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    on:invalid=invalid(Field::Email)
                />
                {message_for(Field::Email)}
            </div>

            <div class="user-form__field">
                <label for="note">
                    "Note" <span class="user-form__required">"*"</span>
                </label>
                <textarea
                    id="note"
                    class="user-form__input user-form__input--note"
                    name="note"
                    placeholder="Enter your note"
                    rows="2"
                    required=true
                    prop:value=move || draft.with(|d| d.note.clone())
                    on:input=move |ev| draft.update(|d| d.note = event_target_value(&ev))
                    on:invalid=invalid(Field::Note)
                ></textarea>
                {message_for(Field::Note)}
            </div>

            <div class="user-form__actions">
                <button
                    class="btn btn--primary user-form__submit"
                    type="submit"
                    disabled=move || !draft.with(User::submittable)
                >
                    <svg class="user-form__submit-icon" viewBox="0 0 20 20" aria-hidden="true">
                        <line x1="10" y1="5" x2="10" y2="15"></line>
                        <line x1="5" y1="10" x2="15" y2="10"></line>
                    </svg>
                    "Add User"
                </button>
            </div>
        </form>
    }
}
