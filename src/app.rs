//! Root component owning the user roster.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::user_form::UserForm;
use crate::components::user_list::UserList;
use crate::state::roster::Roster;
use crate::state::user::User;
use crate::util::dom;

/// Application root.
///
/// Holds the roster as the single source of truth and wires the form and the
/// list to it: the form appends through `on_submit`, the list removes through
/// `on_remove`. Removal hands focus back to the form's first field.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let users = RwSignal::new(Roster::default());

    let on_submit = Callback::new(move |user: User| {
        users.update(|roster| roster.append(user));
        log::info!("roster now holds {} user(s)", users.with_untracked(Roster::len));
    });

    let on_remove = Callback::new(move |user: User| {
        users.update(|roster| roster.remove(&user));
        dom::focus_first_name();
    });

    view! {
        <Title text="Add Users"/>
        <div class="app">
            <h1 class="app__title">"Add Users"</h1>
            <div class="app__panels">
                <UserForm on_submit=on_submit/>
                <UserList users=users on_remove=on_remove/>
            </div>
        </div>
    }
}
