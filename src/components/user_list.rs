//! Roster list: committed records with a delete-after-confirmation action.

use leptos::prelude::*;

use crate::components::loading_dots::LoadingDots;
use crate::state::roster::Roster;
use crate::state::user::User;
use crate::util::{dom, format};

/// Read-only list of registered users in submission order.
///
/// Rows are keyed by the record's creation timestamp. Each delete button asks
/// for confirmation through a blocking prompt and only then runs `on_remove`
/// with the row's record.
#[component]
pub fn UserList(users: RwSignal<Roster>, on_remove: Callback<User>) -> impl IntoView {
    view! {
        <div class="user-list">
            <div class="user-list__header">
                <h3>"User database"</h3>
                <p>"Details and information about user."</p>
            </div>
            <ul class="user-list__rows">
                <Show
                    when=move || !users.with(Roster::is_empty)
                    fallback=move || {
                        view! {
                            <li class="user-list__empty">
                                "Waiting for my first user" <LoadingDots/>
                            </li>
                        }
                    }
                >
                    <For
                        each=move || users.with(|r| r.users.clone())
                        key=User::created_key
                        children=move |user| view! { <UserRow user=user on_remove=on_remove/> }
                    />
                </Show>
            </ul>
        </div>
    }
}

/// One committed record: initials badge, identity line, note, local creation
/// time, and the delete button.
#[component]
fn UserRow(user: User, on_remove: Callback<User>) -> impl IntoView {
    let initials = format::initials(&user.first_name, &user.last_name);
    let full_name = format!("{} {}", user.first_name, user.last_name);
    let email = user.email.clone();
    let note = user.note.clone();
    let time = user
        .created
        .map(|ts| {
            let (hours, minutes) = dom::local_hours_minutes(ts);
            format::short_time(hours, minutes)
        })
        .unwrap_or_default();

    let on_delete = move |_| {
        if dom::confirm("Are you sure?") {
            on_remove.run(user.clone());
        }
    };

    view! {
        <li class="user-list__row">
            <div class="user-list__avatar">{initials}</div>
            <div class="user-list__body">
                <div class="user-list__name">
                    {full_name} " " <small class="user-list__email">{email}</small>
                </div>
                <div class="user-list__note">{note}</div>
            </div>
            <div class="user-list__time">{time}</div>
            <button class="user-list__delete" title="Remove user" on:click=on_delete>
                <svg viewBox="0 0 24 24" aria-hidden="true">
                    <path d="M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16"></path>
                </svg>
            </button>
        </li>
    }
}
