//! User Login Component
//!
//! Shown while nobody is signed in. Looks a user up by email and, if there is
//! none, asks for a name and registers a new one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::NewUser;

/// Username derived from the local part of an email address
pub fn username_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[component]
pub fn UserLogin() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (needs_name, set_needs_name) = signal(false);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() { return; }

        let email_value = email.get().trim().to_string();
        let name_value = name.get().trim().to_string();
        let registering = needs_name.get();
        if email_value.is_empty() || (registering && name_value.is_empty()) {
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            let result = if registering {
                let new_user = NewUser {
                    name: &name_value,
                    username: username_from_email(&email_value),
                    email: &email_value,
                    phone: "",
                };
                api::create_user(&new_user).await.map(Some)
            } else {
                api::find_user_by_email(&email_value).await
            };
            set_loading.set(false);

            match result {
                Ok(Some(user)) => {
                    log::info!("[LOGIN] Signed in as user {}", user.id);
                    ctx.set_user(user);
                }
                Ok(None) => set_needs_name.set(true),
                Err(e) => ctx.report("LOGIN", e),
            }
        });
    };

    view! {
        <form class="user-login box" on:submit=on_submit>
            <h1 class="title is-3">"You need to sign in"</h1>

            <div class="field">
                <label class="label" for="user-email">"Email"</label>
                <input
                    id="user-email"
                    type="email"
                    class="input"
                    placeholder="Enter your email"
                    disabled=move || needs_name.get()
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || needs_name.get()>
                <div class="field">
                    <label class="label" for="user-name">"Your name"</label>
                    <input
                        id="user-name"
                        type="text"
                        class="input"
                        placeholder="Enter your name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
            </Show>

            <button
                type="submit"
                class=move || if loading.get() { "button is-primary is-loading" } else { "button is-primary" }
            >
                {move || if needs_name.get() { "Register" } else { "Login" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_from_email() {
        assert_eq!(username_from_email("ann.lee@example.com"), "ann.lee");
        assert_eq!(username_from_email("plain"), "plain");
    }
}
