//! Login Form Component
//!
//! Sign-in and registration form shown while no session is active.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let (registering, set_registering) = signal(false);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get().trim().to_string();
        let password = password.get();
        let name = name.get().trim().to_string();
        if email.is_empty() || password.is_empty() || (registering.get() && name.is_empty()) {
            set_error.set(Some("Please fill in all fields".into()));
            return;
        }

        let api = ctx.api();
        let register = registering.get();
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = if register {
                api.register(&name, &email, &password).await
            } else {
                api.login(&email, &password).await
            };
            set_submitting.set(false);
            match result {
                Ok(auth) => {
                    set_password.set(String::new());
                    ctx.sign_in(auth.user);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=submit>
                <h1>{move || if registering.get() { "Create account" } else { "Sign in" }}</h1>

                <Show when=move || registering.get()>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </Show>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <button type="submit" disabled=move || submitting.get()>
                    {move || match (submitting.get(), registering.get()) {
                        (true, _) => "Please wait...",
                        (false, true) => "Register",
                        (false, false) => "Login",
                    }}
                </button>
                <button
                    type="button"
                    class="link-btn"
                    on:click=move |_| {
                        set_error.set(None);
                        set_registering.update(|r| *r = !*r);
                    }
                >
                    {move || if registering.get() { "Have an account? Sign in" } else { "No account? Register" }}
                </button>
            </form>
        </div>
    }
}
