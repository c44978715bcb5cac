use contracts::auth::{LoginRequest, RegisterRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::system::auth::{api, complete_login, context::use_auth};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();

    let (mode, set_mode) = signal(Mode::Login);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let submit = move |_| {
        if username.get().trim().is_empty() || password.get().trim().is_empty() {
            set_error.set(Some("Username and password are required".to_string()));
            return;
        }

        set_busy.set(true);
        set_error.set(None);

        let current_mode = mode.get_untracked();
        spawn_local(async move {
            let result = match current_mode {
                Mode::Login => {
                    let request = LoginRequest {
                        username: username.get_untracked(),
                        password: password.get_untracked(),
                    };
                    api::login(&request).await
                }
                Mode::Register => {
                    let request = RegisterRequest {
                        username: username.get_untracked(),
                        email: email.get_untracked(),
                        full_name: full_name.get_untracked(),
                        password: password.get_untracked(),
                    };
                    api::register(&request).await
                }
            };

            match result {
                Ok(response) => complete_login(set_auth_state, &response),
                Err(e) => {
                    set_error.set(Some(e));
                    set_busy.set(false);
                }
            }
        });
    };

    let switch_mode = move |next: Mode| {
        set_mode.set(next);
        set_error.set(None);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__brand">
                    {icon("inventory")}
                    <h1>"Inventory"</h1>
                </div>

                <div class="login-card__tabs">
                    <button
                        class=move || if mode.get() == Mode::Login { "tab tab--active" } else { "tab" }
                        on:click=move |_| switch_mode(Mode::Login)
                    >
                        "Sign In"
                    </button>
                    <button
                        class=move || if mode.get() == Mode::Register { "tab tab--active" } else { "tab" }
                        on:click=move |_| switch_mode(Mode::Register)
                    >
                        "Register"
                    </button>
                </div>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <label for="login-username">"Username"</label>
                    <input
                        id="login-username"
                        type="text"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </div>

                <Show when=move || mode.get() == Mode::Register>
                    <div class="form__group">
                        <label for="login-email">"Email"</label>
                        <input
                            id="login-email"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label for="login-full-name">"Full name"</label>
                        <input
                            id="login-full-name"
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </div>
                </Show>

                <div class="form__group">
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>

                <button
                    class="button button--primary button--block"
                    on:click=submit
                    disabled=move || busy.get()
                >
                    {move || match (busy.get(), mode.get()) {
                        (true, _) => "Please wait...",
                        (false, Mode::Login) => "Sign In",
                        (false, Mode::Register) => "Create Account",
                    }}
                </button>
            </div>
        </div>
    }
}
