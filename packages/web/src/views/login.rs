//! Login page view with the username/password form.

use dioxus::prelude::*;
use ui::use_auth;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, redirect to the dashboard
    if !auth().loading && auth().admin.is_some() {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/dashboard");
            }
        }
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let p = password();

            if u.is_empty() || p.is_empty() {
                error.set(Some("Username and password are required".to_string()));
                return;
            }

            loading.set(true);
            match api::login(u, p).await {
                Ok(admin) => {
                    let mut state = auth();
                    state.admin = Some(admin);
                    state.loading = false;
                    auth.set(state);
                    #[cfg(target_arch = "wasm32")]
                    {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/dashboard");
                        }
                    }
                }
                Err(_) => {
                    loading.set(false);
                    // One generic line regardless of the cause.
                    error.set(Some("Invalid credentials. Please try again.".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-page",

            div {
                class: "login-card",

                h1 { class: "login-title", "Verification Console" }
                p { class: "login-subtitle", "Sign in to manage organization verifications" }

                form {
                    onsubmit: handle_login,
                    class: "login-form",

                    if let Some(err) = error() {
                        div {
                            class: "login-error",
                            "{err}"
                        }
                    }

                    input {
                        class: "login-input",
                        r#type: "text",
                        placeholder: "Username",
                        autocomplete: "username",
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }

                    input {
                        class: "login-input",
                        r#type: "password",
                        placeholder: "Password",
                        autocomplete: "current-password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary login-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
