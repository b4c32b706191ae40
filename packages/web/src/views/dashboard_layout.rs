//! Shared chrome for the dashboard pages: navigation, admin identity, logout,
//! and the unauthenticated-visitor gate.

use dioxus::prelude::*;
use ui::{use_auth, LogoutButton};

use crate::Route;

#[component]
pub fn DashboardLayout() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();

    // Unauthenticated visitors go to the login page
    if !auth().loading && auth().admin.is_none() {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    }

    let link_class = |target: &Route| {
        if route == *target {
            "nav-link nav-link-active"
        } else {
            "nav-link"
        }
    };

    rsx! {
        div {
            class: "dashboard-shell",

            header {
                class: "dashboard-header",
                span { class: "dashboard-brand", "Verification Console" }

                nav {
                    class: "dashboard-nav",
                    Link {
                        class: link_class(&Route::Dashboard {}),
                        to: Route::Dashboard {},
                        "All organizations"
                    }
                    Link {
                        class: link_class(&Route::Pending {}),
                        to: Route::Pending {},
                        "Pending"
                    }
                    Link {
                        class: link_class(&Route::Approved {}),
                        to: Route::Approved {},
                        "Approved"
                    }
                }

                div {
                    class: "dashboard-identity",
                    if let Some(admin) = auth().admin {
                        span { class: "dashboard-admin", "{admin.username}" }
                    }
                    LogoutButton { class: "btn btn-outline" }
                }
            }

            main {
                class: "dashboard-main",
                Outlet::<Route> {}
            }
        }
    }
}
