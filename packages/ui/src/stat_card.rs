use dioxus::prelude::*;

/// Dashboard summary card.
#[component]
pub fn StatCard(
    title: String,
    value: usize,
    caption: String,
    #[props(default = "stat-card".to_string())] class: String,
) -> Element {
    rsx! {
        div {
            class: "{class}",
            div { class: "stat-card-title", "{title}" }
            div { class: "stat-card-value", "{value}" }
            div { class: "stat-card-caption", "{caption}" }
        }
    }
}
