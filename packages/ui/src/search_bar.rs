use dioxus::prelude::*;

/// Search input for the list pages. Purely client-side filtering; the parent
/// receives every keystroke.
#[component]
pub fn SearchBar(
    value: String,
    #[props(default = "Search organizations...".to_string())] placeholder: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "search-bar",
            input {
                r#type: "search",
                class: "search-input",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| on_change.call(evt.value()),
            }
        }
    }
}
