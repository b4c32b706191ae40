use dioxus::prelude::*;

/// Full-screen overlay previewing a verification document.
///
/// Clicking outside the card closes it; clicks inside are swallowed. Views
/// supply their own footer actions as children (approve/reject on the pending
/// page, nothing on read-only pages).
#[component]
pub fn DocumentModal(
    document_url: String,
    organization_name: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            style: "position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.3); z-index: 2000;",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h2 { "Verification document" }
                    span { class: "modal-subtitle", "{organization_name}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "\u{00d7}"
                    }
                }
                div {
                    class: "modal-body",
                    img {
                        class: "modal-document",
                        src: "{document_url}",
                        alt: "Verification document for {organization_name}",
                    }
                }
                div {
                    class: "modal-footer",
                    {children}
                }
            }
        }
    }
}
