//! Dialog shell shared by every modal.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ModalProps {
    pub title: String,
    /// Tailwind max-width class for the panel
    #[props(default = "max-w-lg".to_string())]
    pub size: String,
    pub on_close: EventHandler<()>,
    pub children: Element,
    /// Optional footer row (buttons)
    #[props(default)]
    pub footer: Option<Element>,
}

/// Centered dialog with a backdrop. Clicking the backdrop closes it.
#[component]
pub fn Modal(props: ModalProps) -> Element {
    let on_close = props.on_close;

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-panel {props.size}",
                role: "dialog",
                "aria-modal": "true",
                // Keep clicks inside the panel from reaching the backdrop
                onclick: move |evt| evt.stop_propagation(),
                div { class: "flex items-center justify-between px-6 py-4 border-b",
                    h3 { class: "text-lg font-semibold", "{props.title}" }
                    button {
                        class: "text-gray-400 hover:text-gray-700 text-2xl leading-none",
                        r#type: "button",
                        "aria-label": "Kapat",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "px-6 py-4",
                    {props.children}
                }
                if let Some(footer) = props.footer.clone() {
                    div { class: "flex flex-wrap justify-end gap-2 px-6 py-4 border-t",
                        {footer}
                    }
                }
            }
        }
    }
}
