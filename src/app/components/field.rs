//! Labelled form input.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TextFieldProps {
    pub label: String,
    pub value: String,
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default)]
    pub placeholder: String,
    pub on_input: EventHandler<String>,
}

#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let on_input = props.on_input;

    rsx! {
        label { class: "block mb-3",
            span { class: "block text-sm font-medium text-gray-700 mb-1",
                "{props.label}"
                if props.required {
                    span { class: "text-red-500", " *" }
                }
            }
            input {
                class: "input",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                required: props.required,
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}
