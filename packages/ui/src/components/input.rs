use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] name: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    #[props(default)] min: String,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            id: if !id.is_empty() { "{id}" },
            name: if !name.is_empty() { "{name}" },
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            value: "{value}",
            min: if !min.is_empty() { "{min}" },
            disabled,
            required,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn TextArea(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default = 3)] rows: u32,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        textarea {
            class: "input textarea {class}",
            id: if !id.is_empty() { "{id}" },
            placeholder: "{placeholder}",
            rows: "{rows}",
            value: "{value}",
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Label(#[props(default)] html_for: String, #[props(default)] required: bool, children: Element) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: "{html_for}",
            {children}
            if required {
                span { class: "label__required", " *" }
            }
        }
    }
}

/// Labelled form row.
#[component]
pub fn Field(
    label: String,
    html_for: String,
    #[props(default)] required: bool,
    #[props(default)] hint: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "field",
            Label { html_for: html_for.clone(), required, "{label}" }
            {children}
            if !hint.is_empty() {
                p { class: "field__hint", "{hint}" }
            }
        }
    }
}
