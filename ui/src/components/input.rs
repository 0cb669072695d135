use dioxus::prelude::*;

#[component]
pub fn Input(
    /// Optional label text shown above the input. Use `id` to associate the label with the input for accessibility.
    #[props(default = None)]
    label: Option<String>,
    /// Optional helper or description text shown below the input.
    #[props(default = None)]
    description: Option<String>,
    /// Optional id for the input element. When set, the label's `for` attribute is set so clicking the label focuses the input.
    #[props(default = None)]
    id: Option<String>,
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends=GlobalAttributes)]
    #[props(extends=input)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        div { class: "field",
            if let Some(ref label_text) = label {
                label {
                    r#for: id.as_deref().unwrap_or(""),
                    class: "field-label",
                    {label_text.clone()}
                }
            }
            input {
                id: id.as_deref(),
                class: "input",
                oninput: move |e| {
                    if let Some(callback) = oninput {
                        callback.call(e);
                    }
                },
                ..attributes,
            }
            if let Some(ref desc) = description {
                div { class: "field-description", {desc.clone()} }
            }
        }
    }
}
