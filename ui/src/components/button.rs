use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy)]
pub enum ButtonKind {
    Primary,
    Social,
}

#[derive(PartialEq, Clone, Props)]
pub struct ButtonProps {
    text: String,
    #[props(default = ButtonKind::Primary)]
    kind: ButtonKind,
}

fn class_for(kind: ButtonKind) -> &'static str {
    match kind {
        ButtonKind::Primary => "btn-primary",
        ButtonKind::Social => "btn-social",
    }
}

/// Form buttons of the auth pages. None of them has a handler attached:
/// submission is not part of these screens.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = class_for(props.kind);

    rsx! {
        button { r#type: "button", class: "{class}", "{props.text}" }
    }
}
