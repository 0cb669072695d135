use dioxus::prelude::*;
use lib::{Locale, Role};

/// Choice between the two roles, plus an unselected placeholder.
///
/// `value` is the raw form value: empty while unselected, otherwise a role's
/// wire name. Only those three values can come out of `on_select`.
#[component]
pub fn RoleSelect(
    id: String,
    label: String,
    value: String,
    locale: Locale,
    on_select: EventHandler<String>,
) -> Element {
    let strings = locale.strings();

    rsx! {
        div { class: "field",
            label { r#for: "{id}", class: "field-label", {label} }
            select {
                id: "{id}",
                class: "input",
                value: "{value}",
                onchange: move |e| on_select.call(e.value()),
                option {
                    value: "",
                    disabled: true,
                    selected: value.is_empty(),
                    {strings.role_placeholder}
                }
                for role in Role::ALL {
                    option {
                        key: "{role}",
                        value: role.name(),
                        selected: value == role.name(),
                        {role.label(locale)}
                    }
                }
            }
        }
    }
}
