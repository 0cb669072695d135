use dioxus::prelude::*;

use crate::{
    components::{Button, ButtonKind, Input},
    state::AppState,
    Route,
};

/// Static login form. Inputs are uncontrolled and no button has a handler.
#[component]
pub fn Login() -> Element {
    let state = use_context::<AppState>();
    let config = state.config();
    let strings = config.locale.strings();
    let title = format!("{} {}", strings.login_title, config.brand_name);

    rsx! {
        div { class: "auth-card",
            h1 { class: "auth-title", "{title}" }
            Input {
                id: Some("login-email".to_string()),
                r#type: "email",
                placeholder: strings.email,
                autocomplete: "email",
            }
            Input {
                id: Some("login-password".to_string()),
                r#type: "password",
                placeholder: strings.password,
                autocomplete: "current-password",
            }
            Button { kind: ButtonKind::Primary, text: strings.login_button.to_string() }
            a { href: "#", class: "forgot-link", {strings.forgot_password} }
            div { class: "social-row",
                Button { kind: ButtonKind::Social, text: "Google".to_string() }
                Button { kind: ButtonKind::Social, text: "Facebook".to_string() }
            }
            p { class: "auth-footer",
                {strings.no_account}
                " "
                Link { to: Route::Signup {}, class: "link", {strings.sign_up_link} }
            }
        }
    }
}
