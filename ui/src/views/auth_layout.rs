use dioxus::prelude::*;

use crate::{state::AppState, Route};

const ILLUSTRATION: Asset = asset!("/assets/images/emsana-illustration.svg");

/// Two columns: the routed page on the left, the illustration on the right.
/// The illustration column is hidden on narrow windows.
#[component]
pub fn AuthLayout() -> Element {
    let state = use_context::<AppState>();
    let brand = state.config().brand_name.clone();

    rsx! {
        div { class: "auth-layout",
            div { class: "auth-form-column",
                Outlet::<Route> {}
            }
            div { class: "auth-illustration-column",
                img {
                    class: "auth-illustration",
                    src: "{ILLUSTRATION}",
                    alt: "{brand}",
                }
            }
        }
    }
}
