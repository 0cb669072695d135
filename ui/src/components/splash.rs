use dioxus::prelude::*;

/// Shown while the app state loads, before the router mounts.
#[component]
pub fn Splash() -> Element {
    const LOGO: Asset = asset!("/assets/images/emsana-logo.svg");

    rsx! {
        div {
            class: "splash",
            img {
                class: "splash-logo",
                src: "{LOGO}",
                alt: "EmSana",
            }
        }
    }
}
