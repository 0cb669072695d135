use dioxus::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::components::{Head, Splash};
use crate::state::AppState;
use crate::views::{AuthLayout, Login, NotFound, Signup};

mod components;
mod state;
mod views;

/// The Route enum is used to define the structure of internal routes in our app. All route enums need to derive
/// the [`Routable`] trait, which provides the necessary methods for the router to work.
///
/// Both auth pages share [`AuthLayout`]. Anything else falls through to [`Route::NotFound`], which sends the
/// user to the login page.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AuthLayout)]
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Route to show instead of this one, if it should not render on its own.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            Route::NotFound { .. } => Some(Route::Login {}),
            Route::Login {} | Route::Signup {} => None,
        }
    }
}

fn main() {
    let dotenv_path = dotenv::dotenv().ok();
    init_tracing();
    if let Some(path) = dotenv_path {
        info!("Loaded environment variables from {}", path.display());
    }

    #[cfg(feature = "desktop")]
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus_desktop::Config::new()
                .with_window(dioxus_desktop::WindowBuilder::new().with_title("EmSana")),
        )
        .launch(App);

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("tracing subscriber already installed: {err}");
    }
}

#[component]
fn App() -> Element {
    let mut app_state_ready = use_signal(|| false);
    use_future(move || async move {
        let state = match AppState::load().await {
            Ok(state) => state,
            Err(err) => {
                warn!("failed to load config, using defaults: {err:#}");
                AppState::default()
            }
        };
        info!(locale = %state.config().locale, "app state ready");
        provide_context(state);
        app_state_ready.set(true);
    });

    if !app_state_ready() {
        return rsx! {
            Head {  }
            Splash {}
        };
    }

    rsx! {
        Head {  }
        Router::<Route> {}
    }
}
