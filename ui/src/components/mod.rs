//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, forms, and modals.

mod button;
mod head;
mod input;
mod role_select;
mod splash;

pub use button::Button;
pub use button::ButtonKind;
pub use head::Head;
pub use input::Input;
pub use role_select::RoleSelect;
pub use splash::Splash;
