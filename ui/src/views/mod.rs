//! The views module contains the components for all Layouts and Routes for our app. Each layout and route in our [`Route`]
//! enum will render one of these components.
//!
//! [`AuthLayout`] wraps both auth pages. [`NotFound`] renders nothing and redirects.

mod auth_layout;
mod login;
mod not_found;
mod signup;

pub use auth_layout::AuthLayout;
pub use login::Login;
pub use not_found::NotFound;
pub use signup::Signup;
