pub mod config;
pub mod form;
pub mod locale;

pub use config::Config;
pub use form::{FormError, IIN_MAX_LEN, Role, SignupField, SignupForm};
pub use locale::{Locale, Strings};
