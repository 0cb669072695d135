//! Controlled state of the signup form.
//!
//! A [`SignupForm`] holds one string per [`SignupField`]. Edits never mutate a
//! form in place: [`SignupForm::with_field`] returns a new form that differs
//! from the old one in exactly one field, which is what the view stores back
//! into its signal.

mod field;
mod role;

use snafu::Snafu;

pub use self::field::{IIN_MAX_LEN, SignupField};
pub use self::role::Role;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum FormError {
    #[snafu(display("unknown signup field `{name}`"))]
    UnknownField { name: String },
    #[snafu(display("unknown role `{value}`"))]
    UnknownRole { value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    email: String,
    first_name: String,
    last_name: String,
    iin: String,
    role: String,
    password: String,
}

impl SignupForm {
    /// An empty form, as it is when the signup view mounts.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: SignupField) -> &str {
        match field {
            SignupField::Email => &self.email,
            SignupField::FirstName => &self.first_name,
            SignupField::LastName => &self.last_name,
            SignupField::Iin => &self.iin,
            SignupField::Role => &self.role,
            SignupField::Password => &self.password,
        }
    }

    /// Returns a copy of this form with `field` set to `value`.
    ///
    /// The value is stored as given. Length and charset limits belong to the
    /// control that produced it.
    pub fn with_field(&self, field: SignupField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.slot_mut(field) = value.into();
        next
    }

    /// Same as [`Self::with_field`] for callers holding a field name string.
    pub fn with_named_field(&self, name: &str, value: impl Into<String>) -> Result<Self, FormError> {
        let field = name.parse::<SignupField>()?;
        Ok(self.with_field(field, value))
    }

    /// All fields with their current values, in display order.
    pub fn fields(&self) -> impl Iterator<Item = (SignupField, &str)> + '_ {
        SignupField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// The selected role. `None` while unselected.
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }

    fn slot_mut(&mut self, field: SignupField) -> &mut String {
        match field {
            SignupField::Email => &mut self.email,
            SignupField::FirstName => &mut self.first_name,
            SignupField::LastName => &mut self.last_name,
            SignupField::Iin => &mut self.iin,
            SignupField::Role => &mut self.role,
            SignupField::Password => &mut self.password,
        }
    }
}
