use std::{fmt, str::FromStr};

use super::{FormError, UnknownFieldSnafu};
use crate::locale::Locale;

/// Maximum length of an IIN, enforced by the input surface.
pub const IIN_MAX_LEN: usize = 12;

/// The closed set of fields on the signup form, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SignupField {
    Email,
    FirstName,
    LastName,
    Iin,
    Role,
    Password,
}

impl SignupField {
    pub const ALL: [SignupField; 6] = [
        SignupField::Email,
        SignupField::FirstName,
        SignupField::LastName,
        SignupField::Iin,
        SignupField::Role,
        SignupField::Password,
    ];

    /// Wire name of the field, also used as the DOM id of its control.
    pub fn name(&self) -> &'static str {
        match self {
            SignupField::Email => "email",
            SignupField::FirstName => "first_name",
            SignupField::LastName => "last_name",
            SignupField::Iin => "iin",
            SignupField::Role => "role",
            SignupField::Password => "password",
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        let strings = locale.strings();
        match self {
            SignupField::Email => strings.email,
            SignupField::FirstName => strings.first_name,
            SignupField::LastName => strings.last_name,
            SignupField::Iin => strings.iin,
            SignupField::Role => strings.role,
            SignupField::Password => strings.password,
        }
    }

    pub fn hint(&self, locale: Locale) -> Option<&'static str> {
        match self {
            SignupField::Iin => Some(locale.strings().iin_hint),
            _ => None,
        }
    }

    /// Upper bound on the value length accepted by the control, if any.
    pub fn max_len(&self) -> Option<usize> {
        match self {
            SignupField::Iin => Some(IIN_MAX_LEN),
            _ => None,
        }
    }

    /// Virtual keyboard hint for the control.
    pub fn input_mode(&self) -> Option<&'static str> {
        match self {
            SignupField::Iin => Some("numeric"),
            _ => None,
        }
    }

    /// HTML input type of the control. `role` is rendered as a select instead.
    pub fn input_type(&self) -> &'static str {
        match self {
            SignupField::Email => "email",
            SignupField::Password => "password",
            _ => "text",
        }
    }
}

impl fmt::Display for SignupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignupField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignupField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownFieldSnafu { name: s }.build())
    }
}
