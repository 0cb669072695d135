use std::{fmt, str::FromStr};

use super::{FormError, UnknownRoleSnafu};
use crate::locale::Locale;

/// Who is signing up. The signup form offers exactly these two choices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Patient,
    Doctor,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Patient, Role::Doctor];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match self {
            Role::Patient => locale.strings().patient,
            Role::Doctor => locale.strings().doctor,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient" => Ok(Role::Patient),
            "doctor" => Ok(Role::Doctor),
            other => UnknownRoleSnafu { value: other }.fail(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names_only() {
        assert_eq!("patient".parse::<Role>().unwrap(), Role::Patient);
        assert_eq!("doctor".parse::<Role>().unwrap(), Role::Doctor);
        assert!("".parse::<Role>().is_err());
        assert!("nurse".parse::<Role>().is_err());
        for role in Role::ALL {
            assert_eq!(role.to_string(), role.name());
        }
    }

    #[test]
    fn labels_are_localized() {
        assert_eq!(Role::Doctor.label(Locale::En), "Doctor");
        assert_eq!(Role::Doctor.label(Locale::Ru), "Врач");
    }
}
