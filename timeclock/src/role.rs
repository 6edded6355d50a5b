use serde::Deserialize;
use std::fmt::Display;

//--------------------------------------------------------------------------------------------------
// Role enumeration
//--------------------------------------------------------------------------------------------------

// The backend issues tokens with one of exactly these tags. Tags are normalized at issuance, so
// comparison is exact - an unknown or differently-cased tag fails deserialization and the token
// is rejected as malformed rather than silently matched.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Employee,
    Hr,
    Admin,
}

impl Role {
    pub fn tag(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Hr => "hr",
            Role::Admin => "admin",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "employee" => Some(Role::Employee),
            "hr" => Some(Role::Hr),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub(crate) fn in_role_set(&self, role_set: &[Role]) -> bool {
        role_set.iter().any(|role| role == self)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag: String = Deserialize::deserialize(deserializer)?;

        Role::from_tag(&tag).ok_or_else(|| serde::de::Error::custom("unrecognised role tag"))
    }
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for role in [Role::Employee, Role::Hr, Role::Admin] {
            assert_eq!(Role::from_tag(role.tag()), Some(role));
        }
    }

    #[test]
    fn unknown_and_miscased_tags_are_rejected() {
        assert_eq!(Role::from_tag("manager"), None);
        assert_eq!(Role::from_tag("Admin"), None);
        assert_eq!(Role::from_tag(""), None);
    }

    #[test]
    fn role_set_membership() {
        assert!(Role::Hr.in_role_set(&[Role::Hr, Role::Admin]));
        assert!(!Role::Employee.in_role_set(&[Role::Hr, Role::Admin]));
        assert!(!Role::Admin.in_role_set(&[]));
    }
}

//--------------------------------------------------------------------------------------------------
