use crate::role::Role;
use crate::unixtime::UnixTimestamp;
use serde::Deserialize;
use std::fmt::Display;

//--------------------------------------------------------------------------------------------------
// Employee identifier
//--------------------------------------------------------------------------------------------------

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmployeeId(i64);

impl Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//--------------------------------------------------------------------------------------------------
// Session claims object
//--------------------------------------------------------------------------------------------------

// Only ever assembled by decoding a backend-issued token; the client never mints claims itself

#[derive(Deserialize, Clone, Debug)]
pub struct Claims {
    sub: EmployeeId,
    email: String,
    role: Role,
    name: String,
    exp: UnixTimestamp,
}

impl Claims {
    pub fn employee_id(&self) -> EmployeeId {
        self.sub
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn display_name(&self) -> &str {
        &self.name
    }

    pub fn expiry(&self) -> UnixTimestamp {
        self.exp
    }
}

//--------------------------------------------------------------------------------------------------
