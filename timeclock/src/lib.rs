//--------------------------------------------------------------------------------------------------

mod claims;
mod guard;
mod resolver;
mod role;
mod store;
#[cfg(test)]
mod testutil;
mod token;
mod unixtime;

pub use claims::{Claims, EmployeeId};
pub use guard::{GuardDecision, Navigator, RouteGuard, LOGIN_PATH, UNAUTHORIZED_PATH};
pub use resolver::SessionResolver;
pub use role::Role;
pub use store::{StorageScope, StoreError, TokenStore};
pub use token::{decode_token, DecodeError, RawToken};
pub use unixtime::UnixTimestamp;

//--------------------------------------------------------------------------------------------------
