use crate::claims::Claims;
use crate::store::TokenStore;
use crate::token::decode_token;
use std::sync::Arc;
use tracing::{debug, info};

//--------------------------------------------------------------------------------------------------
// Session Resolver
//--------------------------------------------------------------------------------------------------

// Answers "who is signed in right now". Called on every navigation, so it must stay cheap and
// synchronous. A token that can't be decoded or has expired is purged on the spot - it is useless
// and must not linger in storage.

pub struct SessionResolver {
    store: Arc<TokenStore>,
}

impl SessionResolver {
    pub fn new(store: Arc<TokenStore>) -> Self {
        SessionResolver { store }
    }

    pub fn current_user(&self) -> Option<Claims> {
        let token = self.store.read()?;

        let claims = match decode_token(&token) {
            Ok(claims) => claims,
            Err(_) => {
                info!("Purging undecodable stored token");
                self.store.clear();
                return None;
            }
        };

        if claims.expiry().is_past() {
            info!("Session for employee {} expired - purging token", claims.employee_id());
            self.store.clear();
            return None;
        }

        debug!("Session resolved for employee {}", claims.employee_id());

        Some(claims)
    }
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use crate::store::StorageScope;
    use crate::testutil::mint_for_role;
    use crate::token::RawToken;
    use crate::unixtime::UnixTimestamp;

    fn resolver() -> (tempfile::TempDir, Arc<TokenStore>, SessionResolver) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(TokenStore::new(dir.path()));
        let resolver = SessionResolver::new(store.clone());
        (dir, store, resolver)
    }

    #[test]
    fn no_token_means_no_user() {
        let (_dir, _store, resolver) = resolver();
        assert!(resolver.current_user().is_none());
    }

    #[test]
    fn valid_token_resolves_to_its_claims() {
        let (_dir, store, resolver) = resolver();
        let token = mint_for_role("hr", UnixTimestamp::now().plus_seconds(3600));
        store.save(token, StorageScope::Ephemeral).unwrap();

        let user = resolver.current_user().unwrap();
        assert_eq!(user.role(), Role::Hr);
        assert_eq!(user.display_name(), "Ana");
    }

    #[test]
    fn expired_token_resolves_absent_and_purges() {
        let (_dir, store, resolver) = resolver();
        let token = mint_for_role("employee", UnixTimestamp::now().plus_seconds(-1));
        store.save(token, StorageScope::Persistent).unwrap();

        assert!(resolver.current_user().is_none());
        assert_eq!(store.read(), None);
    }

    #[test]
    fn malformed_token_resolves_absent_and_purges() {
        let (_dir, store, resolver) = resolver();
        store
            .save(RawToken::new("not-a-token".to_string()), StorageScope::Persistent)
            .unwrap();

        assert!(resolver.current_user().is_none());
        assert_eq!(store.read(), None);
    }
}

//--------------------------------------------------------------------------------------------------
