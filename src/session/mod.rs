//! The anonymous session identifier: minted once per browser, persisted under a fixed key, and
//! read back on every later visit.

mod session_id;

pub use session_id::{SessionId, SessionIdError};

use crate::stores::{KeyValueStore, StoreError};

/// The storage key the identifier lives under. Other code in the same origin reads this key
/// directly, so it must never change.
pub const SESSION_STORAGE_KEY: &str = "bilo_session_id";

/// Produces a new random UUID-v4 in its lowercase hyphenated text form.
pub fn generate_session_id() -> String {
    SessionId::random().to_string()
}

/// Returns the identifier persisted in `store`, creating and persisting a new one first if none
/// is present. Failures of the store are returned as-is.
///
/// An empty stored value counts as absent. With the `strict` feature enabled, any stored value
/// that isn't a valid UUID-v4 is also replaced; otherwise whatever is stored is returned verbatim.
pub fn get_session_id(store: &mut impl KeyValueStore) -> Result<String, StoreError> {
    if let Some(stored) = store.get_item(SESSION_STORAGE_KEY)? {
        if is_usable(&stored) {
            tracing::trace!("using stored session id");
            return Ok(stored);
        }

        tracing::debug!("discarding unusable stored session id: {stored:?}");
    }

    let session_id = generate_session_id();
    store.set_item(SESSION_STORAGE_KEY, &session_id)?;
    tracing::debug!("persisted new session id {session_id}");

    Ok(session_id)
}

fn is_usable(stored: &str) -> bool {
    if stored.is_empty() {
        return false;
    }

    if cfg!(feature = "strict") {
        return SessionId::parse(stored).is_ok();
    }

    true
}
