use parking_lot::RwLock;
use pmt_domain::user::User;
use std::sync::Arc;

/// Current login state, shared between clones of the client.
///
/// The original UI kept this in browser storage; here it lives in process
/// memory for the lifetime of the client.
#[derive(Default, Debug, Clone)]
pub(crate) struct Session {
    inner: Arc<RwLock<Option<User>>>,
}

impl Session {
    pub(crate) fn get(&self) -> Option<User> {
        self.inner.read().clone()
    }

    pub(crate) fn set(&self, user: Option<User>) {
        *self.inner.write() = user;
    }
}
