use std::fmt;

use crate::utils::constants::DEFAULT_SCOPE;

/// Sign-in credentials, fixed for the process lifetime.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub client_id: String,
    pub scope: String,
    pub take_exclusive_sign_on_control: bool,
}

impl Credentials {
    pub fn new(username: &str, password: &str, client_id: &str) -> Self {
        Self {
            username: username.to_owned(),
            password: password.to_owned(),
            client_id: client_id.to_owned(),
            scope: DEFAULT_SCOPE.to_owned(),
            take_exclusive_sign_on_control: true,
        }
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = scope.to_owned();
        self
    }

    pub fn with_exclusive_sign_on(mut self, take_exclusive_sign_on_control: bool) -> Self {
        self.take_exclusive_sign_on_control = take_exclusive_sign_on_control;
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("client_id", &self.client_id)
            .field("scope", &self.scope)
            .field("take_exclusive_sign_on_control", &self.take_exclusive_sign_on_control)
            .finish()
    }
}
