use std::fmt;

/// Where the token manager is in its life.
///
/// ```text
/// Init --ok--> Authenticated --refresh ok/err--> Authenticated
/// Init --err--> Failed
/// Authenticated --shutdown--> Revoking --> Terminated
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Init,
    Authenticated,
    Failed,
    Revoking,
    Terminated,
}

impl Lifecycle {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Lifecycle::Failed | Lifecycle::Terminated)
    }

    /// Token exchanges are only allowed before the first failure or shutdown.
    pub fn accepts_exchange(&self) -> bool {
        matches!(self, Lifecycle::Init | Lifecycle::Authenticated)
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Lifecycle::Init => "init",
            Lifecycle::Authenticated => "authenticated",
            Lifecycle::Failed => "failed",
            Lifecycle::Revoking => "revoking",
            Lifecycle::Terminated => "terminated",
        };
        f.write_str(name)
    }
}
