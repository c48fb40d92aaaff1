pub mod credentials;
pub mod lifecycle;
pub mod manager;
pub mod request;
pub mod token;

pub use credentials::Credentials;
pub use lifecycle::Lifecycle;
pub use manager::TokenManager;
pub use token::TokenState;
