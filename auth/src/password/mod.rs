pub mod errors;
pub mod hasher;

pub use errors::PasswordError;
pub use hasher::DerivationParams;
pub use hasher::PasswordCredential;
pub use hasher::PasswordHasher;
