pub mod cached;
pub mod env;
pub mod static_provider;

pub use cached::CachedSecretProvider;
pub use env::EnvSecretProvider;
pub use static_provider::StaticSecretProvider;
