pub mod keys;
pub mod memory;
pub mod postgres;
pub mod records;

pub use memory::InMemoryItemStore;
pub use postgres::PostgresItemStore;
