pub mod in_memory_linked_account_store;
pub mod postgres_linked_account_store;

pub use in_memory_linked_account_store::InMemoryLinkedAccountStore;
pub use postgres_linked_account_store::PostgresLinkedAccountStore;
