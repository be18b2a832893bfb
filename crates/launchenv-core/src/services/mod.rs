pub mod binding;
pub mod database;
pub mod group;

// Re-export public API
pub use binding::ServiceBinding;
pub use database::database_uri;
pub use group::ServiceGroup;
