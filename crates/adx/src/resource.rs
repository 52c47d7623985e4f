//! Resource types managed by the provider.

pub mod table_mapping;
