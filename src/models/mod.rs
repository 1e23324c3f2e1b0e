//! Data models representing database entities and wire types.

/// API key entity and request/response types
pub mod api_key;
