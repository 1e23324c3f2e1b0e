//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They validate input, call the key generator, and delegate persistence
//! to the injected store.

pub mod key_service;
pub mod validation_service;
