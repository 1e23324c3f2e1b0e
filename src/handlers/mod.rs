//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Calls the appropriate service
//! 3. Returns HTTP response (JSON, status code)

/// Key lifecycle endpoints (`/apikeys`)
pub mod api_keys;
/// Service health endpoint
pub mod health;
/// Key validation endpoint (`/validate-key`)
pub mod validate;
