//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Delegates to a service
//! 3. Returns HTTP response (JSON, status code)
//!
//! Handlers are the ONLY place where typed errors get flattened into the
//! two legacy string contracts the mobile clients depend on.

/// Push notification endpoint
pub mod fcm;
/// Health check endpoint
pub mod health;
/// Transaction CRUD endpoints
pub mod transactions;
