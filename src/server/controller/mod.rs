//! HTTP request handlers.
//!
//! Controllers are thin: they check access through the `AuthGuard`, unwrap
//! the request payload, delegate to the service layer, and convert domain
//! models into wire DTOs inside the standard response envelope.

pub mod auth;
pub mod booking;
pub mod hotel;
pub mod review;
