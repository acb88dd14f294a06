//! Business logic services.
//!
//! Services contain the (thin) core logic separated from HTTP handlers:
//! degraded-mode policies, id assignment, and dispatch to the external
//! clients. They hold their dependencies as [`crate::Capability`] values
//! wired up once at startup.

pub mod notification_service;
pub mod transaction_service;

pub use notification_service::NotificationService;
pub use transaction_service::TransactionService;
