//! Shared data model for the PropOut client.
//!
//! Everything here mirrors the backend's wire format; records are created and
//! mutated by the backend only, the client treats them as read-only.

pub mod booking;
pub mod filters;
pub mod property;

pub use booking::{BookingReceipt, BookingRequest};
pub use filters::PropertyFilters;
pub use property::{MediaItem, MediaKind, Property, PropertyStatus};
