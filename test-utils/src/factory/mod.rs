//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create with all dependencies
//!     let (guest, hotel, room, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::user::UserFactory::new(&db)
//!     .email("owner@example.com")
//!     .role("owner")
//!     .build()
//!     .await?;
//!
//! let room = factory::room::RoomFactory::new(&db, &hotel.id)
//!     .price_per_night(5000.0)
//!     .max_occupancy(4)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities (customers and owners)
//! - `hotel` - Create hotel entities
//! - `room` - Create room entities
//! - `booking` - Create booking entities
//! - `review` - Create review entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod booking;
pub mod helpers;
pub mod hotel;
pub mod review;
pub mod room;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use hotel::create_hotel;
pub use review::create_review;
pub use room::create_room;
pub use user::{create_owner, create_user};
