pub use super::booking::Entity as Booking;
pub use super::hotel::Entity as Hotel;
pub use super::review::Entity as Review;
pub use super::room::Entity as Room;
pub use super::user::Entity as User;
