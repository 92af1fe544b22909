//! Domain models for user accounts.

use chrono::{DateTime, Utc};

/// Account role controlling which operations a user may perform.
///
/// Customers place bookings and write reviews; owners manage the hotel and
/// room catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Owner,
}

impl Role {
    /// Returns the role's stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Owner => "owner",
        }
    }

    /// Parses a stored or user-supplied role value.
    ///
    /// # Returns
    /// - `Some(Role)` - Recognized role value
    /// - `None` - Unknown role value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "customer" => Some(Self::Customer),
            "owner" => Some(Self::Owner),
            _ => None,
        }
    }
}

/// User account with credentials and role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unique email address used for login.
    pub email: String,
    /// Salted password digest; never leaves the server.
    pub password_hash: String,
    /// Role controlling catalog vs. booking permissions.
    pub role: Role,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Timestamp when the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The stored role string is written exclusively through `Role::as_str`,
    /// so an unrecognized value falls back to the least-privileged role.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role: Role::parse(&entity.role).unwrap_or(Role::Customer),
            phone: entity.phone,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a new user account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    /// Display name.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Pre-computed salted password digest.
    pub password_hash: String,
    /// Role for the new account.
    pub role: Role,
    /// Optional contact phone number.
    pub phone: Option<String>,
}

/// Parameters accepted by the signup operation before credential processing.
#[derive(Debug, Clone)]
pub struct SignupParams {
    /// Display name.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Plaintext password; hashed before storage.
    pub password: String,
    /// Requested role value; defaults to customer when absent.
    pub role: Option<String>,
    /// Optional contact phone number.
    pub phone: Option<String>,
}
