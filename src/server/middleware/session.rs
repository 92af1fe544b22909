//! Type-safe session management wrappers.
//!
//! This module provides a type-safe interface for the authentication state
//! kept in the session. Wrapping the raw `Session` prevents key typos,
//! ensures type consistency, and centralizes session-related logic.

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles user authentication state: storing and retrieving the
/// authenticated user's id and clearing the session on logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session.
    ///
    /// Called after successful login to establish a logged-in session.
    ///
    /// # Arguments
    /// - `user_id` - The user's id
    ///
    /// # Returns
    /// - `Ok(())` - User id successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the user's id from the session.
    ///
    /// Used to identify the currently authenticated user.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<String>, AppError> {
        let user_id = self.session.get::<String>(SESSION_AUTH_USER_ID).await?;

        Ok(user_id)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove the authentication state.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
