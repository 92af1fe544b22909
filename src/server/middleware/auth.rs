use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Role, User},
};

/// A capability a handler can demand from the caller.
///
/// Permissions map roles to allowed actions in one place instead of scattering
/// role comparisons through the handlers: owners manage the catalog, customers
/// place bookings and write reviews.
pub enum Permission {
    /// Create hotels and rooms.
    ManageCatalog,
    /// Create, list, and cancel own bookings; review own stays.
    PlaceBookings,
}

impl Permission {
    /// Whether the given role grants this permission.
    fn granted_to(&self, role: Role) -> bool {
        match self {
            Self::ManageCatalog => matches!(role, Role::Owner),
            Self::PlaceBookings => matches!(role, Role::Customer),
        }
    }

    /// Short description used in access-denied diagnostics.
    fn describe(&self) -> &'static str {
        match self {
            Self::ManageCatalog => "manage the hotel catalog",
            Self::PlaceBookings => "place bookings",
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let auth_session = AuthSession::new(self.session);
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = auth_session.get_user_id().await? else {
            return Err(AuthError::NotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(&user_id).await? else {
            return Err(AuthError::UnknownUser(user_id).into());
        };

        for permission in permissions {
            if !permission.granted_to(user.role) {
                return Err(AuthError::AccessDenied {
                    user_id: user.id.clone(),
                    reason: format!(
                        "role '{}' may not {}",
                        user.role.as_str(),
                        permission.describe()
                    ),
                }
                .into());
            }
        }

        Ok(user)
    }
}
