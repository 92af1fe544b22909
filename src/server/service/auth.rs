//! Account signup and credential verification.
//!
//! Passwords are stored as salted SHA-256 digests, base64-encoded as
//! `salt$digest`, and compared in constant time on login.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use constant_time_eq::constant_time_eq;
use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha256};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::user::{CreateUserParams, Role, SignupParams, User},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new account.
    ///
    /// The role defaults to customer when absent; an unrecognized role value
    /// is a validation failure rather than a silent downgrade.
    ///
    /// # Arguments
    /// - `params` - Signup fields with the plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError)` - Validation failure, duplicate email, or database error
    pub async fn signup(&self, params: SignupParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let role = match params.role {
            Some(value) => Role::parse(&value).ok_or(ValidationError::MalformedPayload)?,
            None => Role::Customer,
        };

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists.into());
        }

        let user = repo
            .create(CreateUserParams {
                name: params.name,
                email: params.email,
                password_hash: hash_password(&params.password),
                role,
                phone: params.phone,
            })
            .await?;

        Ok(user)
    }

    /// Verifies credentials and returns the account on success.
    ///
    /// An unknown email and a wrong password both surface as
    /// `InvalidCredentials`; the caller cannot tell which check failed.
    ///
    /// # Arguments
    /// - `email` - Login email address
    /// - `password` - Plaintext password to verify
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid
    /// - `Err(AppError)` - Invalid credentials or database error
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

/// Produces a `salt$digest` credential string from a plaintext password.
fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::random();
    let digest = digest_with_salt(&salt, password);

    format!("{}${}", BASE64.encode(salt), BASE64.encode(digest))
}

/// Checks a plaintext password against a stored `salt$digest` credential.
///
/// The digest comparison is constant-time; a malformed stored value never
/// verifies.
fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, digest)) = stored.split_once('$') else {
        return false;
    };
    let (Ok(salt), Ok(digest)) = (BASE64.decode(salt), BASE64.decode(digest)) else {
        return false;
    };

    constant_time_eq(&digest_with_salt(&salt, password), &digest)
}

fn digest_with_salt(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}
