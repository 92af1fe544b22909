use serde::{Deserialize, Serialize};

/// Request body for POST /api/auth/signup.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupDto {
    pub name: String,
    pub email: String,
    pub password: String,
    /// `"customer"` (default) or `"owner"`.
    pub role: Option<String>,
    pub phone: Option<String>,
}

/// Request body for POST /api/auth/login.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Account data returned by signup and GET /api/auth/user. The password hash
/// never leaves the server.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub phone: Option<String>,
}

/// Response body for POST /api/auth/login.
///
/// The session cookie set alongside this response carries the authentication;
/// only a summary of the account is echoed back.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    pub user: UserSummaryDto,
}

/// Reduced account shape embedded in the login response.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}
