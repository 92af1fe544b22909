use crate::server::{
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::user::{Role, SignupParams},
    service::auth::AuthService,
};
use test_utils::builder::TestBuilder;

mod signup;

fn signup_params(email: &str) -> SignupParams {
    SignupParams {
        name: "Ana".to_string(),
        email: email.to_string(),
        password: "correct horse battery staple".to_string(),
        role: None,
        phone: None,
    }
}
