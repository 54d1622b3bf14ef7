use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const ROLE_ADMIN: &str = "Admin";
pub const ROLE_USER: &str = "User";

fn validate_role(role: &str) -> Result<(), ValidationError> {
    if role == ROLE_ADMIN || role == ROLE_USER {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_role"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "validate_role"))]
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "validate_role"))]
    pub role: String,
}
