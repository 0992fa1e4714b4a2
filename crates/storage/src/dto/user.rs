use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::User;

/// Request payload for registering a new user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Surname must be between 1 and 255 characters"
    ))]
    pub surname: String,

    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub age: i32,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            surname: user.surname,
            age: user.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, surname: &str, age: i32) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            surname: surname.to_string(),
            age,
        }
    }

    #[test]
    fn test_valid_user_passes() {
        assert!(request("Ivan", "Petrov", 30).validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let errors = request("", "Petrov", 30).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_age_out_of_range_is_rejected() {
        let errors = request("Ivan", "Petrov", -1).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("age"));

        let errors = request("Ivan", "Petrov", 151).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("age"));
    }
}
