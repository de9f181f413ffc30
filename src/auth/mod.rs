mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, issue_access_token, validate_token};
pub use middleware::{AuthError, RequireAdmin, RequireAuth};
pub use password::{hash_password, verify_password};
