use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload: the subject id and email issued at register/login time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,     // user ID
    pub email: String, // user email
    pub iat: usize,    // issued at (unix timestamp)
    pub exp: usize,    // expires at (unix timestamp)
}
