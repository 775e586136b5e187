use serde::{Deserialize, Serialize};

/// Request body for registration and login. Fields default to empty so a
/// missing field surfaces as a 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response returned after register or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub email: String,
}

/// Response for the profile route, answered purely from token claims.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_default_missing_fields_to_empty() {
        let req: CredentialsRequest = serde_json::from_str(r#"{"email":"a@b.co"}"#).unwrap();
        assert_eq!(req.email, "a@b.co");
        assert!(req.password.is_empty());

        let req: CredentialsRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());
    }

    #[test]
    fn auth_response_shape() {
        let res = AuthResponse {
            message: "Login successful".into(),
            token: "abc".into(),
            email: "a@b.co".into(),
        };
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["message"], "Login successful");
        assert_eq!(json["token"], "abc");
        assert_eq!(json["email"], "a@b.co");
    }
}
