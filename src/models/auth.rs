//! Authentication-related models

use serde::Deserialize;

/// Login request
///
/// Fields are optional on the wire: a missing field decodes to an empty
/// string, which then fails the credential comparison instead of being
/// rejected at the decoding layer.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_decode_to_empty() {
        let req: LoginRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.username, "");
        assert_eq!(req.password, "");
    }

    #[test]
    fn test_full_body_decodes() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"username":"admin","password":"password"}"#).unwrap();
        assert_eq!(req.username, "admin");
        assert_eq!(req.password, "password");
    }
}
