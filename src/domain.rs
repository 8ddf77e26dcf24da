/// Opaque token identifying a pending account activation.
/// The only requirement is that it is present.
#[derive(Debug, Clone)]
pub struct ActivationToken(String);

impl ActivationToken {
    pub fn parse(token: String) -> Result<ActivationToken, String> {
        if token.is_empty() {
            Err("The activation token is missing.".to_string())
        } else {
            Ok(Self(token))
        }
    }
}

impl AsRef<str> for ActivationToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
