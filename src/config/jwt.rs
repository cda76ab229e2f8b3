use std::env;

/// Signing secret and token lifetime for the token codec.
///
/// Both values are mandatory: a missing `JWT_SECRET` or `JWT_EXPIRES_IN`
/// aborts startup rather than falling back to a guessable default.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

impl JwtConfig {
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` or `JWT_EXPIRES_IN` is unset or unparseable.
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            expires_in: env::var("JWT_EXPIRES_IN")
                .expect("JWT_EXPIRES_IN must be set")
                .parse()
                .expect("JWT_EXPIRES_IN must be a number of seconds"),
        }
    }
}
