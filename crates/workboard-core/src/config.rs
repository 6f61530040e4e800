/// Trait for loading configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; each field maps to the upper-case
/// env var `{PREFIX}{FIELD}` (e.g. `api_url` with prefix `WORKBOARD_` reads
/// `WORKBOARD_API_URL`).
pub trait Config: Sized + serde::de::DeserializeOwned {
    /// Env var prefix. Empty by default.
    const PREFIX: &'static str = "";

    fn try_from_env() -> Result<Self, envy::Error> {
        envy::prefixed(Self::PREFIX).from_env()
    }

    /// # Panics
    ///
    /// Panics if any required env var is missing or cannot be deserialized.
    fn from_env() -> Self {
        Self::try_from_env().expect("failed to load config from environment")
    }
}
