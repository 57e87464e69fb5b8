use crate::error::AppError;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Read the API key from the environment.
pub fn load_api_key() -> Result<String, AppError> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(AppError::Security(format!(
            "No API key configured. Set {API_KEY_ENV}."
        ))),
    }
}
