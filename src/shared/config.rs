// src/shared/config.rs

/// Name of the active runtime environment (`RUST_ENV`), defaulting to "development".
pub fn runtime_env() -> String {
    std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string())
}

/// Loads environment variables from `.env.{RUST_ENV}` first, then falls back to `.env`.
///
/// Missing files are not an error: values may come from the process environment.
/// Returns the file that was loaded, if any.
pub fn load_env() -> Option<String> {
    let env_file = format!(".env.{}", runtime_env());
    if dotenvy::from_filename(&env_file).is_ok() {
        return Some(env_file);
    }

    dotenvy::dotenv()
        .ok()
        .map(|path| path.display().to_string())
}

/// Reads a variable and parses it, ignoring blank or malformed values.
pub fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| raw.parse().ok())
}

/// Reads a non-blank string variable.
pub fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}
