use std::time::Duration;

use crate::resume::domain::value_objects::{
    FileType, MAX_FILE_NAME_LEN, MAX_FILE_SIZE_BYTES, MIN_FILE_SIZE_BYTES,
};
use crate::shared::config::{env_parse, env_string};

#[derive(Debug, Clone)]
pub struct ResumePolicy {
    pub min_file_size_bytes: u64,
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    pub allowed_file_types: &'static [FileType],
    pub max_parse_retries: u32,
    pub parse_timeout: Duration,
    pub access_url_ttl_minutes: u32,
    pub bucket_name: String,
}

impl ResumePolicy {
    pub const DEFAULT_BUCKET_NAME: &'static str = "recruit-resume-upload";
    pub const DEFAULT_MAX_PARSE_RETRIES: u32 = 3;
    pub const DEFAULT_PARSE_TIMEOUT_SECS: u64 = 60;
    pub const DEFAULT_ACCESS_URL_TTL_MINUTES: u32 = 15;

    /// Reads overrides from the environment, falling back to defaults.
    ///
    /// `RESUME_MAX_PARSE_RETRIES`, `RESUME_PARSE_TIMEOUT_SECS`,
    /// `RESUME_ACCESS_URL_TTL_MINUTES`, `RESUME_STORAGE_BUCKET`
    pub fn from_env() -> Self {
        let defaults = Self::new(
            env_string("RESUME_STORAGE_BUCKET")
                .unwrap_or_else(|| Self::DEFAULT_BUCKET_NAME.to_string()),
        );

        Self {
            max_parse_retries: env_parse("RESUME_MAX_PARSE_RETRIES")
                .unwrap_or(defaults.max_parse_retries),
            parse_timeout: env_parse::<u64>("RESUME_PARSE_TIMEOUT_SECS")
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.parse_timeout),
            access_url_ttl_minutes: env_parse("RESUME_ACCESS_URL_TTL_MINUTES")
                .filter(|minutes| *minutes > 0)
                .unwrap_or(defaults.access_url_ttl_minutes),
            ..defaults
        }
    }

    /// No env reads. Handy for tests and custom wiring.
    pub fn new(bucket_name: String) -> Self {
        Self {
            min_file_size_bytes: MIN_FILE_SIZE_BYTES,
            max_file_size_bytes: MAX_FILE_SIZE_BYTES,
            max_file_name_len: MAX_FILE_NAME_LEN,
            allowed_file_types: &FileType::ALL,
            max_parse_retries: Self::DEFAULT_MAX_PARSE_RETRIES,
            parse_timeout: Duration::from_secs(Self::DEFAULT_PARSE_TIMEOUT_SECS),
            access_url_ttl_minutes: Self::DEFAULT_ACCESS_URL_TTL_MINUTES,
            bucket_name,
        }
    }

    pub fn allows(&self, file_type: FileType) -> bool {
        self.allowed_file_types.contains(&file_type)
    }
}

impl Default for ResumePolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BUCKET_NAME.to_string())
    }
}
