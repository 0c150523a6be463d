use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::resume::application::ports::outgoing::{
    ParsingError, ParsingResult, ResumeParsingPort,
};
use crate::resume::domain::value_objects::{FileType, StorageKey};

/// Extraction provider answering from a script.
///
/// Results queued for a storage key are handed out first, in order. Anything
/// else gets the fallback result.
#[derive(Debug, Clone)]
pub struct StaticResumeParser {
    fallback: ParsingResult,
    scripted: Arc<Mutex<HashMap<StorageKey, VecDeque<ParsingResult>>>>,
    supported: Vec<FileType>,
    delay: Option<Duration>,
}

impl StaticResumeParser {
    pub fn new(fallback: ParsingResult) -> Self {
        Self {
            fallback,
            scripted: Arc::new(Mutex::new(HashMap::new())),
            supported: FileType::ALL.to_vec(),
            delay: None,
        }
    }

    /// Simulates a slow provider.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn supporting(mut self, file_types: &[FileType]) -> Self {
        self.supported = file_types.to_vec();
        self
    }

    /// Queues `result` for the next parse of `key`.
    pub fn script(&self, key: StorageKey, result: ParsingResult) {
        let mut scripted = self.scripted.lock().unwrap_or_else(|e| e.into_inner());
        scripted.entry(key).or_default().push_back(result);
    }

    fn next_result(&self, key: &StorageKey) -> ParsingResult {
        let mut scripted = self.scripted.lock().unwrap_or_else(|e| e.into_inner());
        scripted
            .get_mut(key)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| self.fallback.clone())
    }

    async fn wait(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl ResumeParsingPort for StaticResumeParser {
    async fn parse_resume(
        &self,
        storage_key: &StorageKey,
        file_type: FileType,
    ) -> Result<ParsingResult, ParsingError> {
        if !self.can_parse(file_type) {
            return Err(ParsingError::UnsupportedFileType(file_type));
        }
        self.wait().await;
        Ok(self.next_result(storage_key))
    }

    async fn parse_text(&self, raw_text: &str) -> Result<ParsingResult, ParsingError> {
        if raw_text.trim().is_empty() {
            return Ok(ParsingResult::failure("No text to parse"));
        }
        self.wait().await;
        Ok(self.fallback.clone())
    }

    fn can_parse(&self, file_type: FileType) -> bool {
        self.supported.contains(&file_type)
    }
}
