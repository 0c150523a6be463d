use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::resume::domain::errors::ResumeError;
use crate::resume::domain::events::{
    EventEnvelope, ResumeDeleted, ResumeEvent, ResumeParsingCompleted, ResumeParsingFailed,
    ResumeParsingStarted, ResumeUploaded,
};
use crate::resume::domain::status::ResumeStatus;
use crate::resume::domain::value_objects::{
    CandidateName, ContactInfo, Education, Experience, FileDescriptor, FileName, Skill, SkillLevel,
};

// ============================================================================
// ResumeId
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeId(Uuid);

impl ResumeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for ResumeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ResumeId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for ResumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ParsedProfile
// ============================================================================

/// Structured fields extracted from a résumé file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedProfile {
    pub candidate_name: Option<CandidateName>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub contact_info: Option<ContactInfo>,
    pub raw_text: Option<String>,
}

// ============================================================================
// Snapshot
// ============================================================================

/// Flat copy of the aggregate state, used by repositories to store and rebuild it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeSnapshot {
    pub id: ResumeId,
    pub owner: UserId,
    pub file: FileDescriptor,
    pub status: ResumeStatus,
    pub candidate_name: Option<CandidateName>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub contact_info: Option<ContactInfo>,
    pub parsed_at: Option<DateTime<Utc>>,
    pub parse_error: Option<String>,
    pub retry_count: u32,
    pub uploaded_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Resume aggregate
// ============================================================================

/// Aggregate root of the résumé lifecycle.
///
/// All state changes go through the methods below. Each method checks its
/// preconditions first, so a rejected call leaves the aggregate untouched.
/// Recorded events stay attached until [`Resume::pull_events`] drains them.
#[derive(Debug, Clone)]
pub struct Resume {
    id: ResumeId,
    owner: UserId,
    file: FileDescriptor,
    status: ResumeStatus,

    candidate_name: Option<CandidateName>,
    skills: Vec<Skill>,
    experiences: Vec<Experience>,
    educations: Vec<Education>,
    contact_info: Option<ContactInfo>,

    parsed_at: Option<DateTime<Utc>>,
    parse_error: Option<String>,
    retry_count: u32,

    uploaded_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,

    events: Vec<EventEnvelope>,
}

impl Resume {
    // -----------------------
    // Creation
    // -----------------------

    pub fn upload(owner: UserId, file: FileDescriptor) -> Self {
        let now = Utc::now();
        let mut resume = Self {
            id: ResumeId::new(),
            owner,
            file: file.clone(),
            status: ResumeStatus::Uploaded,
            candidate_name: None,
            skills: Vec::new(),
            experiences: Vec::new(),
            educations: Vec::new(),
            contact_info: None,
            parsed_at: None,
            parse_error: None,
            retry_count: 0,
            uploaded_at: now,
            updated_at: now,
            deleted_at: None,
            events: Vec::new(),
        };

        resume.record(ResumeEvent::Uploaded(ResumeUploaded {
            resume_id: resume.id,
            owner,
            file,
            uploaded_at: now,
        }));
        resume
    }

    /// Rebuilds an aggregate from stored state. No events are recorded.
    pub fn restore(snapshot: ResumeSnapshot) -> Self {
        Self {
            id: snapshot.id,
            owner: snapshot.owner,
            file: snapshot.file,
            status: snapshot.status,
            candidate_name: snapshot.candidate_name,
            skills: snapshot.skills,
            experiences: snapshot.experiences,
            educations: snapshot.educations,
            contact_info: snapshot.contact_info,
            parsed_at: snapshot.parsed_at,
            parse_error: snapshot.parse_error,
            retry_count: snapshot.retry_count,
            uploaded_at: snapshot.uploaded_at,
            updated_at: snapshot.updated_at,
            deleted_at: snapshot.deleted_at,
            events: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> ResumeSnapshot {
        ResumeSnapshot {
            id: self.id,
            owner: self.owner,
            file: self.file.clone(),
            status: self.status,
            candidate_name: self.candidate_name.clone(),
            skills: self.skills.clone(),
            experiences: self.experiences.clone(),
            educations: self.educations.clone(),
            contact_info: self.contact_info.clone(),
            parsed_at: self.parsed_at,
            parse_error: self.parse_error.clone(),
            retry_count: self.retry_count,
            uploaded_at: self.uploaded_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }

    // -----------------------
    // Parsing lifecycle
    // -----------------------

    pub fn start_parsing(&mut self) -> Result<(), ResumeError> {
        if !self.status.can_parse() {
            return Err(self.rejected("start parsing"));
        }

        let now = self.touch();
        self.status = ResumeStatus::Parsing;
        self.record(ResumeEvent::ParsingStarted(ResumeParsingStarted {
            resume_id: self.id,
            storage_key: self.file.storage_key().clone(),
            file_type: self.file.file_type(),
            started_at: now,
        }));
        Ok(())
    }

    /// Replaces the whole parsed profile. Skills repeating an earlier name are dropped.
    pub fn complete_parsing(
        &mut self,
        candidate_name: Option<CandidateName>,
        skills: Vec<Skill>,
        experiences: Vec<Experience>,
        educations: Vec<Education>,
        contact_info: Option<ContactInfo>,
    ) -> Result<(), ResumeError> {
        if self.status != ResumeStatus::Parsing {
            return Err(self.rejected("complete parsing"));
        }

        let received = skills.len();
        let mut unique: Vec<Skill> = Vec::with_capacity(received);
        for skill in skills {
            if !unique.contains(&skill) {
                unique.push(skill);
            }
        }
        if unique.len() < received {
            tracing::debug!(
                resume_id = %self.id,
                dropped = received - unique.len(),
                "Dropped duplicate skills from parsing result"
            );
        }

        let now = self.touch();
        self.status = ResumeStatus::Parsed;
        self.candidate_name = candidate_name;
        self.skills = unique;
        self.experiences = experiences;
        self.educations = educations;
        self.contact_info = contact_info;
        self.parse_error = None;
        self.parsed_at = Some(now);

        self.record(ResumeEvent::ParsingCompleted(ResumeParsingCompleted {
            resume_id: self.id,
            candidate_name: self.candidate_name.clone(),
            skill_count: self.skills.len(),
            experience_count: self.experiences.len(),
            parsed_at: now,
        }));
        Ok(())
    }

    /// Records a failed attempt. The retry ceiling is the caller's business.
    pub fn fail_parsing(&mut self, error_message: impl Into<String>) -> Result<(), ResumeError> {
        if self.status != ResumeStatus::Parsing {
            return Err(self.rejected("fail parsing"));
        }

        let error_message = error_message.into();
        let now = self.touch();
        self.status = ResumeStatus::ParseFailed;
        self.parse_error = Some(error_message.clone());
        self.retry_count = self.retry_count.saturating_add(1);

        self.record(ResumeEvent::ParsingFailed(ResumeParsingFailed {
            resume_id: self.id,
            error_message,
            retry_count: self.retry_count,
            failed_at: now,
        }));
        Ok(())
    }

    pub fn request_reparse(&mut self) -> Result<(), ResumeError> {
        if !self.status.can_reparse() {
            return Err(self.rejected("request a reparse"));
        }
        self.start_parsing()
    }

    // -----------------------
    // Profile editing
    // -----------------------

    pub fn add_skill(&mut self, skill: Skill) -> Result<(), ResumeError> {
        self.ensure_editable("add a skill")?;
        if self.skills.contains(&skill) {
            return Err(ResumeError::AlreadyExists(format!(
                "Skill '{}'",
                skill.name()
            )));
        }

        self.skills.push(skill);
        self.touch();
        Ok(())
    }

    pub fn remove_skill(&mut self, name: &str) -> Result<Skill, ResumeError> {
        self.ensure_editable("remove a skill")?;
        let index = self
            .skills
            .iter()
            .position(|s| s.has_name(name))
            .ok_or_else(|| ResumeError::NotFound(format!("Skill '{}'", name.trim())))?;

        self.touch();
        Ok(self.skills.remove(index))
    }

    pub fn add_experience(&mut self, experience: Experience) -> Result<(), ResumeError> {
        self.ensure_editable("add an experience")?;
        self.experiences.push(experience);
        self.touch();
        Ok(())
    }

    pub fn remove_experience(&mut self, experience: &Experience) -> Result<(), ResumeError> {
        self.ensure_editable("remove an experience")?;
        let index = self
            .experiences
            .iter()
            .position(|e| e == experience)
            .ok_or_else(|| {
                ResumeError::NotFound(format!(
                    "Experience '{} at {}'",
                    experience.position(),
                    experience.company()
                ))
            })?;

        self.experiences.remove(index);
        self.touch();
        Ok(())
    }

    pub fn add_education(&mut self, education: Education) -> Result<(), ResumeError> {
        self.ensure_editable("add an education")?;
        self.educations.push(education);
        self.touch();
        Ok(())
    }

    pub fn remove_education(&mut self, education: &Education) -> Result<(), ResumeError> {
        self.ensure_editable("remove an education")?;
        let index = self
            .educations
            .iter()
            .position(|e| e == education)
            .ok_or_else(|| {
                ResumeError::NotFound(format!(
                    "Education '{} {}'",
                    education.degree(),
                    education.school()
                ))
            })?;

        self.educations.remove(index);
        self.touch();
        Ok(())
    }

    pub fn update_contact_info(&mut self, contact_info: ContactInfo) -> Result<(), ResumeError> {
        self.ensure_editable("update contact info")?;
        self.contact_info = Some(contact_info);
        self.touch();
        Ok(())
    }

    pub fn update_candidate_name(&mut self, name: CandidateName) -> Result<(), ResumeError> {
        self.ensure_editable("update the candidate name")?;
        self.candidate_name = Some(name);
        self.touch();
        Ok(())
    }

    // -----------------------
    // File management
    // -----------------------

    /// Display name only. Changing the extension needs [`Resume::replace_file`].
    pub fn rename_file(&mut self, name: FileName) -> Result<(), ResumeError> {
        self.ensure_editable("rename the file")?;
        self.file = self.file.renamed(name)?;
        self.touch();
        Ok(())
    }

    /// Swaps the stored file and forgets everything parsed from the old one.
    ///
    /// Only PARSED is pushed back to UPLOADED. PARSE_FAILED keeps its status.
    pub fn replace_file(&mut self, file: FileDescriptor) -> Result<(), ResumeError> {
        self.ensure_editable("replace the file")?;

        self.file = file;
        self.candidate_name = None;
        self.skills.clear();
        self.experiences.clear();
        self.educations.clear();
        self.contact_info = None;
        self.parsed_at = None;
        self.parse_error = None;
        self.retry_count = 0;

        if self.status.is_parsed() {
            self.status = ResumeStatus::Uploaded;
        }
        self.touch();
        Ok(())
    }

    // -----------------------
    // Archive / delete
    // -----------------------

    pub fn archive(&mut self) -> Result<(), ResumeError> {
        if !self.status.can_be_archived() {
            return Err(self.rejected("archive"));
        }
        self.status = ResumeStatus::Archived;
        self.touch();
        Ok(())
    }

    pub fn unarchive(&mut self) -> Result<(), ResumeError> {
        if self.status != ResumeStatus::Archived {
            return Err(self.rejected("unarchive"));
        }
        self.status = ResumeStatus::Parsed;
        self.touch();
        Ok(())
    }

    /// Soft delete. Only the owner may do it.
    pub fn delete(&mut self, requested_by: UserId) -> Result<(), ResumeError> {
        if !self.is_owned_by(requested_by) {
            return Err(ResumeError::OwnershipViolation { requested_by });
        }
        if !self.status.can_be_deleted() {
            return Err(self.rejected("delete"));
        }

        let now = self.touch();
        self.status = ResumeStatus::Deleted;
        self.deleted_at = Some(now);

        self.record(ResumeEvent::Deleted(ResumeDeleted {
            resume_id: self.id,
            deleted_by: requested_by,
            storage_key: self.file.storage_key().clone(),
            deleted_at: now,
        }));
        Ok(())
    }

    // -----------------------
    // Events
    // -----------------------

    pub fn pending_events(&self) -> &[EventEnvelope] {
        &self.events
    }

    /// Hands over the recorded events. A second call returns nothing.
    pub fn pull_events(&mut self) -> Vec<EventEnvelope> {
        std::mem::take(&mut self.events)
    }

    // -----------------------
    // Accessors
    // -----------------------

    pub fn id(&self) -> ResumeId {
        self.id
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn file(&self) -> &FileDescriptor {
        &self.file
    }

    pub fn status(&self) -> ResumeStatus {
        self.status
    }

    pub fn candidate_name(&self) -> Option<&CandidateName> {
        self.candidate_name.as_ref()
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn educations(&self) -> &[Education] {
        &self.educations
    }

    pub fn contact_info(&self) -> Option<&ContactInfo> {
        self.contact_info.as_ref()
    }

    pub fn parsed_at(&self) -> Option<DateTime<Utc>> {
        self.parsed_at
    }

    pub fn parse_error(&self) -> Option<&str> {
        self.parse_error.as_deref()
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    // -----------------------
    // Derived queries
    // -----------------------

    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner == user
    }

    pub fn is_deleted(&self) -> bool {
        self.status == ResumeStatus::Deleted
    }

    pub fn is_editable(&self) -> bool {
        self.status.can_edit()
    }

    pub fn is_searchable(&self) -> bool {
        self.status.is_searchable()
    }

    /// Whether another parse attempt is allowed under a retry ceiling.
    pub fn can_retry(&self, max_retries: u32) -> bool {
        self.status.can_reparse() && self.retry_count < max_retries
    }

    /// Name, contact and at least one skill or experience.
    pub fn has_complete_profile(&self) -> bool {
        self.candidate_name.is_some()
            && self.contact_info.is_some()
            && (!self.skills.is_empty() || !self.experiences.is_empty())
    }

    pub fn total_experience_months(&self) -> u32 {
        self.total_experience_months_as_of(Utc::now().date_naive())
    }

    pub fn total_experience_months_as_of(&self, today: NaiveDate) -> u32 {
        self.experiences
            .iter()
            .map(|e| e.duration_in_months_as_of(today))
            .sum()
    }

    pub fn total_experience_years(&self) -> u32 {
        self.total_experience_months() / 12
    }

    pub fn find_skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.has_name(name))
    }

    pub fn has_skill(&self, name: &str) -> bool {
        self.find_skill(name).is_some()
    }

    pub fn has_skill_with_level(&self, name: &str, minimum: SkillLevel) -> bool {
        self.find_skill(name)
            .is_some_and(|s| s.level().is_at_least(minimum))
    }

    // -----------------------
    // Internals
    // -----------------------

    fn ensure_editable(&self, action: &'static str) -> Result<(), ResumeError> {
        if self.status.can_edit() {
            Ok(())
        } else {
            Err(self.rejected(action))
        }
    }

    fn rejected(&self, action: &'static str) -> ResumeError {
        ResumeError::InvalidStateTransition {
            from: self.status,
            action,
        }
    }

    fn touch(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        self.updated_at = now;
        now
    }

    fn record(&mut self, event: ResumeEvent) {
        self.events.push(EventEnvelope::wrap(event));
    }
}
