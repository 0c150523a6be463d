use chrono::NaiveDate;

use crate::auth::application::domain::entities::UserId;
use crate::resume::domain::value_objects::{
    CandidateName, ContactInfo, Education, Experience, FileDescriptor, FileName, FileSize,
    FileType, Skill, SkillLevel, StorageKey,
};
use crate::resume::domain::{ParsedProfile, Resume};

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn pdf_file(name: &str, key: &str) -> FileDescriptor {
    FileDescriptor::new(
        FileName::try_new(name).unwrap(),
        FileSize::try_new(128 * 1024).unwrap(),
        FileType::Pdf,
        StorageKey::try_new(key).unwrap(),
    )
    .unwrap()
}

pub(crate) fn skill(name: &str, level: SkillLevel, years: Option<u8>) -> Skill {
    Skill::try_new(name, level, years).unwrap()
}

/// A finished position lasting exactly `years` years, ending 2020-01-01.
pub(crate) fn experience(company: &str, position: &str, years: i32) -> Experience {
    Experience::try_new(
        company,
        position,
        date(2020 - years, 1, 1),
        Some(date(2020, 1, 1)),
        None,
    )
    .unwrap()
}

pub(crate) fn education(major: &str) -> Education {
    Education::try_new("Hanyang University", "BSc", major, date(2012, 2, 1), Some(3.8)).unwrap()
}

/// Résumé pool member built through the real aggregate lifecycle.
pub(crate) struct ResumeBuilder {
    owner: UserId,
    file_name: String,
    profile: ParsedProfile,
    phone: Option<String>,
    email: Option<String>,
}

impl ResumeBuilder {
    pub(crate) fn new() -> Self {
        Self {
            owner: UserId::new(),
            file_name: "cv.pdf".to_string(),
            profile: ParsedProfile::default(),
            phone: None,
            email: None,
        }
    }

    pub(crate) fn owner(mut self, owner: UserId) -> Self {
        self.owner = owner;
        self
    }

    pub(crate) fn name(mut self, name: &str) -> Self {
        self.profile.candidate_name = Some(CandidateName::try_new(name).unwrap());
        self
    }

    pub(crate) fn email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub(crate) fn phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    pub(crate) fn skill(mut self, name: &str, level: SkillLevel, years: Option<u8>) -> Self {
        self.profile.skills.push(skill(name, level, years));
        self
    }

    pub(crate) fn experience(mut self, company: &str, position: &str, years: i32) -> Self {
        self.profile
            .experiences
            .push(experience(company, position, years));
        self
    }

    pub(crate) fn major(mut self, major: &str) -> Self {
        self.profile.educations.push(education(major));
        self
    }

    fn contact(&self) -> Option<ContactInfo> {
        if self.phone.is_none() && self.email.is_none() {
            return None;
        }
        Some(ContactInfo::parse(self.phone.as_deref(), self.email.as_deref(), None).unwrap())
    }

    /// Freshly uploaded, nothing parsed yet.
    pub(crate) fn uploaded(self) -> Resume {
        let key = format!("{}/{}", self.owner, self.file_name);
        let mut resume = Resume::upload(self.owner, pdf_file(&self.file_name, &key));
        resume.pull_events();
        resume
    }

    /// Uploaded, parsed and carrying the configured profile.
    pub(crate) fn parsed(self) -> Resume {
        let contact = self.contact();
        let profile = self.profile.clone();
        let mut resume = self.uploaded();

        resume.start_parsing().unwrap();
        resume
            .complete_parsing(
                profile.candidate_name,
                profile.skills,
                profile.experiences,
                profile.educations,
                contact,
            )
            .unwrap();
        resume.pull_events();
        resume
    }
}
