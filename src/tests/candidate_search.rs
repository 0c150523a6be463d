use crate::auth::application::domain::entities::UserId;
use crate::resume::application::ports::incoming::use_cases::{
    SearchCandidatesError, UploadResumeCommand,
};
use crate::resume::application::ports::outgoing::ParsingResult;
use crate::resume::domain::services::DuplicateReason;
use crate::resume::domain::value_objects::{CandidateName, ContactInfo, Skill, SkillLevel};
use crate::resume::domain::{ParsedProfile, ResumeId, SearchCriteria};
use crate::tests::support::app_state_builder::{TestApp, TestAppBuilder};
use crate::tests::support::fixtures::{education, skill};

fn profile(name: &str, skills: Vec<Skill>, email: Option<&str>) -> ParsedProfile {
    ParsedProfile {
        candidate_name: Some(CandidateName::try_new(name).unwrap()),
        skills,
        contact_info: email.map(|e| ContactInfo::parse(None, Some(e), None).unwrap()),
        educations: vec![education("Computer Science")],
        ..ParsedProfile::default()
    }
}

/// Uploads a file and, when a profile is given, parses it.
async fn ingest(app: &TestApp, file_name: &str, parsed: Option<ParsedProfile>) -> ResumeId {
    let owner = UserId::new();
    let command = UploadResumeCommand::builder()
        .owner(owner)
        .file_name(file_name)
        .mime_type("application/pdf")
        .bytes(vec![7u8; 2048])
        .build(&app.state.policy)
        .unwrap();
    let uploaded = app.state.upload_resume_use_case.execute(command).await.unwrap();

    if let Some(profile) = parsed {
        app.parser
            .script(uploaded.storage_key.clone(), ParsingResult::Success(profile));
        app.state
            .parse_resume_use_case
            .execute(owner, uploaded.resume_id)
            .await
            .unwrap();
    }
    uploaded.resume_id
}

#[tokio::test]
async fn test_required_skills_scenario_scores_at_least_44() {
    let app = TestAppBuilder::new().build();
    let id = ingest(
        &app,
        "java.pdf",
        Some(profile(
            "Kim Minsu",
            vec![
                skill("Java", SkillLevel::Advanced, Some(5)),
                skill("SpringBoot", SkillLevel::Intermediate, Some(3)),
            ],
            None,
        )),
    )
    .await;

    let matches = app
        .state
        .search_candidates_use_case
        .search(SearchCriteria::new().require(["Java", "SpringBoot"]))
        .await
        .unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].resume_id, id);
    assert!(matches[0].score >= 44);
}

#[tokio::test]
async fn test_search_skips_unparsed_and_low_scores() {
    let app = TestAppBuilder::new().build();

    let expert = ingest(
        &app,
        "expert.pdf",
        Some(profile(
            "Lee Jiwon",
            vec![skill("Java", SkillLevel::Expert, Some(8))],
            None,
        )),
    )
    .await;
    let beginner = ingest(
        &app,
        "beginner.pdf",
        Some(profile(
            "Park Hana",
            vec![skill("java", SkillLevel::Beginner, None)],
            None,
        )),
    )
    .await;
    let _python_only = ingest(
        &app,
        "python.pdf",
        Some(profile(
            "Choi Yuna",
            vec![skill("Python", SkillLevel::Expert, None)],
            None,
        )),
    )
    .await;
    let _unparsed = ingest(&app, "pending.pdf", None).await;

    let matches = app
        .state
        .search_candidates_use_case
        .search(SearchCriteria::new().require(["Java"]).min_score(20))
        .await
        .unwrap();

    let ids: Vec<ResumeId> = matches.iter().map(|m| m.resume_id).collect();
    assert_eq!(ids, vec![expert, beginner]);
    assert!(matches[0].score > matches[1].score);
}

#[tokio::test]
async fn test_major_keyword_filters_candidates() {
    let app = TestAppBuilder::new().build();
    ingest(
        &app,
        "cs.pdf",
        Some(profile(
            "Jane Doe",
            vec![skill("Rust", SkillLevel::Advanced, None)],
            None,
        )),
    )
    .await;

    let search = &app.state.search_candidates_use_case;
    let hit = search
        .search(SearchCriteria::new().major("computer"))
        .await
        .unwrap();
    let miss = search
        .search(SearchCriteria::new().major("Biology"))
        .await
        .unwrap();

    assert_eq!(hit.len(), 1);
    assert!(miss.is_empty());
}

#[tokio::test]
async fn test_duplicates_across_owners() {
    let app = TestAppBuilder::new().build();
    let first = ingest(
        &app,
        "a.pdf",
        Some(profile("Jane Doe", vec![], Some("a@x.com"))),
    )
    .await;
    let second = ingest(
        &app,
        "b.pdf",
        Some(profile("Janet Smith", vec![], Some("A@X.com"))),
    )
    .await;
    let unrelated = ingest(
        &app,
        "c.pdf",
        Some(profile("John Roe", vec![], Some("john@y.com"))),
    )
    .await;

    let search = &app.state.search_candidates_use_case;
    assert_eq!(search.check_duplicate(first).await, Ok(true));
    assert_eq!(search.check_duplicate(second).await, Ok(true));
    assert_eq!(search.check_duplicate(unrelated).await, Ok(false));
    assert_eq!(
        search.check_duplicate(ResumeId::new()).await,
        Err(SearchCandidatesError::NotFound)
    );

    let pairs = search.find_duplicates().await.unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].reason, DuplicateReason::SameEmail);
    let pair = [pairs[0].first, pairs[0].second];
    assert!(pair.contains(&first) && pair.contains(&second));
}
