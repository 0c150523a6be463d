pub mod resume_policy;
