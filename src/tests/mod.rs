pub(crate) mod support;

mod candidate_search;
