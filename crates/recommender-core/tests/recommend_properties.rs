use std::sync::Arc;

use recommender_core::catalogue::{Catalogue, CatalogueEntry};
use recommender_core::error::RecommendError;
use recommender_core::recommender::{Recommender, GENERIC_REASON};

const ENGINEER_QUERY: &str = "Software Engineer coding problem solving Technology Mid-Level";

fn builtin() -> Recommender {
    Recommender::new(Arc::new(Catalogue::builtin().expect("builtin catalogue")))
}

#[test]
fn engineer_profile_scenario() {
    let recommender = builtin();
    let results = recommender
        .recommend(ENGINEER_QUERY, &["coding", "problem solving"], 3)
        .expect("valid query");

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].entry.name, "Technical Coding Assessment");
    assert!(results[0].reason.contains("coding"));
    assert_eq!(results[0].similarity_score, 0.23);

    assert_eq!(results[1].entry.name, "Cognitive Ability Test");
    assert!(results[1].reason.contains("problem solving"));
    assert_eq!(results[1].similarity_score, 0.21);

    assert!(results[2].similarity_score < results[1].similarity_score);
    // Nothing else overlaps, so the first remaining entry in catalogue order follows.
    assert_eq!(results[2].entry.name, "Situational Judgement Test - Sales");
    assert_eq!(results[2].reason, GENERIC_REASON);
}

#[test]
fn result_length_is_min_of_k_and_catalogue_size() {
    let recommender = builtin();
    for k in 1..=8 {
        let results = recommender
            .recommend("leadership and communication", &[] as &[&str], k)
            .unwrap();
        assert_eq!(results.len(), k.min(5), "k = {k}");
    }
}

#[test]
fn results_sorted_and_bounded() {
    let recommender = builtin();
    let queries = [
        "Sales Manager negotiation Retail Senior-Level",
        "Customer Support empathy communication Telecom Entry-Level",
        "Team Leader leadership Finance Executive",
        ENGINEER_QUERY,
    ];
    for query in queries {
        let results = recommender.recommend(query, &[] as &[&str], 5).unwrap();
        for pair in results.windows(2) {
            assert!(pair[0].similarity_score >= pair[1].similarity_score);
        }
        for r in &results {
            assert!((0.0..=1.0).contains(&r.similarity_score));
        }
        let mut names: Vec<&str> = results.iter().map(|r| r.entry.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), results.len(), "no duplicate entries");
    }
}

#[test]
fn repeated_calls_are_identical() {
    let recommender = builtin();
    let skills = ["empathy", "communication"];
    let first = recommender.recommend(ENGINEER_QUERY, &skills, 4).unwrap();
    for _ in 0..5 {
        assert_eq!(recommender.recommend(ENGINEER_QUERY, &skills, 4).unwrap(), first);
    }
}

#[test]
fn no_skills_gives_generic_reasons() {
    let recommender = builtin();
    let results = recommender.recommend(ENGINEER_QUERY, &[] as &[&str], 5).unwrap();
    assert!(results.iter().all(|r| r.reason == GENERIC_REASON));
}

#[test]
fn empty_query_is_invalid_input() {
    let recommender = builtin();
    let err = recommender.recommend("", &[] as &[&str], 5).unwrap_err();
    assert!(matches!(err, RecommendError::InvalidInput(_)));
}

#[test]
fn catalogue_is_not_mutated_by_requests() {
    let catalogue = Arc::new(Catalogue::builtin().unwrap());
    let before: Vec<CatalogueEntry> = catalogue.entries().to_vec();
    let recommender = Recommender::new(Arc::clone(&catalogue));
    recommender.recommend(ENGINEER_QUERY, &["coding"], 5).unwrap();
    assert_eq!(catalogue.entries(), before.as_slice());
}

#[test]
fn concurrent_calls_share_the_catalogue() {
    let recommender = Arc::new(builtin());
    let expected = recommender
        .recommend(ENGINEER_QUERY, &["coding"], 3)
        .unwrap()
        .into_iter()
        .map(|r| (r.entry.name.clone(), r.similarity_score))
        .collect::<Vec<_>>();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let recommender = Arc::clone(&recommender);
            std::thread::spawn(move || {
                recommender
                    .recommend(ENGINEER_QUERY, &["coding"], 3)
                    .unwrap()
                    .into_iter()
                    .map(|r| (r.entry.name.clone(), r.similarity_score))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
