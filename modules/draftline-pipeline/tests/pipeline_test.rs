use std::sync::Arc;

use draftline_pipeline::fixtures::{
    FailingGenerator, FailingSearcher, FixtureGenerator, FixtureSearcher,
};
use draftline_pipeline::Pipeline;

#[tokio::test]
async fn test_run_collects_research_and_drafts() {
    let searcher = Arc::new(FixtureSearcher::from_contents(&["A", "B", "C"]));
    let generator = Arc::new(FixtureGenerator::new("Renewables keep growing."));
    let pipeline = Pipeline::new(searcher, generator, 5);

    let state = pipeline
        .run("latest trends in renewable energy")
        .await
        .unwrap();

    assert_eq!(state.query, "latest trends in renewable energy");
    assert_eq!(state.research_data, vec!["A", "B", "C"]);
    assert_eq!(state.draft, "Renewables keep growing.");
    assert_eq!(
        state.messages,
        vec![
            "Research Agent: Collected 3 items for 'latest trends in renewable energy'",
            "Drafting Agent: Generated draft for 'latest trends in renewable energy'",
        ]
    );
}

#[tokio::test]
async fn test_generation_failure_is_stringified_into_draft() {
    let searcher = Arc::new(FixtureSearcher::from_contents(&["A"]));
    let generator = Arc::new(FailingGenerator::new("rate limit exceeded"));
    let pipeline = Pipeline::new(searcher, generator, 5);

    let state = pipeline.run("renewable trends").await.unwrap();

    assert_eq!(
        state.draft,
        "Error: Failed to generate draft - rate limit exceeded"
    );
    assert!(state.draft.starts_with("Error: Failed to generate draft - "));
    assert_eq!(state.messages.len(), 2);
    assert_eq!(
        state.messages[1],
        "Drafting Agent: Generated draft for 'renewable trends'"
    );
}

#[tokio::test]
async fn test_search_failure_aborts_before_drafting() {
    let searcher = Arc::new(FailingSearcher::new("connection refused"));
    let generator = Arc::new(FixtureGenerator::new("unreachable"));
    let pipeline = Pipeline::new(searcher, generator.clone(), 5);

    let result = pipeline.run("renewable trends").await;

    assert!(result.is_err());
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_research_data_is_capped() {
    let searcher = Arc::new(FixtureSearcher::from_contents(&[
        "one", "two", "three", "four", "five", "six", "seven",
    ]));
    let generator = Arc::new(FixtureGenerator::new("draft"));
    let pipeline = Pipeline::new(searcher, generator, 5);

    let state = pipeline.run("anything").await.unwrap();

    assert_eq!(state.research_data.len(), 5);
    assert_eq!(
        state.messages[0],
        "Research Agent: Collected 5 items for 'anything'"
    );
}

#[tokio::test]
async fn test_empty_search_results_still_draft() {
    let searcher = Arc::new(FixtureSearcher::from_contents(&[]));
    let generator = Arc::new(FixtureGenerator::new("No data, best effort."));
    let pipeline = Pipeline::new(searcher, generator, 5);

    let state = pipeline.run("obscure topic").await.unwrap();

    assert!(state.research_data.is_empty());
    assert_eq!(
        state.messages[0],
        "Research Agent: Collected 0 items for 'obscure topic'"
    );
    assert_eq!(state.draft, "No data, best effort.");
}

#[tokio::test]
async fn test_prompt_embeds_query_and_research() {
    let searcher = Arc::new(FixtureSearcher::from_contents(&[
        "Solar capacity grew 30%.",
        "Battery storage doubled.",
    ]));
    let generator = Arc::new(FixtureGenerator::new("draft"));
    let pipeline = Pipeline::new(searcher, generator.clone(), 5);

    pipeline.run("renewable trends").await.unwrap();

    let prompt = generator.last_prompt().expect("generator was not called");
    assert!(prompt.contains("the query: 'renewable trends'"));
    assert!(prompt.contains("Solar capacity grew 30%."));
    assert!(prompt.contains("Battery storage doubled."));
}
