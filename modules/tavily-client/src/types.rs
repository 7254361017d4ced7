use serde::{Deserialize, Serialize};

/// Request body for the /search endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub api_key: String,
    pub query: String,
    pub max_results: u32,
    pub search_depth: String,
}

/// Response envelope for the /search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// A single ranked search result. Tavily returns more fields than these;
/// anything not listed here is dropped at parse time.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
    pub score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let body = r#"{
            "query": "latest trends in renewable energy",
            "response_time": 1.2,
            "results": [
                {
                    "title": "Renewable energy outlook",
                    "url": "https://example.com/outlook",
                    "content": "Solar capacity grew 30% year over year.",
                    "score": 0.97
                },
                {
                    "title": "Grid storage",
                    "url": "https://example.com/storage",
                    "content": "Battery storage deployments doubled."
                }
            ]
        }"#;

        let resp: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.results[0].content, "Solar capacity grew 30% year over year.");
        assert_eq!(resp.results[0].score, Some(0.97));
        assert!(resp.results[1].score.is_none());
    }

    #[test]
    fn test_parse_empty_results() {
        let resp: SearchResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(resp.results.is_empty());
    }

    #[test]
    fn test_parse_missing_results_field() {
        let resp: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.results.is_empty());
    }
}
