//! Reshapes the top-anime listing into news-card records.
//!
//! This is the one payload the coordinator normalizes instead of passing
//! through verbatim: each listing entry becomes a card with a title line, a
//! truncated synopsis excerpt, and the MyAnimeList link.

use serde::Serialize;
use serde_json::{json, Value};

const EXCERPT_LIMIT: usize = 200;
const NO_DESCRIPTION: &str = "No description available.";

#[derive(Debug, Serialize)]
struct NewsItem {
    title: String,
    excerpt: String,
    url: String,
    date: String,
    author_username: String,
}

/// Build news cards from a `/top/anime` payload.
pub fn from_top_anime(payload: &Value) -> Value {
    let entries = payload
        .get("data")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let items: Vec<NewsItem> = entries
        .iter()
        .map(|anime| NewsItem {
            title: format!(
                "Top Anime: {}",
                str_field(anime, "title").unwrap_or("Unknown")
            ),
            excerpt: excerpt(anime),
            url: str_field(anime, "url").unwrap_or("#").to_string(),
            date: anime
                .get("aired")
                .and_then(|aired| aired.get("from"))
                .and_then(Value::as_str)
                .unwrap_or("2025-01-01")
                .to_string(),
            author_username: "MyAnimeList".to_string(),
        })
        .collect();

    json!({ "data": items })
}

fn str_field<'a>(anime: &'a Value, field: &str) -> Option<&'a str> {
    anime.get(field).and_then(Value::as_str)
}

fn excerpt(anime: &Value) -> String {
    match str_field(anime, "synopsis") {
        Some(synopsis) if !synopsis.is_empty() => {
            let truncated: String = synopsis.chars().take(EXCERPT_LIMIT).collect();
            format!("{}...", truncated)
        }
        _ => NO_DESCRIPTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_synopsis_is_truncated() {
        let synopsis = "x".repeat(500);
        let payload = json!({"data": [{"title": "Monster", "synopsis": synopsis}]});

        let news = from_top_anime(&payload);
        let excerpt = news["data"][0]["excerpt"].as_str().unwrap();
        assert_eq!(excerpt.len(), EXCERPT_LIMIT + 3);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn missing_synopsis_gets_placeholder() {
        let payload = json!({"data": [{"title": "Monster"}]});

        let news = from_top_anime(&payload);
        assert_eq!(news["data"][0]["excerpt"], NO_DESCRIPTION);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let payload = json!({"data": [{}]});

        let news = from_top_anime(&payload);
        let item = &news["data"][0];
        assert_eq!(item["title"], "Top Anime: Unknown");
        assert_eq!(item["url"], "#");
        assert_eq!(item["date"], "2025-01-01");
        assert_eq!(item["author_username"], "MyAnimeList");
    }

    #[test]
    fn aired_date_is_carried_over() {
        let payload = json!({"data": [{
            "title": "Steins;Gate",
            "aired": {"from": "2011-04-06T00:00:00+00:00"}
        }]});

        let news = from_top_anime(&payload);
        assert_eq!(news["data"][0]["date"], "2011-04-06T00:00:00+00:00");
    }

    #[test]
    fn payload_without_data_yields_empty_list() {
        let news = from_top_anime(&json!({"status": 500}));
        assert_eq!(news["data"].as_array().unwrap().len(), 0);
    }
}
