use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::modules::provider::{FetchCoordinator, Query};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

// Limits the original frontend requests per page.
const DEFAULT_TOP_LIMIT: u32 = 25;
const DEFAULT_SEARCH_LIMIT: u32 = 20;
const DEFAULT_NEWS_LIMIT: u32 = 10;

/// Query-string parameters of the `/api` entry point. Everything arrives as
/// an optional string so bad values produce our JSON error body instead of
/// actix's default deserialization error.
#[derive(Debug, Deserialize)]
pub struct ApiParams {
    pub action: Option<String>,
    pub id: Option<String>,
    pub q: Option<String>,
    pub limit: Option<String>,
}

/// Single JSON entry point, selected by `action`.
pub async fn api(
    coordinator: web::Data<FetchCoordinator>,
    params: web::Query<ApiParams>,
) -> AppResult<HttpResponse> {
    let query = build_query(&params)?;
    let payload = coordinator.resolve(&query).await?;
    Ok(HttpResponse::Ok().json(payload))
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// Translate request parameters into a [`Query`], rejecting bad input before
/// the coordinator is ever invoked.
fn build_query(params: &ApiParams) -> AppResult<Query> {
    let action = params.action.as_deref().unwrap_or("current");

    let query = match action {
        "current" => Query::CurrentSeason,
        "upcoming" => Query::Upcoming,
        "top" => Query::TopAnime {
            limit: parse_limit(&params.limit, DEFAULT_TOP_LIMIT)?,
        },
        "detail" => Query::Detail {
            id: parse_id(&params.id)?,
        },
        "characters" => Query::Characters {
            id: parse_id(&params.id)?,
        },
        "search" => {
            let q = params.q.clone().unwrap_or_default();
            Validator::validate_search_query(&q)?;
            Query::Search {
                query: q,
                limit: parse_limit(&params.limit, DEFAULT_SEARCH_LIMIT)?,
            }
        }
        "news" => Query::News {
            limit: parse_limit(&params.limit, DEFAULT_NEWS_LIMIT)?,
        },
        other => {
            return Err(AppError::InvalidInput(format!("Unknown action: {}", other)));
        }
    };

    Ok(query)
}

fn parse_id(id: &Option<String>) -> AppResult<u32> {
    let raw = id
        .as_deref()
        .ok_or_else(|| AppError::InvalidInput("Anime id required".to_string()))?;
    let id = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| AppError::InvalidInput(format!("Invalid anime id: {}", raw)))?;
    Validator::validate_mal_id(id)?;
    Ok(id)
}

fn parse_limit(limit: &Option<String>, default: u32) -> AppResult<u32> {
    let limit = match limit.as_deref() {
        None => default,
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::InvalidInput(format!("Invalid limit: {}", raw)))?,
    };
    Validator::validate_limit(limit)?;
    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        action: Option<&str>,
        id: Option<&str>,
        q: Option<&str>,
        limit: Option<&str>,
    ) -> ApiParams {
        ApiParams {
            action: action.map(str::to_string),
            id: id.map(str::to_string),
            q: q.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn missing_action_defaults_to_current_season() {
        let query = build_query(&params(None, None, None, None)).unwrap();
        assert_eq!(query, Query::CurrentSeason);
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err = build_query(&params(Some("bogus"), None, None, None)).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn detail_requires_a_positive_id() {
        assert!(build_query(&params(Some("detail"), None, None, None)).is_err());
        assert!(build_query(&params(Some("detail"), Some("0"), None, None)).is_err());
        assert!(build_query(&params(Some("detail"), Some("-1"), None, None)).is_err());
        assert!(build_query(&params(Some("detail"), Some("abc"), None, None)).is_err());

        let query = build_query(&params(Some("detail"), Some("5114"), None, None)).unwrap();
        assert_eq!(query, Query::Detail { id: 5114 });
    }

    #[test]
    fn search_requires_a_query() {
        assert!(build_query(&params(Some("search"), None, None, None)).is_err());
        assert!(build_query(&params(Some("search"), None, Some(""), None)).is_err());

        let query = build_query(&params(Some("search"), None, Some("naruto"), None)).unwrap();
        assert_eq!(
            query,
            Query::Search {
                query: "naruto".to_string(),
                limit: DEFAULT_SEARCH_LIMIT,
            }
        );
    }

    #[test]
    fn top_limit_defaults_and_validates() {
        let query = build_query(&params(Some("top"), None, None, None)).unwrap();
        assert_eq!(query, Query::TopAnime { limit: DEFAULT_TOP_LIMIT });

        let query = build_query(&params(Some("top"), None, None, Some("10"))).unwrap();
        assert_eq!(query, Query::TopAnime { limit: 10 });

        assert!(build_query(&params(Some("top"), None, None, Some("0"))).is_err());
        assert!(build_query(&params(Some("top"), None, None, Some("100"))).is_err());
        assert!(build_query(&params(Some("top"), None, None, Some("lots"))).is_err());
    }
}
