use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// A logical request against the upstream API.
///
/// Each variant maps deterministically to one upstream path plus query
/// parameters; the canonical form doubles as the cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    CurrentSeason,
    TopAnime { limit: u32 },
    Upcoming,
    Detail { id: u32 },
    Search { query: String, limit: u32 },
    Characters { id: u32 },
    News { limit: u32 },
}

impl Query {
    /// Reject bad input before any cache or network access.
    pub fn validate(&self) -> AppResult<()> {
        match self {
            Query::CurrentSeason | Query::Upcoming => Ok(()),
            Query::TopAnime { limit } | Query::News { limit } => Validator::validate_limit(*limit),
            Query::Detail { id } | Query::Characters { id } => Validator::validate_mal_id(*id),
            Query::Search { query, limit } => {
                Validator::validate_search_query(query)?;
                Validator::validate_limit(*limit)
            }
        }
    }

    /// Upstream path plus query parameters in sorted order.
    ///
    /// Sorting makes the form independent of construction order, so
    /// semantically identical queries always share one cache key.
    pub fn canonical_endpoint(&self) -> String {
        let (path, mut params): (String, Vec<(&str, String)>) = match self {
            Query::CurrentSeason => ("/seasons/now".to_string(), vec![]),
            Query::Upcoming => ("/seasons/upcoming".to_string(), vec![]),
            Query::TopAnime { limit } => (
                "/top/anime".to_string(),
                vec![("type", "tv".to_string()), ("limit", limit.to_string())],
            ),
            Query::Detail { id } => (format!("/anime/{}/full", id), vec![]),
            Query::Characters { id } => (format!("/anime/{}/characters", id), vec![]),
            Query::Search { query, limit } => (
                "/anime".to_string(),
                vec![
                    ("q", urlencoding::encode(query.trim()).into_owned()),
                    ("limit", limit.to_string()),
                ],
            ),
            Query::News { limit } => {
                ("/top/anime".to_string(), vec![("limit", limit.to_string())])
            }
        };

        if params.is_empty() {
            return path;
        }

        params.sort_by(|a, b| a.0.cmp(b.0));
        let param_strings: Vec<String> = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        format!("{}?{}", path, param_strings.join("&"))
    }
}
