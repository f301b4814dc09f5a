use crate::shared::errors::AppError;

/// Jikan caps list responses at 25 items per page.
pub const MAX_PAGE_LIMIT: u32 = 25;

pub struct Validator;

impl Validator {
    pub fn validate_mal_id(mal_id: u32) -> Result<(), AppError> {
        if mal_id == 0 {
            return Err(AppError::InvalidInput(
                "Anime id must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_search_query(query: &str) -> Result<(), AppError> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }
        if query.len() > 255 {
            return Err(AppError::InvalidInput(
                "Search query too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_limit(limit: u32) -> Result<(), AppError> {
        if limit == 0 {
            return Err(AppError::InvalidInput(
                "Limit must be positive".to_string(),
            ));
        }
        if limit > MAX_PAGE_LIMIT {
            return Err(AppError::InvalidInput(format!(
                "Limit cannot exceed {}",
                MAX_PAGE_LIMIT
            )));
        }
        Ok(())
    }
}
