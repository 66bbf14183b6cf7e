use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json, RequestPartsExt,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PaginatedMeta,
}

#[derive(Serialize, Clone)]
pub struct PaginatedMeta {
    pub total: u32,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u32, pagination: &Pagination) -> Self {
        Self {
            items,
            meta: PaginatedMeta {
                total,
                page: pagination.page,
                per_page: pagination.per_page,
            },
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl Pagination {
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page.max(1) - 1) * self.limit()
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Pagination {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extract::<Query<Pagination>>().await {
            Ok(Query(pagination)) => Ok(pagination),
            _ => Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Invalid pagination options" })),
            )
                .into_response()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_starts_at_zero_for_the_first_page() {
        let pagination = Pagination {
            page: 1,
            per_page: 20,
        };
        assert_eq!(pagination.offset(), 0);
        assert_eq!(pagination.limit(), 20);
    }

    #[test]
    fn offset_advances_by_page_size() {
        let pagination = Pagination {
            page: 3,
            per_page: 10,
        };
        assert_eq!(pagination.offset(), 20);
    }

    #[test]
    fn page_zero_reads_as_the_first_page() {
        let pagination = Pagination {
            page: 0,
            per_page: 10,
        };
        assert_eq!(pagination.offset(), 0);
    }
}
