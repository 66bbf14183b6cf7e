use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

#[derive(Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub duration_days: i32,
    pub price: i64,
    pub created_at: NaiveDateTime,
}

pub enum Error {
    UnexpectedError,
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Plan>, Error> {
    sqlx::query_as::<_, Plan>("SELECT * FROM plans WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            log::error!("Error occurred while fetching plan with id {}: {}", id, err);
            Error::UnexpectedError
        })
}
