use super::subscription::Subscription;
use crate::utils::pagination::Pagination;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Store {
    pub id: String,
    pub short_name: String,
    pub display_name: String,
    pub phone_number: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_active: bool,
    pub plan_id: String,
    pub subscription_activated_at: NaiveDateTime,
    pub subscription_expires_at: NaiveDateTime,
    pub added_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateStorePayload {
    pub short_name: String,
    pub display_name: String,
    pub phone_number: String,
    pub password_hash: String,
    pub latitude: f64,
    pub longitude: f64,
    pub subscription: Subscription,
    pub added_by: String,
}

pub struct UpdateStorePayload {
    pub display_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_active: Option<bool>,
    pub subscription: Option<Subscription>,
}

impl UpdateStorePayload {
    pub fn has_changes(&self) -> bool {
        self.display_name.is_some()
            || self.latitude.is_some()
            || self.longitude.is_some()
            || self.is_active.is_some()
            || self.subscription.is_some()
    }
}

pub enum Error {
    UnexpectedError,
    DuplicatePhoneNumber,
    DuplicateShortName,
}

fn from_unique_violation(err: sqlx::Error) -> Error {
    // The unique indexes close the gap between the pre-check read and the
    // insert; the violated constraint tells which field collided.
    match err
        .as_database_error()
        .filter(|db_err| db_err.is_unique_violation())
        .and_then(|db_err| db_err.constraint())
    {
        Some("stores_phone_number_key") => Error::DuplicatePhoneNumber,
        Some("stores_short_name_key") => Error::DuplicateShortName,
        _ => {
            log::error!("Error occurred while trying to create a store: {}", err);
            Error::UnexpectedError
        }
    }
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateStorePayload,
) -> Result<Store, Error> {
    sqlx::query_as::<_, Store>(
        "
        INSERT INTO stores (
            id,
            short_name,
            display_name,
            phone_number,
            password_hash,
            latitude,
            longitude,
            is_active,
            plan_id,
            subscription_activated_at,
            subscription_expires_at,
            added_by
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE, $8, $9, $10, $11)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.short_name)
    .bind(payload.display_name)
    .bind(payload.phone_number)
    .bind(payload.password_hash)
    .bind(payload.latitude)
    .bind(payload.longitude)
    .bind(payload.subscription.plan_id)
    .bind(payload.subscription.activated_at)
    .bind(payload.subscription.expires_at)
    .bind(payload.added_by)
    .fetch_one(e)
    .await
    .map_err(from_unique_violation)
}

pub async fn find_by_phone_number_or_short_name<'e, E: PgExecutor<'e>>(
    e: E,
    phone_number: String,
    short_name: String,
) -> Result<Option<Store>, Error> {
    sqlx::query_as::<_, Store>("SELECT * FROM stores WHERE phone_number = $1 OR short_name = $2")
        .bind(phone_number)
        .bind(short_name)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            log::error!(
                "Error occurred in find_by_phone_number_or_short_name: {}",
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_short_name<'e, E: PgExecutor<'e>>(
    e: E,
    short_name: String,
) -> Result<Option<Store>, Error> {
    sqlx::query_as::<_, Store>("SELECT * FROM stores WHERE short_name = $1")
        .bind(short_name)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            log::error!("Error occurred in find_by_short_name: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id_and_added_by<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    added_by: String,
) -> Result<Option<Store>, Error> {
    sqlx::query_as::<_, Store>("SELECT * FROM stores WHERE id = $1 AND added_by = $2")
        .bind(id.clone())
        .bind(added_by)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            log::error!("Error occurred while fetching store with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_added_by<'e, E: PgExecutor<'e>>(
    e: E,
    added_by: String,
    pagination: &Pagination,
) -> Result<Vec<Store>, Error> {
    sqlx::query_as::<_, Store>(
        "SELECT * FROM stores WHERE added_by = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
    )
    .bind(added_by)
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        log::error!("Error occurred in find_by_added_by: {}", err);
        Error::UnexpectedError
    })
}

pub async fn count_by_added_by<'e, E: PgExecutor<'e>>(
    e: E,
    added_by: String,
) -> Result<u32, Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM stores WHERE added_by = $1")
        .bind(added_by)
        .fetch_one(e)
        .await
        .map(|total| total as u32)
        .map_err(|err| {
            log::error!("Error occurred in count_by_added_by: {}", err);
            Error::UnexpectedError
        })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateStorePayload,
) -> Result<(), Error> {
    // A payload carrying nothing must not touch the row, updated_at included.
    if !payload.has_changes() {
        return Ok(());
    }

    let (plan_id, activated_at, expires_at) = match payload.subscription {
        Some(subscription) => (
            Some(subscription.plan_id),
            Some(subscription.activated_at),
            Some(subscription.expires_at),
        ),
        None => (None, None, None),
    };

    sqlx::query(
        "
        UPDATE stores SET
            display_name = COALESCE($1, display_name),
            latitude = COALESCE($2, latitude),
            longitude = COALESCE($3, longitude),
            is_active = COALESCE($4, is_active),
            plan_id = COALESCE($5, plan_id),
            subscription_activated_at = COALESCE($6, subscription_activated_at),
            subscription_expires_at = COALESCE($7, subscription_expires_at),
            updated_at = NOW()
        WHERE id = $8
        ",
    )
    .bind(payload.display_name)
    .bind(payload.latitude)
    .bind(payload.longitude)
    .bind(payload.is_active)
    .bind(plan_id)
    .bind(activated_at)
    .bind(expires_at)
    .bind(id.clone())
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        log::error!("Error occurred while updating store with id {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<(), Error> {
    sqlx::query("DELETE FROM stores WHERE id = $1")
        .bind(id.clone())
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            log::error!("Error occurred while deleting store with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::subscription;
    use chrono::Utc;

    #[test]
    fn empty_update_payload_reports_no_changes() {
        let payload = UpdateStorePayload {
            display_name: None,
            latitude: None,
            longitude: None,
            is_active: None,
            subscription: None,
        };
        assert!(!payload.has_changes());
    }

    #[test]
    fn any_single_field_counts_as_a_change() {
        let payload = UpdateStorePayload {
            display_name: Some("Corner Shop".to_string()),
            latitude: None,
            longitude: None,
            is_active: None,
            subscription: None,
        };
        assert!(payload.has_changes());

        let payload = UpdateStorePayload {
            display_name: None,
            latitude: None,
            longitude: None,
            is_active: None,
            subscription: Some(subscription::activate(
                "plan-basic".to_string(),
                Utc::now().naive_utc(),
            )),
        };
        assert!(payload.has_changes());
    }
}
