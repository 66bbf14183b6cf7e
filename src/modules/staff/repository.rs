use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Staff {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub added_stores: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateStaffPayload {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
}

pub enum Error {
    UnexpectedError,
    DuplicateStaff,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateStaffPayload) -> Result<(), Error> {
    match sqlx::query(
        "
        INSERT INTO staffs (id, full_name, email, phone_number, password_hash, is_active, added_stores)
        VALUES ($1, $2, $3, $4, $5, TRUE, 0)
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.full_name)
    .bind(payload.email)
    .bind(payload.phone_number)
    .bind(payload.password_hash)
    .execute(e)
    .await
    {
        Ok(_) => Ok(()),
        Err(err) if err.as_database_error().is_some_and(|db_err| db_err.is_unique_violation()) => {
            Err(Error::DuplicateStaff)
        }
        Err(err) => {
            log::error!("Error occurred while trying to create a staff: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Staff>, Error> {
    sqlx::query_as::<_, Staff>("SELECT * FROM staffs WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            log::error!("Error occurred while fetching staff with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(
    e: E,
    email: String,
) -> Result<Option<Staff>, Error> {
    sqlx::query_as::<_, Staff>("SELECT * FROM staffs WHERE email = $1")
        .bind(email)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            log::error!("Error occurred in find_by_email: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_phone_number<'e, E: PgExecutor<'e>>(
    e: E,
    phone_number: String,
) -> Result<Option<Staff>, Error> {
    sqlx::query_as::<_, Staff>("SELECT * FROM staffs WHERE phone_number = $1")
        .bind(phone_number)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            log::error!("Error occurred in find_by_phone_number: {}", err);
            Error::UnexpectedError
        })
}

pub async fn update_password_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    password_hash: String,
) -> Result<(), Error> {
    sqlx::query("UPDATE staffs SET password_hash = $1, updated_at = NOW() WHERE id = $2")
        .bind(password_hash)
        .bind(id.clone())
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            log::error!(
                "Error occurred while updating password for staff with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn update_password_by_phone_number<'e, E: PgExecutor<'e>>(
    e: E,
    phone_number: String,
    password_hash: String,
) -> Result<u64, Error> {
    sqlx::query("UPDATE staffs SET password_hash = $1, updated_at = NOW() WHERE phone_number = $2")
        .bind(password_hash)
        .bind(phone_number)
        .execute(e)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            log::error!(
                "Error occurred while updating password by phone number: {}",
                err
            );
            Error::UnexpectedError
        })
}

pub async fn adjust_added_stores<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    delta: i32,
) -> Result<(), Error> {
    sqlx::query("UPDATE staffs SET added_stores = added_stores + $1, updated_at = NOW() WHERE id = $2")
        .bind(delta)
        .bind(id.clone())
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            log::error!(
                "Error occurred while adjusting store count for staff with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
