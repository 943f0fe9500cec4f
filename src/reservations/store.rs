// src/reservations/store.rs

use super::models::Reservation;
use crate::common::StoreError;
use sqlx::SqlitePool;

const SELECT_COLUMNS: &str = "id, reservation_number, guest_name, address, contact_number, \
     room_type, check_in_date, check_out_date, total_bill, status";

/// Persistence binding for reservations
///
/// Lookups return `Option` inside `Result` so absence stays a value the
/// handlers must account for, not an error.
pub struct ReservationStore {
    db: SqlitePool,
}

impl ReservationStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<Reservation>, StoreError> {
        let reservations = sqlx::query_as::<_, Reservation>(&format!(
            "SELECT {} FROM reservations ORDER BY rowid ASC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(reservations)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, StoreError> {
        let reservation = sqlx::query_as::<_, Reservation>(&format!(
            "SELECT {} FROM reservations WHERE id = ?",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(reservation)
    }

    pub async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM reservations WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(row.is_some())
    }

    pub async fn insert(&self, reservation: &Reservation) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO reservations (
                id, reservation_number, guest_name, address, contact_number,
                room_type, check_in_date, check_out_date, total_bill, status
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&reservation.id)
        .bind(&reservation.reservation_number)
        .bind(&reservation.guest_name)
        .bind(&reservation.address)
        .bind(&reservation.contact_number)
        .bind(reservation.room_type)
        .bind(&reservation.check_in_date)
        .bind(&reservation.check_out_date)
        .bind(reservation.total_bill)
        .bind(reservation.status)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    pub async fn update(&self, reservation: &Reservation) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE reservations
            SET reservation_number = ?, guest_name = ?, address = ?, contact_number = ?,
                room_type = ?, check_in_date = ?, check_out_date = ?, total_bill = ?, status = ?
            WHERE id = ?
            "#,
        )
        .bind(&reservation.reservation_number)
        .bind(&reservation.guest_name)
        .bind(&reservation.address)
        .bind(&reservation.contact_number)
        .bind(reservation.room_type)
        .bind(&reservation.check_in_date)
        .bind(&reservation.check_out_date)
        .bind(reservation.total_bill)
        .bind(reservation.status)
        .bind(&reservation.id)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM reservations WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }
}
