//! SQLite-backed `CafeRepository` implementation using Diesel ORM.
//!
//! Every operation checks a connection out of the pool for its own duration,
//! so no connection state is shared between requests.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CafeRepository, CafeRepositoryError};
use crate::domain::{Cafe, CafeId, CoffeePrice, NewCafe};

use super::diesel_basic_error_mapping::{
    DieselErrorConstructors, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{CafeRow, NewCafeRow};
use super::pool::{DbPool, PoolError};
use super::schema::cafes;

/// Diesel-backed implementation of the cafe record store.
#[derive(Clone)]
pub struct DieselCafeRepository {
    pool: DbPool,
}

impl DieselCafeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> CafeRepositoryError {
    map_basic_pool_error(error, CafeRepositoryError::connection)
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> CafeRepositoryError {
    map_basic_diesel_error(
        error,
        DieselErrorConstructors {
            query: CafeRepositoryError::query,
            connection: CafeRepositoryError::connection,
            constraint: CafeRepositoryError::constraint_violation,
        },
    )
}

#[async_trait]
impl CafeRepository for DieselCafeRepository {
    async fn find_by_id(&self, id: CafeId) -> Result<Option<Cafe>, CafeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = cafes::table
            .filter(cafes::id.eq(id.as_i32()))
            .select(CafeRow::as_select())
            .first::<CafeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Cafe::from))
    }

    async fn list_all(&self) -> Result<Vec<Cafe>, CafeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CafeRow> = cafes::table
            .order(cafes::id.asc())
            .select(CafeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Cafe::from).collect())
    }

    async fn find_first_by_location(
        &self,
        location: &str,
    ) -> Result<Option<Cafe>, CafeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = cafes::table
            .filter(cafes::location.eq(location))
            .order(cafes::id.asc())
            .select(CafeRow::as_select())
            .first::<CafeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Cafe::from))
    }

    async fn insert(&self, cafe: &NewCafe) -> Result<Cafe, CafeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(cafes::table)
            .values(NewCafeRow::from(cafe))
            .returning(CafeRow::as_returning())
            .get_result::<CafeRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Cafe::from(row))
    }

    async fn update_coffee_price(
        &self,
        id: CafeId,
        price: &CoffeePrice,
    ) -> Result<Option<Cafe>, CafeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::update(cafes::table.filter(cafes::id.eq(id.as_i32())))
            .set(cafes::coffee_price.eq(Some(price.as_str())))
            .returning(CafeRow::as_returning())
            .get_result::<CafeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Cafe::from))
    }

    async fn delete_by_id(&self, id: CafeId) -> Result<bool, CafeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(cafes::table.filter(cafes::id.eq(id.as_i32())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion.

    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn row() -> CafeRow {
        CafeRow {
            id: 12,
            name: "Science Gallery London".to_owned(),
            map_url: "https://maps.example/science".to_owned(),
            img_url: "https://img.example/science.jpg".to_owned(),
            location: "London Bridge".to_owned(),
            seats: "50+".to_owned(),
            has_toilet: true,
            has_wifi: false,
            has_sockets: true,
            can_take_calls: false,
            coffee_price: None,
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(repo_err, CafeRepositoryError::Connection { .. }));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn unique_violation_maps_to_constraint_violation() {
        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("UNIQUE constraint failed: cafes.name".to_owned()),
        );

        let repo_err = map_diesel_error(diesel_err);

        assert!(matches!(
            repo_err,
            CafeRepositoryError::ConstraintViolation { .. }
        ));
        assert!(repo_err.to_string().contains("cafes.name"));
    }

    #[rstest]
    fn row_conversion_keeps_every_column(row: CafeRow) {
        let cafe = Cafe::from(row);

        assert_eq!(cafe.id(), CafeId::new(12));
        assert_eq!(cafe.location(), "London Bridge");
        assert!(cafe.amenities().has_toilet);
        assert!(!cafe.amenities().has_wifi);
        assert!(cafe.amenities().has_sockets);
        assert_eq!(cafe.coffee_price(), None);
    }
}
