use crate::DbError;
use crate::schema;
use async_trait::async_trait;
use core_types::{NewPlanet, NewUser, Planet, User};
use sqlx::sqlite::SqlitePool;

/// Everything the HTTP layer and the admin commands need from storage.
#[async_trait]
pub trait PlanetaryRepository: Send + Sync {
    /// Creates both tables if they do not exist yet.
    async fn create_schema(&self) -> Result<(), DbError>;

    /// Drops both tables and every row in them.
    async fn drop_schema(&self) -> Result<(), DbError>;

    /// All planets, in insertion order.
    async fn list_planets(&self) -> Result<Vec<Planet>, DbError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DbError>;

    /// Inserts a user, returning the stored row with its assigned id.
    ///
    /// A duplicate email yields [`DbError::UniqueViolation`].
    async fn insert_user(&self, user: NewUser) -> Result<User, DbError>;

    /// Inserts every planet and user in a single transaction.
    async fn seed(&self, planets: &[NewPlanet], users: &[NewUser]) -> Result<(), DbError>;
}

/// The sqlx-backed implementation of [`PlanetaryRepository`].
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: SqlitePool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanetaryRepository for DbRepository {
    async fn create_schema(&self) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(schema::CREATE_USERS).execute(&mut *tx).await?;
        sqlx::query(schema::CREATE_PLANETS).execute(&mut *tx).await?;
        tx.commit().await?;
        tracing::info!("Schema created.");
        Ok(())
    }

    async fn drop_schema(&self) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(schema::DROP_USERS).execute(&mut *tx).await?;
        sqlx::query(schema::DROP_PLANETS).execute(&mut *tx).await?;
        tx.commit().await?;
        tracing::info!("Schema dropped.");
        Ok(())
    }

    async fn list_planets(&self) -> Result<Vec<Planet>, DbError> {
        let planets = sqlx::query_as::<_, Planet>(
            r#"
            SELECT planet_id, planet_name, planet_type, home_star, mass, radius, distance
            FROM planets
            ORDER BY planet_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(planets)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, password FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, DbError> {
        let result = sqlx::query(
            "INSERT INTO users (first_name, last_name, email, password) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password)
        .execute(&self.pool)
        .await?;

        Ok(user.into_user(result.last_insert_rowid()))
    }

    async fn seed(&self, planets: &[NewPlanet], users: &[NewUser]) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        for planet in planets {
            sqlx::query(
                r#"
                INSERT INTO planets (planet_name, planet_type, home_star, mass, radius, distance)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&planet.planet_name)
            .bind(&planet.planet_type)
            .bind(&planet.home_star)
            .bind(planet.mass)
            .bind(planet.radius)
            .bind(planet.distance)
            .execute(&mut *tx) // Note: must use the transaction object `tx` here
            .await?;
        }

        for user in users {
            sqlx::query(
                "INSERT INTO users (first_name, last_name, email, password) VALUES (?, ?, ?, ?)",
            )
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(&user.password)
            .execute(&mut *tx)
            .await?;
        }

        // Dropping `tx` on an early return above rolls the whole batch back.
        tx.commit().await?;
        Ok(())
    }
}
