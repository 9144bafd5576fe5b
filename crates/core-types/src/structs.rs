use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered API user, as stored in the `users` table.
///
/// Users are only ever inserted (by registration or the seed command); no
/// column changes after the row is created.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all users.
    pub email: String,
    /// Stored exactly as submitted.
    pub password: String,
}

/// A row from the `planets` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Planet {
    pub planet_id: i64,
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    /// Mass in kilograms.
    pub mass: f64,
    /// Mean radius in miles.
    pub radius: f64,
    /// Mean distance from the home star in miles.
    pub distance: f64,
}

/// The write-side shape of a user: everything except the generated id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// The write-side shape of a planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlanet {
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}

impl NewUser {
    /// Materializes the stored row once the database has assigned an id.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
        }
    }
}
