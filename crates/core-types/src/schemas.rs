//! Response projections for the stored records.
//!
//! Each schema is an explicit allow-list of fields: only what is named here is
//! ever written into a response body, whatever the underlying row carries.

use crate::error::CoreError;
use crate::structs::{Planet, User};
use serde::Serialize;
use validator::ValidateEmail;

/// The JSON shape of a planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetSchema {
    pub planet_id: i64,
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}

impl From<&Planet> for PlanetSchema {
    fn from(planet: &Planet) -> Self {
        Self {
            planet_id: planet.planet_id,
            planet_name: planet.planet_name.clone(),
            planet_type: planet.planet_type.clone(),
            home_star: planet.home_star.clone(),
            mass: planet.mass,
            radius: planet.radius,
            distance: planet.distance,
        }
    }
}

impl PlanetSchema {
    /// Projects a list of planets, preserving order.
    pub fn many(planets: &[Planet]) -> Vec<Self> {
        planets.iter().map(Self::from).collect()
    }
}

/// The JSON shape of a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSchema {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl TryFrom<&User> for UserSchema {
    type Error = CoreError;

    /// Fails when the stored email is not email-shaped. Uniqueness is the
    /// database's concern, not this one.
    fn try_from(user: &User) -> Result<Self, Self::Error> {
        if !user.email.validate_email() {
            return Err(CoreError::InvalidInput(
                "email".to_string(),
                format!("'{}' is not a valid email address", user.email),
            ));
        }

        Ok(Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        })
    }
}

impl UserSchema {
    /// Projects a list of users. The first invalid email aborts the whole list.
    pub fn many(users: &[User]) -> Result<Vec<Self>, CoreError> {
        users.iter().map(Self::try_from).collect()
    }
}
