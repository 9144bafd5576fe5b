use crate::error::DbError;
use crate::repository::PlanetaryRepository;
use core_types::{NewPlanet, NewUser};

/// The three inner planets inserted by the seed command.
pub fn sample_planets() -> Vec<NewPlanet> {
    vec![
        NewPlanet {
            planet_name: "Mercury".to_string(),
            planet_type: "Class D".to_string(),
            home_star: "Sol".to_string(),
            mass: 2.258e23,
            radius: 1516.0,
            distance: 35.98e6,
        },
        NewPlanet {
            planet_name: "Venus".to_string(),
            planet_type: "Class K".to_string(),
            home_star: "Sol".to_string(),
            mass: 4.867e24,
            radius: 3760.0,
            distance: 67.24e6,
        },
        NewPlanet {
            planet_name: "Earth".to_string(),
            planet_type: "Class M".to_string(),
            home_star: "Sol".to_string(),
            mass: 5.972e24,
            radius: 3959.0,
            distance: 92.96e6,
        },
    ]
}

/// The single fixed account inserted by the seed command.
pub fn sample_user() -> NewUser {
    NewUser {
        first_name: "William".to_string(),
        last_name: "Herschel".to_string(),
        email: "test@test.com".to_string(),
        password: "P@ssw0rd".to_string(),
    }
}

/// Inserts the sample planets and user in one commit.
///
/// Not repeatable without a drop in between: the second run trips the unique
/// email constraint and nothing from it is kept.
pub async fn seed_sample_data(repo: &dyn PlanetaryRepository) -> Result<(), DbError> {
    let planets = sample_planets();
    let users = [sample_user()];
    repo.seed(&planets, &users).await?;
    tracing::info!(
        planets = planets.len(),
        users = users.len(),
        "Sample data committed."
    );
    Ok(())
}
