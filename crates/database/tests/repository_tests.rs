use core_types::NewUser;
use database::{
    DbError, DbRepository, PlanetaryRepository, connect_in_memory, sample_planets,
    seed_sample_data,
};

async fn fresh_repo() -> DbRepository {
    let pool = connect_in_memory().await.unwrap();
    let repo = DbRepository::new(pool);
    repo.create_schema().await.unwrap();
    repo
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        email: email.to_owned(),
        password: "p".to_owned(),
    }
}

#[tokio::test]
async fn planets_are_empty_before_seeding() {
    let repo = fresh_repo().await;
    assert!(repo.list_planets().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_schema_is_safe_to_repeat() {
    let repo = fresh_repo().await;
    repo.insert_user(new_user("a@b.com")).await.unwrap();

    repo.create_schema().await.unwrap();

    assert!(repo.find_user_by_email("a@b.com").await.unwrap().is_some());
}

#[tokio::test]
async fn seed_inserts_the_sample_rows() {
    let repo = fresh_repo().await;
    seed_sample_data(&repo).await.unwrap();

    let planets = repo.list_planets().await.unwrap();
    let names: Vec<_> = planets.iter().map(|p| p.planet_name.as_str()).collect();
    assert_eq!(names, ["Mercury", "Venus", "Earth"]);
    assert_eq!(planets[0].planet_id, 1);
    assert_eq!(planets[2].mass, 5.972e24);
    assert_eq!(planets[1].planet_type, "Class K");

    let user = repo.find_user_by_email("test@test.com").await.unwrap().unwrap();
    assert_eq!(user.first_name, "William");
    assert_eq!(user.last_name, "Herschel");
    assert_eq!(user.password, "P@ssw0rd");
}

#[tokio::test]
async fn seeding_twice_violates_the_unique_email() {
    let repo = fresh_repo().await;
    seed_sample_data(&repo).await.unwrap();

    let err = seed_sample_data(&repo).await.unwrap_err();
    assert!(matches!(err, DbError::UniqueViolation(_)));

    // The failed run is rolled back as a whole.
    assert_eq!(repo.list_planets().await.unwrap().len(), sample_planets().len());
}

#[tokio::test]
async fn inserted_user_is_retrievable() {
    let repo = fresh_repo().await;

    let stored = repo.insert_user(new_user("a@b.com")).await.unwrap();
    assert_eq!(stored.id, 1);

    let found = repo.find_user_by_email("a@b.com").await.unwrap();
    assert_eq!(found, Some(stored));
    assert!(repo.find_user_by_email("x@y.com").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let repo = fresh_repo().await;
    repo.insert_user(new_user("a@b.com")).await.unwrap();

    let err = repo.insert_user(new_user("a@b.com")).await.unwrap_err();
    assert!(matches!(err, DbError::UniqueViolation(_)));

    let first = repo.find_user_by_email("a@b.com").await.unwrap().unwrap();
    assert_eq!(first.id, 1);

    let second = repo.insert_user(new_user("c@d.com")).await.unwrap();
    assert_ne!(second.id, first.id);
}

#[tokio::test]
async fn drop_schema_removes_tables_and_rows() {
    let repo = fresh_repo().await;
    seed_sample_data(&repo).await.unwrap();

    repo.drop_schema().await.unwrap();
    assert!(matches!(
        repo.list_planets().await,
        Err(DbError::ConnectionError(_))
    ));

    repo.create_schema().await.unwrap();
    assert!(repo.list_planets().await.unwrap().is_empty());
    seed_sample_data(&repo).await.unwrap();
}
