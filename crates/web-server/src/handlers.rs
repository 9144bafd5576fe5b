use crate::AppState;
use crate::dto::{MessageResponse, ParametersQuery, RegisterForm, Visitor, parse_path_age};
use crate::error::AppError;
use axum::{
    Form, Json,
    extract::{
        Path, Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    http::StatusCode,
};
use core_types::PlanetSchema;
use database::DbError;
use std::sync::Arc;

/// Anyone strictly older than this is old enough.
pub const AGE_THRESHOLD: i64 = 18;

const NOT_FOUND_MESSAGE: &str = "The resource you are trying to reach was not found.";

type JsonResponse = (StatusCode, Json<MessageResponse>);

/// The shared age rule of `/parameters` and `/url_variables`.
pub fn age_verdict(visitor: &Visitor) -> JsonResponse {
    if visitor.age > AGE_THRESHOLD {
        (
            StatusCode::OK,
            Json(MessageResponse::new(format!(
                "Welcome {}, you are old enough.",
                visitor.name
            ))),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(MessageResponse::new(format!(
                "Sorry {}, you are not old enough",
                visitor.name
            ))),
        )
    }
}

/// # GET /
pub async fn hello_world() -> &'static str {
    "Hello World!"
}

/// # GET /super_simple
pub async fn super_simple() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from the planetary API."))
}

/// # GET /not_found
/// Always 404, whatever the request carries.
pub async fn not_found() -> JsonResponse {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new(NOT_FOUND_MESSAGE)),
    )
}

/// # GET /parameters?name=..&age=..
pub async fn parameters(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<JsonResponse, AppError> {
    let Query(pairs) =
        query.map_err(|e| AppError::invalid_input(state.invalid_input, e.body_text()))?;
    let visitor = ParametersQuery::from_pairs(pairs).validate(state.invalid_input)?;
    Ok(age_verdict(&visitor))
}

/// # GET /url_variables/:name/:age
/// An age segment that is not an unsigned integer does not match the route.
pub async fn url_variables(
    Path((name, age)): Path<(String, String)>,
) -> Result<JsonResponse, AppError> {
    let age = parse_path_age(&age)
        .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;
    Ok(age_verdict(&Visitor { name, age }))
}

/// # GET /planets
pub async fn planets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlanetSchema>>, AppError> {
    let planets = state.repo.list_planets().await?;
    Ok(Json(PlanetSchema::many(&planets)))
}

/// # POST /register
/// The existence check is only a pre-check; the unique index on `users.email`
/// still decides when two registrations race.
pub async fn register(
    State(state): State<Arc<AppState>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<JsonResponse, AppError> {
    // A body that is not a form (absent, JSON, wrong encoding) carries no form fields.
    let pairs = match form {
        Ok(Form(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!(%rejection, "Registration body is not a form.");
            Vec::new()
        }
    };
    let new_user = RegisterForm::from_pairs(pairs).validate(state.invalid_input)?;

    if state.repo.find_user_by_email(&new_user.email).await?.is_some() {
        tracing::info!(email = %new_user.email, "Registration rejected, email taken.");
        return Err(email_taken());
    }

    match state.repo.insert_user(new_user).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "User registered.");
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse::new("User created successfully")),
            ))
        }
        Err(DbError::UniqueViolation(detail)) => {
            tracing::info!(%detail, "Registration lost a race on the email index.");
            Err(email_taken())
        }
        Err(e) => Err(e.into()),
    }
}

/// Fallback for paths no route matches.
pub async fn fallback() -> AppError {
    AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
}

fn email_taken() -> AppError {
    AppError::Conflict("That email already exists.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(age: i64) -> (StatusCode, String) {
        let (status, Json(body)) = age_verdict(&Visitor {
            name: "X".to_string(),
            age,
        });
        (status, body.message)
    }

    #[test]
    fn eighteen_is_not_old_enough() {
        assert_eq!(
            verdict(18),
            (
                StatusCode::UNAUTHORIZED,
                "Sorry X, you are not old enough".to_string()
            )
        );
    }

    #[test]
    fn nineteen_is_old_enough() {
        assert_eq!(
            verdict(19),
            (StatusCode::OK, "Welcome X, you are old enough.".to_string())
        );
    }

    #[test]
    fn verdict_is_monotonic_around_the_threshold() {
        for age in [-1, 0, 5, 17, 18] {
            assert_eq!(verdict(age).0, StatusCode::UNAUTHORIZED);
        }
        for age in [19, 28, 120] {
            assert_eq!(verdict(age).0, StatusCode::OK);
        }
    }
}
