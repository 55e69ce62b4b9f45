//! HTTP handlers for the event resource
//!
//! | method | path | success |
//! |---|---|---|
//! | `POST` | `/api/events` | 201 + `Location` |
//! | `GET` | `/api/events` | 200 paged collection |
//! | `GET` | `/api/events/{id}` | 200 |
//! | `PUT` | `/api/events/{id}` | 200 |

use super::dto::EventDto;
use super::model::Event;
use crate::core::validation::ValidatablePayload;
use crate::core::{ApiError, Entity, Errors, PageParams, PageRequest, Validated, rel};
use crate::links::{EntityResource, Hal, PagedResource, Profile, RouteRegistry};
use crate::server::AppState;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// An event with its links
pub type EventResource = EntityResource<Event>;

/// Wrap a stored event, attaching its `self` link
fn event_resource(routes: &RouteRegistry, event: Event) -> Result<EventResource, ApiError> {
    let id = event
        .id
        .ok_or_else(|| ApiError::Internal("stored event has no id".to_string()))?;
    Ok(EntityResource::new(event).with_link(rel::SELF, routes.event(id)))
}

/// Run the business rules and fail with a 400 when any is broken
fn check_business_rules(state: &AppState, dto: &EventDto) -> Result<(), ApiError> {
    let mut errors = Errors::new(EventDto::OBJECT_NAME);
    state.event_validator.validate(dto, &mut errors);
    if errors.has_errors() {
        return Err(state.bad_request(errors));
    }
    Ok(())
}

fn event_id(state: &AppState, path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        let mut errors = Errors::new("path");
        errors.reject("invalidId", rejection.body_text());
        state.bad_request(errors)
    })
}

fn page_request(
    state: &AppState,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<PageRequest, ApiError> {
    let mut errors = Errors::new("pageRequest");

    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            errors.reject("invalidPaging", rejection.body_text());
            return Err(state.bad_request(errors));
        }
    };

    let paging = &state.config.paging;
    let request = match params.resolve(paging.default_size, paging.max_size) {
        Ok(request) => request,
        Err(e) => {
            errors.reject("invalidSort", e.to_string());
            return Err(state.bad_request(errors));
        }
    };

    if let Some(sort) = &request.sort
        && !Event::is_sortable(&sort.property)
    {
        errors.reject(
            "invalidSort",
            format!("events cannot be sorted by '{}'", sort.property),
        );
        return Err(state.bad_request(errors));
    }

    Ok(request)
}

/// `POST /api/events`
pub async fn create_event(
    State(state): State<AppState>,
    Validated(dto): Validated<EventDto>,
) -> Result<Response, ApiError> {
    check_business_rules(&state, &dto)?;

    let mut event = Event::from(&dto);
    event.update();
    let saved = state.event_store.save(event).await?;

    let routes = &state.routes;
    let resource = event_resource(routes, saved)?;
    let location = resource
        .links
        .get(rel::SELF)
        .map(|link| link.href.clone())
        .unwrap_or_default();
    let resource = resource
        .with_link(rel::QUERY_EVENTS, routes.events())
        .with_link(rel::UPDATE_EVENT, location.clone())
        .with_link(rel::PROFILE, routes.profile(Profile::EventsCreate));

    tracing::info!(id = ?resource.content.id, name = %resource.content.name, "event created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Hal(resource),
    )
        .into_response())
}

/// `GET /api/events?page&size&sort`
pub async fn query_events(
    State(state): State<AppState>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<Hal<PagedResource<EventResource>>, ApiError> {
    let request = page_request(&state, query)?;
    let page = state.event_store.find_all(&request).await?;

    tracing::debug!(
        page = request.page,
        size = request.size,
        total = page.total_elements,
        "listing events"
    );

    let routes = &state.routes;
    let page = page.try_map(|event| event_resource(routes, event))?;

    let mut resource = PagedResource::from_page(page, &request, routes, &Event::collection_rel());
    resource.add_link(rel::PROFILE, routes.profile(Profile::EventsList));

    Ok(Hal(resource))
}

/// `GET /api/events/{id}`
pub async fn get_event(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Hal<EventResource>, ApiError> {
    let id = event_id(&state, path)?;
    let event = state
        .event_store
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let routes = &state.routes;
    let resource =
        event_resource(routes, event)?.with_link(rel::PROFILE, routes.profile(Profile::EventsGet));

    Ok(Hal(resource))
}

/// `PUT /api/events/{id}`
///
/// The payload is validated before the event is looked up, so an invalid
/// payload for an unknown id is a 400 rather than a 404.
pub async fn update_event(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    Validated(dto): Validated<EventDto>,
) -> Result<Hal<EventResource>, ApiError> {
    let id = event_id(&state, path)?;
    check_business_rules(&state, &dto)?;

    let mut event = state
        .event_store
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    dto.apply_to(&mut event);
    event.update();
    let saved = state.event_store.save(event).await?;

    tracing::info!(id, "event updated");

    let routes = &state.routes;
    let resource =
        event_resource(routes, saved)?.with_link(rel::PROFILE, routes.profile(Profile::EventsUpdate));

    Ok(Hal(resource))
}
