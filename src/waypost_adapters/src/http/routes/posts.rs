use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;
use waypost_core::{Post, PostStore};

use super::error::ApiError;

#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub description: Option<String>,
    pub location: Option<String>,
    pub sender: Option<String>,
}

#[tracing::instrument(name = "Create post", skip_all)]
pub async fn create_post<P>(
    State(post_store): State<P>,
    Json(request): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    P: PostStore + Clone + 'static,
{
    let (Some(description), Some(location), Some(sender)) =
        (request.description, request.location, request.sender)
    else {
        return Err(ApiError::InvalidInput(String::from(
            "missing one of the following: description, location, sender",
        )));
    };

    let sender = Uuid::parse_str(&sender)
        .map_err(|_| ApiError::InvalidInput(String::from("sender must be a valid user id")))?;

    let post = post_store
        .insert(Post::new(description, location, sender))
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}

#[derive(Deserialize)]
pub struct PostsQuery {
    pub sender: Option<Uuid>,
}

#[tracing::instrument(name = "Get posts", skip_all)]
pub async fn get_posts<P>(
    State(post_store): State<P>,
    Query(query): Query<PostsQuery>,
) -> Result<impl IntoResponse, ApiError>
where
    P: PostStore + Clone + 'static,
{
    let posts = match query.sender {
        Some(sender) => post_store.find_by_sender(&sender).await?,
        None => post_store.get_all().await?,
    };

    Ok(Json(posts))
}

#[tracing::instrument(name = "Get post by id", skip_all)]
pub async fn get_post<P>(
    State(post_store): State<P>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    P: PostStore + Clone + 'static,
{
    let post = post_store
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(String::from("post not found")))?;

    Ok(Json(post))
}

#[derive(Deserialize)]
pub struct UpdatePostRequest {
    pub description: Option<String>,
    pub location: Option<String>,
}

#[tracing::instrument(name = "Update post", skip_all)]
pub async fn update_post<P>(
    State(post_store): State<P>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    P: PostStore + Clone + 'static,
{
    let mut post = post_store
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(String::from("post not found")))?;

    if let Some(description) = request.description {
        post.description = description;
    }
    if let Some(location) = request.location {
        post.location = location;
    }

    let post = post_store.save(post).await?;

    Ok(Json(post))
}

#[tracing::instrument(name = "Delete post", skip_all)]
pub async fn delete_post<P>(
    State(post_store): State<P>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    P: PostStore + Clone + 'static,
{
    post_store
        .delete(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(String::from("post not found")))?;

    Ok(String::from("post deleted"))
}
