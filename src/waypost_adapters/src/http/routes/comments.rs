use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;
use waypost_core::{Comment, CommentStore};

use super::error::ApiError;

#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub content: Option<String>,
    pub post: Option<String>,
    pub sender: Option<String>,
}

// Comment creation answers 200, not 201, for compatibility with existing
// clients.
#[tracing::instrument(name = "Create comment", skip_all)]
pub async fn create_comment<C>(
    State(comment_store): State<C>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CommentStore + Clone + 'static,
{
    let (Some(content), Some(post), Some(sender)) = (request.content, request.post, request.sender)
    else {
        return Err(ApiError::InvalidInput(String::from(
            "missing one of the following: content, post, sender",
        )));
    };

    let post = Uuid::parse_str(&post)
        .map_err(|_| ApiError::InvalidInput(String::from("post must be a valid post id")))?;
    let sender = Uuid::parse_str(&sender)
        .map_err(|_| ApiError::InvalidInput(String::from("sender must be a valid user id")))?;

    let comment = comment_store
        .insert(Comment::new(content, post, sender))
        .await?;

    Ok(Json(comment))
}

#[tracing::instrument(name = "Get comments", skip_all)]
pub async fn get_comments<C>(
    State(comment_store): State<C>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CommentStore + Clone + 'static,
{
    Ok(Json(comment_store.get_all().await?))
}

#[tracing::instrument(name = "Get comment by id", skip_all)]
pub async fn get_comment<C>(
    State(comment_store): State<C>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CommentStore + Clone + 'static,
{
    let comment = comment_store
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(String::from("comment not found")))?;

    Ok(Json(comment))
}

#[tracing::instrument(name = "Get comments by post", skip_all)]
pub async fn get_comments_by_post<C>(
    State(comment_store): State<C>,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CommentStore + Clone + 'static,
{
    Ok(Json(comment_store.find_by_post(&post_id).await?))
}

#[tracing::instrument(name = "Get comments by sender", skip_all)]
pub async fn get_comments_by_sender<C>(
    State(comment_store): State<C>,
    Path(sender_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CommentStore + Clone + 'static,
{
    Ok(Json(comment_store.find_by_sender(&sender_id).await?))
}

#[derive(Deserialize)]
pub struct UpdateCommentRequest {
    pub content: Option<String>,
}

#[tracing::instrument(name = "Update comment", skip_all)]
pub async fn update_comment<C>(
    State(comment_store): State<C>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCommentRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CommentStore + Clone + 'static,
{
    let mut comment = comment_store
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(String::from("comment not found")))?;

    if let Some(content) = request.content {
        comment.content = content;
    }

    let comment = comment_store.save(comment).await?;

    Ok(Json(comment))
}

#[tracing::instrument(name = "Delete comment", skip_all)]
pub async fn delete_comment<C>(
    State(comment_store): State<C>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CommentStore + Clone + 'static,
{
    comment_store
        .delete(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(String::from("comment not found")))?;

    Ok(String::from("comment deleted"))
}
