pub mod telemetry;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use waypost_adapters::http::routes::{
    create_comment, create_post, delete_comment, delete_post, delete_user, get_comment,
    get_comments, get_comments_by_post, get_comments_by_sender, get_post, get_posts, get_user,
    get_user_by_email, get_users, login, logout, refresh, register, update_comment, update_post,
    update_user,
};
use waypost_core::{CommentStore, PasswordHasher, PostStore, TokenService, UserStore};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// The assembled HTTP application.
pub struct Application {
    router: Router,
}

impl Application {
    /// Wire every route to the stores and services it needs.
    ///
    /// Stores are `Clone` over internal shared state, so each route gets
    /// exactly the dependencies it uses and nothing more.
    pub fn new<U, P, C, H, T>(
        user_store: U,
        post_store: P,
        comment_store: C,
        password_hasher: H,
        token_service: T,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
        P: PostStore + Clone + 'static,
        C: CommentStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        T: TokenService + Clone + 'static,
    {
        let auth_router = Router::new()
            // Register needs the user store and the hasher
            .route("/register", post(register::<U, H>))
            .with_state((user_store.clone(), password_hasher.clone()))
            // Login additionally issues tokens
            .route("/login", post(login::<U, H, T>))
            .with_state((
                user_store.clone(),
                password_hasher,
                token_service.clone(),
            ))
            // Logout and refresh verify the presented token against the
            // user's active set
            .route("/logout", get(logout::<U, T>))
            .with_state((user_store.clone(), token_service.clone()))
            .route("/refresh", get(refresh::<U, T>))
            .with_state((user_store.clone(), token_service));

        let users_router = Router::new()
            .route("/", get(get_users::<U>))
            .route(
                "/{id}",
                get(get_user::<U>)
                    .put(update_user::<U>)
                    .delete(delete_user::<U>),
            )
            .route("/email/{email}", get(get_user_by_email::<U>))
            .with_state(user_store);

        let posts_router = Router::new()
            .route("/", post(create_post::<P>).get(get_posts::<P>))
            .route(
                "/{id}",
                get(get_post::<P>)
                    .put(update_post::<P>)
                    .delete(delete_post::<P>),
            )
            .with_state(post_store);

        let comments_router = Router::new()
            .route("/", post(create_comment::<C>).get(get_comments::<C>))
            .route(
                "/{id}",
                get(get_comment::<C>)
                    .put(update_comment::<C>)
                    .delete(delete_comment::<C>),
            )
            .route("/post/{post_id}", get(get_comments_by_post::<C>))
            .route("/sender/{sender_id}", get(get_comments_by_sender::<C>))
            .with_state(comment_store);

        let router = Router::new()
            .nest("/auth", auth_router)
            .nest("/users", users_router)
            .nest("/posts", posts_router)
            .nest("/comments", comments_router)
            .layer(CorsLayer::permissive())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            );

        Self { router }
    }

    /// Serve until the process is stopped.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router).await
    }
}
