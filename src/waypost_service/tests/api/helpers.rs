use secrecy::Secret;
use serde_json::{Value, json};
use waypost_adapters::{
    persistence::{InMemoryCommentStore, InMemoryPostStore, InMemoryUserStore},
    security::{Argon2PasswordHasher, JwtTokenService},
};
use waypost_service::Application;

pub const ACCESS_SECRET: &str = "access-secret-for-tests";
pub const REFRESH_SECRET: &str = "refresh-secret-for-tests";

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let token_service = JwtTokenService::new(
            &Secret::from(ACCESS_SECRET.to_string()),
            &Secret::from(REFRESH_SECRET.to_string()),
            600,
        );

        let application = Application::new(
            InMemoryUserStore::new(),
            InMemoryPostStore::new(),
            InMemoryCommentStore::new(),
            Argon2PasswordHasher::new(),
            token_service,
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind an ephemeral port");
        let address = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(application.run(listener));

        Self {
            address,
            client: reqwest::Client::new(),
        }
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("request failed")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("request failed")
    }

    pub async fn put_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .put(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("request failed")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("request failed")
    }

    pub async fn register(&self, email: &str, password: &str, username: &str) -> reqwest::Response {
        self.post_json(
            "/auth/register",
            &json!({ "email": email, "password": password, "username": username }),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post_json("/auth/login", &json!({ "email": email, "password": password }))
            .await
    }

    pub async fn logout(&self, refresh_token: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/auth/logout", self.address))
            .bearer_auth(refresh_token)
            .send()
            .await
            .expect("request failed")
    }

    pub async fn refresh(&self, refresh_token: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/auth/refresh", self.address))
            .bearer_auth(refresh_token)
            .send()
            .await
            .expect("request failed")
    }

    /// Register + login in one step, returning `(accessToken, refreshToken)`.
    pub async fn register_and_login(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> (String, String) {
        let response = self.register(email, password, username).await;
        assert_eq!(response.status().as_u16(), 201);

        self.login_pair(email, password).await
    }

    pub async fn login_pair(&self, email: &str, password: &str) -> (String, String) {
        let response = self.login(email, password).await;
        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.unwrap();

        (
            body["accessToken"].as_str().unwrap().to_string(),
            body["refreshToken"].as_str().unwrap().to_string(),
        )
    }
}

#[derive(serde::Deserialize)]
struct SubjectClaims {
    sub: String,
}

/// Decode a token's subject without enforcing expiry, so the same helper
/// works for access and refresh tokens.
pub fn token_subject(token: &str, secret: &str) -> String {
    let mut validation = jsonwebtoken::Validation::default();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    jsonwebtoken::decode::<SubjectClaims>(
        token,
        &jsonwebtoken::DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .expect("token should decode")
    .claims
    .sub
}

/// A structurally valid refresh token signed with the wrong secret.
pub fn foreign_refresh_token(subject: &str) -> String {
    #[derive(serde::Serialize)]
    struct Claims<'a> {
        sub: &'a str,
        iat: usize,
    }

    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &Claims {
            sub: subject,
            iat: 0,
        },
        &jsonwebtoken::EncodingKey::from_secret(b"somebody-elses-refresh-secret"),
    )
    .unwrap()
}
