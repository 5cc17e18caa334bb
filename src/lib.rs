//! # Waypost - REST Backend Library
//!
//! This is a facade crate that re-exports all public APIs from the waypost
//! service components. Use this crate to get access to the whole backend in
//! one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! waypost = { path = "../waypost" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Username`, `Password`, `User`, `Post`, `Comment`
//! - **Port traits**: `UserStore`, `PostStore`, `CommentStore`, `PasswordHasher`, `TokenService`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `LogoutUseCase`, `RefreshUseCase`
//! - **Adapters**: `InMemoryUserStore`, `Argon2PasswordHasher`, `JwtTokenService`, HTTP routes
//! - **Service**: `Application` - the assembled HTTP application

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and port traits
pub mod core {
    pub use waypost_core::*;
}

// Re-export most commonly used core types at the root level
pub use waypost_core::{Comment, Email, Password, Post, User, Username};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use waypost_core::{
        CommentStore, Entity, PasswordHasher, PostStore, Repository, StoreError, TokenService,
        UserStore,
    };
}

// Re-export port traits at root level
pub use waypost_core::{
    CommentStore, Entity, PasswordHasher, PostStore, Repository, StoreError, TokenError,
    TokenService, UserStore,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use waypost_application::*;
}

// Re-export use cases at root level
pub use waypost_application::{
    LoginUseCase, LogoutUseCase, RefreshUseCase, RegisterUseCase, TokenPair,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use waypost_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use waypost_adapters::persistence::*;
    }

    /// Password hashing and token services
    pub mod security {
        pub use waypost_adapters::security::*;
    }

    /// Configuration
    pub mod config {
        pub use waypost_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use waypost_adapters::{
    persistence::{InMemoryCommentStore, InMemoryPostStore, InMemoryUserStore},
    security::{Argon2PasswordHasher, JwtTokenService},
};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

/// The assembled HTTP application
pub use waypost_service::Application;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
