pub mod jwt;
pub mod password_hasher;

pub use jwt::JwtTokenService;
pub use password_hasher::Argon2PasswordHasher;
