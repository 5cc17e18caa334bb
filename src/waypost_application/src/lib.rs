pub mod use_cases;

#[cfg(test)]
mod test_doubles;

pub use use_cases::{
    login::{LoginError, LoginUseCase, TokenPair},
    logout::{LogoutError, LogoutUseCase},
    refresh::{RefreshError, RefreshUseCase},
    register::{RegisterError, RegisterUseCase},
};
