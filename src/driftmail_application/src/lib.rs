pub mod use_cases;

pub use use_cases::{
    list_domains::ListDomainsUseCase,
    login::{LoginError, LoginUseCase},
    logout::{LogoutError, LogoutUseCase},
    register::{RegisterError, RegisterUseCase},
};
