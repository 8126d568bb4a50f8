pub mod list_domains;
pub mod login;
pub mod logout;
pub mod register;

pub use list_domains::ListDomainsUseCase;
pub use login::{LoginError, LoginUseCase};
pub use logout::{LogoutError, LogoutUseCase};
pub use register::{RegisterError, RegisterUseCase};
