pub mod domains;
pub mod error;
pub mod login;
pub mod logout;
pub mod register;

pub use domains::list_domains;
pub use error::{ApiError, ErrorResponse};
pub use login::{LoginHttpResponse, LoginRequest, login};
pub use logout::logout;
pub use register::{RegisterRequest, register};
