pub mod auth;
pub mod users;

pub use self::auth::model::SignupRequest;
pub use self::users::model::User;
