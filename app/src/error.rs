use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Session error: {0}")]
    Session(#[from] user::UserError),

    #[error("Route configuration error: {0}")]
    Routes(#[from] authz::AuthzError),

    #[error("Backend error: {0}")]
    Backend(#[from] api::ApiError),

    #[error("Redirect loop while navigating to {0}")]
    RedirectLoop(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
