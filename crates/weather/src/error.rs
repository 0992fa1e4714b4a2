use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeatherError>;

#[derive(Error, Debug)]
pub enum WeatherError {
    /// The request never got an HTTP answer (DNS, refused connection, timeout).
    #[error("No internet connection")]
    NoConnectivity(#[source] reqwest::Error),

    #[error("Parameter city must be an existing city")]
    CityNotFound,

    #[error("An unknown error occurred")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("Unexpected weather response: {0}")]
    MalformedResponse(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
