pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::AppConfig;
pub use crate::core::{
    lookup_client::HttpMunicipalityClient,
    municipality_service::MunicipalityService,
    notifier::{Notifier, NotifyOutcome, SkipReason},
};
pub use crate::utils::error::{AppError, NotificationError, Result, TransportError};
pub use crate::utils::serialization::Serialization;
