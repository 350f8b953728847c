#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

pub mod config;
pub mod gateway;
pub mod logging;
pub mod presets;
pub mod record;
pub mod registry;
pub mod sequencer;
pub mod user;

// Re-export commonly used types
pub use config::CollectionConfig;
pub use gateway::{CollectionGateway, GatewayError, MemoryGateway};
pub use logging::{init_logging, parse_rotation, LogConfig, LOG_FILENAME};
pub use record::{Draft, DraftState, Record};
pub use registry::{RecordRegistry, RegistryError};
pub use sequencer::{next_display_id, next_suffix, DEFAULT_PAD_WIDTH};
pub use user::{UserContext, UNKNOWN_USER};
