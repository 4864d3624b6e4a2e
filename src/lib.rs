pub use log::{debug, error, info, warn};

pub mod checker;
pub mod cli_ui;
pub mod config;
pub mod error;

pub use self::checker::*;
pub use self::cli_ui::*;
pub use self::config::*;
pub use self::error::*;
