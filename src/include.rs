//! Simple utility module to import and then re-export libs to use in project.
//! By: Curtis Jones <mail@curtisjones.ca>
//! Started on: October 3, 2026

// Use statements.
pub use chrono::{DateTime, Duration as ChronoDuration, FixedOffset, Local};
pub use clap::{clap_app, AppSettings::ColoredHelp};
pub use dirs::config_dir;
pub use flexi_logger::{
    default_format, AdaptiveFormat, Cleanup, Criterion, Duplicate, LevelFilter, LogSpecBuilder,
    Logger, Naming, ReconfigurationHandle,
};
pub use log::{error, info, warn};
pub use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, RequestBuilder, Response, StatusCode,
};
pub use ron::de::from_str;
pub use serde::{Deserialize, Serialize};
pub use std::{
    collections::HashMap,
    error, fmt,
    fs::{read_to_string, DirBuilder, OpenOptions},
    io::{self, Write},
    path::PathBuf,
    time::Duration,
};
pub use tokio::{self, time::sleep};

// Typedefs.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
pub type ListingId = String;
