use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Renders a fixed scene of a textured sphere above a square floor.
#[derive(Parser)]
#[command(name = "phong_shoot")]
pub struct Args {
    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,

    #[arg(long, default_value = "400")]
    pub width: u32,

    #[arg(long, default_value = "300")]
    pub height: u32,

    /// Jittered samples per pixel
    #[arg(long, short = 's', default_value = "4")]
    pub samples: u32,

    /// Lens diameter; 0 renders with a pinhole
    #[arg(long, default_value = "0.1")]
    pub aperture: f64,

    /// Image mapped onto the sphere; a missing file renders it black
    #[arg(long, short = 't')]
    pub texture: Option<String>,

    #[arg(short, long, default_value = "image.png")]
    pub output: String,
}
