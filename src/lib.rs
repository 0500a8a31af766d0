pub mod alphabet;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod rng;
pub mod seed;

pub use alphabet::Alphabet;
pub use config::{GenerationConfig, SeedSource, parse_args};
pub use error::{PwgenError, Result};
pub use generator::{Password, PasswordGenerator, Passwords};
pub use output::{Layout, render};
pub use rng::{Clock, RandomSource, SecureSource, SeededSource, SystemClock, select_source};
pub use seed::{seed_from_bytes, seed_from_file};
