use crate::error::{PwgenError, Result};
use std::path::PathBuf;

pub const DEFAULT_PW_LENGTH: usize = 8;
pub const DEFAULT_NUM_PW: usize = 160;
pub const SCREEN_WIDTH: usize = 80;

/// Where the generator seed comes from when the secure source is not used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SeedSource {
    #[default]
    None,
    File(PathBuf),
    Value(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub pw_length: usize,
    pub num_pw: usize,
    pub no_numerals: bool,
    pub numerals: bool,
    pub no_capitalize: bool,
    pub ambiguous: bool,
    pub symbols: bool,
    pub no_vowels: bool,
    pub one_line: bool,
    pub secure: bool,
    pub remove_chars: String,
    pub seed: SeedSource,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            pw_length: DEFAULT_PW_LENGTH,
            num_pw: DEFAULT_NUM_PW,
            no_numerals: false,
            numerals: true,
            no_capitalize: false,
            ambiguous: false,
            symbols: false,
            no_vowels: false,
            one_line: false,
            secure: false,
            remove_chars: String::new(),
            seed: SeedSource::None,
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.pw_length < 1 {
            return Err(PwgenError::Configuration(
                "password length must be positive".to_string(),
            ));
        }
        if self.num_pw < 1 {
            return Err(PwgenError::Configuration(
                "number of passwords must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// A digit is placed only when numerals are requested and not forbidden.
    pub fn requires_digit(&self) -> bool {
        self.numerals && !self.no_numerals
    }
}

/// Parses the optional `[length] [count]` positionals. Anything after the
/// second value is ignored.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<(usize, usize)> {
    let pw_length = match args.first() {
        Some(arg) => parse_positive(arg.as_ref(), "password length")?,
        None => DEFAULT_PW_LENGTH,
    };
    let num_pw = match args.get(1) {
        Some(arg) => parse_positive(arg.as_ref(), "number of passwords")?,
        None => DEFAULT_NUM_PW,
    };
    Ok((pw_length, num_pw))
}

fn parse_positive(value: &str, name: &str) -> Result<usize> {
    let parsed: i64 = value
        .parse()
        .map_err(|_| PwgenError::Argument(format!("{} is not an integer: {:?}", name, value)))?;
    if parsed < 1 {
        return Err(PwgenError::Argument(format!(
            "{} must be positive, got {}",
            name, parsed
        )));
    }
    usize::try_from(parsed)
        .map_err(|_| PwgenError::Argument(format!("{} is too large: {}", name, parsed)))
}
