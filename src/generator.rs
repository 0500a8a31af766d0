use crate::alphabet::Alphabet;
use crate::config::{GenerationConfig, SeedSource};
use crate::error::{PwgenError, Result};
use crate::rng::{Clock, RandomSource, select_source};
use crate::seed::seed_from_file;
use log::{debug, warn};
use std::fmt;
use zeroize::Zeroizing;

/// One generated password. The bytes are wiped when it is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<Vec<u8>>);

impl Password {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Password {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

pub struct PasswordGenerator<R> {
    pw_length: usize,
    num_pw: usize,
    symbols: bool,
    digit: bool,
    alphabet: Alphabet,
    rng: R,
}

impl PasswordGenerator<Box<dyn RandomSource>> {
    /// Builds the alphabet, resolves the seed and picks the random source
    /// described by `config`.
    pub fn from_config(config: &GenerationConfig, clock: &dyn Clock) -> Result<Self> {
        config.validate()?;
        let alphabet = Alphabet::from_config(config)?;

        let seed = match &config.seed {
            SeedSource::None => 0,
            SeedSource::File(path) => seed_from_file(path)?,
            SeedSource::Value(seed) => *seed,
        };
        let rng = select_source(config.secure, seed, clock);

        Ok(Self::with_alphabet(config, alphabet, rng))
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    pub fn new(config: &GenerationConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let alphabet = Alphabet::from_config(config)?;
        Ok(Self::with_alphabet(config, alphabet, rng))
    }

    fn with_alphabet(config: &GenerationConfig, alphabet: Alphabet, rng: R) -> Self {
        let generator = Self {
            pw_length: config.pw_length,
            num_pw: config.num_pw,
            symbols: config.symbols,
            digit: config.requires_digit(),
            alphabet,
            rng,
        };
        if generator.symbols && generator.alphabet.symbols().is_empty() {
            warn!("all symbols are removed, passwords will not contain a symbol");
        }
        if generator.digit && generator.alphabet.digits().is_empty() {
            warn!("all digits are removed, passwords will not contain a digit");
        }
        debug!("{}", generator);
        generator
    }

    pub fn pw_length(&self) -> usize {
        self.pw_length
    }

    pub fn num_pw(&self) -> usize {
        self.num_pw
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// A required symbol takes the last slot, then a required digit the one
    /// before it while more than one slot is left. The rest is drawn from the
    /// alphabet and the whole buffer is shuffled.
    pub fn generate(&mut self) -> Result<Password> {
        let mut password = Zeroizing::new(Vec::new());
        password.try_reserve_exact(self.pw_length).map_err(|_| {
            PwgenError::Configuration(format!(
                "password length {} is too large",
                self.pw_length
            ))
        })?;
        password.resize(self.pw_length, 0);
        let mut unfilled = self.pw_length;

        if self.symbols && !self.alphabet.symbols().is_empty() {
            password[unfilled - 1] = self.rng.choose(self.alphabet.symbols())?;
            unfilled -= 1;
        }
        if self.digit && unfilled > 1 && !self.alphabet.digits().is_empty() {
            password[unfilled - 1] = self.rng.choose(self.alphabet.digits())?;
            unfilled -= 1;
        }
        for i in (0..unfilled).rev() {
            password[i] = self.rng.choose(self.alphabet.as_bytes())?;
        }

        self.rng.shuffle(&mut password)?;
        Ok(Password(password))
    }

    pub fn passwords(&mut self) -> Passwords<'_, R> {
        let count = self.num_pw;
        self.generate_all(count)
    }

    /// Lazily yields `count` passwords. Every call continues the same random
    /// sequence rather than restarting it.
    pub fn generate_all(&mut self, count: usize) -> Passwords<'_, R> {
        Passwords {
            generator: self,
            remaining: count,
        }
    }
}

impl<R> fmt::Display for PasswordGenerator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PwGen <length: {}, number: {}> from {}",
            self.pw_length, self.num_pw, self.alphabet
        )
    }
}

pub struct Passwords<'a, R> {
    generator: &'a mut PasswordGenerator<R>,
    remaining: usize,
}

impl<R: RandomSource> Iterator for Passwords<'_, R> {
    type Item = Result<Password>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.generator.generate();
        self.remaining = if item.is_err() { 0 } else { self.remaining - 1 };
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
