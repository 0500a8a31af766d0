use crate::error::Result;
use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use log::debug;
use std::time::{SystemTime, UNIX_EPOCH};
use zeroize::Zeroizing;

const MASK_63: u64 = (1 << 63) - 1;
const RANGE_63: u64 = 1 << 63;
const BUFFER_LEN: usize = 512;

/// Produces uniformly distributed non-negative integers.
///
/// Draws mutate internal state, so a source must not be shared across
/// threads without external synchronization.
pub trait RandomSource {
    fn next_u63(&mut self) -> Result<u64>;

    /// Reinitializes the sequence. Sources that cannot be seeded ignore it.
    fn seed(&mut self, seed: u64);

    /// Unbiased value in `[0, bound)`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> Result<usize> {
        let bound = bound as u64;
        let rejection_threshold = RANGE_63 - (RANGE_63 % bound);
        loop {
            let value = self.next_u63()?;
            if value < rejection_threshold {
                return Ok((value % bound) as usize);
            }
        }
    }

    fn choose(&mut self, choices: &[u8]) -> Result<u8> {
        Ok(choices[self.below(choices.len())?])
    }

    /// In-place Fisher-Yates shuffle, walking from the last index down.
    fn shuffle(&mut self, bytes: &mut [u8]) -> Result<()> {
        for i in (1..bytes.len()).rev() {
            let j = self.below(i + 1)?;
            bytes.swap(i, j);
        }
        Ok(())
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u63(&mut self) -> Result<u64> {
        (**self).next_u63()
    }

    fn seed(&mut self, seed: u64) {
        (**self).seed(seed)
    }
}

/// Reproducible ChaCha20 keystream keyed from a 64-bit seed.
pub struct SeededSource {
    cipher: ChaCha20,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        let mut key = Zeroizing::new([0u8; 32]);
        key[..8].copy_from_slice(&seed.to_le_bytes());

        let cipher = ChaCha20::new((&*key).into(), &[0u8; 12].into());
        Self {
            cipher,
            buffer: Zeroizing::new(vec![0u8; BUFFER_LEN]),
            pos: BUFFER_LEN,
        }
    }

    fn refill(&mut self) {
        self.buffer.fill(0);
        self.cipher.apply_keystream(&mut self.buffer);
        self.pos = 0;
    }
}

impl RandomSource for SeededSource {
    fn next_u63(&mut self) -> Result<u64> {
        if self.pos + 8 > self.buffer.len() {
            self.refill();
        }
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.buffer[self.pos..self.pos + 8]);
        self.pos += 8;
        Ok(u64::from_le_bytes(bytes) & MASK_63)
    }

    fn seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SecureSource;

impl RandomSource for SecureSource {
    fn next_u63(&mut self) -> Result<u64> {
        let mut bytes = [0u8; 8];
        getrandom::fill(&mut bytes)?;
        Ok(u64::from_le_bytes(bytes) & MASK_63)
    }

    fn seed(&mut self, _seed: u64) {}
}

pub trait Clock {
    fn now_nanos(&self) -> u64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_nanos(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    }
}

/// Chooses the random source. `secure` wins over any seed; a zero seed means
/// "not pinned" and falls back to `clock`.
pub fn select_source(secure: bool, seed: u64, clock: &dyn Clock) -> Box<dyn RandomSource> {
    if secure {
        if seed != 0 {
            debug!("secure source selected, ignoring pinned seed");
        } else {
            debug!("secure source selected");
        }
        return Box::new(SecureSource);
    }
    if seed != 0 {
        debug!("seeded source selected with pinned seed");
        return Box::new(SeededSource::new(seed));
    }
    debug!("seeded source selected from wall clock");
    Box::new(SeededSource::new(clock.now_nanos()))
}
