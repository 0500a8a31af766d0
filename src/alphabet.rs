use crate::config::GenerationConfig;
use crate::error::{PwgenError, Result};
use std::fmt;

pub const DIGITS: &[u8] = b"0123456789";
pub const LOWERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
pub const AMBIGUOUS: &[u8] = b"B8G6I1l0OQDS5Z2";
pub const VOWELS: &[u8] = b"01aeiouyAEIOUY";

/// Ordered, duplicate-free pool of bytes a password is filled from, plus the
/// pools its required digit and symbol are drawn from. All three exclude
/// every removed byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<u8>,
    digits: Vec<u8>,
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Derives the pool from the character-class toggles of `config`, minus
    /// every byte named by an active exclusion rule or `config.remove_chars`.
    pub fn from_config(config: &GenerationConfig) -> Result<Self> {
        let mut base = LOWERS.to_vec();
        if !config.no_numerals {
            base.extend_from_slice(DIGITS);
        }
        if !config.no_capitalize {
            base.extend_from_slice(UPPERS);
        }
        if config.symbols {
            base.extend_from_slice(SYMBOLS);
        }

        let mut removed = config.remove_chars.as_bytes().to_vec();
        if config.ambiguous {
            removed.extend_from_slice(AMBIGUOUS);
        }
        if config.no_vowels {
            removed.extend_from_slice(VOWELS);
        }
        if config.no_numerals {
            removed.extend_from_slice(DIGITS);
        }
        removed.sort_unstable();
        removed.dedup();

        let chars = retain_allowed(&base, &removed);
        if chars.is_empty() {
            return Err(PwgenError::Configuration(
                "no symbols for passwords generation".to_string(),
            ));
        }

        Ok(Self {
            chars,
            digits: retain_allowed(DIGITS, &removed),
            symbols: retain_allowed(SYMBOLS, &removed),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: u8) -> bool {
        self.chars.contains(&c)
    }
}

fn retain_allowed(base: &[u8], removed: &[u8]) -> Vec<u8> {
    let mut chars = Vec::with_capacity(base.len());
    for &c in base {
        if removed.binary_search(&c).is_err() && !chars.contains(&c) {
            chars.push(c);
        }
    }
    chars
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.chars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn build(config: GenerationConfig) -> Alphabet {
        Alphabet::from_config(&config).unwrap()
    }

    #[test]
    fn test_default_alphabet() {
        let alphabet = build(GenerationConfig::default());
        assert_eq!(
            alphabet.to_string(),
            "abcdefghijklmnopqrstuvwxyz0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ"
        );
    }

    #[test]
    fn test_symbol_set_is_unique() {
        let unique: HashSet<_> = SYMBOLS.iter().collect();
        assert_eq!(unique.len(), SYMBOLS.len(), "symbol set contains duplicates");
        assert_eq!(SYMBOLS.len(), 32);
    }

    #[test]
    fn test_symbols_appended() {
        let alphabet = build(GenerationConfig {
            symbols: true,
            ..GenerationConfig::default()
        });
        assert_eq!(alphabet.len(), 26 + 10 + 26 + 32);
        assert!(alphabet.as_bytes().ends_with(SYMBOLS));
    }

    #[test]
    fn test_no_numerals_and_no_capitalize() {
        let alphabet = build(GenerationConfig {
            no_numerals: true,
            no_capitalize: true,
            ..GenerationConfig::default()
        });
        assert_eq!(alphabet.as_bytes(), LOWERS);
    }

    #[test]
    fn test_ambiguous_removed() {
        let alphabet = build(GenerationConfig {
            ambiguous: true,
            ..GenerationConfig::default()
        });
        for c in AMBIGUOUS {
            assert!(!alphabet.contains(*c), "found ambiguous {:?}", *c as char);
        }
    }

    #[test]
    fn test_vowels_removed() {
        let alphabet = build(GenerationConfig {
            no_vowels: true,
            ..GenerationConfig::default()
        });
        for c in VOWELS {
            assert!(!alphabet.contains(*c), "found vowel {:?}", *c as char);
        }
        assert!(alphabet.contains(b'b'));
        assert!(alphabet.contains(b'9'));
    }

    #[test]
    fn test_remove_chars_preserves_order() {
        let alphabet = build(GenerationConfig {
            remove_chars: "zyxa0Z".to_string(),
            ..GenerationConfig::default()
        });
        assert_eq!(
            alphabet.to_string(),
            "bcdefghijklmnopqrstuvw123456789ABCDEFGHIJKLMNOPQRSTUVWXY"
        );
    }

    #[test]
    fn test_required_pools_follow_removal() {
        let alphabet = build(GenerationConfig {
            ambiguous: true,
            symbols: true,
            remove_chars: "!#".to_string(),
            ..GenerationConfig::default()
        });
        assert_eq!(alphabet.digits(), b"3479");
        assert!(!alphabet.symbols().contains(&b'!'));
        assert!(!alphabet.symbols().contains(&b'#'));
        assert_eq!(alphabet.symbols().len(), SYMBOLS.len() - 2);

        let alphabet = build(GenerationConfig {
            no_numerals: true,
            ..GenerationConfig::default()
        });
        assert!(alphabet.digits().is_empty());
    }

    #[test]
    fn test_remove_everything_fails() {
        let result = Alphabet::from_config(&GenerationConfig {
            remove_chars: "abcdefghijklmnopqrstuvwxyz0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ"
                .to_string(),
            ..GenerationConfig::default()
        });
        match result {
            Err(PwgenError::Configuration(message)) => {
                assert_eq!(message, "no symbols for passwords generation")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
