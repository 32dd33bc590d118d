use std::fmt;
use std::io;
use std::result;

pub mod errors;
pub mod generator;
pub mod token;

pub use self::errors::GenError;
pub use self::generator::{generate, write_all, write_fixture, Summary};
pub use self::token::TokenSource;

pub type Result<T> = result::Result<T, GenError>;

// 8^21 == 2^63 is the largest power of eight a u64 holds
pub const MAX_TOKEN_LENGTH: u32 = 21;

/// One line of a fixture file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Proc(u64),
    Put { token: String, value: u64 },
    Sync,
}

impl Record {
    pub fn dump(&self, w: &mut impl io::Write) -> io::Result<()> {
        writeln!(w, "{}", self)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Record::Proc(n) => write!(f, "proc {}", n),
            Record::Put { ref token, value } => write!(f, "  put {} {}", token, value),
            Record::Sync => write!(f, "  sync"),
        }
    }
}

/// The parameters for one output file.
///
/// A new block (and its `proc` line) starts at every index `i` (1-based)
/// where `i % block_size == 1`. When `sync_offset` is set, a `sync` line is
/// written before the put at every index where `i % block_size == sync_offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub total_count: u64,
    pub block_size: u64,
    pub token_length: u32,
    pub value_ceiling: u64,
    pub sync_offset: Option<u64>,
}

impl Profile {
    pub const STRESS: Profile = Profile {
        name: "stress.txt",
        total_count: 512_000,
        block_size: 16_000,
        token_length: 16,
        value_ceiling: 1000,
        sync_offset: None,
    };

    pub const STRESS_SYNC: Profile = Profile {
        name: "stress_sync.txt",
        total_count: 64_000,
        block_size: 16_000,
        token_length: 8,
        value_ceiling: 10,
        sync_offset: Some(400),
    };

    pub fn builtin() -> [Profile; 2] {
        [Profile::STRESS, Profile::STRESS_SYNC]
    }

    /// Number of distinct integers a token can be drawn from, `8^token_length`.
    /// `None` when that overflows a u64.
    pub fn key_space(&self) -> Option<u64> {
        8u64.checked_pow(self.token_length)
    }

    pub fn validate(&self) -> Result<()> {
        if self.block_size < 2 {
            return Err(GenError::InvalidProfile(format!(
                "{}: block size must be at least 2, got {}",
                self.name, self.block_size
            )));
        }

        if self.value_ceiling == 0 {
            return Err(GenError::InvalidProfile(format!(
                "{}: value ceiling must be positive",
                self.name
            )));
        }

        if let Some(offset) = self.sync_offset {
            if offset >= self.block_size {
                return Err(GenError::InvalidProfile(format!(
                    "{}: sync offset {} is outside a block of {}",
                    self.name, offset, self.block_size
                )));
            }
        }

        let available = match self.key_space() {
            Some(n) if self.token_length > 0 => n,
            _ => {
                return Err(GenError::InvalidProfile(format!(
                    "{}: token length must be between 1 and {}, got {}",
                    self.name, MAX_TOKEN_LENGTH, self.token_length
                )))
            }
        };

        if self.total_count > available {
            return Err(GenError::KeySpaceExhausted {
                needed: self.total_count,
                available,
            });
        }

        Ok(())
    }

    /// Number of blocks, and so of `proc` lines, a full run writes.
    pub fn blocks(&self) -> u64 {
        self.total_count / self.block_size + (self.total_count % self.block_size != 0) as u64
    }
}
