use rand::Rng;
use std::cmp;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::token::TokenSource;
use super::{Profile, Record, Result};

// upper bound on the seen-set allocation made before the first line is written
const MAX_RESERVE: u64 = 1 << 20;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub procs: u64,
    pub puts: u64,
    pub syncs: u64,
    pub rejections: u64,
}

impl Summary {
    pub fn lines(&self) -> u64 {
        self.procs + self.puts + self.syncs
    }
}

// writes one fixture to `w`, format:
//
// proc 0
//   put 3kq9z0d1 7
//   sync
//   ...
pub fn generate<R, W>(profile: &Profile, rng: &mut R, w: &mut W) -> Result<Summary>
where
    R: Rng,
    W: Write,
{
    profile.validate()?;

    // validate() has already rejected lengths whose key space overflows
    let key_space = profile.key_space().unwrap_or(u64::max_value());
    let mut tokens = TokenSource::with_capacity(
        key_space,
        cmp::min(profile.total_count, MAX_RESERVE) as usize,
    );
    let mut summary = Summary::default();

    for i in 1..=profile.total_count {
        let pos = i % profile.block_size;

        if pos == 1 {
            debug!("{}: begin proc {} at record {}", profile.name, summary.procs, i);
            Record::Proc(summary.procs).dump(w)?;
            summary.procs += 1;
        }

        if profile.sync_offset == Some(pos) {
            Record::Sync.dump(w)?;
            summary.syncs += 1;
        }

        let token = tokens.next(rng);
        let value = rng.gen_range(0, profile.value_ceiling);
        Record::Put { token, value }.dump(w)?;
        summary.puts += 1;
    }

    w.flush()?;
    summary.rejections = tokens.rejections();
    debug!("{}: {} distinct tokens", profile.name, tokens.len());

    Ok(summary)
}

pub fn write_fixture<R: Rng>(dir: &Path, profile: &Profile, rng: &mut R) -> Result<(PathBuf, Summary)> {
    // fail on a bad profile before truncating anything on disk
    profile.validate()?;

    let path = dir.join(profile.name);
    info!(
        "writing {:?}: {} puts, blocks of {}, token length {}, values < {}, sync at {:?}",
        path,
        profile.total_count,
        profile.block_size,
        profile.token_length,
        profile.value_ceiling,
        profile.sync_offset,
    );

    let start = Instant::now();
    let file = File::create(&path)?;
    let mut out = BufWriter::new(file);
    let summary = generate(profile, rng, &mut out)?;

    info!(
        "wrote {:?}: {} lines ({} proc, {} put, {} sync), {} duplicate draws, {:?}",
        path,
        summary.lines(),
        summary.procs,
        summary.puts,
        summary.syncs,
        summary.rejections,
        start.elapsed(),
    );

    Ok((path, summary))
}

pub fn write_all<R: Rng>(dir: &Path, rng: &mut R) -> Result<Vec<(PathBuf, Summary)>> {
    let mut written = Vec::new();
    for profile in Profile::builtin().iter() {
        written.push(write_fixture(dir, profile, rng)?);
    }
    Ok(written)
}
