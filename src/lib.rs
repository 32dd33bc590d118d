#[macro_use]
extern crate log;
extern crate rand;

#[cfg(test)]
extern crate env_logger;
#[cfg(test)]
extern crate tempfile;

pub mod fixture;
