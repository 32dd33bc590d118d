extern crate dht_stress;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate rand;

use std::env;
use std::ffi::OsString;
use std::path;

use dht_stress::fixture;

fn run(dir: &path::Path) -> fixture::Result<()> {
    let mut rng = rand::thread_rng();

    for (path, summary) in fixture::write_all(dir, &mut rng)? {
        println!("{}: {} lines", path.display(), summary.lines());
    }
    Ok(())
}

// None when more than one argument was given
fn output_dir(args: &[OsString]) -> Option<&path::Path> {
    match args.len() {
        0 | 1 => Some(path::Path::new(".")),
        2 => Some(path::Path::new(&args[1])),
        _ => None,
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let args: Vec<OsString> = env::args_os().collect();

    let progname =
        args.get(0)
            .and_then(|arg0| path::Path::new(arg0).file_name())
            .and_then(|fname| fname.to_str())
            .unwrap_or("dht_stress");

    let dir = match output_dir(&args) {
        Some(dir) => dir,
        None => {
            eprintln!("Usage: {} [OUTPUT_DIR]", progname);
            std::process::exit(1);
        }
    };

    std::process::exit(
        match run(dir) {
            Ok(_) => 0,
            Err(err) => {
                error!("generation failed: {}", err);
                eprintln!("error: {}", err);
                1
            }
        }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn output_dir_defaults_to_cwd() {
        assert_eq!(output_dir(&os(&["dht_stress"])), Some(path::Path::new(".")));
        assert_eq!(output_dir(&[]), Some(path::Path::new(".")));
        assert_eq!(output_dir(&os(&["dht_stress", "/tmp/out"])), Some(path::Path::new("/tmp/out")));
        assert_eq!(output_dir(&os(&["dht_stress", "a", "b"])), None);
    }

    #[cfg(unix)]
    #[test]
    fn output_dir_accepts_non_utf8_paths() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![b'o', b'u', b't', 0xff]);
        let args = vec![OsString::from("dht_stress"), raw.clone()];

        assert_eq!(output_dir(&args), Some(path::Path::new(&raw)));
    }
}
