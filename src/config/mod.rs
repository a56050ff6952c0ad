//! Command-line and environment configuration.

mod duration;

pub use duration::parse_tick;

use anyhow::Context;
use clap::Args;
use phony_core::WordList;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Duration;

/// Options controlling what is rendered and how often.
#[derive(Args, Clone, Debug)]
pub struct PhonyOpts {
    /// Template file to read (default: read the template from stdin)
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Render once every interval (e.g. "10ms", "1s", "1m30s")
    #[arg(long, default_value = "10ms", env = "PHONY_TICK", value_parser = parse_tick)]
    pub tick: Duration,

    /// Stop after this many renders (default: run until interrupted)
    #[arg(long, env = "PHONY_MAX", value_parser = clap::value_parser!(u64).range(1..))]
    pub max: Option<u64>,

    /// List all available generators and exit
    #[arg(long)]
    pub list: bool,

    /// Select one random line of the template on each tick
    #[arg(long)]
    pub choice_line: bool,

    /// Random seed for reproducible output (same seed = same data)
    #[arg(long, env = "PHONY_SEED")]
    pub seed: Option<u64>,

    /// YAML word list merged over the builtin corpus (category: [words])
    #[arg(long, value_name = "PATH", env = "PHONY_WORDLIST")]
    pub wordlist: Option<PathBuf>,
}

impl PhonyOpts {
    /// The builtin corpus, overlaid with `--wordlist` if given.
    pub fn load_wordlist(&self) -> anyhow::Result<WordList> {
        let builtin = WordList::builtin();
        match &self.wordlist {
            None => Ok(builtin),
            Some(path) => {
                let overlay = WordList::from_file(path)
                    .with_context(|| format!("Failed to load word list {}", path.display()))?;
                Ok(builtin.merge(overlay))
            }
        }
    }

    /// A seeded RNG when `--seed` is given, OS entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rand::RngCore;
    use std::io::Write;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        opts: PhonyOpts,
    }

    fn parse(args: &[&str]) -> Result<PhonyOpts, clap::Error> {
        TestCli::try_parse_from(std::iter::once("phony").chain(args.iter().copied()))
            .map(|cli| cli.opts)
    }

    #[test]
    fn test_defaults() {
        let opts = parse(&[]).unwrap();
        assert_eq!(opts.tick, Duration::from_millis(10));
        assert_eq!(opts.max, None);
        assert!(!opts.list);
        assert!(!opts.choice_line);
        assert!(opts.template.is_none());
    }

    #[test]
    fn test_flags() {
        let opts = parse(&[
            "--tick",
            "1s",
            "--max",
            "3",
            "--choice-line",
            "--seed",
            "7",
            "people.tmpl",
        ])
        .unwrap();
        assert_eq!(opts.tick, Duration::from_secs(1));
        assert_eq!(opts.max, Some(3));
        assert!(opts.choice_line);
        assert_eq!(opts.seed, Some(7));
        assert_eq!(opts.template, Some(PathBuf::from("people.tmpl")));
    }

    #[test]
    fn test_rejects_zero_max_and_tick() {
        assert!(parse(&["--max", "0"]).is_err());
        assert!(parse(&["--tick", "0s"]).is_err());
        assert!(parse(&["--tick", "soon"]).is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let opts = parse(&["--seed", "42"]).unwrap();
        assert_eq!(opts.rng().next_u64(), opts.rng().next_u64());
    }

    #[test]
    fn test_load_wordlist_overlay() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name.first: [Zed]\ncolor: [teal]").unwrap();

        let path = file.path().to_str().unwrap();
        let words = parse(&["--wordlist", path]).unwrap().load_wordlist().unwrap();
        assert_eq!(words.lookup("name.first").unwrap(), &["Zed".to_string()]);
        assert_eq!(words.lookup("color").unwrap(), &["teal".to_string()]);
        assert!(words.lookup("name.last").is_some());
    }

    #[test]
    fn test_load_wordlist_missing_file() {
        let opts = parse(&["--wordlist", "/nonexistent/words.yaml"]).unwrap();
        let err = opts.load_wordlist().unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/words.yaml"));
    }
}
