use crate::bracket::types::GenerationMode;
use crate::roster::Pool;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name="Baggo", about = "Single-elimination bracket builder for cornhole leagues", author, version, long_about = None)]
pub struct AppArgs {
    #[clap(help = "Roster file: delimited text with a header row")]
    pub roster: Option<PathBuf>,
    #[clap(long, short = 'p', value_enum, default_value_t = Pool::All, help = "Pool to build the bracket for")]
    pub pool: Pool,
    #[clap(long, short = 'm', value_enum, default_value_t = GenerationMode::SkillOrdered, help = "Bracket generation mode")]
    pub mode: GenerationMode,
    #[clap(long, action=ArgAction::Set, help = "Set random seed for shuffling")]
    pub seed: Option<u64>,
    #[clap(long, short = 'l', action=ArgAction::SetTrue, help = "Skip the federation ranking lookup")]
    pub offline: bool,
    #[clap(long, action=ArgAction::Set, help = "Generate a demo roster of this size instead of reading a file")]
    pub demo: Option<usize>,
    #[clap(long, action=ArgAction::Set, help = "Directory for bracket exports")]
    pub out_dir: Option<PathBuf>,
    #[clap(long, action=ArgAction::SetTrue, help = "Skip writing export files")]
    pub no_export: bool,
}

impl AppArgs {
    pub fn out_dir(&self) -> PathBuf {
        self.out_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::AppArgs;
    use crate::bracket::types::GenerationMode;
    use crate::roster::Pool;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let args = AppArgs::parse_from(["baggo", "roster.csv"]);
        assert_eq!(args.pool, Pool::All);
        assert_eq!(args.mode, GenerationMode::SkillOrdered);
        assert!(!args.offline);
        assert_eq!(args.out_dir(), std::path::PathBuf::from("."));
    }

    #[test]
    fn test_value_enums() {
        let args =
            AppArgs::parse_from(["baggo", "--demo", "12", "-p", "unranked", "-m", "random"]);
        assert_eq!(args.demo, Some(12));
        assert_eq!(args.pool, Pool::Unranked);
        assert_eq!(args.mode, GenerationMode::Random);
        assert!(args.roster.is_none());
    }
}
