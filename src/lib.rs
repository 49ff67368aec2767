//! Twenty Questions over a binary decision tree.
//!
//! A [`catalog::Catalog`] of labeled records with boolean features is
//! partitioned into an immutable [`tree::Node`] tree, which a
//! [`game::Session`] then walks by asking yes/no questions.
pub mod catalog;
pub mod config;
pub mod game;
pub mod tree;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Display label of a record, e.g. a movie title.
pub type Label = String;
/// Name of a boolean feature column.
pub type Feature = String;
/// Number of yes/no questions asked in one round.
pub type Guesses = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// DEFAULTS
// ============================================================================
/// Catalog path used when `TWENTYQ_DATA` is unset.
pub const DEFAULT_DATA: &str = "data/movies.csv";
/// Noun used in questions when `TWENTYQ_SUBJECT` is unset.
pub const DEFAULT_SUBJECT: &str = "movie";
/// Prompt shown between rounds.
pub const REPLAY_PROMPT: &str = "Would you like to play again?";
/// Feature value that reads as true. Anything else reads as false.
pub const TRUE_FLAG: &str = "1";
/// Feature value that reads as false.
pub const FALSE_FLAG: &str = "0";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal
/// so the question transcript stays readable.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
