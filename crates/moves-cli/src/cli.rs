//! Command-line arguments and their resolution into a generation plan.

use crate::config::MovesConfig;
use crate::error::CliError;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use moves_core::{KnightConfig, LegOrder, Position, StepCounts, MAX_STEPS};
use moves_engine::{Block, Level, MoveSequenceGenerator, Report, StrategyKind};
use std::path::PathBuf;

/// Names of the five positional values, in order.
pub const STEP_NAMES: [&str; 5] = [
    "rook",
    "bishop",
    "queen",
    "knight_vertical",
    "knight_horizontal",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Labeled blocks, one token per line
    #[default]
    Text,
    /// A JSON document with the tokens of each piece
    Json,
}

/// Prints the move sequences of rook, bishop, queen and knight.
#[derive(Parser, Debug)]
#[command(name = "xadrez", version)]
#[command(after_help = "Defaults: 5 5 8 2 1\nLimits: each value in 0..=100000")]
pub struct Cli {
    /// Step counts: <ROOK> <BISHOP> <QUEEN> <KNIGHT_VERTICAL> <KNIGHT_HORIZONTAL>
    #[arg(value_name = "STEPS", allow_negative_numbers = true)]
    pub steps: Vec<String>,

    /// Generation strategy (iterative or recursive)
    #[arg(long, value_name = "STRATEGY", conflicts_with = "level")]
    pub strategy: Option<StrategyKind>,

    /// Print one exercise level (novice, adventurer, master or all)
    #[arg(long, value_name = "LEVEL")]
    pub level: Option<Level>,

    /// Knight convention (up-right or down-left)
    #[arg(
        long,
        value_name = "CONVENTION",
        value_parser = KnightConfig::preset,
        conflicts_with = "level"
    )]
    pub knight: Option<KnightConfig>,

    /// Knight leg order (vertical-first or horizontal-first)
    #[arg(long, value_name = "ORDER", conflicts_with = "level")]
    pub knight_order: Option<LegOrder>,

    /// Also print the bishop decomposed into up and right steps
    #[arg(long, conflicts_with = "level")]
    pub decomposed: bool,

    /// Walk every sequence from this square (e.g. a1) and print where it ends
    #[arg(long, value_name = "SQUARE")]
    pub from: Option<Position>,

    /// Omit the title, configuration and trailer lines
    #[arg(long)]
    pub no_banner: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Configuration file with default steps, strategy and knight convention
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Short usage text printed after argument errors.
pub fn usage() -> String {
    let mut cmd = Cli::command();
    format!(
        "{}\nDefaults: 5 5 8 2 1\nLimits: each value in 0..={}\n",
        cmd.render_usage(),
        MAX_STEPS
    )
}

/// Everything needed to generate one run's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub counts: StepCounts,
    pub strategy: StrategyKind,
    pub knight: KnightConfig,
    pub level: Option<Level>,
    pub decomposed: bool,
    pub from: Option<Position>,
}

impl Plan {
    /// Combines arguments with the configuration; arguments take precedence.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::WrongArgumentCount`] or [`CliError::InvalidStep`]
    /// for bad positional values, and [`CliError::Config`] for invalid
    /// configured values.
    pub fn resolve(cli: &Cli, config: &MovesConfig) -> Result<Self, CliError> {
        let counts = resolve_counts(&cli.steps, config)?;

        let mut knight = match cli.knight {
            Some(preset) => preset,
            None => config.knight.to_config()?,
        };
        if let Some(order) = cli.knight_order {
            knight = knight.with_order(order);
        }

        Ok(Plan {
            counts,
            strategy: cli.strategy.unwrap_or(config.strategy),
            knight,
            level: cli.level,
            decomposed: cli.decomposed,
            from: cli.from,
        })
    }

    /// Generates every block and wraps them in a report.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::OffBoard`] if a sequence walked from the start
    /// square leaves the board.
    pub fn build_report(&self) -> Result<Report, CliError> {
        let (title, blocks) = match self.level {
            Some(level) => (level.title(), level.blocks(&self.counts)),
            None => {
                let generator = MoveSequenceGenerator::with_kind(self.strategy, self.knight);
                (
                    "XADREZ",
                    Block::for_counts(&generator, &self.counts, self.decomposed),
                )
            }
        };
        let mut report = Report::new(title, blocks).with_summary(self.counts.summary());
        if let Some(from) = self.from {
            for block in &mut report.blocks {
                block
                    .walk_from(from)
                    .map_err(|source| CliError::OffBoard {
                        piece: block.piece.label(),
                        source,
                    })?;
            }
        }
        Ok(report)
    }
}

fn resolve_counts(steps: &[String], config: &MovesConfig) -> Result<StepCounts, CliError> {
    if steps.is_empty() {
        return Ok(config.steps.to_counts()?);
    }
    let values = <&[String; 5]>::try_from(steps)
        .map_err(|_| CliError::WrongArgumentCount(steps.len()))?;
    StepCounts::parse(values).map_err(|(position, source)| CliError::InvalidStep {
        name: STEP_NAMES[position],
        source,
    })
}
