//! Command-line argument parsing

use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;
use crate::constants::{MAX_BAR_CELLS, MIN_BAR_CELLS};
use crate::inventory::ThresholdPolicy;

/// Parse and validate a gauge width in cells
fn parse_bar_width(s: &str) -> Result<u16, String> {
    let n: u16 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if usize::from(n) < MIN_BAR_CELLS {
        Err(format!("bar width must be at least {}", MIN_BAR_CELLS))
    } else if usize::from(n) > MAX_BAR_CELLS {
        Err(format!("bar width cannot exceed {}", MAX_BAR_CELLS))
    } else {
        Ok(n)
    }
}

/// Track dry kitchen ingredients against low-stock thresholds
#[derive(Parser, Debug, Default)]
#[command(name = "spice_tracker")]
#[command(
    version,
    about = "Track dry kitchen ingredient stock against low-stock thresholds",
    after_help = "\
Controls:
  Up/Down     Select ingredient
  e / Enter   Edit lower threshold
  n           Edit name
  g           Grocery list (low stock)
  ?           Help
  q           Quit

Examples:
  spice_tracker                       Start the dashboard
  spice_tracker --report -w 40        Print gauges and exit
  spice_tracker --reject-invalid      Keep the old threshold on invalid input"
)]
pub struct Args {
    /// Config file to use instead of the user config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Gauge width in terminal cells (default: fit the terminal)
    #[arg(short = 'w', long, value_parser = parse_bar_width)]
    pub bar_width: Option<u16>,

    /// Keep the previous threshold when an edit is invalid
    #[arg(long)]
    pub reject_invalid: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: Option<String>,

    /// Directory for spice_tracker.log
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Print every ingredient with its gauge and exit (non-interactive)
    #[arg(short, long)]
    pub report: bool,

    /// Write an example config file and exit
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Applies command-line overrides, which win over file and env settings
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(width) = self.bar_width {
            config.display.bar_width = Some(width);
        }
        if self.reject_invalid {
            config.thresholds.policy = Some(ThresholdPolicy::RejectInvalid);
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = Some(level.clone());
        }
        if let Some(ref dir) = self.log_dir {
            config.logging.directory = Some(dir.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["spice_tracker"]).unwrap();
        assert!(!args.report);
        assert!(!args.reject_invalid);
        assert!(args.bar_width.is_none());
    }

    #[test]
    fn test_bar_width_bounds() {
        assert!(Args::try_parse_from(["spice_tracker", "-w", "40"]).is_ok());
        assert!(Args::try_parse_from(["spice_tracker", "-w", "3"]).is_err());
        assert!(Args::try_parse_from(["spice_tracker", "-w", "9000"]).is_err());
        assert!(Args::try_parse_from(["spice_tracker", "-w", "wide"]).is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        assert!(Args::try_parse_from(["spice_tracker", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_apply_overrides_config() {
        let mut config: AppConfig =
            toml::from_str("[display]\nbar_width = 20\n[logging]\nlevel = \"warn\"\n").unwrap();
        let args = Args::try_parse_from([
            "spice_tracker",
            "--bar-width",
            "60",
            "--reject-invalid",
            "--log-level",
            "debug",
        ])
        .unwrap();

        args.apply(&mut config);
        assert_eq!(config.bar_width(), Some(60));
        assert_eq!(config.threshold_policy(), ThresholdPolicy::RejectInvalid);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_apply_without_flags_keeps_config() {
        let mut config: AppConfig = toml::from_str("[thresholds]\npolicy = \"reject-invalid\"\n").unwrap();
        Args::default().apply(&mut config);
        assert_eq!(config.threshold_policy(), ThresholdPolicy::RejectInvalid);
    }
}
