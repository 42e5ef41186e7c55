use clap::{builder::ValueParser, Arg, ArgMatches, Command};
use tracing::Level;

pub const ARG_VERBOSITY: &str = "verbosity";

/// Accepts a level name or a number; `-v` flags count up the same scale.
#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

/// Tracing level for the parsed verbosity; `None` keeps the ERROR default.
#[must_use]
pub fn verbosity_level(matches: &ArgMatches) -> Option<Level> {
    match matches.get_one::<u8>(ARG_VERBOSITY).copied().unwrap_or(0) {
        0 => None,
        1 => Some(Level::WARN),
        2 => Some(Level::INFO),
        3 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
            .env("ZCBUS_LOG_LEVEL")
            .global(true)
            .action(clap::ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_for(args: &[&str]) -> ArgMatches {
        with_args(Command::new("zcbus")).get_matches_from(args)
    }

    #[test]
    fn verbosity_flags_map_to_levels() {
        temp_env::with_vars([("ZCBUS_LOG_LEVEL", None::<&str>)], || {
            assert_eq!(verbosity_level(&matches_for(&["zcbus"])), None);
            assert_eq!(verbosity_level(&matches_for(&["zcbus", "-v"])), Some(Level::WARN));
            assert_eq!(verbosity_level(&matches_for(&["zcbus", "-vv"])), Some(Level::INFO));
            assert_eq!(
                verbosity_level(&matches_for(&["zcbus", "-vvv"])),
                Some(Level::DEBUG)
            );
            assert_eq!(
                verbosity_level(&matches_for(&["zcbus", "-vvvvv"])),
                Some(Level::TRACE)
            );
        });
    }

    #[test]
    fn log_level_env_accepts_names() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, level) in levels.iter().enumerate() {
            temp_env::with_vars([("ZCBUS_LOG_LEVEL", Some(*level))], || {
                let matches = matches_for(&["zcbus"]);
                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }
}
