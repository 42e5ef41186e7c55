//! Maps validated CLI matches to the action the binary executes.

use crate::cli::{
    actions::{login, verify, Action},
    commands::{ARG_API_URL, ARG_EMAIL, ARG_PASSWORD, ARG_TIMEOUT, CMD_LOGIN, CMD_VERIFY},
    globals::GlobalArgs,
};
use anyhow::{bail, Context, Result};
use secrecy::SecretString;
use std::time::Duration;

/// # Errors
/// Returns an error if required arguments are missing or no subcommand was given.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let api_url = matches
        .get_one::<String>(ARG_API_URL)
        .cloned()
        .context("missing required argument: --api-url")?;
    let timeout = matches.get_one::<u64>(ARG_TIMEOUT).copied().unwrap_or(10);
    let globals = GlobalArgs::new(api_url, Duration::from_secs(timeout));

    // Closure to return the required email of a subcommand
    let email = |sub_m: &clap::ArgMatches| -> Result<String> {
        sub_m
            .get_one::<String>(ARG_EMAIL)
            .cloned()
            .context("missing required argument: --email")
    };

    match matches.subcommand() {
        Some((CMD_VERIFY, sub_m)) => Ok(Action::Verify(verify::Args {
            globals,
            email: email(sub_m)?,
        })),
        Some((CMD_LOGIN, sub_m)) => {
            let password = sub_m
                .get_one::<String>(ARG_PASSWORD)
                .cloned()
                .context("missing required argument: --password")?;

            Ok(Action::Login(login::Args {
                globals,
                email: email(sub_m)?,
                password: SecretString::from(password),
            }))
        }
        _ => bail!("missing subcommand, see --help"),
    }
}
