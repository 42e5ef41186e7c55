use crate::{
    api::ApiClient,
    auth::{
        authorize,
        credentials::{jwt, session, TokenClaims},
        Credentials, Session,
    },
    cli::globals::GlobalArgs,
};
use anyhow::{anyhow, Result};
use secrecy::SecretString;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub email: String,
    pub password: SecretString,
}

/// Signs in and prints the resulting session as JSON.
/// # Errors
/// Returns the sign-in message from the API, or an error if no user came back.
pub async fn execute(args: Args) -> Result<()> {
    let client = ApiClient::new(&args.globals.api_config()?)?;
    let session = sign_in(&client, args.email, args.password).await?;

    info!("signed in");
    println!("{}", serde_json::to_string_pretty(&session)?);

    Ok(())
}

async fn sign_in(client: &ApiClient, email: String, password: SecretString) -> Result<Session> {
    let credentials = Credentials { email, password };

    let user = authorize(client, &credentials)
        .await
        .map_err(|err| anyhow!("{err}"))?
        .ok_or_else(|| anyhow!("Sign in failed. Check the details you provided."))?;

    let token = jwt(TokenClaims::new(), Some(&user));
    Ok(session(&token))
}
