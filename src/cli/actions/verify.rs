use crate::{
    api::ApiClient,
    auth::{OtpVerificationForm, ResendOutcome, VerificationOutcome},
    cli::globals::GlobalArgs,
    navigation::{paths, HistoryNavigator},
};
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub email: String,
}

#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Code(&'a str),
    Resend,
    Quit,
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        "resend" | ":r" => Input::Resend,
        "quit" | "exit" | ":q" => Input::Quit,
        code => Input::Code(code),
    }
}

/// Opens the OTP panel on the terminal until the code is accepted or the user leaves.
/// # Errors
/// Returns an error if the API settings are invalid or the terminal is unusable.
pub async fn execute(args: Args) -> Result<()> {
    let client = ApiClient::new(&args.globals.api_config()?)?;
    let form = OtpVerificationForm::new(client, args.email.as_str(), HistoryNavigator::default());

    let mut stdout = std::io::stdout();
    let navigator = run(form, BufReader::new(tokio::io::stdin()), &mut stdout).await?;

    if navigator.current() == Some(paths::LOGIN) {
        info!("navigating to {}", paths::LOGIN);
        writeln!(stdout, "Sign in with `zcbus login --email {}`.", args.email)?;
    }

    Ok(())
}

async fn run<R, W>(
    mut form: OtpVerificationForm<HistoryNavigator>,
    input: R,
    out: &mut W,
) -> Result<HistoryNavigator>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "Verify your email address")?;
    writeln!(
        out,
        "We have sent a verification code to {}. Please enter the code below.",
        form.email()
    )?;
    writeln!(out, "Type `resend` for a new code or `quit` to leave.")?;

    let mut lines = input.lines();

    while form.is_open() {
        write!(out, "One-Time Password [{}]: ", form.resend_label())?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_input(&line) {
            Input::Quit => form.set_open(false),
            Input::Resend => match form.resend().await {
                ResendOutcome::Sent => writeln!(out, "A new code is on its way.")?,
                ResendOutcome::Unavailable { remaining: 0 } => writeln!(
                    out,
                    "Submit the code you received before requesting a new one."
                )?,
                ResendOutcome::Unavailable { .. } => writeln!(out, "{}", form.resend_label())?,
                // resend failures are only logged
                ResendOutcome::Failed => {}
            },
            Input::Code(code) => match form.submit(code).await {
                VerificationOutcome::Verified => writeln!(out, "Email verified.")?,
                VerificationOutcome::Invalid(message) | VerificationOutcome::Rejected(message) => {
                    writeln!(out, "{message}")?;
                }
            },
        }
    }

    Ok(form.into_navigator())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiConfig;
    use crate::auth::otp::OTP_LENGTH_MESSAGE;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn form_for(uri: &str) -> Result<OtpVerificationForm<HistoryNavigator>> {
        let client = ApiClient::new(&ApiConfig::new(uri)?)?;
        Ok(OtpVerificationForm::new(
            client,
            "a@b.com",
            HistoryNavigator::default(),
        ))
    }

    #[test]
    fn parse_input_recognizes_commands() {
        assert_eq!(parse_input(" resend "), Input::Resend);
        assert_eq!(parse_input(":r"), Input::Resend);
        assert_eq!(parse_input("quit"), Input::Quit);
        assert_eq!(parse_input(":q"), Input::Quit);
        assert_eq!(parse_input(" 1234\r"), Input::Code("1234"));
    }

    #[tokio::test]
    async fn terminal_session_ends_on_the_login_route() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/user/verify-otp/"))
            .and(body_json(json!({ "email": "a@b.com", "otp": "0000" })))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "otp": ["Code expired"] })),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/user/verify-otp/"))
            .and(body_json(json!({ "email": "a@b.com", "otp": "1234" })))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/user/resend-otp/"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let input: &[u8] = b"resend\n12\n0000\nresend\n1234\nnever read\n";
        let mut out = Vec::new();

        let navigator = run(form_for(&server.uri())?, input, &mut out).await?;
        let out = String::from_utf8(out)?;

        assert_eq!(navigator.current(), Some(paths::LOGIN));
        assert!(out.contains("Submit the code you received before requesting a new one."));
        assert!(out.contains(OTP_LENGTH_MESSAGE));
        assert!(out.contains("Code expired"));
        assert!(out.contains("Resend OTP in "));
        assert!(out.contains("Email verified."));
        Ok(())
    }

    #[tokio::test]
    async fn quit_and_eof_leave_without_navigating() -> Result<()> {
        for input in [&b"quit\n1234\n"[..], &b""[..]] {
            let mut out = Vec::new();
            let navigator = run(form_for("http://127.0.0.1:9")?, input, &mut out).await?;
            assert_eq!(navigator.current(), None);
        }
        Ok(())
    }
}
