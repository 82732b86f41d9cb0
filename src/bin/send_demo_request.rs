//! Submits one demo request to a running server through the form state
//! machine and prints where the form ended up.

use clap::Parser;
use voice_agent_leads::client::IntakeClient;
use voice_agent_leads::form::{DemoRequestForm, FormFields, FormStatus};

#[derive(Parser, Debug)]
#[command(name = "send-demo-request")]
#[command(about = "Submit a demo request to the lead intake endpoint")]
struct Args {
    /// Base URL of the intake server
    #[arg(long, env = "INTAKE_URL", default_value = "http://localhost:3000")]
    url: String,

    /// Lead's full name
    #[arg(long)]
    name: String,

    /// Lead's email address
    #[arg(long)]
    email: String,

    /// Lead's phone number
    #[arg(long)]
    phone: String,
}

/// Main entry point for the submission script.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = IntakeClient::new(args.url.clone())?;
    let mut form = DemoRequestForm::with_fields(FormFields::new(args.name, args.email, args.phone));

    tracing::info!("Submitting demo request to {}", args.url);

    match form.submit(&client).await {
        FormStatus::Success => {
            println!("success: درخواست شما ثبت شد!");
            Ok(())
        }
        FormStatus::Error => {
            println!("error: {}", form.error_message());
            std::process::exit(1);
        }
        FormStatus::Idle => anyhow::bail!("All of --name, --email and --phone must be non-empty"),
        other => anyhow::bail!("Form stopped in unexpected state {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_equals_syntax() {
        let args = Args::try_parse_from([
            "send-demo-request",
            "--name=علی",
            "--email=ali@example.com",
            "--phone",
            "09123456789",
            "--url",
            "http://127.0.0.1:8080",
        ])
        .unwrap();

        assert_eq!(args.name, "علی");
        assert_eq!(args.email, "ali@example.com");
        assert_eq!(args.phone, "09123456789");
        assert_eq!(args.url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_missing_required_flag_is_an_error() {
        let result = Args::try_parse_from(["send-demo-request", "--name", "علی"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_help_is_recognized() {
        let err = Args::try_parse_from(["send-demo-request", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
