use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use profile_submitter::{
    Config, Profile, ProfileClient, SubmissionRequest, SubmissionResult, UserCache,
};

const DEMO_USER_ID: &str = "user123";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("profile_submitter={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting profile submitter v{}", env!("CARGO_PKG_VERSION"));

    let client = ProfileClient::new(config.request_timeout)
        .context("Failed to build HTTP client")?;

    let result = match config.save_endpoint() {
        Ok(endpoint) => {
            let request = SubmissionRequest::new(DEMO_USER_ID, example_profile()?, endpoint)
                .with_resume("https://example.com/resume.pdf", "resume.pdf");
            client.submit(&request).await
        }
        Err(e) => SubmissionResult::failed(e.status_code(), e.to_string()),
    };
    print_result("submit", &result)?;

    // Read the profile back when a fetch endpoint is configured
    if let Ok(endpoint) = config.fetch_endpoint() {
        let cache = UserCache::default();
        let fetched = client.fetch_cached(&cache, DEMO_USER_ID, endpoint).await;
        print_result("fetch", &fetched)?;
    }

    Ok(())
}

fn print_result(label: &str, result: &SubmissionResult) -> Result<()> {
    let rendered = serde_json::to_string_pretty(result).context("Failed to render result")?;
    println!("{label}: {rendered}");
    Ok(())
}

fn example_profile() -> Result<Profile> {
    let profile = json!({
        // Personal information
        "firstName": "John",
        "lastName": "Doe",
        "preferredName": "Johnny",
        "email": "john.doe@example.com",
        "countryCode": "+1",
        "phone": "+1234567890",

        // Address
        "address": "123 Main St",
        "city": "New York",
        "state": "NY",
        "postalCode": "10001",
        "country": "United States",

        // Work authorization
        "authorizedToWorkInUS": true,
        "requireVisa": false,
        "over18": true,
        "willingToRelocate": false,

        // Professional
        "expectedIncome": "100000",
        "workExperience": "3 years",
        "education": "B.S. Computer Science"
    });

    serde_json::from_value(profile).context("Example profile must be a JSON object")
}
