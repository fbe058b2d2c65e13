use std::time::Duration;

use reqwest::blocking::Client;

use crate::create::types::CreateResult;

/// Build the HTTP client shared by all create operations
///
/// `timeout_secs` of None means requests wait as long as the server takes;
/// image generation routinely runs well past reqwest's default 30s.
pub fn build_client(user_agent: &str, timeout_secs: Option<u64>) -> CreateResult<Client> {
    let client = Client::builder()
        .user_agent(user_agent.to_string())
        .timeout(timeout_secs.map(Duration::from_secs))
        .build()?;
    Ok(client)
}
