use anyhow::{Context, Result};

/// Summary first, then the table inside a code fence so chat clients keep
/// the column alignment.
fn message_text(summary: &str, table: &str) -> String {
    format!("{summary}\n\n```\n{table}\n```")
}

/// POST the report to a chat webhook as `{"text": ...}`. The handler treats
/// failures here as non-fatal; the stored report is authoritative.
pub async fn post_report(url: &str, summary: &str, table: &str) -> Result<()> {
    let response = reqwest::Client::new()
        .post(url)
        .json(&serde_json::json!({ "text": message_text(summary, table) }))
        .send()
        .await
        .context("failed to send report to webhook")?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("webhook returned HTTP {}: {}", status.as_u16(), body);
    }
    Ok(())
}
