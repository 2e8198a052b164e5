use anyhow::{Context, Result};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use chrono::NaiveDate;

/// Object keys look like `report/2024_03_11.txt`, one per run date.
pub fn report_key(run_date: NaiveDate) -> String {
    format!("report/{}.txt", run_date.format("%Y_%m_%d"))
}

/// Persist the rendered report. A failure here fails the invocation; the
/// stored object is the report of record.
pub async fn upload_report(
    client: &Client,
    bucket: &str,
    body: &str,
    run_date: NaiveDate,
) -> Result<String> {
    let key = report_key(run_date);
    client
        .put_object()
        .bucket(bucket)
        .key(&key)
        .content_type("text/plain; charset=utf-8")
        .body(ByteStream::from(body.as_bytes().to_vec()))
        .send()
        .await
        .with_context(|| format!("failed to upload report to s3://{bucket}/{key}"))?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_derived_from_the_run_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        assert_eq!(report_key(date), "report/2024_03_11.txt");
    }

    #[test]
    fn key_zero_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(report_key(date), "report/2024_01_02.txt");
    }
}
