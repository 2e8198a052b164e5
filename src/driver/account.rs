use aws_config::SdkConfig;

/// Placeholder when no name can be resolved; the report still goes out.
pub const ACCOUNT_NAME_FALLBACK: &str = "[NOT FOUND]";

/// Resolve the account display name: the configured name if present, else
/// the account's first IAM alias, else the caller's account id, else a
/// literal placeholder. Lookup failures are logged and never fatal.
pub async fn resolve_account_name(configured: Option<&str>, aws: &SdkConfig) -> String {
    if let Some(name) = configured {
        return name.to_string();
    }

    let iam = aws_sdk_iam::Client::new(aws);
    match iam.list_account_aliases().max_items(1).send().await {
        Ok(output) => {
            if let Some(alias) = output.account_aliases().first() {
                return alias.clone();
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "account alias lookup failed");
        }
    }

    let sts = aws_sdk_sts::Client::new(aws);
    match sts.get_caller_identity().send().await {
        Ok(output) => {
            if let Some(account) = output.account() {
                return account.to_string();
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "caller identity lookup failed");
        }
    }

    ACCOUNT_NAME_FALLBACK.to_string()
}
