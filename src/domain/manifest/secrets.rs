use super::view::ConfigView;

const SECRETS_HEADER: [&str; 3] =
    ["# M3U Editor Environment Configuration", "# Generated by M3U Editor Compose Wizard", ""];

/// The `.env` companion holding values the manifest references as `${VAR}`.
pub(super) fn secrets_file(view: ConfigView<'_>) -> String {
    let mut lines: Vec<String> = SECRETS_HEADER.iter().map(|line| line.to_string()).collect();

    if let Some(token) = view.value("M3U_PROXY_TOKEN") {
        lines.push(format!("M3U_PROXY_TOKEN={token}"));
    }
    if let Some(password) = view.value("PG_PASSWORD") {
        lines.push(format!("PG_PASSWORD={password}"));
    }
    if view.redis_external()
        && let Some(password) = view.value("REDIS_PASSWORD")
    {
        lines.push(format!("REDIS_PASSWORD={password}"));
    }

    lines.join("\n")
}

/// True when the file carries at least one entry beyond the header.
pub(super) fn has_entries(secrets: &str) -> bool {
    secrets.lines().count() > SECRETS_HEADER.len()
}
