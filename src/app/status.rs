use incinerator::Config;

pub fn render_status(config: &Config) -> String {
    render_status_in(config, &config.effective_locale())
}

/// Status text with labels in `locale`.
fn render_status_in(config: &Config, locale: &str) -> String {
    let acquisition = &config.acquisition;

    let credential = if config.credential().is_some() {
        t!("status.credential_set", locale = locale)
    } else {
        t!("status.credential_missing", locale = locale)
    };
    let fallback = acquisition
        .fallback_model
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map_or_else(
            || t!("status.none", locale = locale).to_string(),
            String::from,
        );

    [
        format!("◆ {}", t!("status.title", locale = locale)),
        String::new(),
        format!(
            "{}           {}",
            t!("status.version", locale = locale),
            env!("CARGO_PKG_VERSION")
        ),
        format!(
            "{}            {}",
            t!("status.config", locale = locale),
            config.config_path.display()
        ),
        format!("{}           {credential}", t!("status.credential", locale = locale)),
        String::new(),
        format!(
            "  {}   {}",
            t!("status.primary_model", locale = locale),
            acquisition.primary_model
        ),
        format!("  {}  {fallback}", t!("status.fallback_model", locale = locale)),
        format!(
            "  {}     {:.2}",
            t!("status.temperature", locale = locale),
            acquisition.temperature
        ),
        format!(
            "  {}           max_retries={}, backoff={}ms",
            t!("status.retry", locale = locale),
            acquisition.max_retries,
            acquisition.retry_backoff_ms
        ),
        format!(
            "  {} {}",
            t!("status.safety", locale = locale),
            acquisition.safety_threshold.as_str()
        ),
        format!(
            "  {}    {}ms",
            t!("status.min_burn", locale = locale),
            config.ritual.min_burn_ms
        ),
        format!("  {}          {locale}", t!("status.locale", locale = locale)),
    ]
    .join("\n")
}
