use super::Config;

/// Locales shipped under `locales/`.
pub const SUPPORTED_LOCALES: [&str; 2] = ["ko", "en"];
const FALLBACK_LOCALE: &str = "ko";

fn detect_system_locale() -> Option<String> {
    std::env::var("LANG")
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .ok()
        .map(|lang| lang.trim().to_lowercase())
        .filter(|lang| !lang.is_empty() && lang != "c" && lang != "posix")
}

/// Detect locale: `INCINERATOR_LANG` env -> config value -> system `LANG` -> `"ko"`.
fn detect_locale(config_locale: &str) -> String {
    if let Ok(lang) = std::env::var("INCINERATOR_LANG") {
        let lang = lang.trim().to_lowercase();
        if !lang.is_empty() {
            return normalise_locale(&lang);
        }
    }

    if !config_locale.trim().is_empty() {
        return normalise_locale(&config_locale.trim().to_lowercase());
    }

    if let Some(system_locale) = detect_system_locale() {
        return normalise_locale(&system_locale);
    }

    FALLBACK_LOCALE.into()
}

/// Normalise `"ko_KR.UTF-8"` -> `"ko"`, `"en-US"` -> `"en"`; unknown -> `"ko"`.
fn normalise_locale(raw: &str) -> String {
    let base = raw.split('.').next().unwrap_or(raw);
    let lang = base.split(['_', '-']).next().unwrap_or(base);
    if SUPPORTED_LOCALES.contains(&lang) {
        lang.to_string()
    } else {
        FALLBACK_LOCALE.to_string()
    }
}

impl Config {
    /// Resolved message locale for this run.
    pub fn effective_locale(&self) -> String {
        detect_locale(self.locale.as_deref().unwrap_or_default())
    }
}
