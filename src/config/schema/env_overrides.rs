use super::Config;

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Some(key) = non_empty_var("INCINERATOR_API_KEY")
            .or_else(|| non_empty_var("GEMINI_API_KEY"))
            .or_else(|| non_empty_var("API_KEY"))
        {
            self.api_key = Some(key);
        }

        if let Some(model) = non_empty_var("INCINERATOR_MODEL") {
            self.acquisition.primary_model = model;
        }

        // Set but empty disables the fallback model.
        if let Ok(model) = std::env::var("INCINERATOR_FALLBACK_MODEL") {
            let model = model.trim();
            self.acquisition.fallback_model = (!model.is_empty()).then(|| model.to_string());
        }

        if let Some(temp_str) = non_empty_var("INCINERATOR_TEMPERATURE")
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=2.0).contains(&temp)
        {
            self.acquisition.temperature = temp;
        }
    }
}
