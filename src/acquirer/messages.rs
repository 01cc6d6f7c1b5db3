/// The fixed, in-character strings shown when no model reply is available.
#[derive(Debug, Clone)]
pub struct Messages {
    locale: String,
}

impl Messages {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
        }
    }

    pub fn missing_credential(&self) -> String {
        t!("acquirer.missing_credential", locale = self.locale.as_str()).to_string()
    }

    pub fn busy(&self) -> String {
        t!("acquirer.busy", locale = self.locale.as_str()).to_string()
    }

    pub fn filtered(&self) -> String {
        t!("acquirer.filtered", locale = self.locale.as_str()).to_string()
    }

    pub fn generic_error(&self, detail: Option<&str>) -> String {
        match detail {
            Some(detail) => t!(
                "acquirer.generic_error_detail",
                locale = self.locale.as_str(),
                detail = detail
            )
            .to_string(),
            None => t!("acquirer.generic_error", locale = self.locale.as_str()).to_string(),
        }
    }

    pub fn empty_reply(&self) -> String {
        t!("acquirer.empty_reply", locale = self.locale.as_str()).to_string()
    }
}
