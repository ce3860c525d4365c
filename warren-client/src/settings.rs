use crate::ClientResult;
use std::convert::TryFrom;
use std::path::Path;
use warren::NormalizerSettings;

fn default_true() -> bool { true }

#[derive(Debug, Deserialize, Clone)]
pub struct ClientSettingsModel {
    pub base_url: String,
    /// Whether blob downloads carry the stored headers
    #[serde(default = "default_true")]
    pub has_header: bool,
    /// Whether every request is tagged with `httpsource: web`
    #[serde(default = "default_true")]
    pub has_http_source: bool,
    /// Log each request line at `info` instead of `debug`
    #[serde(default)]
    pub show_ssr_log: bool,
    #[serde(default)]
    pub normalizer: NormalizerSettings,
}

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: url::Url,
    pub has_header: bool,
    pub has_http_source: bool,
    pub show_ssr_log: bool,
    pub normalizer: NormalizerSettings,
}

impl TryFrom<ClientSettingsModel> for ClientSettings {
    type Error = url::ParseError;

    fn try_from(value: ClientSettingsModel) -> Result<Self, Self::Error> {
        let ClientSettingsModel { base_url, has_header, has_http_source, show_ssr_log, normalizer } =
            value;
        let mut base_url = base_url.parse::<url::Url>()?;
        // Without the trailing slash `join` would replace the last path segment
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url, has_header, has_http_source, show_ssr_log, normalizer })
    }
}

impl ClientSettings {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let model = ClientSettingsModel {
            base_url: base_url.into(),
            has_header: true,
            has_http_source: true,
            show_ssr_log: false,
            normalizer: Default::default(),
        };
        Ok(Self::try_from(model)?)
    }

    /// Loads settings from a config file, then lets `WARREN_*` environment variables override it
    pub fn from_file(path: impl AsRef<Path>) -> ClientResult<Self> {
        let mut settings = config::Config::default();
        settings.merge(config::File::from(path.as_ref()))?;
        settings.merge(config::Environment::with_prefix("WARREN"))?;
        let model: ClientSettingsModel = settings.try_into()?;
        Ok(Self::try_from(model)?)
    }

    /// Resolves `path` (which may carry a query string) against the base URL
    pub fn join(&self, path: &str) -> ClientResult<url::Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

#[cfg(test)]
mod tests {
    use super::ClientSettings;

    #[test]
    fn join_keeps_base_path_test() {
        let settings = ClientSettings::new("https://example.com/fr/api").unwrap();
        assert_eq!(settings.base_url.as_str(), "https://example.com/fr/api/");

        let url = settings.join("v1/auth/validate_token").unwrap();
        assert_eq!(url.as_str(), "https://example.com/fr/api/v1/auth/validate_token");

        let url = settings.join("/v1/auth/invitation?invitation_token=abc").unwrap();
        assert_eq!(url.as_str(), "https://example.com/fr/api/v1/auth/invitation?invitation_token=abc");
    }

    #[test]
    fn invalid_base_url_test() { assert!(ClientSettings::new("not a url").is_err()); }
}
