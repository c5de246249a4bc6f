//! Build-time configuration for the Firebase endpoints with an optional
//! runtime override. The runtime config is read from `window.DOORWAY_CONFIG`
//! (if present) so static deployments can switch projects without rebuilding.
//! Configuration values are public; do not store secrets here.

use crate::app_lib::AppError;
use crate::features::auth::messages::Locale;
use url::Url;

const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const DEFAULT_TOKEN_BASE_URL: &str = "https://securetoken.googleapis.com/v1";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: String,
    pub identity_base_url: String,
    pub token_base_url: String,
    pub locale: Locale,
    pub log_filter: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_key = option_env!("DOORWAY_FIREBASE_API_KEY").unwrap_or("");
        let identity_base_url =
            option_env!("DOORWAY_IDENTITY_BASE_URL").unwrap_or(DEFAULT_IDENTITY_BASE_URL);
        let token_base_url = option_env!("DOORWAY_TOKEN_BASE_URL").unwrap_or(DEFAULT_TOKEN_BASE_URL);
        let locale = option_env!("DOORWAY_LOCALE")
            .and_then(Locale::from_tag)
            .unwrap_or_default();
        let log_filter = option_env!("DOORWAY_LOG").unwrap_or(DEFAULT_LOG_FILTER);

        let mut config = Self {
            api_key: api_key.to_string(),
            identity_base_url: identity_base_url.to_string(),
            token_base_url: token_base_url.to_string(),
            locale,
            log_filter: log_filter.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Builds an Identity Toolkit URL such as `.../accounts:signUp?key=...`.
    pub fn identity_endpoint(&self, method: &str) -> Result<String, AppError> {
        endpoint(&self.identity_base_url, method, &self.api_key)
    }

    /// Builds the Secure Token refresh URL.
    pub fn token_endpoint(&self) -> Result<String, AppError> {
        endpoint(&self.token_base_url, "token", &self.api_key)
    }
}

fn endpoint(base_url: &str, method: &str, api_key: &str) -> Result<String, AppError> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(AppError::Config(
            "Firebase API key is not configured.".to_string(),
        ));
    }

    let base = base_url.trim().trim_end_matches('/');
    let mut url = Url::parse(&format!("{base}/{}", method.trim_start_matches('/')))
        .map_err(|err| AppError::Config(format!("Invalid endpoint URL: {err}")))?;
    url.query_pairs_mut().append_pair("key", api_key);

    Ok(url.into())
}

#[derive(Default)]
struct RuntimeConfig {
    api_key: Option<String>,
    identity_base_url: Option<String>,
    token_base_url: Option<String>,
    locale: Option<String>,
    log_filter: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_key {
        config.api_key = value;
    }
    if let Some(value) = runtime.identity_base_url {
        config.identity_base_url = value;
    }
    if let Some(value) = runtime.token_base_url {
        config.token_base_url = value;
    }
    if let Some(locale) = runtime.locale.as_deref().and_then(Locale::from_tag) {
        config.locale = locale;
    }
    if let Some(value) = runtime.log_filter {
        config.log_filter = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("DOORWAY_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_key: read_runtime_value(&object, "api_key"),
        identity_base_url: read_runtime_value(&object, "identity_base_url"),
        token_base_url: read_runtime_value(&object, "token_base_url"),
        locale: read_runtime_value(&object, "locale"),
        log_filter: read_runtime_value(&object, "log"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

#[cfg(any(target_arch = "wasm32", test))]
fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
