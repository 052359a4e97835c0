//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<ApiClient, LocalStorage>,
    config: StoredValue<AppConfig>,
    /// Trigger to reload data from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload data from backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(api: ApiClient, config: AppConfig) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            api: StoredValue::new_local(api),
            config: StoredValue::new(config),
            reload_trigger,
            set_reload_trigger,
        }
    }

    /// Client handle; clones share the bearer token
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Trigger a reload of backend data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_bumps_trigger() {
        Owner::new().with(|| {
            let ctx = AppContext::new(ApiClient::new("http://127.0.0.1:5000", None), AppConfig::from_env());
            assert_eq!(ctx.reload_trigger.get_untracked(), 0);

            ctx.reload();
            ctx.reload();
            assert_eq!(ctx.reload_trigger.get_untracked(), 2);
        });
    }

    #[test]
    fn test_api_handles_share_token() {
        Owner::new().with(|| {
            let ctx = AppContext::new(ApiClient::new("http://127.0.0.1:5000/", None), AppConfig::from_env());
            ctx.api().set_token(Some("tok".to_string()));
            assert_eq!(ctx.api().token().as_deref(), Some("tok"));
            assert_eq!(ctx.api().base_url(), "http://127.0.0.1:5000");
        });
    }
}
