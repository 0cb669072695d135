use lib::Config;
use n0_error::Result;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    config: Config,
}

impl AppState {
    pub async fn load() -> Result<Self> {
        let config = match Config::default_location() {
            Some(path) => Config::load_or_default(path).await?,
            None => Config::default(),
        };

        Ok(AppState { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
