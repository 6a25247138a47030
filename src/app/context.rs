use crate::domain::AppConfig;
use crate::ports::GenerationClient;
use crate::services::Generator;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: GenerationClient> {
    config: AppConfig,
    generator: Generator<C>,
}

impl<C: GenerationClient> AppContext<C> {
    /// Create a new application context.
    pub fn new(config: AppConfig, client: C) -> Self {
        Self { config, generator: Generator::new(client) }
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the generator.
    pub fn generator(&self) -> &Generator<C> {
        &self.generator
    }

    /// Give up the context, keeping the generator.
    pub fn into_generator(self) -> Generator<C> {
        self.generator
    }
}
