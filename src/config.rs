use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::payoff::sweep::DEFAULT_MAX_SAMPLES;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub max_contracts: usize,
    pub max_curve_samples: usize,
}

impl AppConfig {
    pub fn from_env() -> AnalyzerResult<Self> {
        dotenvy::dotenv().ok();

        let server_port = env_var_or("SERVER_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| AnalyzerError::Config(format!("SERVER_PORT: {e}")))?;

        let max_contracts = env_var_or("MAX_CONTRACTS", "256")
            .parse::<usize>()
            .map_err(|e| AnalyzerError::Config(format!("MAX_CONTRACTS: {e}")))?;

        let max_curve_samples = env_var_or("MAX_CURVE_SAMPLES", &DEFAULT_MAX_SAMPLES.to_string())
            .parse::<usize>()
            .map_err(|e| AnalyzerError::Config(format!("MAX_CURVE_SAMPLES: {e}")))?;

        let config = Self {
            server_host: env_var_or("SERVER_HOST", "0.0.0.0"),
            server_port,
            max_contracts,
            max_curve_samples,
        };
        config.validate()?;
        Ok(config)
    }

    /// Zero limits would reject every request.
    pub fn validate(&self) -> AnalyzerResult<()> {
        if self.max_contracts == 0 {
            return Err(AnalyzerError::Config("MAX_CONTRACTS must be positive".into()));
        }
        if self.max_curve_samples == 0 {
            return Err(AnalyzerError::Config("MAX_CURVE_SAMPLES must be positive".into()));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            max_contracts: 256,
            max_curve_samples: DEFAULT_MAX_SAMPLES,
        }
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
