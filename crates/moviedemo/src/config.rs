//! Runtime configuration.

use clap::ValueEnum;

/// Location of the sample movie archive.
pub const SAMPLE_DATA_URL: &str =
    "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/samples/moviedata.zip";

/// Region used when neither `--region` nor `AWS_REGION` is set.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Storage backend behind the gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// Amazon DynamoDB (or a local DynamoDB endpoint).
    #[default]
    Dynamodb,
    /// In-process store, nothing leaves the machine except the sample download.
    Memory,
}

/// AWS client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsConfig {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region.
    pub region: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            region: DEFAULT_REGION.to_string(),
        }
    }
}

/// Application configuration assembled from CLI flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage: StorageBackend,
    pub aws: AwsConfig,
    pub sample_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageBackend::default(),
            aws: AwsConfig::default(),
            sample_url: SAMPLE_DATA_URL.to_string(),
        }
    }
}

impl Config {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match (self.storage, &self.aws.endpoint_url) {
            (StorageBackend::Memory, _) => "In-memory store".to_string(),
            (StorageBackend::Dynamodb, Some(url)) => format!("Local DynamoDB ({})", url),
            (StorageBackend::Dynamodb, None) => {
                format!("AWS DynamoDB (region: {})", self.aws.region)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.storage, StorageBackend::Dynamodb);
        assert_eq!(config.aws.region, "us-east-1");
        assert_eq!(config.aws.endpoint_url, None);
        assert_eq!(config.sample_url, SAMPLE_DATA_URL);
    }

    #[test]
    fn test_target_display_aws() {
        let config = Config {
            aws: AwsConfig {
                endpoint_url: None,
                region: "eu-west-1".to_string(),
            },
            ..Default::default()
        };
        assert_eq!(config.target_display(), "AWS DynamoDB (region: eu-west-1)");
    }

    #[test]
    fn test_target_display_local() {
        let config = Config {
            aws: AwsConfig {
                endpoint_url: Some("http://localhost:8000".to_string()),
                region: "us-east-1".to_string(),
            },
            ..Default::default()
        };
        assert_eq!(
            config.target_display(),
            "Local DynamoDB (http://localhost:8000)"
        );
    }

    #[test]
    fn test_target_display_memory() {
        let config = Config {
            storage: StorageBackend::Memory,
            ..Default::default()
        };
        assert_eq!(config.target_display(), "In-memory store");
    }
}
