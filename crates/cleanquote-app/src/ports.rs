//! Estimate port selection

use cleanquote_domain::port::EstimatePort;
use cleanquote_infra::RemoteApiAdapter;
use cleanquote_types::Result;

use crate::config::{Config, EstimateSource};
use crate::local_formula::LocalFormulaAdapter;

/// Build the port for `source` using the settings in `config`
pub fn open_estimate_port(config: &Config, source: EstimateSource) -> Result<Box<dyn EstimatePort>> {
    let port: Box<dyn EstimatePort> = match source {
        EstimateSource::Local => Box::new(LocalFormulaAdapter::new(config.validation)),
        EstimateSource::Remote => Box::new(open_remote_port(config)?),
    };
    tracing::debug!(port = port.name(), "estimate port opened");
    Ok(port)
}

/// Build the remote pricing client from `config`
pub fn open_remote_port(config: &Config) -> Result<RemoteApiAdapter> {
    Ok(RemoteApiAdapter::new(config.api_base_url.clone(), config.timeout())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_local_port() {
        let port = open_estimate_port(&Config::default(), EstimateSource::Local).unwrap();
        assert_eq!(port.name(), "local");
    }

    #[test]
    fn test_open_remote_port() {
        let config = Config {
            api_base_url: "http://pricing.internal:8080/api".to_string(),
            ..Config::default()
        };
        let port = open_estimate_port(&config, EstimateSource::Remote).unwrap();
        assert_eq!(port.name(), "remote");

        let remote = open_remote_port(&config).unwrap();
        assert_eq!(remote.endpoint(), "http://pricing.internal:8080/api/utilities/estimate");
    }
}
