use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
    pub records: RecordsApiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecordsApiSettings {
    pub base_url: String,
    pub api_key: String,
    #[serde(default = "default_table")]
    pub table: String,
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_table() -> String {
    "tasting_records".to_string()
}

pub fn load_service_config() -> anyhow::Result<ServiceConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/service"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> ServiceConfig {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap();
        settings.try_deserialize().unwrap()
    }

    #[test]
    fn test_parse_service_config() {
        let config = parse(
            r#"
[server]
bind = "127.0.0.1:9090"

[records]
base_url = "http://localhost:3000"
api_key = "secret"
table = "cuppings"
"#,
        );

        assert_eq!(config.server.bind, "127.0.0.1:9090");
        assert_eq!(config.records.base_url, "http://localhost:3000");
        assert_eq!(config.records.api_key, "secret");
        assert_eq!(config.records.table, "cuppings");
    }

    #[test]
    fn test_server_section_and_table_are_optional() {
        let config = parse(
            r#"
[records]
base_url = "http://localhost:3000"
api_key = "secret"
"#,
        );

        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.records.table, "tasting_records");
    }
}
