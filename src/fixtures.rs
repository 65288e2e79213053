#[cfg(test)]
pub mod test {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
    pub struct TestConfig {
        pub host: String,
        pub port: u16,
        pub debug: bool,
        pub database: TestDbConfig,
    }

    #[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
    pub struct TestDbConfig {
        pub url: Option<String>,
        pub pool_size: usize,
    }

    /// A fully populated value for round-trip tests.
    pub fn sample() -> TestConfig {
        TestConfig {
            host: "0.0.0.0".into(),
            port: 3000,
            debug: true,
            database: TestDbConfig {
                url: Some("postgres://db".into()),
                pool_size: 20,
            },
        }
    }

    #[test]
    fn sample_differs_from_default() {
        assert_ne!(sample(), TestConfig::default());
    }
}
