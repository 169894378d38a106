use clap::{Parser, ValueEnum};

/// Which front end drives the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FrontEnd {
    /// Numbered text menu loop
    Menu,
    /// Form-style UI with named actions and required-field checks
    Form,
}

/// Command-line configuration, with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "inventory", version, about = "In-memory inventory tracker")]
pub struct AppConfig {
    /// Front end to run
    #[arg(long, value_enum, env = "INVENTORY_MODE", default_value_t = FrontEnd::Menu)]
    pub mode: FrontEnd,

    /// Capacity of the inventory service's request channel
    #[arg(
        long,
        env = "INVENTORY_BUFFER_SIZE",
        default_value_t = 32,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub buffer_size: u16,

    /// tracing filter directive, e.g. `info` or `inventory=debug`
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_filter: String,
}

impl AppConfig {
    pub fn channel_capacity(&self) -> usize {
        usize::from(self.buffer_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        AppConfig::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let config = AppConfig::try_parse_from(["inventory", "--mode", "form", "--buffer-size", "4"]).unwrap();
        assert_eq!(config.mode, FrontEnd::Form);
        assert_eq!(config.channel_capacity(), 4);
    }

    #[test]
    fn test_rejects_zero_buffer() {
        assert!(AppConfig::try_parse_from(["inventory", "--buffer-size", "0"]).is_err());
        assert!(AppConfig::try_parse_from(["inventory", "--mode", "streamlit"]).is_err());
    }
}
