use error_stack::{Report, ResultExt};
use kernel::KernelError;

static PORT: &str = "PORT";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ServerConfig {
    port: u16,
}

impl ServerConfig {
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::parse(dotenvy::var(PORT).ok())
    }

    fn parse(port: Option<String>) -> error_stack::Result<Self, KernelError> {
        let port = match port {
            None => DEFAULT_PORT,
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(Report::from)
                .change_context_lazy(|| KernelError::Internal)
                .attach_printable_lazy(|| format!("{PORT} must be a TCP port, got `{port}`"))?,
        };
        Ok(Self::new(port))
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}
