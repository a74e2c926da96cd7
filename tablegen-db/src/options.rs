//! Connection parameters shared by both backends

/// Host, port, credentials and database name for a catalog connection.
///
/// TLS is not negotiated: MySQL uses the driver defaults and PostgreSQL
/// connects with `NoTls`.
#[derive(Clone)]
pub struct ConnectOptions {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl ConnectOptions {
    /// Create options for `user@host:port/database` with an empty password.
    pub fn new(host: &str, port: u16, user: &str, database: &str) -> Self {
        Self {
            host: host.to_string(),
            port,
            user: user.to_string(),
            password: String::new(),
            database: database.to_string(),
        }
    }

    /// Set the password.
    pub fn password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for ConnectOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectOptions")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password() {
        let opts = ConnectOptions::new("localhost", 3306, "root", "test").password("secret");
        let shown = format!("{:?}", opts);
        assert!(!shown.contains("secret"));
        assert!(shown.contains("localhost"));
    }
}
