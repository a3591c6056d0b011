pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub const fn default_port() -> u16 {
    8080
}

pub fn default_environment() -> String {
    "development".to_string()
}

pub const fn default_max_connections() -> u32 {
    10
}

pub const fn default_min_connections() -> u32 {
    1
}

pub const fn default_jwt_expiration_seconds() -> u64 {
    3600
}

pub fn default_issuer() -> String {
    "motorcare-backend".to_string()
}

pub fn default_audience() -> String {
    "motorcare-clients".to_string()
}

pub fn default_cors_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

pub fn default_logging_level() -> String {
    "info".to_string()
}

pub const fn default_logging_json_format() -> bool {
    false
}
