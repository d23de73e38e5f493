//! Utility functions shared across the fleetmeta crates.

use std::sync::LazyLock;

/// Regex pattern for validating catalog names (app names, cluster names, ...)
static NAME_PATTERN: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new("^[a-zA-Z0-9_.:-]+$").expect("Invalid regex pattern"));

/// Dotted-quad pattern; range checking is done numerically.
static IPV4_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$")
        .expect("Invalid regex pattern")
});

/// Validate a catalog name contains only allowed characters.
///
/// Allowed characters: alphanumeric, underscore, dot, colon, hyphen.
///
/// # Examples
///
/// ```
/// use fleetmeta_common::is_valid_name;
///
/// assert!(is_valid_name("order-service"));
/// assert!(is_valid_name("cluster_01.prod"));
/// assert!(!is_valid_name("with spaces"));
/// assert!(!is_valid_name(""));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Validate an IPv4 host address.
///
/// # Examples
///
/// ```
/// use fleetmeta_common::is_valid_host_ip;
///
/// assert!(is_valid_host_ip("192.168.1.10"));
/// assert!(!is_valid_host_ip("192.168.1.256"));
/// assert!(!is_valid_host_ip("db01.internal"));
/// ```
pub fn is_valid_host_ip(host_ip: &str) -> bool {
    match IPV4_PATTERN.captures(host_ip) {
        Some(caps) => (1..=4).all(|i| caps[i].parse::<u32>().map(|n| n <= 255).unwrap_or(false)),
        None => false,
    }
}

/// Validate a TCP port number.
pub fn is_valid_port(port_num: i32) -> bool {
    (1..=65535).contains(&port_num)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("abc123"));
        assert!(is_valid_name("order_service:v2"));
        assert!(is_valid_name("mysql-cluster.01"));
        assert!(!is_valid_name("a b"));
        assert!(!is_valid_name("a/b"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn test_is_valid_host_ip() {
        assert!(is_valid_host_ip("10.0.0.1"));
        assert!(is_valid_host_ip("255.255.255.255"));
        assert!(!is_valid_host_ip("256.0.0.1"));
        assert!(!is_valid_host_ip("10.0.0"));
        assert!(!is_valid_host_ip("host"));
    }

    #[test]
    fn test_is_valid_port() {
        assert!(is_valid_port(3306));
        assert!(is_valid_port(1));
        assert!(!is_valid_port(0));
        assert!(!is_valid_port(70000));
    }
}
