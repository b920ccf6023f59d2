use crate::utils::error::{ReceiptError, Result};
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReceiptError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ReceiptError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_socket_addr(field_name: &str, host: &str, port: u16) -> Result<SocketAddr> {
    let raw = if host.contains(':') && !host.starts_with('[') {
        // IPv6 literal 需要中括號
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    };

    raw.parse::<SocketAddr>()
        .map_err(|e| ReceiptError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.clone(),
            reason: format!("Invalid socket address: {}", e),
        })
}
