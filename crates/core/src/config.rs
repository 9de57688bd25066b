use serde::{Deserialize, Serialize};

use crate::push::error::PushError;

/// FCM 客户端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FcmConfig {
    /// Firebase Cloud Messaging 服务端密钥 (server key)
    pub server_key: String,
    /// 请求超时（秒）
    pub timeout_secs: u64,
    /// 是否校验证书中的主机名
    pub verify_tls_host: bool,
    /// 是否校验对端证书
    pub verify_tls_peer: bool,
    /// FCM 接口地址
    pub api_url: String,
}

impl Default for FcmConfig {
    fn default() -> Self {
        Self {
            server_key: String::new(), // Must be filled in before constructing a client
            timeout_secs: 5,
            verify_tls_host: false,
            verify_tls_peer: false,
            api_url: "https://fcm.googleapis.com/fcm/send".to_string(),
        }
    }
}

impl FcmConfig {
    /// 以给定密钥构造配置，其余字段取默认值。
    pub fn with_server_key(server_key: impl Into<String>) -> Self {
        Self {
            server_key: server_key.into(),
            ..Self::default()
        }
    }

    /// 校验配置是否可用于构造客户端。密钥为空或仅含空白字符视为非法。
    pub fn validate(&self) -> Result<(), PushError> {
        if self.server_key.trim().is_empty() {
            return Err(PushError::Config("Server key can not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FcmConfig::default();
        assert_eq!(config.timeout_secs, 5);
        assert!(!config.verify_tls_host);
        assert!(!config.verify_tls_peer);
        assert_eq!(config.api_url, "https://fcm.googleapis.com/fcm/send");
        assert!(config.server_key.is_empty());
    }

    #[test]
    fn test_validate_rejects_blank_key() {
        assert!(FcmConfig::default().validate().is_err());
        assert!(FcmConfig::with_server_key("   ").validate().is_err());
        assert!(FcmConfig::with_server_key("AAAAxyz").validate().is_ok());
    }
}
