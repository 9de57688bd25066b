use thiserror::Error;

/// # Summary
/// 推送域错误枚举。仅覆盖真正的异常路径：HTTP 层面的失败
/// (非 2xx、上游报错) 一律作为归一化结果返回，不进入该枚举。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug)]
pub enum PushError {
    /// 配置错误 (如缺少服务端密钥)，仅在构造阶段产生
    #[error("Configuration error: {0}")]
    Config(String),

    /// 网络连接、TLS 或超时错误，携带底层客户端的错误信息
    #[error("Transport error: {0}")]
    Transport(String),
}
