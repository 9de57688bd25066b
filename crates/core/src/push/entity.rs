use serde::{Deserialize, Serialize};

/// # Summary
/// 推送调用的归一化结果实体，是调用方唯一可见的输出契约。
///
/// # Invariants
/// - `message` 必须以标准原因短语为前缀（未知状态码前缀为空串）。
/// - `result` 仅在成功分类时携带上游原始响应体。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushResponse {
    // HTTP 风格状态码 (例如: 200, 400, 401)
    pub code: u16,
    // 人类可读描述，形如 "OK, Notification sent successfully"
    pub message: String,
    // 上游返回的原始响应体 (失败分类时为 None)
    pub result: Option<String>,
}

/// # Summary
/// 传输层出站请求实体，描述一次完整的 POST 调用。
///
/// # Invariants
/// - `body` 必须是已序列化完成的 JSON 文本。
#[derive(Debug, Clone)]
pub struct TransportRequest {
    // 目标地址
    pub url: String,
    // 按顺序写入的请求头 (名称, 值)
    pub headers: Vec<(String, String)>,
    // 请求体文本
    pub body: String,
}

/// # Summary
/// 传输层入站响应实体，仅保留分类所需的状态码与响应体。
#[derive(Debug, Clone)]
pub struct TransportResponse {
    // HTTP 状态码
    pub status: u16,
    // 响应体文本
    pub body: String,
}

impl TransportResponse {
    /// # Summary
    /// 判断响应是否落在 2xx 成功区间。
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
