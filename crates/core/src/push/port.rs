use crate::push::entity::{PushResponse, TransportRequest, TransportResponse};
use crate::push::error::PushError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// # Summary
/// 向设备推送通知的接口定义。
///
/// # Invariants
/// - 实现必须是 `Send` 和 `Sync` 以支持并发调用。
/// - 收到的 HTTP 响应（含上游报错）必须归一化为 `PushResponse` 返回，
///   只有配置与传输失败才允许返回 `Err`。
#[async_trait]
pub trait PushSender: Send + Sync {
    /// # Summary
    /// 向一组设备令牌发送通知。
    ///
    /// # Logic
    /// 1. 以 `tokens` 与 `notification` 构造顶层请求体。
    /// 2. 将 `options` 浅合并到顶层（同名键覆盖，允许高级调用方改写任意字段）。
    /// 3. 经由底层传输发送并把结果归一化。
    ///
    /// # Arguments
    /// * `tokens` - 目标设备注册令牌列表。
    /// * `notification` - 通知载荷 (title / body / sound 等)。
    /// * `options` - 追加到顶层的其它字段 (data / priority / to 等)。
    ///
    /// # Returns
    /// * 成功收到 HTTP 响应时返回 `Ok(PushResponse)`。
    /// * 传输失败返回 `Err(PushError)`。
    async fn send_notification(
        &self,
        tokens: &[String],
        notification: Map<String, Value>,
        options: Map<String, Value>,
    ) -> Result<PushResponse, PushError>;
}

/// # Summary
/// 执行单次出站 HTTP 调用的传输端口。
///
/// # Invariants
/// - 实现必须是 `Send` 和 `Sync`。
/// - 只要收到了 HTTP 响应就返回 `Ok`，无论状态码；
///   `Err` 仅表示连接、DNS、TLS 或超时等传输级失败。
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// # Summary
    /// 同步（逻辑上阻塞至响应或超时）执行一次请求。
    ///
    /// # Arguments
    /// * `request` - 待执行的出站请求。
    ///
    /// # Returns
    /// * 收到响应返回 `Ok(TransportResponse)`，否则返回 `Err(PushError)`。
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, PushError>;
}
