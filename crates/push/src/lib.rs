//! # `oshirase-push` - 推送通道适配层
//!
//! 本 crate 实现 `oshirase-core` 定义的推送端口。
//! 当前提供 Firebase Cloud Messaging (legacy HTTP API) 通道。
//!
//! ## 架构职责
//! - 构造 FCM legacy 接口的请求体与鉴权头
//! - 通过可注入的 `HttpTransport` 执行出站调用（生产实现基于 `reqwest`）
//! - 将 HTTP 响应归一化为 `PushResponse` 返回给调用方

pub mod fcm;
pub mod transport;
