//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`products`] - 商品目录接口
//! - [`settings`] - 店铺设置接口 (logo / 名称)
//! - [`orders`] - 订单接口 (创建、列表、状态流转)

pub mod health;
pub mod orders;
pub mod products;
pub mod settings;

// Re-export common types for handlers
pub use crate::utils::AppResult;
