/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 错误类型
 */

use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq)]
pub enum OptimError {
    // 对比运行的配置参数校验用
    #[error("配置无效：{name}须{operator}{threshold}，实际为{got}")]
    InvalidConfiguration {
        name: &'static str,
        operator: ComparisonOperator,
        threshold: f64,
        got: f64,
    },

    #[error("序列化失败：{0}")]
    Serialization(String),
}

impl From<serde_json::Error> for OptimError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
