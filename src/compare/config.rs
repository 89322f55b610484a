/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 对比运行的配置
 */

use serde::{Deserialize, Serialize};

use crate::errors::{ComparisonOperator, OptimError};
use crate::objective::Point;
use crate::optimizer::MiniBatch;

fn to_count(name: &'static str, value: i64, min: i64) -> Result<usize, OptimError> {
    if value < min {
        return Err(OptimError::InvalidConfiguration {
            name,
            operator: ComparisonOperator::GreaterOrEqual,
            threshold: min as f64,
            got: value as f64,
        });
    }
    usize::try_from(value).map_err(|_| OptimError::InvalidConfiguration {
        name,
        operator: ComparisonOperator::LessOrEqual,
        threshold: usize::MAX as f64,
        got: value as f64,
    })
}

fn default_batch_size() -> i64 {
    MiniBatch::DEFAULT_BATCH_SIZE as i64
}

/// 一次对比运行的配置，5 种优化器共享同一份
///
/// 整数字段使用有符号类型，以便外部传入的非法值（如 -1）能被表示并在[`RunConfig::validate`]中被拒绝
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub start: Point,
    pub learning_rate: f64,
    pub num_iterations: i64,
    /// 仅 MiniBatch 使用
    #[serde(default = "default_batch_size")]
    pub batch_size: i64,
}

impl Default for RunConfig {
    /// 参考场景：起点 (0, 0)，学习率 0.01，迭代 200 次，小批量大小 10
    fn default() -> Self {
        Self::new(Point::origin(), 0.01, 200)
    }
}

impl RunConfig {
    pub fn new(start: Point, learning_rate: f64, num_iterations: i64) -> Self {
        Self {
            start,
            learning_rate,
            num_iterations,
            batch_size: default_batch_size(),
        }
    }

    pub fn with_batch_size(mut self, batch_size: i64) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// 校验配置；任一项不合法都直接报错，不做静默修正
    ///
    /// - 迭代次数 ≥ 0
    /// - 小批量大小 ≥ 1
    /// - 学习率 > 0（NaN 也视为不合法）
    pub fn validate(&self) -> Result<(), OptimError> {
        self.checked_counts().map(|_| ())
    }

    /// 校验配置并返回 (迭代次数, 小批量大小)
    ///
    /// 两者还须能放进`usize`（32 位平台上可能放不下）
    pub fn checked_counts(&self) -> Result<(usize, usize), OptimError> {
        let num_iterations = to_count("迭代次数", self.num_iterations, 0)?;
        let batch_size = to_count("小批量大小", self.batch_size, 1)?;
        if !(self.learning_rate > 0.0) {
            return Err(OptimError::InvalidConfiguration {
                name: "学习率",
                operator: ComparisonOperator::GreaterThan,
                threshold: 0.0,
                got: self.learning_rate,
            });
        }
        Ok((num_iterations, batch_size))
    }

    pub fn to_json(&self) -> Result<String, OptimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, OptimError> {
        Ok(serde_json::from_str(json)?)
    }
}
