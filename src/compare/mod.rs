/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 对比运行：以相同的起点、学习率和迭代次数依次运行全部优化器，
 *                 返回"优化器名 → 轨迹"的映射，供外部展示层消费
 */

mod config;
mod summary;


pub use config::RunConfig;

use std::collections::BTreeMap;
use std::ops::Index;

use rand::RngCore;
use serde::Serialize;

use crate::errors::OptimError;
use crate::objective::Point;
use crate::optimizer::{Optimizer, OptimizerKind};
use crate::trajectory::Trajectory;

/// 对比运行的结果：优化器名 → 轨迹
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Comparison {
    trajectories: BTreeMap<String, Trajectory>,
}

impl Comparison {
    pub fn get(&self, name: &str) -> Option<&Trajectory> {
        self.trajectories.get(name)
    }

    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.trajectories.contains_key(name)
    }

    /// 按名称字典序迭代优化器名
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.trajectories.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Trajectory)> {
        self.trajectories.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_inner(self) -> BTreeMap<String, Trajectory> {
        self.trajectories
    }

    /// 导出为 JSON 对象 `{"GD": [{"x":..,"y":..,"value":..}, ..], ..}`
    pub fn to_json(&self) -> Result<String, OptimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Index<&str> for Comparison {
    type Output = Trajectory;

    fn index(&self, name: &str) -> &Self::Output {
        &self.trajectories[name]
    }
}

impl RunConfig {
    /// 使用线程随机数源运行对比
    pub fn compare(&self) -> Result<Comparison, OptimError> {
        self.compare_with_rng(&mut rand::thread_rng())
    }

    /// 使用给定的随机数源运行对比（SGD 与 MiniBatch 会消耗随机数）
    ///
    /// 先校验配置，配置不合法时不运行任何优化器
    pub fn compare_with_rng(&self, rng: &mut dyn RngCore) -> Result<Comparison, OptimError> {
        let (num_iterations, batch_size) = self.checked_counts()?;

        let trajectories = OptimizerKind::all(self.learning_rate, batch_size)
            .into_iter()
            .map(|mut optimizer| {
                let trajectory = optimizer.run(self.start, num_iterations, &mut *rng);
                (optimizer.name().to_string(), trajectory)
            })
            .collect();

        Ok(Comparison { trajectories })
    }
}

/// 对比 5 种优化器在同一初始条件下的轨迹
///
/// `batch_size`为`None`时取默认值 10
///
/// # 示例
/// ```
/// use only_optim::compare::compare_optimizers;
/// use only_optim::objective::Point;
///
/// let comparison = compare_optimizers(Point::origin(), 0.01, 200, None).unwrap();
/// assert_eq!(comparison["GD"].len(), 201);
/// ```
pub fn compare_optimizers(
    start: Point,
    learning_rate: f64,
    num_iterations: i64,
    batch_size: Option<i64>,
) -> Result<Comparison, OptimError> {
    compare_optimizers_with_rng(
        start,
        learning_rate,
        num_iterations,
        batch_size,
        &mut rand::thread_rng(),
    )
}

/// 同[`compare_optimizers`]，但使用调用方提供的随机数源（便于固定种子复现）
pub fn compare_optimizers_with_rng(
    start: Point,
    learning_rate: f64,
    num_iterations: i64,
    batch_size: Option<i64>,
    rng: &mut dyn RngCore,
) -> Result<Comparison, OptimError> {
    let mut config = RunConfig::new(start, learning_rate, num_iterations);
    if let Some(batch_size) = batch_size {
        config = config.with_batch_size(batch_size);
    }
    config.compare_with_rng(rng)
}
