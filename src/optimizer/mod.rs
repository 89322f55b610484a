/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 优化器模块：5 种梯度优化算法在 Himmelblau 曲面上的单步更新与整段运行
 *
 * 各算法通过 enum_dispatch 统一到 OptimizerKind，调用方无需关心具体算法：
 * - GD: 梯度下降
 * - SGD: 带均匀噪声的随机梯度下降
 * - Momentum: 动量法
 * - Adam: 带偏差修正的自适应矩估计
 * - MiniBatch: 小批量（扰动采样平均）梯度下降
 */

mod adam;
mod gd;
mod mini_batch;
mod momentum;
mod noise;
mod sgd;

#[cfg(test)]
mod tests;

pub use adam::Adam;
pub use gd::GD;
pub use mini_batch::MiniBatch;
pub use momentum::Momentum;
pub use noise::DEFAULT_NOISE_AMPLITUDE;
pub use sgd::SGD;

use enum_dispatch::enum_dispatch;
use rand::RngCore;

use crate::objective::Point;
use crate::trajectory::{Trajectory, TrajectoryRecorder};

#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum OptimizerKind {
    GD(GD),
    SGD(SGD),
    Adam(Adam),
    Momentum(Momentum),
    MiniBatch(MiniBatch),
}

#[enum_dispatch(OptimizerKind)]
pub trait Optimizer {
    /// 优化器的固定标识名（如"GD"、"Adam"）
    fn name(&self) -> &'static str;

    /// 获取学习率
    fn learning_rate(&self) -> f64;

    /// 设置学习率
    fn set_learning_rate(&mut self, lr: f64);

    /// 清空运行期内部状态（如动量的速度、Adam 的矩估计和时间步）
    fn reset(&mut self);

    /// 从当前点执行一次更新，返回新的点
    ///
    /// 不做任何输入校验：学习率过大或起点病态时允许发散（出现极大值或 inf/NaN）
    fn step(&mut self, point: Point, rng: &mut dyn RngCore) -> Point;

    /// 从`start`出发运行`num_iterations`次迭代，返回长度为`num_iterations + 1`的轨迹
    ///
    /// 运行前会先[`reset`](Optimizer::reset)，因此同一实例多次运行互不影响
    fn run(&mut self, start: Point, num_iterations: usize, rng: &mut dyn RngCore) -> Trajectory {
        self.reset();
        let mut recorder = TrajectoryRecorder::with_capacity(num_iterations.saturating_add(1));
        let mut point = start;
        recorder.record_point(point);
        for _ in 0..num_iterations {
            point = self.step(point, rng);
            recorder.record_point(point);
        }
        recorder.finalize()
    }
}

impl OptimizerKind {
    /// 对比运行中各优化器的标识名，顺序即运行顺序
    pub const NAMES: [&'static str; 5] = ["GD", "SGD", "Adam", "Momentum", "MiniBatch"];

    /// 按统一的学习率和小批量大小构造全部 5 种优化器（按[`Self::NAMES`]的顺序）
    pub fn all(learning_rate: f64, batch_size: usize) -> [OptimizerKind; 5] {
        [
            GD::new(learning_rate).into(),
            SGD::new(learning_rate).into(),
            Adam::new_default(learning_rate).into(),
            Momentum::new_default(learning_rate).into(),
            MiniBatch::new(learning_rate, batch_size).into(),
        ]
    }
}
