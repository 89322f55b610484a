//! # Only Optim
//!
//! `only_optim`在固定的非凸测试曲面（[Himmelblau 函数](https://en.wikipedia.org/wiki/Himmelblau%27s_function)）上，
//! 从同一起点、以相同学习率和迭代次数运行 GD、SGD、Momentum、Adam、Mini-Batch 五种梯度优化算法，
//! 记录各自的轨迹以便对比它们的行为。绘图与动画由外部展示层负责，本库只负责计算轨迹。
//!

pub mod compare;
pub mod errors;
pub mod objective;
pub mod optimizer;
pub mod trajectory;
pub mod utils;

pub use compare::{Comparison, RunConfig, compare_optimizers, compare_optimizers_with_rng};
pub use errors::OptimError;
pub use objective::Point;
pub use optimizer::{Optimizer, OptimizerKind};
pub use trajectory::{Trajectory, TrajectoryRecorder, TrajectoryStep};
