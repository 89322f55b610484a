/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 小批量梯度下降（Mini-Batch GD）优化器实现
 */

use rand::RngCore;

use super::Optimizer;
use super::noise::{self, DEFAULT_NOISE_AMPLITUDE};
use crate::objective::{self, Point};

/// Mini-Batch (小批量梯度下降) 优化器
///
/// 每次迭代在当前点附近取`batch_size`个扰动点 (x + ξ, y + ξ')，
/// 对这些点的梯度求平均后再按 θ = θ - α * avg(∇f) 更新
#[derive(Debug, Clone)]
pub struct MiniBatch {
    learning_rate: f64,
    batch_size: usize,
    noise_amplitude: f64,
}

impl MiniBatch {
    /// 未指定时的小批量大小
    pub const DEFAULT_BATCH_SIZE: usize = 10;

    /// 创建新的MiniBatch优化器
    ///
    /// 不校验`batch_size`：为 0 时平均梯度为 0/0，轨迹随之变为 NaN
    pub fn new(learning_rate: f64, batch_size: usize) -> Self {
        Self::with_params(learning_rate, batch_size, DEFAULT_NOISE_AMPLITUDE)
    }

    /// 使用默认小批量大小创建MiniBatch优化器
    pub fn new_default(learning_rate: f64) -> Self {
        Self::new(learning_rate, Self::DEFAULT_BATCH_SIZE)
    }

    /// 使用指定小批量大小和扰动幅度创建MiniBatch优化器
    pub fn with_params(learning_rate: f64, batch_size: usize, noise_amplitude: f64) -> Self {
        Self {
            learning_rate,
            batch_size,
            noise_amplitude,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn noise_amplitude(&self) -> f64 {
        self.noise_amplitude
    }

    /// 在当前点附近采样一个批次并返回平均梯度
    fn batch_gradient(&self, point: Point, rng: &mut dyn RngCore) -> (f64, f64) {
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        for _ in 0..self.batch_size {
            let dx = noise::uniform(rng, self.noise_amplitude);
            let dy = noise::uniform(rng, self.noise_amplitude);
            let (gx, gy) = objective::gradient(point.x + dx, point.y + dy);
            sum_x += gx;
            sum_y += gy;
        }
        let n = self.batch_size as f64;
        (sum_x / n, sum_y / n)
    }
}

impl Optimizer for MiniBatch {
    fn name(&self) -> &'static str {
        "MiniBatch"
    }

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.learning_rate = lr;
    }

    fn reset(&mut self) {}

    fn step(&mut self, point: Point, rng: &mut dyn RngCore) -> Point {
        let (gx, gy) = self.batch_gradient(point, rng);
        Point::new(
            point.x - self.learning_rate * gx,
            point.y - self.learning_rate * gy,
        )
    }
}
