/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 随机梯度下降（SGD）优化器实现
 */

use rand::RngCore;

use super::Optimizer;
use super::noise::{self, DEFAULT_NOISE_AMPLITUDE};
use crate::objective::{self, Point};

/// SGD (随机梯度下降) 优化器
///
/// 在解析梯度的每个分量上各自叠加独立的均匀噪声 U(-a, a) 来模拟随机梯度：
/// θ = θ - α * (∇f(θ) + ξ)
#[derive(Debug, Clone)]
pub struct SGD {
    learning_rate: f64,
    noise_amplitude: f64,
}

impl SGD {
    /// 创建新的SGD优化器（噪声幅度为 0.1）
    pub fn new(learning_rate: f64) -> Self {
        Self::with_params(learning_rate, DEFAULT_NOISE_AMPLITUDE)
    }

    /// 使用指定噪声幅度创建SGD优化器
    pub fn with_params(learning_rate: f64, noise_amplitude: f64) -> Self {
        Self {
            learning_rate,
            noise_amplitude,
        }
    }

    pub fn noise_amplitude(&self) -> f64 {
        self.noise_amplitude
    }
}

impl Optimizer for SGD {
    fn name(&self) -> &'static str {
        "SGD"
    }

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.learning_rate = lr;
    }

    fn reset(&mut self) {}

    fn step(&mut self, point: Point, rng: &mut dyn RngCore) -> Point {
        let (gx, gy) = objective::gradient_at(point);
        // x 先于 y 采样，保证固定种子下序列可复现
        let noise_x = noise::uniform(rng, self.noise_amplitude);
        let noise_y = noise::uniform(rng, self.noise_amplitude);
        Point::new(
            point.x - self.learning_rate * (gx + noise_x),
            point.y - self.learning_rate * (gy + noise_y),
        )
    }
}
