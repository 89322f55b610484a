/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 动量法（Momentum）优化器实现
 */

use rand::RngCore;

use super::Optimizer;
use crate::objective::{self, Point};

/// Momentum (动量) 优化器
///
/// - v = γ * v + α * ∇f(θ)
/// - θ = θ - v
///
/// 速度在同一次运行内跨迭代累积，运行开始时清零
#[derive(Debug, Clone)]
pub struct Momentum {
    learning_rate: f64,
    gamma: f64,
    /// 速度 (vx, vy)
    velocity: [f64; 2],
}

impl Momentum {
    /// 使用指定动量系数创建Momentum优化器
    pub fn new(learning_rate: f64, gamma: f64) -> Self {
        Self {
            learning_rate,
            gamma,
            velocity: [0.0; 2],
        }
    }

    /// 使用默认动量系数 γ = 0.9 创建Momentum优化器
    pub fn new_default(learning_rate: f64) -> Self {
        Self::new(learning_rate, 0.9)
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn velocity(&self) -> [f64; 2] {
        self.velocity
    }

    /// 用梯度更新速度并返回新的速度
    pub(super) fn accumulate(&mut self, gradient: (f64, f64)) -> [f64; 2] {
        let (gx, gy) = gradient;
        self.velocity[0] = self.gamma * self.velocity[0] + self.learning_rate * gx;
        self.velocity[1] = self.gamma * self.velocity[1] + self.learning_rate * gy;
        self.velocity
    }
}

impl Optimizer for Momentum {
    fn name(&self) -> &'static str {
        "Momentum"
    }

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.learning_rate = lr;
    }

    fn reset(&mut self) {
        self.velocity = [0.0; 2];
    }

    fn step(&mut self, point: Point, _rng: &mut dyn RngCore) -> Point {
        let [vx, vy] = self.accumulate(objective::gradient_at(point));
        Point::new(point.x - vx, point.y - vy)
    }
}

