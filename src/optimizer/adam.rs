/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Adam优化器实现
 */

use rand::RngCore;

use super::Optimizer;
use crate::objective::{self, Point};

/// Adam优化器
#[derive(Debug, Clone)]
pub struct Adam {
    learning_rate: f64,
    beta1: f64,
    beta2: f64,
    epsilon: f64,
    /// 一阶矩估计
    m: [f64; 2],
    /// 二阶矩估计
    v: [f64; 2],
    /// 时间步（第一次更新时为 1，达到 i32::MAX 后不再增加）
    t: i32,
}

impl Adam {
    /// 创建新的Adam优化器
    pub fn new(learning_rate: f64, beta1: f64, beta2: f64, epsilon: f64) -> Self {
        Self {
            learning_rate,
            beta1,
            beta2,
            epsilon,
            m: [0.0; 2],
            v: [0.0; 2],
            t: 0,
        }
    }

    /// 使用默认参数（β1=0.9，β2=0.999，ε=1e-8）创建Adam优化器
    pub fn new_default(learning_rate: f64) -> Self {
        Self::new(learning_rate, 0.9, 0.999, 1e-8)
    }

    pub fn first_moment(&self) -> [f64; 2] {
        self.m
    }

    pub fn second_moment(&self) -> [f64; 2] {
        self.v
    }

    /// 已执行的更新次数
    pub fn time_step(&self) -> i32 {
        self.t
    }

    /// 当前时间步下偏差修正后的矩估计 (m̂, v̂)
    ///
    /// - m̂ = m / (1 - β1^t)
    /// - v̂ = v / (1 - β2^t)
    ///
    /// 尚未更新过（t = 0）时返回零
    pub fn bias_corrected(&self) -> ([f64; 2], [f64; 2]) {
        if self.t == 0 {
            return ([0.0; 2], [0.0; 2]);
        }
        let m_correction = 1.0 - self.beta1.powi(self.t);
        let v_correction = 1.0 - self.beta2.powi(self.t);
        (
            [self.m[0] / m_correction, self.m[1] / m_correction],
            [self.v[0] / v_correction, self.v[1] / v_correction],
        )
    }
}

impl Optimizer for Adam {
    fn name(&self) -> &'static str {
        "Adam"
    }

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.learning_rate = lr;
    }

    fn reset(&mut self) {
        self.m = [0.0; 2];
        self.v = [0.0; 2];
        self.t = 0;
    }

    fn step(&mut self, point: Point, _rng: &mut dyn RngCore) -> Point {
        self.t = self.t.saturating_add(1);
        let (gx, gy) = objective::gradient_at(point);

        // m = β1 * m + (1 - β1) * g
        // v = β2 * v + (1 - β2) * g²
        for (i, g) in [gx, gy].into_iter().enumerate() {
            self.m[i] = self.beta1 * self.m[i] + (1.0 - self.beta1) * g;
            self.v[i] = self.beta2 * self.v[i] + (1.0 - self.beta2) * g * g;
        }

        // θ = θ - α * m̂ / (√v̂ + ε)
        let (m_hat, v_hat) = self.bias_corrected();
        Point::new(
            point.x - self.learning_rate * m_hat[0] / (v_hat[0].sqrt() + self.epsilon),
            point.y - self.learning_rate * m_hat[1] / (v_hat[1].sqrt() + self.epsilon),
        )
    }
}

#[cfg(test)]
impl Adam {
    pub(super) fn set_time_step(&mut self, t: i32) {
        self.t = t;
    }
}
