/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 梯度下降（GD）优化器实现
 */

use rand::RngCore;

use super::Optimizer;
use crate::objective::{self, Point};

/// GD (梯度下降) 优化器：θ = θ - α * ∇f(θ)
#[derive(Debug, Clone)]
pub struct GD {
    learning_rate: f64,
}

impl GD {
    /// 创建新的GD优化器
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for GD {
    fn name(&self) -> &'static str {
        "GD"
    }

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.learning_rate = lr;
    }

    // 无内部状态
    fn reset(&mut self) {}

    fn step(&mut self, point: Point, _rng: &mut dyn RngCore) -> Point {
        let (gx, gy) = objective::gradient_at(point);
        Point::new(
            point.x - self.learning_rate * gx,
            point.y - self.learning_rate * gy,
        )
    }
}
