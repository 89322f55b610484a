/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 目标函数模块：Himmelblau 函数及其解析梯度
 *
 * f(x, y) = (x² + y − 11)² + (x + y² − 7)²
 *
 * 该函数在实数域上处处有定义，有 4 个全局极小值点（函数值均为 0），
 * 是比较各类梯度优化算法行为的经典非凸测试曲面。
 */

pub mod contour;


use serde::{Deserialize, Serialize};

pub use contour::{ContourGrid, ContourSample};

/// 二维平面上的点
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 原点 (0, 0)
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// 两个坐标是否都是有限值（发散的轨迹可能出现 inf/NaN）
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Himmelblau 函数的 4 个全局极小值点
pub const MINIMA: [Point; 4] = [
    Point::new(3.0, 2.0),
    Point::new(-2.805_118, 3.131_312),
    Point::new(-3.779_310, -3.283_186),
    Point::new(3.584_428, -1.848_126),
];

/// 计算 Himmelblau 函数值
pub fn value(x: f64, y: f64) -> f64 {
    let a = x * x + y - 11.0;
    let b = x + y * y - 7.0;
    a * a + b * b
}

/// 计算 Himmelblau 函数的解析梯度 (∂f/∂x, ∂f/∂y)
///
/// - ∂f/∂x = 4x(x² + y − 11) + 2(x + y² − 7)
/// - ∂f/∂y = 2(x² + y − 11) + 4y(x + y² − 7)
pub fn gradient(x: f64, y: f64) -> (f64, f64) {
    let a = x * x + y - 11.0;
    let b = x + y * y - 7.0;
    (4.0 * x * a + 2.0 * b, 2.0 * a + 4.0 * y * b)
}

/// 按点计算函数值
pub fn value_at(point: Point) -> f64 {
    value(point.x, point.y)
}

/// 按点计算梯度
pub fn gradient_at(point: Point) -> (f64, f64) {
    gradient(point.x, point.y)
}
