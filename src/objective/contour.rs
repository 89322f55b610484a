/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 等高线网格采样（仅供外部绘图使用，与优化器行为无关）
 */

use serde::{Deserialize, Serialize};

use super::value;

/// 网格上的一个采样点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContourSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 正方形采样区域 [min, max] × [min, max]，步长为 step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContourGrid {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for ContourGrid {
    fn default() -> Self {
        Self::new(-5.0, 5.0, 0.2)
    }
}

impl ContourGrid {
    // 判断末端坐标是否落在 max 上时允许的浮点误差
    const TOLERANCE: f64 = 1e-9;

    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// 每个轴上的采样数（含两端）；步长非正或区间非法时为 0
    pub fn samples_per_axis(&self) -> usize {
        if !(self.step > 0.0) || !self.step.is_finite() || !(self.max >= self.min) {
            return 0;
        }
        ((self.max - self.min) / self.step + Self::TOLERANCE).floor() as usize + 1
    }

    /// 按索引计算坐标，避免累加步长带来的漂移
    fn coordinate(&self, index: usize) -> f64 {
        self.min + index as f64 * self.step
    }

    /// 采样整个网格，先按 x 再按 y 排列
    pub fn sample(&self) -> Vec<ContourSample> {
        let n = self.samples_per_axis();
        let mut samples = Vec::with_capacity(n * n);
        for i in 0..n {
            let x = self.coordinate(i);
            for j in 0..n {
                let y = self.coordinate(j);
                samples.push(ContourSample {
                    x,
                    y,
                    z: value(x, y),
                });
            }
        }
        samples
    }
}
