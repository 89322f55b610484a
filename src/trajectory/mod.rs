/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 优化轨迹：记录器与只读轨迹
 */


use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::objective::{self, Point};

/// 轨迹中的一步：(x, y, f(x, y))
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryStep {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

impl TrajectoryStep {
    pub const fn new(x: f64, y: f64, value: f64) -> Self {
        Self { x, y, value }
    }

    /// 在给定点处求值并生成一步
    pub fn at(point: Point) -> Self {
        Self::new(point.x, point.y, objective::value_at(point))
    }

    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// 一次优化运行访问过的点序列（下标即迭代次数，0 为起点）
///
/// 只能通过[`TrajectoryRecorder::finalize`]得到，之后不可修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    steps: Vec<TrajectoryStep>,
}

impl Trajectory {
    pub fn steps(&self) -> &[TrajectoryStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TrajectoryStep> {
        self.steps.get(index)
    }

    pub fn start(&self) -> Option<&TrajectoryStep> {
        self.steps.first()
    }

    pub fn final_step(&self) -> Option<&TrajectoryStep> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryStep> {
        self.steps.iter()
    }

    /// 前 `step + 1` 步（超出长度时返回整条轨迹），供逐步展示轨迹的调用方使用
    pub fn up_to(&self, step: usize) -> &[TrajectoryStep] {
        let end = step.saturating_add(1).min(self.steps.len());
        &self.steps[..end]
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.steps.iter().map(TrajectoryStep::point)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.steps.iter().map(|s| s.value)
    }
}

impl Index<usize> for Trajectory {
    type Output = TrajectoryStep;

    fn index(&self, index: usize) -> &Self::Output {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryStep;
    type IntoIter = std::slice::Iter<'a, TrajectoryStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start(), self.final_step()) {
            (Some(start), Some(end)) => write!(
                f,
                "{}步: ({:.2}, {:.2}) f={:.4} -> ({:.2}, {:.2}) f={:.4}",
                self.len(),
                start.x,
                start.y,
                start.value,
                end.x,
                end.y,
                end.value
            ),
            _ => write!(f, "空轨迹"),
        }
    }
}

/// 只追加的轨迹构建器，仅在单次优化运行内部使用
#[derive(Debug, Default)]
pub struct TrajectoryRecorder {
    steps: Vec<TrajectoryStep>,
}

impl TrajectoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    pub fn record(&mut self, step: TrajectoryStep) {
        self.steps.push(step);
    }

    /// 在给定点处求值后追加
    pub fn record_point(&mut self, point: Point) {
        self.record(TrajectoryStep::at(point));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn finalize(self) -> Trajectory {
        Trajectory { steps: self.steps }
    }
}
