/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : GD 优化器测试
 */

use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::objective::{self, Point};
use crate::optimizer::{GD, Optimizer};

#[test]
fn test_gd_creation() {
    let mut gd = GD::new(0.01);
    assert_eq!(gd.name(), "GD");
    assert_eq!(gd.learning_rate(), 0.01);

    gd.set_learning_rate(0.02);
    assert_eq!(gd.learning_rate(), 0.02);
}

#[test]
fn test_gd_first_step() {
    // 原点处梯度为 (-14, -22)，lr=0.01 => (0.14, 0.22)
    let mut rng = StdRng::seed_from_u64(0);
    let mut gd = GD::new(0.01);
    let point = gd.step(Point::origin(), &mut rng);
    assert_abs_diff_eq!(point.x, 0.14, epsilon = 1e-12);
    assert_abs_diff_eq!(point.y, 0.22, epsilon = 1e-12);
}

#[test]
fn test_gd_is_deterministic() {
    let start = Point::new(-1.0, 0.5);
    let first = GD::new(0.01).run(start, 200, &mut StdRng::seed_from_u64(1));
    let second = GD::new(0.01).run(start, 200, &mut StdRng::seed_from_u64(2));
    assert_eq!(first, second);
}

#[test]
fn test_gd_converges_to_minimum() {
    let mut rng = StdRng::seed_from_u64(0);
    let trajectory = GD::new(0.01).run(Point::origin(), 200, &mut rng);
    assert_eq!(trajectory.len(), 201);

    let end = trajectory.final_step().unwrap();
    assert_abs_diff_eq!(end.x, 3.0, epsilon = 1e-6);
    assert_abs_diff_eq!(end.y, 2.0, epsilon = 1e-6);
    assert_abs_diff_eq!(end.value, 0.0, epsilon = 1e-10);
}

#[test]
fn test_gd_recorded_values_match_objective() {
    let mut rng = StdRng::seed_from_u64(0);
    let trajectory = GD::new(0.01).run(Point::new(1.0, 1.0), 20, &mut rng);
    for step in &trajectory {
        assert_eq!(step.value, objective::value(step.x, step.y));
    }
}
