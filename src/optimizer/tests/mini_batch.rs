/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Mini-Batch 优化器测试
 */

use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::objective::{self, Point};
use crate::optimizer::{DEFAULT_NOISE_AMPLITUDE, GD, MiniBatch, Optimizer};

#[test]
fn test_mini_batch_creation() {
    let mini_batch = MiniBatch::new_default(0.01);
    assert_eq!(mini_batch.name(), "MiniBatch");
    assert_eq!(mini_batch.batch_size(), 10);
    assert_eq!(mini_batch.noise_amplitude(), DEFAULT_NOISE_AMPLITUDE);

    assert_eq!(MiniBatch::new(0.01, 32).batch_size(), 32);
    assert_eq!(MiniBatch::new(0.01, 0).batch_size(), 0);
}

#[test]
fn test_mini_batch_empty_batch_is_not_corrected() {
    // 批大小为 0 时平均梯度为 0/0，轨迹如实记录为非有限值
    let mut rng = StdRng::seed_from_u64(0);
    let trajectory = MiniBatch::new(0.01, 0).run(Point::origin(), 3, &mut rng);
    assert_eq!(trajectory.len(), 4);
    assert_eq!(trajectory[0].value, 170.0);
    for step in &trajectory.steps()[1..] {
        assert!(step.x.is_nan() && step.y.is_nan() && step.value.is_nan());
    }
}

#[test]
fn test_mini_batch_unseeded_runs_differ() {
    let start = Point::origin();
    let first = MiniBatch::new_default(0.01).run(start, 10, &mut rand::thread_rng());
    let second = MiniBatch::new_default(0.01).run(start, 10, &mut rand::thread_rng());
    assert_ne!(first, second);
}

#[test]
fn test_mini_batch_without_noise_equals_gd() {
    let start = Point::new(-1.0, 1.0);
    let mini_batch =
        MiniBatch::with_params(0.01, 1, 0.0).run(start, 50, &mut StdRng::seed_from_u64(0));
    let gd = GD::new(0.01).run(start, 50, &mut StdRng::seed_from_u64(0));
    assert_eq!(mini_batch, gd);
}

#[test]
fn test_mini_batch_averages_batch_gradients() {
    // 无扰动时批次内各梯度相同，平均后应等于原梯度
    let mut rng = StdRng::seed_from_u64(0);
    let mut mini_batch = MiniBatch::with_params(0.01, 7, 0.0);
    let start = Point::new(0.5, 1.5);
    let (gx, gy) = objective::gradient_at(start);
    let point = mini_batch.step(start, &mut rng);
    assert_abs_diff_eq!(point.x, start.x - 0.01 * gx, epsilon = 1e-12);
    assert_abs_diff_eq!(point.y, start.y - 0.01 * gy, epsilon = 1e-12);
}

#[test]
fn test_mini_batch_reproducible_with_seed() {
    let start = Point::origin();
    let first = MiniBatch::new_default(0.01).run(start, 200, &mut StdRng::seed_from_u64(11));
    let second = MiniBatch::new_default(0.01).run(start, 200, &mut StdRng::seed_from_u64(11));
    assert_eq!(first, second);

    let third = MiniBatch::new_default(0.01).run(start, 200, &mut StdRng::seed_from_u64(12));
    assert_ne!(first, third);
}

#[test]
fn test_mini_batch_descends() {
    let mut rng = StdRng::seed_from_u64(5);
    let trajectory = MiniBatch::new_default(0.01).run(Point::origin(), 200, &mut rng);
    let end = trajectory.final_step().unwrap();
    assert!(end.value < 1.0);
    assert!(end.value < trajectory[0].value);
}
