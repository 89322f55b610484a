/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 优化器模块单元测试
 *
 * 测试按功能分组：
 * - gd / sgd / momentum / adam / mini_batch: 各优化器测试
 * - trait_tests: Optimizer trait 与 OptimizerKind 通用行为测试
 */

mod gd;
mod mini_batch;
