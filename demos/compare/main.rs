//! # 优化算法对比示例
//!
//! 在 Himmelblau 函数上，从 (0, 0) 出发、以相同学习率运行 5 种优化器，
//! 打印摘要表格，并按固定间隔逐步展示各优化器的位置（模拟动画的逐帧揭示）。
//!
//! ## 运行
//! ```bash
//! cargo run --example compare
//! ```

use only_optim::objective::ContourGrid;
use only_optim::optimizer::OptimizerKind;
use only_optim::{OptimError, RunConfig};

fn main() -> Result<(), OptimError> {
    println!("=== 优化算法对比（起点: 0,0）===\n");

    // 1. 配置（参考场景）
    let config = RunConfig::default();
    println!("配置: {}\n", config.to_json()?);

    // 2. 等高线网格（仅供绘图）
    let grid = ContourGrid::default();
    let contour = grid.sample();
    println!(
        "等高线网格: [{}, {}] 步长 {}，共 {} 个采样点\n",
        grid.min,
        grid.max,
        grid.step,
        contour.len()
    );

    // 3. 运行全部优化器
    let comparison = config.compare()?;
    comparison.print_summary();

    // 4. 每隔 50 步展示一次
    for step in (0..=config.num_iterations as usize).step_by(50) {
        println!("\n步数: {}", step);
        for name in OptimizerKind::NAMES {
            if let Some(s) = comparison.get(name).and_then(|t| t.get(step)) {
                println!("{}: ({:.2}, {:.2}) - 函数值: {:.4}", name, s.x, s.y, s.value);
            }
        }
    }

    println!("\n=== 完成 ===");
    Ok(())
}
