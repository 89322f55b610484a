/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 对比结果的摘要表格
 */

use super::Comparison;
use crate::optimizer::OptimizerKind;

impl Comparison {
    /// 打印对比摘要
    ///
    /// # 示例
    /// ```ignore
    /// comparison.print_summary();
    /// // 输出：
    /// // ┌───────────┬──────┬────────────┬────────────┬──────────────────┐
    /// // │ 优化器    │ 步数 │ 初始函数值 │ 最终函数值 │ 最终位置         │
    /// // ├───────────┼──────┼────────────┼────────────┼──────────────────┤
    /// // │ GD        │ 201  │ 170.0000   │ 0.0000     │ (3.0000, 2.0000) │
    /// // ...
    /// ```
    pub fn print_summary(&self) {
        println!("{}", self.summary());
    }

    /// 返回对比摘要字符串（Unicode 文本表格，用于控制台输出）
    ///
    /// 行按运行顺序排列，不在[`OptimizerKind::NAMES`]中的名字排在最后
    pub fn summary(&self) -> String {
        let headers = ["优化器", "步数", "初始函数值", "最终函数值", "最终位置"];

        let mut names: Vec<&str> = OptimizerKind::NAMES
            .iter()
            .copied()
            .filter(|name| self.contains(name))
            .collect();
        names.extend(
            self.names()
                .filter(|name| !OptimizerKind::NAMES.iter().any(|known| known == name)),
        );

        let rows: Vec<[String; 5]> = names
            .iter()
            .map(|&name| {
                let trajectory = &self[name];
                let start = trajectory.start();
                let end = trajectory.final_step();
                [
                    name.to_string(),
                    trajectory.len().to_string(),
                    start.map_or_else(|| "-".to_string(), |s| format!("{:.4}", s.value)),
                    end.map_or_else(|| "-".to_string(), |s| format!("{:.4}", s.value)),
                    end.map_or_else(
                        || "-".to_string(),
                        |s| format!("({:.4}, {:.4})", s.x, s.y),
                    ),
                ]
            })
            .collect();

        // 计算各列宽度
        let mut widths = headers.map(display_width);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(display_width(cell));
            }
        }

        let border = |left: &str, middle: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}\n", left, segments.join(middle), right)
        };
        let line = |cells: &[String]| {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, &w)| format!(" {}{} ", cell, " ".repeat(w - display_width(cell))))
                .collect();
            format!("│{}│\n", padded.join("│"))
        };

        let mut output = String::new();
        output.push_str(&border("┌", "┬", "┐"));
        output.push_str(&line(&headers.map(String::from)));
        output.push_str(&border("├", "┼", "┤"));
        for row in &rows {
            output.push_str(&line(row));
        }
        output.push_str(&border("└", "┴", "┘"));
        output
    }
}

// 中文字符按 2 列宽计算
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}
