use rand::{Rng, RngCore};

/// SGD 与小批量梯度下降默认的噪声幅度：每次采样服从 U(-0.1, 0.1)
pub const DEFAULT_NOISE_AMPLITUDE: f64 = 0.1;

/// 采样一个服从 U(-amplitude, amplitude) 的噪声（左闭右开）
///
/// 幅度不是正数时不加噪声
pub(super) fn uniform(rng: &mut dyn RngCore, amplitude: f64) -> f64 {
    if amplitude > 0.0 && amplitude.is_finite() {
        rng.gen_range(-amplitude..amplitude)
    } else {
        0.0
    }
}
