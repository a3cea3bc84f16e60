//! ログ初期化（tracing + tracing-subscriber）

use tracing_subscriber::{fmt, EnvFilter};

/// ログ初期化
///
/// RUST_LOG があればそれを使う。無ければ info（`--verbose` で debug）。
/// 出力は stderr（stdout はレポート出力の案内に使う）。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}
