//! 解析パイプライン
//!
//! 1回のアップロード → 結果の丸ごと置き換え → 描画の振り分け、までを受け持つ。
//! 画面（ブラウザ・端末）は `ResultView`、通信は `AnalysisClient` として外から渡す。
//!
//! 送信は `begin` → (通信) → `finish` の3段に分かれている。Web側は通信中に
//! パイプラインを借用し続けられないため、`begin`/`finish` を個別に呼ぶ。

use crate::csv_export::{export_csv, CsvExport, CsvQuoting};
use crate::error::{Error, Result};
use crate::types::AnalysisResult;

pub const BUSY_MESSAGE: &str = "Analyzing... Please wait.";
pub const SUCCESS_MESSAGE: &str = "Analysis completed successfully!";
pub const ANALYZE_LABEL: &str = "Analyze Process";
pub const ANALYZE_BUSY_LABEL: &str = "Analyzing...";

/// 解析ボタンの表示
pub fn analyze_button_label(busy: bool) -> &'static str {
    if busy {
        ANALYZE_BUSY_LABEL
    } else {
        ANALYZE_LABEL
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    Idle,
    Busy,
    Success,
    Error,
}

impl StatusKind {
    /// CSSクラス名
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Idle => "",
            StatusKind::Busy => "busy",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// ステータス欄の表示内容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn busy() -> Self {
        Self { kind: StatusKind::Busy, text: BUSY_MESSAGE.to_string() }
    }

    pub fn success() -> Self {
        Self { kind: StatusKind::Success, text: SUCCESS_MESSAGE.to_string() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }
}

/// 解析サーバーへの送信
#[allow(async_fn_in_trait)]
pub trait AnalysisClient {
    /// アップロード対象（ブラウザなら File、CLIならバイト列）
    type File;

    async fn analyze(&self, file: Self::File) -> Result<AnalysisResult>;
}

/// パイプラインが操作する画面
pub trait ResultView {
    /// 解析ボタン無効化・スピナー表示
    fn set_busy(&mut self, busy: bool);
    fn set_status(&mut self, status: Status);
    /// ブロッキング通知
    fn alert(&mut self, message: &str);
    /// 前回のグラフを隠す
    fn hide_charts(&mut self);
    /// 詳細テーブル・サマリー・グラフへの振り分け
    fn show_results(&mut self, result: &AnalysisResult);
}

pub struct ResultPipeline<V> {
    view: V,
    result: AnalysisResult,
    quoting: CsvQuoting,
}

impl<V: ResultView> ResultPipeline<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            result: AnalysisResult::default(),
            quoting: CsvQuoting::default(),
        }
    }

    pub fn with_quoting(mut self, quoting: CsvQuoting) -> Self {
        self.quoting = quoting;
        self
    }

    /// 現在保持している解析結果
    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// 送信前処理。ファイル未選択ならここで止める
    pub fn begin<F>(&mut self, file: Option<F>) -> Result<F> {
        let Some(file) = file else {
            let err = Error::NoFileSelected;
            self.report(&err);
            return Err(err);
        };

        self.view.set_status(Status::busy());
        self.view.hide_charts();
        self.view.set_busy(true);
        Ok(file)
    }

    /// 送信後処理。成功時のみ結果を置き換える。busy は成否に関わらず解除
    pub fn finish(&mut self, outcome: Result<AnalysisResult>) -> Result<()> {
        let applied = match outcome {
            Ok(result) => {
                tracing::info!(
                    records = result.len(),
                    summary_rows = result.scenario_summary.as_ref().map_or(0, Vec::len),
                    "analysis result replaced"
                );
                self.result = result;
                self.view.show_results(&self.result);
                self.view.set_status(Status::success());
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "analysis failed; keeping previous result");
                self.view.set_status(Status::error(err.user_message()));
                Err(err)
            }
        };

        self.view.set_busy(false);
        if let Err(err) = &applied {
            self.view.alert(&err.user_message());
        }
        applied
    }

    /// 1回分の送信
    pub async fn submit<C>(&mut self, client: &C, file: Option<C::File>) -> Result<()>
    where
        C: AnalysisClient,
    {
        let file = self.begin(file)?;
        let outcome = client.analyze(file).await;
        self.finish(outcome)
    }

    /// 保持中の結果をCSVにする
    pub fn export_csv(&mut self) -> Result<CsvExport> {
        export_csv(&self.result.results, self.quoting).map_err(|err| {
            self.report(&err);
            err
        })
    }

    fn report(&mut self, err: &Error) {
        tracing::warn!(error = %err, "pipeline error");
        let message = err.user_message();
        self.view.set_status(Status::error(message.clone()));
        self.view.alert(&message);
    }
}
