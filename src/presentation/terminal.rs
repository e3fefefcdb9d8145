use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use super::{parse_choice, render_header, render_view};
use crate::catalog::Catalog;
use crate::error::AppResult;
use crate::quiz::{QuizController, QuizPhase};
use crate::recommend::Recommender;

/// Interactive quiz over a line-oriented reader and writer.
pub struct TerminalQuiz {
    controller: QuizController,
    recommender: Arc<dyn Recommender>,
    catalog: Arc<Catalog>,
}

impl TerminalQuiz {
    pub fn new(
        controller: QuizController,
        recommender: Arc<dyn Recommender>,
        catalog: Arc<Catalog>,
    ) -> Self {
        Self {
            controller,
            recommender,
            catalog,
        }
    }

    /// Run on the process's stdin and stdout.
    pub async fn run(&mut self) -> AppResult<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.run_with(stdin, stdout).await
    }

    /// Run until EOF or `q`.
    pub async fn run_with<R, W>(&mut self, mut reader: R, mut writer: W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        writer.write_all(render_header().as_bytes()).await?;
        let mut line = String::new();

        loop {
            if self.controller.phase() == QuizPhase::Completing {
                self.show(&mut writer).await?;
                self.controller
                    .complete_with(self.recommender.as_ref(), &self.catalog)
                    .await;
            }

            self.show(&mut writer).await?;

            line.clear();
            let bytes_read = reader.read_line(&mut line).await?;

            // EOF reached
            if bytes_read == 0 {
                info!("EOF received, exiting quiz");
                break;
            }

            let input = line.trim();
            if input.eq_ignore_ascii_case("q") {
                break;
            }

            match self.controller.phase() {
                QuizPhase::Asking { .. } => {
                    let Some(question) = self.controller.current_question() else {
                        continue;
                    };
                    let Some(option) = parse_choice(input, question) else {
                        debug!(input = %input, "Ignoring invalid choice");
                        writer.write_all("番号で選択してください。\n".as_bytes()).await?;
                        continue;
                    };
                    let (id, value, label) =
                        (question.id.clone(), option.value.clone(), option.label.clone());
                    self.controller.select_answer(&id, &value, &label)?;
                }
                QuizPhase::Done | QuizPhase::Failed => {
                    if input.eq_ignore_ascii_case("r") {
                        self.controller.restart();
                    }
                }
                QuizPhase::Completing | QuizPhase::Loading => {}
            }
        }

        writer.flush().await?;
        Ok(())
    }

    async fn show<W: AsyncWrite + Unpin>(&self, writer: &mut W) -> AppResult<()> {
        let text = render_view(&self.controller.view());
        writer.write_all(text.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        Ok(())
    }

    pub fn controller(&self) -> &QuizController {
        &self.controller
    }
}
