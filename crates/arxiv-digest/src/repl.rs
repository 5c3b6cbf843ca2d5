//! Interactive command loop.
//!
//! Line-oriented surface over stdin: `search` prompts for a keyword and an
//! optional date range, `ask <n>` requests the structured summary for one
//! record. Each action blocks the loop until its single HTTP call completes.

use std::io::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::error::SessionError;
use crate::formatters;
use crate::models::is_valid_date;
use crate::session::{SearchOutcome, Session, SummarizeOutcome};

/// A parsed user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a new search (prompts for keyword and dates).
    Search,
    /// Summarize the paper with the given one-based display number.
    Ask(usize),
    /// Redisplay the current result set.
    List,
    /// Show command help.
    Help,
    /// End the session.
    Quit,
}

/// Parse one input line into a command.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "search" | "s" => Some(Command::Search),
        "ask" | "a" => {
            parts.next()?.parse::<usize>().ok().filter(|&n| n >= 1).map(Command::Ask)
        }
        "list" | "l" => Some(Command::List),
        "help" | "h" | "?" => Some(Command::Help),
        "quit" | "q" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// The interactive session surface.
pub struct Repl {
    session: Session,
    lines: Lines<BufReader<Stdin>>,
}

impl Repl {
    /// Create a REPL over the given session, reading commands from stdin.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session, lines: BufReader::new(tokio::io::stdin()).lines() }
    }

    /// Run the command loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns error only on stdin/stdout failure; action-level failures are
    /// reported inline and the loop continues.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        println!("論文要約アプリ（completion source: {}）", self.session.source_name());
        print_help();

        loop {
            let Some(line) = self.prompt("> ").await? else { break };
            let Some(command) = parse_command(&line) else {
                if !line.trim().is_empty() {
                    println!("不明なコマンドです。help で一覧を表示します。");
                }
                continue;
            };

            match command {
                Command::Quit => break,
                Command::Help => print_help(),
                Command::List => print!("{}", formatters::format_papers(self.session.papers())),
                Command::Search => self.run_search().await?,
                Command::Ask(number) => self.run_ask(number).await?,
            }
        }

        Ok(())
    }

    /// Prompt for the search inputs and run one search.
    async fn run_search(&mut self) -> anyhow::Result<()> {
        let Some(keyword) = self.prompt("キーワードを入力してください: ").await? else {
            return Ok(());
        };
        let keyword = keyword.trim().to_string();
        if keyword.is_empty() {
            println!("キーワードが空です。検索を中止します。");
            return Ok(());
        }

        let Some(start_date) = self
            .prompt_date("開始日をYYYYMMDD形式で入力してください（未入力の場合は直近1週間になります）: ")
            .await?
        else {
            return Ok(());
        };
        let Some(end_date) = self
            .prompt_date("終了日をYYYYMMDD形式で入力してください（未入力の場合は現在日時になります）: ")
            .await?
        else {
            return Ok(());
        };

        match self.session.search(&keyword, start_date.as_deref(), end_date.as_deref()).await {
            Ok(SearchOutcome::Found(_)) => {
                print!("{}", formatters::format_papers(self.session.papers()));
            }
            Ok(SearchOutcome::Empty) => println!("該当する論文が見つかりませんでした。"),
            Ok(SearchOutcome::FetchFailed) => {
                println!("警告: arXiv APIからの取得に失敗しました。");
            }
            Err(e) => println!("エラー: {e}"),
        }
        Ok(())
    }

    /// Summarize one record and display the four fields.
    async fn run_ask(&mut self, number: usize) -> anyhow::Result<()> {
        match self.session.summarize(number - 1).await {
            Ok(SummarizeOutcome::Summarized | SummarizeOutcome::Cached) => {
                if let Some(summary) =
                    self.session.papers().get(number - 1).and_then(|p| p.cached_summary())
                {
                    println!("論文 {number} の要約:");
                    print!("{}", formatters::format_structured_summary(summary));
                }
            }
            Ok(SummarizeOutcome::Unavailable) => {
                println!("警告: 要約の生成に失敗しました。もう一度お試しください。");
            }
            Err(SessionError::UnknownPaper { index, count }) => {
                println!("論文 {index} は存在しません（現在 {count} 件）。");
            }
            Err(e) => println!("エラー: {e}"),
        }
        Ok(())
    }

    /// Print a label and read one line. `None` means end of input.
    async fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        print!("{label}");
        std::io::stdout().flush()?;
        Ok(self.lines.next_line().await?)
    }

    /// Prompt for an optional YYYYMMDD date, re-prompting on invalid input.
    ///
    /// Outer `None` means end of input; inner `None` means the date was left
    /// blank and should be resolved by the session.
    async fn prompt_date(&mut self, label: &str) -> anyhow::Result<Option<Option<String>>> {
        loop {
            let Some(line) = self.prompt(label).await? else { return Ok(None) };
            let line = line.trim();
            if line.is_empty() {
                return Ok(Some(None));
            }
            if is_valid_date(line) {
                return Ok(Some(Some(line.to_string())));
            }
            println!("日付はYYYYMMDD形式で入力してください。");
        }
    }
}

fn print_help() {
    println!("コマンド:");
    println!("  search        論文を検索する");
    println!("  ask <番号>    論文の要約を生成する");
    println!("  list          検索結果を再表示する");
    println!("  help          このヘルプを表示する");
    println!("  quit          終了する");
}
