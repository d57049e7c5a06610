//! Running state threaded through one scan.

use sascheck_core::lang::keywords::{KeywordId, KeywordRole};

/// A block opened by a `do` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenBlock {
    pub keyword: KeywordId,
    pub line: usize,
}

/// Counters and flags for one scan. Created fresh per scan and dropped with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    /// `(` minus `)` so far
    pub paren_balance: i64,
    /// Quote parity, shared by `'` and `"`
    pub quote_open: bool,
    /// Comment nesting, toggled rather than counted
    pub comment_open: bool,
    /// `do` lines minus `end` lines so far
    pub do_balance: i64,
    /// Open `do` blocks. Maintained but not reported.
    pub open_blocks: Vec<OpenBlock>,
    /// Line of the latest `proc`/`data` not yet closed by `run`/`quit`
    pub last_open_step: Option<usize>,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a line's leading keyword to block and step tracking.
    pub fn apply_keyword(&mut self, keyword: KeywordId, line: usize) {
        match sascheck_core::lang::keywords::role(keyword) {
            KeywordRole::BlockOpen => {
                self.do_balance += 1;
                self.open_blocks.push(OpenBlock { keyword, line });
            }
            KeywordRole::BlockClose => {
                self.do_balance -= 1;
                if self.open_blocks.last().is_some_and(|b| b.keyword == KeywordId::Do) {
                    self.open_blocks.pop();
                }
            }
            KeywordRole::StepOpen => self.last_open_step = Some(line),
            KeywordRole::StepClose => self.last_open_step = None,
        }
    }
}
