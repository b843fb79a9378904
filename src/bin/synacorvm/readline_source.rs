//! Adapts `rustyline` to [`synacor_vm::input::LineSource`]. Kept in the
//! binary crate so the library itself never depends on a terminal.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use synacor_vm::input::LineSource;

pub struct RustylineSource {
    editor: DefaultEditor,
}

impl RustylineSource {
    pub fn new() -> rustyline::Result<Self> {
        Ok(RustylineSource { editor: DefaultEditor::new()? })
    }
}

impl LineSource for RustylineSource {
    fn next_line(&mut self) -> Option<String> {
        match self.editor.readline("") {
            Ok(line) => {
                self.editor.add_history_entry(line.as_str()).ok();
                Some(line)
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
            Err(_) => None,
        }
    }
}
