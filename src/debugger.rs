//! A strict decorator over [`Vm`]: every dispatch is traced, and the input
//! stream is filtered for meta-commands before any byte reaches the
//! program. The debugger never reimplements an opcode; it only decides
//! which bytes `Vm::step` sees and when to print a trace line.

use crate::input::{LineSource, QueueSource};
use crate::instruction::Instruction;
use crate::snapshot::Snapshot;
use crate::vm::{Vm, VmState};
use std::collections::VecDeque;
use std::io::Write;
use std::path::Path;

/// A meta-command recognised at the start of an input line, intercepted
/// before the line's bytes are handed to the running program.
enum MetaCommand {
    Set(u16),
    Get,
    SaveState(String),
    LoadState(String),
}

impl MetaCommand {
    fn parse(line: &str) -> Option<MetaCommand> {
        let mut words = line.split_whitespace();
        match words.next()? {
            "set" => words.next()?.parse().ok().map(MetaCommand::Set),
            "get" => Some(MetaCommand::Get),
            "save" if words.next()? == "state" => {
                Some(MetaCommand::SaveState(words.next()?.to_string()))
            }
            "load" if words.next()? == "state" => {
                Some(MetaCommand::LoadState(words.next()?.to_string()))
            }
            _ => None,
        }
    }
}

/// Wraps a [`Vm`], tracing each instruction and intercepting meta-commands
/// read from a [`LineSource`] before they can reach the program.
pub struct Debugger<R> {
    vm: Vm,
    lines: R,
    pending: VecDeque<u8>,
    tracing: bool,
}

impl<R: LineSource> Debugger<R> {
    pub fn new(vm: Vm, lines: R) -> Self {
        Debugger { vm, lines, pending: VecDeque::new(), tracing: false }
    }

    pub fn vm(&self) -> &Vm {
        &self.vm
    }

    /// Runs until halt or fault, writing a trace line before each
    /// instruction (once tracing has started) and program output to
    /// `output`.
    pub fn run(&mut self, output: &mut dyn Write) -> Result<VmState, crate::error::VmError> {
        let result = loop {
            let pc = self.vm.pc();
            if self.vm.state() != VmState::Running {
                break Ok(self.vm.state());
            }

            let decoded = Instruction::decode(pc, self.vm.memory()).ok();
            let is_in = matches!(decoded, Some(Instruction::In(_)));

            if let Some(instr) = &decoded {
                if is_in {
                    self.tracing = true;
                }
                if self.tracing {
                    self.print_trace(pc, instr, output);
                }
            }

            // Input is only ever read lazily, right before an `in` executes —
            // never ahead of it, so the program's own prompt reaches `output`
            // first and meta-commands are consumed exactly where they are
            // meant to intercept program input.
            if is_in {
                self.fill_pending_if_needed(output);
            }

            let mut source = QueueSource(&mut self.pending);
            match self.vm.step(&mut source, output) {
                Ok(VmState::Running) => continue,
                Ok(state) => break Ok(state),
                Err(err) => break Err(err),
            }
        };

        writeln!(output, "Fault index: {}", self.vm.pc()).ok();
        result
    }

    fn print_trace(&self, pc: u16, instr: &Instruction, output: &mut dyn Write) {
        writeln!(
            output,
            "registers: {:?} stack: {:?}",
            self.vm.registers().as_slice(),
            self.vm.stack().as_slice()
        )
        .ok();
        writeln!(output, "{}: {}", pc, instr).ok();
    }

    /// Keeps consuming meta-command lines until either a non-meta line is
    /// buffered for the program or the line source is exhausted.
    fn fill_pending_if_needed(&mut self, output: &mut dyn Write) {
        while self.pending.is_empty() {
            let line = match self.lines.next_line() {
                Some(line) => line,
                None => return,
            };

            match MetaCommand::parse(&line) {
                Some(MetaCommand::Set(value)) => {
                    self.vm.registers_mut().set(7, value as u32);
                }
                Some(MetaCommand::Get) => {
                    writeln!(output, "{}", self.vm.registers().get(7)).ok();
                }
                Some(MetaCommand::SaveState(path)) => match Snapshot::save(&self.vm, Path::new(&path)) {
                    Ok(()) => tracing::info!(path = %path, "saved state"),
                    Err(err) => tracing::error!(path = %path, error = %err, "save state failed"),
                },
                Some(MetaCommand::LoadState(path)) => match Snapshot::load(Path::new(&path)) {
                    Ok(vm) => {
                        self.vm = vm;
                        tracing::info!(path = %path, "loaded state");
                    }
                    Err(err) => tracing::error!(path = %path, error = %err, "load state failed"),
                },
                None => {
                    self.pending.extend(line.into_bytes());
                    self.pending.push_back(b'\n');
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::Program;

    struct Scripted(std::vec::IntoIter<String>);
    impl LineSource for Scripted {
        fn next_line(&mut self) -> Option<String> {
            self.0.next()
        }
    }

    fn scripted(lines: &[&str]) -> Scripted {
        Scripted(lines.iter().map(|l| l.to_string()).collect::<Vec<_>>().into_iter())
    }

    #[test]
    fn meta_command_set_assigns_register_then_program_reads_next_line() {
        // in r0 ; out r0 ; halt
        let words = [20u16, 32768, 19, 32768, 0];
        let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        let program = Program::from_bytes(&bytes).unwrap();
        let mut vm = Vm::new();
        program.load_into(vm.memory_mut()).unwrap();

        let mut debugger = Debugger::new(vm, scripted(&["set 9999"]));
        let mut output = Vec::new();
        debugger.run(&mut output);

        assert_eq!(debugger.vm().registers().get(7), 9999);
    }
}
