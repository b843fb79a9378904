//! End-to-end scenarios driven entirely through the public API, mirroring
//! the concrete programs used to validate the executor's semantics.

use synacor_vm::input::{LineBuffered, LineSource};
use synacor_vm::vm::{Vm, VmState};
use synacor_vm::Program;

struct NoLines;
impl LineSource for NoLines {
    fn next_line(&mut self) -> Option<String> {
        None
    }
}

fn run(words: &[u16]) -> (Vec<u8>, Vm) {
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    let program = Program::from_bytes(&bytes).unwrap();
    let mut vm = Vm::new();
    program.load_into(vm.memory_mut()).unwrap();

    let mut input = LineBuffered::new(NoLines);
    let mut output = Vec::new();
    vm.run(&mut input, &mut output).unwrap();
    (output, vm)
}

#[test]
fn hello_world_prints_and_halts_cleanly() {
    let (output, vm) = run(&[19, 72, 19, 73, 0]);
    assert_eq!(output, b"HI");
    assert_eq!(vm.pc(), 4);
    assert_eq!(vm.state(), VmState::Halted);
}

#[test]
fn arithmetic_wraps_modulo_32768() {
    let (output, _) = run(&[9, 32768, 32767, 2, 19, 32768, 0]);
    assert_eq!(output, vec![1]);
}

#[test]
fn countdown_loop_emits_descending_bytes() {
    let words = [1, 32768, 10, 19, 32768, 9, 32768, 32768, 32767, 7, 32768, 3, 0];
    let (output, _) = run(&words);
    assert_eq!(output, vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn call_and_return_resume_the_caller() {
    let (output, vm) = run(&[17, 5, 19, 65, 0, 19, 66, 18]);
    assert_eq!(output, b"BA");
    assert_eq!(vm.state(), VmState::Halted);
}

#[test]
fn bitwise_not_masks_to_fifteen_bits() {
    let (output, _) = run(&[14, 32768, 0, 19, 32768, 0]);
    assert_eq!(output, vec![0xFF]);
}

#[test]
fn return_on_empty_stack_is_a_clean_halt_not_a_fault() {
    let (_, vm) = run(&[18]);
    assert_eq!(vm.state(), VmState::Halted);
}

#[test]
fn jt_and_jf_resolve_targets_through_registers() {
    // set r0 <- 1; set r1 <- 11 (jump target); jt r0 r1; out 'X' (skipped); out 'Y'; halt
    let words = [1, 32768, 1, 1, 32769, 11, 7, 32768, 32769, 19, 88, 19, 89, 0];
    let (output, _) = run(&words);
    assert_eq!(output, b"Y");
}

#[test]
fn destination_addressing_distinguishes_literal_from_register() {
    // add memory[100] <- 2 + 3; rmem r0 <- memory[100]; out r0
    let words = [9, 100, 2, 3, 15, 32768, 100, 19, 32768, 0];
    let (output, _) = run(&words);
    assert_eq!(output, vec![5]);
}
