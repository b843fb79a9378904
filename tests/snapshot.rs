use synacor_vm::input::LineSource;
use synacor_vm::snapshot::Snapshot;
use synacor_vm::vm::Vm;
use synacor_vm::Program;

struct NoLines;
impl LineSource for NoLines {
    fn next_line(&mut self) -> Option<String> {
        None
    }
}

#[test]
fn save_then_load_resumes_execution_deterministically() {
    let words = [1, 32768, 10, 19, 32768, 9, 32768, 32768, 32767, 7, 32768, 3, 0];
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    let program = Program::from_bytes(&bytes).unwrap();

    let mut vm = Vm::new();
    program.load_into(vm.memory_mut()).unwrap();

    // Run a few steps by hand so the snapshot captures mid-execution state.
    let mut input = synacor_vm::input::LineBuffered::new(NoLines);
    let mut sink = Vec::new();
    for _ in 0..2 {
        vm.step(&mut input, &mut sink).unwrap();
    }

    let dir = std::env::temp_dir();
    let path = dir.join(format!("synacor_vm_snapshot_test_{}", std::process::id()));
    Snapshot::save(&vm, &path).unwrap();

    let mut restored = Snapshot::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(restored.pc(), vm.pc());
    assert_eq!(restored.registers().as_slice(), vm.registers().as_slice());
    assert_eq!(restored.memory().as_slice(), vm.memory().as_slice());

    let mut output = Vec::new();
    let original_outcome = vm.run(&mut input, &mut output).unwrap();
    let mut output_restored = Vec::new();
    let restored_outcome = restored.run(&mut input, &mut output_restored).unwrap();

    assert_eq!(output, output_restored);
    assert_eq!(original_outcome, restored_outcome);
}
