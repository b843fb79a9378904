use crate::readline_source::RustylineSource;
use std::fs::File;
use std::io::{self, BufReader};
use synacor_vm::debugger::Debugger;
use synacor_vm::input::{LineBuffered, LineReader};
use synacor_vm::program::Program;
use synacor_vm::vm::Vm;

/// Dispatches `run`/`disasm`/`debug` from already-split argv (argv[0], the
/// binary name, excluded).
pub fn run(args: &[String]) -> Result<(), String> {
    match args {
        [cmd, image] if cmd == "run" => run_image(image),
        [cmd, image] if cmd == "disasm" => disasm_image(image),
        [cmd, image] if cmd == "debug" => debug_image(image),
        _ => Err(usage()),
    }
}

fn usage() -> String {
    "usage: synacorvm <run|disasm|debug> <image>".to_string()
}

fn load_vm(image_path: &str) -> Result<Vm, String> {
    let mut file = File::open(image_path).map_err(|e| format!("cannot open {}: {}", image_path, e))?;
    let program = Program::new(&mut file).map_err(|e| format!("cannot load {}: {}", image_path, e))?;
    let mut vm = Vm::new();
    program
        .load_into(vm.memory_mut())
        .map_err(|e| format!("cannot load {}: {}", image_path, e))?;
    Ok(vm)
}

fn run_image(image_path: &str) -> Result<(), String> {
    let mut vm = load_vm(image_path)?;
    let stdin = io::stdin();
    let mut input = LineBuffered::new(LineReader::new(BufReader::new(stdin.lock())));
    let mut output = io::stdout();

    vm.run(&mut input, &mut output).map_err(|err| {
        tracing::error!(pc = vm.pc(), error = %err, "run faulted");
        format!("fault at {}: {}", vm.pc(), err)
    })?;
    Ok(())
}

fn disasm_image(image_path: &str) -> Result<(), String> {
    let vm = load_vm(image_path)?;
    for line in synacor_vm::disassembler::disassemble(vm.memory()) {
        println!("{}", line);
    }
    Ok(())
}

fn debug_image(image_path: &str) -> Result<(), String> {
    let vm = load_vm(image_path)?;
    let lines = RustylineSource::new().map_err(|e| format!("cannot start readline: {}", e))?;
    let mut debugger = Debugger::new(vm, lines);
    let mut output = io::stdout();

    let outcome = debugger.run(&mut output);
    tracing::info!(pc = debugger.vm().pc(), "debug session ended");
    match outcome {
        Ok(_) => Ok(()),
        Err(err) => Err(format!("fault at {}: {}", debugger.vm().pc(), err)),
    }
}
