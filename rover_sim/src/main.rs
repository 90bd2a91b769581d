use rover_sim::{config::Config, error::Exception, interpret::Interpreter, run};
use std::{
    env,
    fs::File,
    io::{self, BufRead, BufReader, IsTerminal, Write},
    process,
};

const ZONE_SIZE_VAR: &str = "ROVER_ZONE_SIZE";

fn main() {
    pretty_env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() > 1 {
        eprintln!("Usage: rover [FILE]");
        process::exit(1);
    }
    let result = load_config().and_then(|config| {
        let mut interpreter = Interpreter::new(Some(config));
        if args.is_empty() {
            run_repl(&mut interpreter)
        } else {
            run_file(&args[0], &mut interpreter)
        }
    });
    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn load_config() -> Result<Config, Exception> {
    match env::var(ZONE_SIZE_VAR) {
        Ok(size) => Config::with_zone_size(&size),
        Err(_) => Ok(Config::default()),
    }
}

fn run_repl(interpreter: &mut Interpreter) -> Result<(), Exception> {
    let stdin = io::stdin();
    // Piped input is streamed without prompts
    if !stdin.is_terminal() {
        return run_reader(stdin.lock(), interpreter);
    }

    let mut stdout = io::stdout();
    interpreter.start_session();
    loop {
        let mut line = String::default();
        print!(">>> ");
        stdout.flush().map_err(Exception::Write)?;
        let n = stdin.read_line(&mut line).map_err(Exception::Read)?;
        // If zero bytes are read, then exit (usually triggered by Ctrl-D)
        if n == 0 {
            break;
        }
        if let Some(output) = interpreter.interpret(&line) {
            writeln!(stdout, "{output}").map_err(Exception::Write)?;
        }
    }
    Ok(())
}

fn run_file(file_path: &str, interpreter: &mut Interpreter) -> Result<(), Exception> {
    let file = File::open(file_path).map_err(Exception::Read)?;
    run_reader(BufReader::new(file), interpreter)
}

fn run_reader<R: BufRead>(reader: R, interpreter: &mut Interpreter) -> Result<(), Exception> {
    let mut stdout = io::stdout().lock();
    run(reader, interpreter, |output| writeln!(stdout, "{output}"))?;
    stdout.flush().map_err(Exception::Write)
}
