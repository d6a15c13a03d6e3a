use std::{env, fs::read_to_string, io::ErrorKind};

use lexc::{
    errors::errors::{
        compile_exit, report, Severity, EXIT_SOURCE_NOT_FOUND, EXIT_SOURCE_NOT_GIVEN,
        EXIT_SOURCE_READ_FAIL,
    },
    lexer::lexer::next_token,
};

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = &args[0];

    if args.len() < 2 {
        report(program, Severity::Fatal, "no input files");
        compile_exit(EXIT_SOURCE_NOT_GIVEN);
    }

    let source_path = &args[1];
    let source = match read_to_string(source_path) {
        Ok(source) => source,
        Err(err) => {
            report(
                program,
                Severity::Fatal,
                format_args!("{source_path}: {err}"),
            );
            let code = if err.kind() == ErrorKind::NotFound {
                EXIT_SOURCE_NOT_FOUND
            } else {
                EXIT_SOURCE_READ_FAIL
            };
            compile_exit(code);
        }
    };

    if source.is_empty() {
        report(program, Severity::Fatal, "source file empty");
        compile_exit(1);
    }

    let mut pos = 0;
    loop {
        match next_token(&source, pos) {
            Ok((token, next)) => {
                if token.is_eof() {
                    break;
                }
                print!("{token} ");
                pos = next;
            }
            Err(err) => {
                report(program, err.severity(), err);
                compile_exit(1);
            }
        }
    }
    println!();
}
