use std::{env, fs, path::Path, process::ExitCode, time::Instant};

use lbc::{
    errors::errors::{Error, ErrorImpl},
    render_error, tokenize, Lexer, Position, Token, TokenKind,
};
use log::info;

const USAGE: &str = "usage: lbc [--strict] [FILE]";

// What the driver lexes when no file is given.
const DEMO_SOURCE: &str = "print \"hello world\"";

#[derive(Debug, PartialEq)]
struct Options {
    strict: bool,
    file: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Options, Error> {
    let mut options = Options {
        strict: false,
        file: None,
    };

    for arg in args {
        match arg.as_str() {
            "--strict" => options.strict = true,
            flag if flag.starts_with("--") => return Err(usage(format!("unknown flag `{}`", flag))),
            path if options.file.is_none() => options.file = Some(path.to_string()),
            _ => return Err(usage(String::from("expected at most one file"))),
        }
    }

    Ok(options)
}

fn usage(message: String) -> Error {
    Error::new(ErrorImpl::Usage { message }, Position::null())
}

fn read_source(file_path: &str) -> Result<(String, String), Error> {
    let file_name = Path::new(file_path)
        .file_name()
        .map_or_else(|| file_path.to_string(), |name| name.to_string_lossy().into_owned());

    let contents = fs::read_to_string(file_path).map_err(|err| {
        Error::new(
            ErrorImpl::FileRead {
                path: file_path.to_string(),
                message: err.to_string(),
            },
            Position::null(),
        )
    })?;

    Ok((file_name, contents))
}

fn print_tokens<'a>(tokens: impl IntoIterator<Item = &'a Token>) {
    for token in tokens {
        println!("{}", token);
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(error) => {
            eprint!("{}", render_error(&error, ""));
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let (file_name, source) = match &options.file {
        Some(file_path) => match read_source(file_path) {
            Ok(read) => read,
            Err(error) => {
                eprint!("{}", render_error(&error, ""));
                return ExitCode::FAILURE;
            }
        },
        None => (String::from("demo"), String::from(DEMO_SOURCE)),
    };

    let start = Instant::now();

    if options.strict {
        match tokenize(&source, Some(file_name)) {
            Ok(tokens) => print_tokens(tokens.iter().filter(|t| !t.is(TokenKind::EOF))),
            Err(error) => {
                eprint!("{}", render_error(&error, &source));
                return ExitCode::FAILURE;
            }
        }
    } else {
        for token in Lexer::new(&source) {
            println!("{}", token);
        }
    }

    info!("Tokenized in {:?}", start.elapsed());

    ExitCode::SUCCESS
}
