mod prompt;

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use huffer::{HufferError, Result};

use prompt::{FixedOutput, InteractiveOutput, OutputNamer};


/// A Huffman encoder/decoder
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {

    /// The operation mode of the program
    #[arg(value_enum)]
    mode: Mode,

    /// If FILE is - or no file is specified read standard input
    file: Option<PathBuf>,

    /// Write to this file instead of asking for a name
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite the --output file if it exists
    #[arg(short, long, requires = "output")]
    force: bool,

    /// Print the original and compressed sizes
    #[arg(short, long)]
    stats: bool,

    /// More logging, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

}


#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {

    /// Compress text
    #[value(alias = "e")]
    Encode,

    /// Decompress a file produced by encode
    #[value(alias = "d")]
    Decode,

}


fn init_logging(verbose: u8) {

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}


fn is_stdin(path: Option<&Path>) -> bool {
    path.map_or(true, |path| path == Path::new("-"))
}


fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {

    let mut data = Vec::new();

    match path {

        Some(path) if path != Path::new("-") => {

            if !path.exists() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("No such file or directory: {}", path.display())
                ).into());
            }

            if !path.is_file() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{}: is not a file", path.display())
                ).into());
            }

            data = fs::read(path)?;
        },

        _ => {
            io::stdin().lock().read_to_end(&mut data)?;
        },
    }

    log::info!("Read {} bytes of input", data.len());

    Ok(data)
}


fn write_output(path: &Path, data: &[u8]) -> Result<()> {

    let mut writer = BufWriter::new(File::create(path)?);

    writer.write_all(data)?;
    writer.flush()?;

    log::info!("Wrote {} bytes to {}", data.len(), path.display());

    Ok(())
}


fn stats_report(original: usize, compressed: usize) -> String {
    format!(
        "Original size: {} bytes\nCompressed size: {} bytes\nCompression ratio: {}%",
        original,
        compressed,
        (compressed as f64 / original.max(1) as f64 * 100.0) as i32
    )
}


fn run(args: &Args) -> Result<()> {

    let input = read_input(args.file.as_deref())?;

    let output = match args.mode {

        Mode::Encode => {
            let text = std::str::from_utf8(&input)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
            huffer::encode(text)?
        },

        Mode::Decode => huffer::decode(&input)?.into_bytes(),
    };

    if args.stats {
        let (original, compressed) = match args.mode {
            Mode::Encode => (input.len(), output.len()),
            Mode::Decode => (output.len(), input.len()),
        };
        println!("{}", stats_report(original, compressed));
    }

    let mut namer: Box<dyn OutputNamer> = match &args.output {

        Some(path) => Box::new(FixedOutput::new(path.clone(), args.force)),

        None if is_stdin(args.file.as_deref()) => {
            // Standard input is already consumed, ask on the terminal instead
            let tty = File::open(if cfg!(windows) { "CONIN$" } else { "/dev/tty" })?;
            Box::new(InteractiveOutput::new(io::BufReader::new(tty), io::stdout(), |path: &Path| path.exists()))
        },

        None => Box::new(InteractiveOutput::new(io::stdin().lock(), io::stdout(), |path: &Path| path.exists())),
    };

    let Some(path) = namer.output_path()? else {
        log::info!("No output file chosen, nothing written");
        return Ok(());
    };

    write_output(&path, &output)
}


fn main() -> ExitCode {

    let args = Args::parse();

    init_logging(args.verbose);

    match run(&args) {

        Ok(()) => ExitCode::SUCCESS,

        Err(err) => {

            match &err {
                HufferError::Io(io_err) => eprintln!("{io_err}"),
                other => eprintln!("huffer: {other}"),
            }

            ExitCode::FAILURE
        },
    }
}


#[cfg(test)]
mod tests {

    use std::env;

    use super::*;


    /// A path under the system temp directory that no other test uses.
    fn scratch_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("huffer-{}-{name}", std::process::id()))
    }


    fn io_error(result: Result<Vec<u8>>) -> io::Error {
        match result {
            Err(HufferError::Io(err)) => err,
            other => panic!("Expected an I/O error, got {:?}", other.map(|data| data.len())),
        }
    }


    #[test]
    fn check_missing_input() {

        let path = Path::new("test_data/does_not_exist.txt");

        let err = io_error(read_input(Some(path)));

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(err.to_string(), "No such file or directory: test_data/does_not_exist.txt");
    }


    #[test]
    fn check_directory_input() {

        let err = io_error(read_input(Some(Path::new("src"))));

        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "src: is not a file");
    }


    #[test]
    fn check_file_input() {

        let data = read_input(Some(Path::new("test_data/lorem.txt"))).unwrap();

        assert_eq!(data, fs::read("test_data/lorem.txt").unwrap());
    }


    #[test]
    fn check_stdin_selection() {
        assert!(is_stdin(None));
        assert!(is_stdin(Some(Path::new("-"))));
        assert!(!is_stdin(Some(Path::new("input.txt"))));
    }


    #[test]
    fn check_write_output() {

        let path = scratch_path("write_output.huf");

        write_output(&path, b"first, longer contents").unwrap();
        write_output(&path, b"second").unwrap();

        // The file is truncated, not appended to
        assert_eq!(fs::read(&path).unwrap(), b"second");

        fs::remove_file(&path).unwrap();
    }


    #[test]
    fn check_stats_report() {

        assert_eq!(
            stats_report(200, 50),
            "Original size: 200 bytes\nCompressed size: 50 bytes\nCompression ratio: 25%"
        );

        // Empty input does not divide by zero
        assert!(stats_report(0, 4).ends_with("Compression ratio: 400%"));
    }


    #[test]
    fn check_mode_aliases() {

        let args = Args::try_parse_from(["huffer", "e", "input.txt", "-o", "out.huf", "-f", "-s", "-vv"]).unwrap();

        assert_eq!(args.mode, Mode::Encode);
        assert_eq!(args.file, Some(PathBuf::from("input.txt")));
        assert_eq!(args.output, Some(PathBuf::from("out.huf")));
        assert!(args.force && args.stats);
        assert_eq!(args.verbose, 2);

        assert_eq!(Args::try_parse_from(["huffer", "d"]).unwrap().mode, Mode::Decode);
        assert!(Args::try_parse_from(["huffer", "x"]).is_err());

        // --force only makes sense together with --output
        assert!(Args::try_parse_from(["huffer", "encode", "-f"]).is_err());
    }


    #[test]
    fn check_run_round_trip() {

        let compressed = scratch_path("run.huf");
        let restored = scratch_path("run.txt");

        let encode = Args::try_parse_from([
            "huffer", "encode", "test_data/unicode.txt", "--output", compressed.to_str().unwrap()
        ]).unwrap();
        run(&encode).unwrap();

        let decode = Args::try_parse_from([
            "huffer", "decode", compressed.to_str().unwrap(), "--output", restored.to_str().unwrap(), "--force"
        ]).unwrap();
        run(&decode).unwrap();

        assert_eq!(fs::read(&restored).unwrap(), fs::read("test_data/unicode.txt").unwrap());

        // Refuses to overwrite without --force
        assert!(matches!(run(&encode), Err(HufferError::Io(err)) if err.kind() == io::ErrorKind::AlreadyExists));

        fs::remove_file(&compressed).unwrap();
        fs::remove_file(&restored).unwrap();
    }


    #[test]
    fn check_run_rejects_missing_input() {

        let args = Args::try_parse_from(["huffer", "encode", "test_data/does_not_exist.txt", "-o", "unused.huf"]).unwrap();

        assert!(matches!(run(&args), Err(HufferError::Io(err)) if err.kind() == io::ErrorKind::NotFound));
        assert!(!Path::new("unused.huf").exists());
    }

}
