use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};


/// Decides where the output goes.
pub trait OutputNamer {

    /// Returns `None` if the user chose not to write anything.
    fn output_path(&mut self) -> io::Result<Option<PathBuf>>;

}


/// A path given on the command line.
pub struct FixedOutput {

    path: PathBuf,
    force: bool

}

impl FixedOutput {

    pub fn new(path: PathBuf, force: bool) -> Self {
        Self {
            path,
            force
        }
    }

}

impl OutputNamer for FixedOutput {

    fn output_path(&mut self) -> io::Result<Option<PathBuf>> {

        if !self.force && self.path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists, use --force to overwrite it", self.path.display())
            ));
        }

        Ok(Some(self.path.clone()))
    }

}


/// Asks for a file name until it gets one, confirming before overwriting.
pub struct InteractiveOutput<R, W, F> {

    input: R,
    output: W,
    exists: F

}

impl<R, W, F> InteractiveOutput<R, W, F>
where
    R: BufRead,
    W: Write,
    F: Fn(&Path) -> bool
{

    pub fn new(input: R, output: W, exists: F) -> Self {
        Self {
            input,
            output,
            exists
        }
    }


    /// `None` on end of input.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {

        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();

        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }

        Ok(Some(answer.trim_end_matches(['\r', '\n']).to_owned()))
    }

}

impl<R, W, F> OutputNamer for InteractiveOutput<R, W, F>
where
    R: BufRead,
    W: Write,
    F: Fn(&Path) -> bool
{

    fn output_path(&mut self) -> io::Result<Option<PathBuf>> {

        loop {

            let Some(name) = self.ask("type a name for the output file name: ")? else {
                return Ok(None);
            };

            if name.is_empty() {
                continue;
            }

            let path = PathBuf::from(&name);

            if !(self.exists)(&path) {
                return Ok(Some(path));
            }

            let Some(choice) = self.ask(&format!("{name} already exists, overwrite? (y/n/q): "))? else {
                return Ok(None);
            };

            match choice.to_lowercase().as_str() {
                "y" => return Ok(Some(path)),
                "q" => return Ok(None),
                _ => continue,
            }
        }
    }

}
