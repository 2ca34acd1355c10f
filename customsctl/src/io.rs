use clap::Args;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdin, stdout},
    path::PathBuf,
    str::FromStr,
};

/// Where the rendered document goes.
#[derive(Args)]
pub struct OutputArgs {
    /// The output file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
    output: PathOrStd,
}

impl OutputArgs {
    /// Write a finished document. The output is only opened (and a file
    /// truncated) here.
    pub fn emit(&self, document: &str) -> anyhow::Result<()> {
        let mut sink = self.write()?;
        sink.write_all(document.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        match &self.output {
            PathOrStd::Path(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            PathOrStd::Std => Ok(Box::new(stdout().lock())),
        }
    }
}

/// A file argument where "-" stands for the standard stream.
#[derive(Clone, Debug, PartialEq)]
pub enum PathOrStd {
    Path(PathBuf),
    Std,
}

impl PathOrStd {
    pub fn read(&self) -> anyhow::Result<Box<dyn Read>> {
        match self {
            PathOrStd::Path(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            PathOrStd::Std => Ok(Box::new(stdin().lock())),
        }
    }
}

impl FromStr for PathOrStd {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}
