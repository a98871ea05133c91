
use crate::error::{Result, SynonymError};
use crate::similarity::Metric;

use serde_json::Value;
use std::{fmt::Display, fs::File, io::BufReader};


#[derive(Clone, Debug)]
pub struct JsonTypes {
    pub corpus_files: Vec<String>,
    pub questions_file: String,
    pub output_dir: String,
    pub metrics: Vec<Metric>,
    pub num_threads: usize,
    pub plot: bool
}

impl Display for JsonTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let metrics: Vec<&str> = self.metrics.iter().map(|m| m.as_str()).collect();
        write!(f, "using params:
        corpus_files: {:?}
        questions_file: {}
        output_dir: {}
        metrics: {:?}
        num_threads: {}
        plot: {}",
        self.corpus_files, self.questions_file, self.output_dir, metrics, self.num_threads, self.plot)
    }
}

pub struct Config {
    params: JsonTypes
}

impl Config {

    pub fn get_params(&self) -> JsonTypes {
        self.params.clone()
    }

    /// Expects the program name followed by the path to a json file.
    pub fn new(args: &[String]) -> Result<Config> {

        if args.len() != 2 {
            return Err(SynonymError::Config("input should be a path to json file only".to_string()));
        }

        let f = BufReader::new(File::open(&args[1])?);
        let json: Value = serde_json::from_reader(f)?;
        Config::from_json(&json)
    }

    pub fn from_json(json: &Value) -> Result<Config> {

        // required inputs
        let corpus_files = match json.get("corpus_files") {
            Some(Value::Array(files)) => files
                .iter()
                .map(|file| as_string(file, "corpus_files"))
                .collect::<Result<Vec<String>>>()?,
            Some(_) => return Err(invalid("corpus_files", "an array of paths")),
            None => return Err(missing("corpus_files"))
        };
        if corpus_files.is_empty() {
            return Err(invalid("corpus_files", "at least one path"));
        }

        let questions_file = match json.get("questions_file") {
            Some(file) => as_string(file, "questions_file")?,
            None => return Err(missing("questions_file"))
        };

        // handle default vs input parameters
        let output_dir = match json.get("output_dir") {
            Some(output_dir) => as_string(output_dir, "output_dir")?,
            None => "Output".to_string()
        };
        let metrics = match json.get("metrics") {
            Some(Value::Array(names)) => names
                .iter()
                .map(|name| as_string(name, "metrics")?.parse::<Metric>())
                .collect::<Result<Vec<Metric>>>()?,
            Some(_) => return Err(invalid("metrics", "an array of metric names")),
            None => Metric::ALL.to_vec()
        };
        let num_threads = match json.get("num_threads") {
            Some(num_threads) => match num_threads.as_u64() {
                Some(n) if n > 0 => n as usize,
                _ => return Err(invalid("num_threads", "a positive integer"))
            },
            None => 1
        };
        let plot = match json.get("plot") {
            Some(plot) => plot.as_bool().ok_or_else(|| invalid("plot", "a boolean"))?,
            None => false
        };

        let params = JsonTypes {
            corpus_files,
            questions_file,
            output_dir,
            metrics,
            num_threads,
            plot
        };

        Ok(Self { params })
    }
}

fn as_string(value: &Value, key: &str) -> Result<String> {
    value
        .as_str()
        .map(|s| s.to_owned())
        .ok_or_else(|| invalid(key, "a string"))
}

fn missing(key: &str) -> SynonymError {
    SynonymError::Config(format!("{} was not supplied through json", key))
}

fn invalid(key: &str, expected: &str) -> SynonymError {
    SynonymError::Config(format!("{} should be {}", key, expected))
}


pub mod files_handling {

    use crate::error::{Result, SynonymError};
    use crate::solver::Question;

    use flate2::read::GzDecoder;
    use serde::Serialize;
    use std::fs::{self, File};
    use std::io::{prelude::*, BufReader, BufWriter};
    use std::path::Path;

    pub fn read_input<R: ReadFile>(file_path: &str) -> Result<R> {
        R::read_file(file_path)
    }

    pub fn save_output<S: SaveFile>(output_dir: &str, file_name: &str, item: &S) -> Result<()> {

        // create output folder
        fs::create_dir_all(output_dir)?;
        item.save_file(output_dir, file_name)
    }

    pub trait ReadFile: Sized {
        fn read_file(file_path: &str) -> Result<Self>;
    }

    pub trait SaveFile {
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<()>;
    }

    /// The raw text of one corpus document, gzip files are decompressed.
    #[derive(Clone, Debug)]
    pub struct Document(pub String);

    impl AsRef<str> for Document {
        fn as_ref(&self) -> &str {
            &self.0
        }
    }

    impl ReadFile for Document {
        fn read_file(file_path: &str) -> Result<Self> {

            let mut f = BufReader::new(File::open(file_path)?);
            let mut text = String::new();
            if file_path.ends_with(".gz") {
                GzDecoder::new(f).read_to_string(&mut text)?;
            } else {
                f.read_to_string(&mut text)?;
            }
            Ok(Document(text))
        }
    }

    /// Questions of a question file, blank lines are skipped.
    impl ReadFile for Vec<Question> {
        fn read_file(file_path: &str) -> Result<Self> {

            let f = BufReader::new(File::open(file_path)?);
            let mut questions = Vec::new();
            for (i, line) in f.lines().enumerate() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                questions.push(Question::parse(&line, i + 1)?);
            }
            Ok(questions)
        }
    }

    /// Any serializable item is written as pretty json.
    impl<T: Serialize> SaveFile for T {
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<()> {

            let out = Path::new(output_dir).join(format!("{}.json", file_name));
            let mut f = BufWriter::new(File::create(out)?);
            serde_json::to_writer_pretty(&mut f, self)?;
            f.flush().map_err(SynonymError::from)
        }
    }
}
