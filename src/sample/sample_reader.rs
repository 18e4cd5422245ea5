use std::path::{Path, PathBuf};
use std::fs::File;
use std::io::{BufRead, BufReader};

use super::sample_struct::Sample;
use crate::error::{Result, TreeError};


/// A struct that reads labeled transactions from a file.
/// CSV (`amount,label`) and JSON (`[{"amount": .., "label": ..}]`)
/// are supported; the format is chosen by the file extension.
/// # Example
/// ```no_run
/// use anomaly_tree::SampleReader;
/// let sample = SampleReader::new("/path/to/transactions.csv")
///     .has_header(true)
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: P,
    has_header: bool,
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Construct a new instance of [`SampleReader`].
    pub fn new(file: P) -> Self {
        Self {
            file,
            has_header: false,
        }
    }


    /// Set the flag whether the CSV file has the header row or not.
    /// Default is `false.`
    /// This flag is ignored for JSON files.
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Reads the file based on the arguments.
    /// Files with the `.json` extension are decoded as JSON,
    /// everything else is read as CSV.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Vec<Sample>> {
        let path = self.file.as_ref();
        let file = File::open(path)
            .map_err(|source| io_error(path, source))?;
        let reader = BufReader::new(file);

        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let sample = if is_json {
            serde_json::from_reader::<_, Vec<Sample>>(reader)
                .map_err(|source| TreeError::Json {
                    path: path.to_path_buf(),
                    source,
                })?
        } else {
            read_csv(path, reader, self.has_header)?
        };

        if sample.is_empty() {
            return Err(TreeError::EmptyFile { path: path.to_path_buf() });
        }
        tracing::debug!(
            path = %path.display(),
            n_sample = sample.len(),
            "read transactions"
        );
        Ok(sample)
    }
}


fn read_csv<R: BufRead>(path: &Path, reader: R, has_header: bool)
    -> Result<Vec<Sample>>
{
    let mut sample = Vec::new();
    let mut lines = reader.lines().enumerate();

    if has_header {
        if let Some((_, line)) = lines.next() {
            line.map_err(|source| io_error(path, source))?;
        }
    }

    for (i, line) in lines {
        let line = line.map_err(|source| io_error(path, source))?;
        let line = line.trim();
        if line.is_empty() { continue; }

        let row = parse_row(line)
            .map_err(|message| TreeError::Parse {
                path: path.to_path_buf(),
                line: i + 1,
                message,
            })?;
        sample.push(row);
    }
    Ok(sample)
}


fn parse_row(line: &str) -> std::result::Result<Sample, String> {
    let mut cols = line.split(',').map(str::trim);
    let (amount, label) = match (cols.next(), cols.next(), cols.next()) {
        (Some(amount), Some(label), None) => (amount, label),
        _ => {
            return Err(format!("expected `amount,label`, got `{line}`"));
        },
    };

    let amount = amount.parse::<f64>()
        .map_err(|e| format!("invalid amount `{amount}`: {e}"))?;
    let label = parse_label(label)
        .ok_or_else(|| format!("invalid label `{label}`"))?;

    Ok(Sample::new(amount, label))
}


fn parse_label(label: &str) -> Option<bool> {
    match label.to_ascii_lowercase().as_str() {
        "true" | "1" | "anomaly" => Some(true),
        "false" | "0" | "normal" => Some(false),
        _ => None,
    }
}


fn io_error(path: &Path, source: std::io::Error) -> TreeError {
    TreeError::Io { path: PathBuf::from(path), source }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_row_accepts_label_spellings() {
        assert_eq!(parse_row("50, false"), Ok(Sample::normal(50.0)));
        assert_eq!(parse_row("1000,1"), Ok(Sample::anomaly(1000.0)));
        assert_eq!(parse_row("12.5,Anomaly"), Ok(Sample::anomaly(12.5)));
        assert_eq!(parse_row("7,NORMAL"), Ok(Sample::normal(7.0)));
    }

    #[test]
    fn parse_row_rejects_malformed_rows() {
        assert!(parse_row("50").is_err());
        assert!(parse_row("50,true,extra").is_err());
        assert!(parse_row("fifty,true").is_err());
        assert!(parse_row("50,maybe").is_err());
    }

    #[test]
    fn csv_reports_line_numbers() {
        let data = "amount,label\n50,false\n\nabc,true\n";
        let err = read_csv(Path::new("mem.csv"), data.as_bytes(), true)
            .unwrap_err();
        match err {
            TreeError::Parse { line, .. } => assert_eq!(line, 4),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn csv_skips_blank_lines() {
        let data = "50,false\n\n1000,true\n";
        let sample = read_csv(Path::new("mem.csv"), data.as_bytes(), false)
            .unwrap();
        assert_eq!(sample, vec![Sample::normal(50.0), Sample::anomaly(1000.0)]);
    }
}
