use anomaly_tree::{
    Classifier,
    DecisionTree,
    Sample,
    SampleReader,
    toy_transactions,
};
use colored::Colorize;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "[USAGE] anomaly-tree [--train <csv|json file>] [amount]";


/// Command line options.
#[derive(Debug, Default, PartialEq)]
struct Options {
    /// Training file; the toy transactions are used when absent.
    train: Option<PathBuf>,
    /// Amount to classify; read from stdin when absent.
    amount: Option<f64>,
    /// Print the usage and exit.
    help: bool,
}


impl Options {
    fn parse<I>(args: I) -> Result<Self, String>
        where I: IntoIterator<Item = String>
    {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--train" | "-t" => {
                    let path = args.next()
                        .ok_or_else(|| format!("`{arg}` expects a file"))?;
                    options.train = Some(PathBuf::from(path));
                },
                "--help" | "-h" => {
                    options.help = true;
                    return Ok(options);
                },
                _ if options.amount.is_none() => {
                    options.amount = Some(parse_amount(&arg)?);
                },
                _ => return Err(format!("unexpected argument `{arg}`")),
            }
        }
        Ok(options)
    }
}


fn parse_amount(text: &str) -> Result<f64, String> {
    text.trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid amount `{}`: {e}", text.trim()))
}


fn read_amount() -> Result<f64, String> {
    print!("Enter transaction amount: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    io::stdin().lock()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;
    parse_amount(&line)
}


fn run(options: Options) -> Result<(), String> {
    let mut sample: Vec<Sample> = match options.train {
        Some(path) => SampleReader::new(path)
            .has_header(true)
            .read()
            .map_err(|e| e.to_string())?,
        None => toy_transactions(),
    };

    println!(
        "Training decision tree with {} transactions...",
        sample.len()
    );
    let tree = DecisionTree::new()
        .build(&mut sample)
        .map_err(|e| e.to_string())?;
    println!("{}\n", "Training completed!".bold());

    let amount = match options.amount {
        Some(amount) => amount,
        None => read_amount()?,
    };

    let prediction = if tree.classify(amount) {
        "Anomaly (Potential Fraud)".red().bold()
    } else {
        "Normal Transaction".green().bold()
    };
    println!("Prediction: {prediction}");
    Ok(())
}


fn main() -> ExitCode {
    anomaly_tree::logging::init();

    let result = Options::parse(std::env::args().skip(1))
        .and_then(|options| {
            if options.help {
                println!("{USAGE}");
                Ok(())
            } else {
                run(options)
            }
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{} {message}", "error:".red().bold());
            ExitCode::FAILURE
        },
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn args(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn parse_options() {
        assert_eq!(Options::parse(args(&[])), Ok(Options::default()));

        let options = Options::parse(args(&["--train", "tx.csv", "42.5"]))
            .unwrap();
        assert_eq!(options.train, Some(PathBuf::from("tx.csv")));
        assert_eq!(options.amount, Some(42.5));
    }

    #[test]
    fn help_is_not_an_error() {
        for flag in ["--help", "-h"] {
            let options = Options::parse(args(&[flag])).unwrap();
            assert!(options.help);
        }
        // Later arguments are ignored once help is requested.
        let options = Options::parse(args(&["1", "-h", "garbage"])).unwrap();
        assert!(options.help);
        assert!(!Options::parse(args(&["1"])).unwrap().help);
    }

    #[test]
    fn parse_options_rejects_garbage() {
        assert!(Options::parse(args(&["--train"])).is_err());
        assert!(Options::parse(args(&["abc"])).is_err());
        assert!(Options::parse(args(&["1", "2"])).is_err());
    }
}
