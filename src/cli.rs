use std::path::PathBuf;

use crate::table::TableFormat;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub results_file: PathBuf,
    pub markdown: bool,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut results_file = None;
        let mut markdown = false;
        for arg in args.iter().skip(1) {
            match *arg {
                "--markdown" => markdown = true,
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                path => {
                    if results_file.is_some() {
                        return Err("expected exactly one results file".to_string());
                    }
                    results_file = Some(PathBuf::from(path));
                }
            }
        }
        let results_file =
            results_file.ok_or_else(|| "missing results file argument".to_string())?;
        Ok(Self {
            results_file,
            markdown,
        })
    }

    pub fn format(&self) -> TableFormat {
        if self.markdown {
            TableFormat::Markup
        } else {
            TableFormat::Plain
        }
    }

    pub fn help() -> &'static str {
        "Usage: benchreport RESULTS.json [--markdown]\n"
    }
}
