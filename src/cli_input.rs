/// Parsing and printing from and to cli.
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::errors::*;

/// Asks the user for a line of text.
pub trait Prompt {
    fn prompt(&mut self, label: &str) -> Result<String>;
}

/// Prompts on stdout and reads the answer from stdin.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn prompt(&mut self, label: &str) -> Result<String> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        ask(&mut stdin.lock(), &mut stdout, label)
    }
}

/// Answers prompts from a reader, echoing the labels to a writer.
#[derive(Debug)]
pub struct ReaderPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ReaderPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompt for ReaderPrompt<R, W> {
    fn prompt(&mut self, label: &str) -> Result<String> {
        ask(&mut self.input, &mut self.output, label)
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{}: ", label)?;
    output.flush()?;
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .wrap_err("Failed to read line from stdin")?;
    if read == 0 {
        return Err(UsageError::Aborted.into());
    }
    log::trace!("{} -> {:?}", label, line.trim());
    Ok(line.trim().to_string())
}

/// Keeps asking until the answer is not blank.
pub fn prompt_non_empty<P: Prompt + ?Sized>(prompt: &mut P, label: &str) -> Result<String> {
    loop {
        let answer = prompt.prompt(label)?;
        if !answer.is_empty() {
            break Ok(answer);
        }
        log::warn!("{} must not be empty", label);
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl FromStr for YesNo {
    type Err = color_eyre::eyre::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let lower = input.trim().to_lowercase();
        match lower.as_str() {
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" => Ok(Self::No),
            e => Err(eyre!("Failed to parse {} into 'yes' or 'no'", e)),
        }
    }
}

impl YesNo {
    pub fn wait_for_decision<P: Prompt + ?Sized>(prompt: &mut P, question: &str) -> Result<Self> {
        let label = format!("{} [y/n]", question);
        let yes = loop {
            let input = prompt.prompt(&label)?;
            if let Ok(yn) = YesNo::from_str(&input) {
                log::trace!("Parsed {:?}", yn);
                break yn;
            }
        };
        Ok(yes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(input: &str) -> ReaderPrompt<&[u8], Vec<u8>> {
        ReaderPrompt::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn prompt_trims_answer() {
        let mut prompt = scripted("  DUM-1 \n");
        assert_eq!(prompt.prompt("Enter the issue key").unwrap(), "DUM-1");
        let shown = String::from_utf8(prompt.into_output()).unwrap();
        assert_eq!(shown, "Enter the issue key: ");
    }

    #[test]
    fn closed_input_aborts() {
        let mut prompt = scripted("");
        let err = prompt.prompt("anything").unwrap_err();
        assert_eq!(err.downcast_ref::<UsageError>(), Some(&UsageError::Aborted));
    }

    #[test]
    fn non_empty_asks_again() {
        let mut prompt = scripted("\n   \nDUM-7\n");
        assert_eq!(prompt_non_empty(&mut prompt, "key").unwrap(), "DUM-7");
        let shown = String::from_utf8(prompt.into_output()).unwrap();
        assert_eq!(shown.matches("key: ").count(), 3);
    }

    #[test]
    fn yes_no_parsing() {
        assert_eq!(YesNo::from_str(" Y\n").unwrap(), YesNo::Yes);
        assert_eq!(YesNo::from_str("no").unwrap(), YesNo::No);
        assert!(YesNo::from_str("maybe").is_err());
    }

    #[test]
    fn decision_skips_garbage() {
        let mut prompt = scripted("perhaps\nn\n");
        assert_eq!(
            YesNo::wait_for_decision(&mut prompt, "Overwrite?").unwrap(),
            YesNo::No
        );
    }
}
