use std::path::{Path, PathBuf};

use itertools::Itertools;
use tracing::info;

use crate::nfa::Nfa;
use crate::run::SimulationResult;
use crate::word::Input;

/// Header of the summary record, matching the layout consumers of the output files expect.
const CSV_HEADER: &str = "input_file,NFA_name,input_string,possible_paths,accept_paths";

/// Renders one simulation outcome for persistence and display. A report borrows everything it
/// describes: the definition file label, the automaton, the sealed input and the result.
pub struct Report<'a> {
    source: &'a str,
    nfa: &'a Nfa,
    input: &'a Input,
    result: &'a SimulationResult,
}

impl<'a> Report<'a> {
    /// Creates a report for the given simulation outcome. `source` is the definition file the
    /// automaton was loaded from; it is carried verbatim into the summary record.
    pub fn new(source: &'a str, nfa: &'a Nfa, input: &'a Input, result: &'a SimulationResult) -> Self {
        Self {
            source,
            nfa,
            input,
            result,
        }
    }

    /// The CSV rendition: a header row, one summary row and one row per accepting run holding
    /// its visited-state sequence.
    pub fn csv(&self) -> String {
        let mut out = format!(
            "{CSV_HEADER}\n{},{},{},{},{}\n",
            self.source,
            self.nfa.name(),
            self.input.text(),
            self.result.total_paths,
            self.result.accepting_paths,
        );
        for sequence in self.result.named_sequences(self.nfa) {
            out.push_str(&sequence.iter().join(","));
            out.push('\n');
        }
        out
    }

    /// Where [`write_default`](Report::write_default) puts the CSV: next to the definition file,
    /// named `<definition stem>-<input>-output.csv`.
    pub fn output_path(&self) -> PathBuf {
        let source = Path::new(self.source);
        let stem = source
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.to_string());
        let name = format!("{stem}-{}-output.csv", self.input.text());
        match source.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(name),
            _ => PathBuf::from(name),
        }
    }

    /// Writes the CSV rendition to the given path.
    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.csv())?;
        info!("wrote simulation results to {}", path.display());
        Ok(())
    }

    /// Writes the CSV rendition to [`output_path`](Report::output_path) and returns that path.
    pub fn write_default(&self) -> std::io::Result<PathBuf> {
        let path = self.output_path();
        self.write_to(&path)?;
        Ok(path)
    }

    /// A terminal-friendly table of the summary row followed by the accepting runs.
    pub fn table(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(CSV_HEADER.split(','));
        builder.push_record([
            self.source.to_string(),
            self.nfa.name().to_string(),
            self.input.text().to_string(),
            self.result.total_paths.to_string(),
            self.result.accepting_paths.to_string(),
        ]);
        let mut table = builder.build();
        let summary = table.with(tabled::settings::Style::rounded()).to_string();

        if self.result.accept_sequences.is_empty() {
            return summary;
        }

        let mut runs = tabled::builder::Builder::default();
        runs.push_record(["accepting runs"]);
        for sequence in self.result.named_sequences(self.nfa) {
            runs.push_record([sequence.iter().join(",")]);
        }
        let mut runs = runs.build();
        format!(
            "{summary}\n{}",
            runs.with(tabled::settings::Style::rounded())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfa::NfaBuilder;

    fn reported() -> (Nfa, Input, SimulationResult) {
        let nfa = NfaBuilder::default()
            .named("M1")
            .with_states(["q0", "q1"])
            .with_symbols(['a'])
            .with_initial("q0")
            .with_accepting(["q1"])
            .with_transitions([("q0", 'a', "q1")])
            .build()
            .unwrap();
        let input = Input::literal("a");
        let result = nfa.simulate(&input);
        (nfa, input, result)
    }

    #[test]
    fn csv_shape() {
        let (nfa, input, result) = reported();
        let report = Report::new("machine.csv", &nfa, &input, &result);
        assert_eq!(
            report.csv(),
            "input_file,NFA_name,input_string,possible_paths,accept_paths\n\
             machine.csv,M1,a,1,1\n\
             q0,q1\n"
        );
    }

    #[test]
    fn output_path_is_derived_from_stem_and_input() {
        let (nfa, input, result) = reported();
        assert_eq!(
            Report::new("machine.csv", &nfa, &input, &result).output_path(),
            PathBuf::from("machine-a-output.csv")
        );
        assert_eq!(
            Report::new("defs/machine.csv", &nfa, &input, &result).output_path(),
            PathBuf::from("defs/machine-a-output.csv")
        );
    }

    #[test]
    fn table_holds_summary_and_runs() {
        let (nfa, input, result) = reported();
        let table = Report::new("machine.csv", &nfa, &input, &result).table();
        assert!(table.contains("M1"));
        assert!(table.contains("accepting runs"));
        assert!(table.contains("q0,q1"));
    }
}
