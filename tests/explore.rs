use nfa_paths::prelude::*;

const MACHINE: &str = "M1\nq0,q1,q2\na,b\nq0\nq2\nq0,a,q1\nq1,b,q2\nq1,~,q2\n";

#[test]
fn load_simulate_and_persist() {
    let dir = tempfile::tempdir().unwrap();
    let definition = dir.path().join("machine.csv");
    std::fs::write(&definition, MACHINE).unwrap();

    let nfa = load_definition(&definition).unwrap();
    assert_eq!(nfa.name(), "M1");
    assert_eq!(nfa.size(), 3);

    let input = Input::parse("ab");
    let result = nfa.simulate(&input);
    assert_eq!(result.total_paths, 1);
    assert_eq!(result.accepting_paths, 1);
    assert_eq!(result.named_sequences(&nfa), vec![vec!["q0", "q1", "q2"]]);

    let source = definition.to_str().unwrap();
    let report = Report::new(source, &nfa, &input, &result);
    let written = report.write_default().unwrap();
    assert_eq!(written, dir.path().join("machine-ab-output.csv"));
    assert_eq!(
        std::fs::read_to_string(&written).unwrap(),
        format!(
            "input_file,NFA_name,input_string,possible_paths,accept_paths\n\
             {source},M1,ab,1,1\n\
             q0,q1,q2\n"
        )
    );
}

#[test]
fn empty_word_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let definition = dir.path().join("machine.csv");
    // the initial state is accepting, so the empty-word token is accepted immediately
    std::fs::write(&definition, "M2\nq0,q1\na\nq0\nq0\nq0,a,q1\n").unwrap();

    let nfa = load_definition(&definition).unwrap();
    let input = Input::parse("~");
    let result = nfa.simulate(&input);
    assert_eq!(result.total_paths, 1);
    assert_eq!(result.accepting_paths, 1);
    assert_eq!(result.named_sequences(&nfa), vec![vec!["q0"]]);

    let source = definition.to_str().unwrap();
    let report = Report::new(source, &nfa, &input, &result);
    let written = report.write_default().unwrap();
    assert_eq!(written, dir.path().join("machine-~-output.csv"));
    assert_eq!(
        std::fs::read_to_string(&written).unwrap(),
        format!(
            "input_file,NFA_name,input_string,possible_paths,accept_paths\n\
             {source},M2,~,1,1\n\
             q0\n"
        )
    );
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_definition(dir.path().join("absent.csv")),
        Err(DefinitionError::Io(_))
    ));
}
