use {
    puzzles::Task,
    rstest::rstest,
    rstest_reuse::{apply, template},
    std::{
        io::Write,
        path::{Path, PathBuf},
        process::{Command, Stdio},
    },
};

#[template]
#[rstest]
fn cases(#[files("task_cases/*/*.in")] path: PathBuf) {}

#[apply(cases)]
fn execute_in_process(path: PathBuf) {
    let case = TaskCase::from(path);
    let mut output = Vec::new();
    case.task
        .execute(&mut case.input.as_bytes(), &mut output)
        .unwrap();
    assert_eq!(
        normalize_output(&String::from_utf8(output).unwrap()),
        case.expected_output
    );
}

#[apply(cases)]
fn execute_dedicated_binary(path: PathBuf) {
    let case = TaskCase::from(path);
    let binary = match case.task {
        Task::TaxiFare => env!("CARGO_BIN_EXE_taxi_fare"),
        Task::LeapYear => env!("CARGO_BIN_EXE_leap_year"),
        Task::ReverseDigits => env!("CARGO_BIN_EXE_reverse_digits"),
    };
    let output = run_binary(Command::new(binary), &case.input);
    assert_eq!(output, case.expected_output);
}

#[apply(cases)]
fn execute_subcommand(path: PathBuf) {
    let case = TaskCase::from(path);
    let mut command = Command::new(env!("CARGO_BIN_EXE_numeric_puzzles"));
    command.arg(case.task.to_string().replace('_', "-"));
    let output = run_binary(command, &case.input);
    assert_eq!(output, case.expected_output);
}

#[test]
fn debug_logging_stays_off_stdout() {
    let mut command = Command::new(env!("CARGO_BIN_EXE_leap_year"));
    command.arg("--debug");
    assert_eq!(run_binary(command, "2024\n"), "YES");
}

struct TaskCase {
    task: Task,
    input: String,
    expected_output: String,
}

impl From<PathBuf> for TaskCase {
    fn from(mut path: PathBuf) -> Self {
        let task = task_name(&path).parse().unwrap();
        let input = std::fs::read_to_string(&path).unwrap();

        path.set_extension("out");
        let expected_output = std::fs::read_to_string(&path).unwrap_or_else(|e| {
            panic!("failed to read expected output file at path {path:?}: {e}")
        });

        TaskCase {
            task,
            input,
            expected_output: normalize_output(&expected_output),
        }
    }
}

fn task_name(path: &Path) -> &str {
    path.parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .unwrap()
}

/// Drops trailing whitespace on each line and surrounding blank lines.
fn normalize_output(output: &str) -> String {
    output
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_owned()
}

/// Feeds `input` to the program and returns its normalized stdout, asserting
/// that it exited with status 0.
fn run_binary(mut command: Command, input: &str) -> String {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(0), "{command:?} failed");
    normalize_output(&String::from_utf8(output.stdout).unwrap())
}
