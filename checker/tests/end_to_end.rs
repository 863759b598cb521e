use std::fs;
use std::path::Path;

use checker::CheckingJob;
use checker::error::CheckerError;
use checker::types::{Checker, Verdict};
use tempfile::TempDir;
use util::error::UtilError;
use util::problem_handler::ProblemHandler;

fn write(dir: &Path, file: &str, contents: &str) {
    fs::write(dir.join(file), contents).unwrap();
}

struct Problem {
    testcases: TempDir,
    outputs: TempDir,
    handler: ProblemHandler,
}

impl Problem {
    fn new(handler_json: &str) -> Self {
        let testcases = TempDir::new().unwrap();
        write(testcases.path(), "handler.json", handler_json);
        let handler = ProblemHandler::load(testcases.path().join("handler.json")).unwrap();
        Self {
            testcases,
            outputs: TempDir::new().unwrap(),
            handler,
        }
    }

    fn testcase(&self, name: &str, expected: &str) -> &Self {
        write(self.testcases.path(), &format!("{name}.inp"), "");
        write(self.testcases.path(), &format!("{name}.cor"), expected);
        self
    }

    fn output(&self, name: &str, actual: &str) -> &Self {
        write(self.outputs.path(), &format!("{name}.out"), actual);
        self
    }

    fn job(&self) -> CheckingJob {
        CheckingJob::from_directories(
            Some(&self.handler),
            self.testcases.path(),
            self.outputs.path(),
        )
        .unwrap()
    }
}

#[tokio::test]
async fn elastic_problem_accepts_reordered_lines() {
    let problem = Problem::new(r#"{"handler": "std", "checker": "elastic", "separator": "\n"}"#);
    problem
        .testcase("sample-1", "1\n2\n3\n")
        .output("sample-1", "3\n1\n2\n");

    let report = problem.job().run().await.unwrap();
    assert_eq!(report.checker, Checker::Elastic);
    assert_eq!(report.testcases[0].verdict, Verdict::Passed);
    assert!(report.all_passed());
}

#[tokio::test]
async fn elastic2_problem_sorts_tokens_inside_braces() {
    let problem = Problem::new(
        r#"{"checker": "elastic2", "separator1": "\n", "separator2": ",", "starting": "{", "ending": "}"}"#,
    );
    problem
        .testcase("sample-1", "{c,a,b}\n")
        .output("sample-1", "{a,b,c}\n")
        .testcase("sample-2", "[a,b,c]\n")
        .output("sample-2", "{a,b,c}\n");

    let report = problem.job().run().await.unwrap();
    let verdicts: Vec<Verdict> = report.testcases.iter().map(|t| t.verdict).collect();
    assert_eq!(verdicts, vec![Verdict::Passed, Verdict::Failed]);
    assert_eq!(report.summary(), "1/2");
}

#[tokio::test]
async fn missing_output_is_reported_failed() {
    let problem = Problem::new(r#"{"handler": "std"}"#);
    problem
        .testcase("sample-1", "hello\n")
        .output("sample-1", "hello\n")
        .testcase("sample-2", "world\n");

    let report = problem.job().run().await.unwrap();
    assert_eq!(report.checker, Checker::Std);
    assert_eq!(report.testcases[0].name, "sample-1");
    assert_eq!(report.testcases[0].verdict, Verdict::Passed);
    assert_eq!(report.testcases[1].name, "sample-2");
    assert_eq!(report.testcases[1].verdict, Verdict::Failed);
}

#[tokio::test]
async fn elastic_without_separator_fails_closed() {
    let problem = Problem::new(r#"{"checker": "elastic"}"#);
    problem
        .testcase("sample-1", "1\n2\n")
        .output("sample-1", "2\n1\n");

    let report = problem.job().run().await.unwrap();
    assert_eq!(report.failed, 1);
}

#[tokio::test]
async fn unrecognised_checker_is_reported_as_unk() {
    let problem = Problem::new(r#"{"checker": "graphic-diff", "separator": "\n"}"#);
    problem
        .testcase("sample-1", "1\n2\n")
        .output("sample-1", "2\n1\n");

    let report = problem.job().run().await.unwrap();
    assert_eq!(report.checker, Checker::Unk);
    assert!(!report.implemented);
    assert_eq!(report.testcases[0].verdict, Verdict::Failed);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["checker"], "unk");
    assert_eq!(json["testcases"][0]["verdict"], "FAILED");
}

#[tokio::test]
async fn undecodable_output_fails_without_dropping_the_batch() {
    let problem = Problem::new(r#"{"handler": "std"}"#);
    problem
        .testcase("a", "ok\n")
        .output("a", "ok\n")
        .testcase("b", "ok\n");
    fs::write(problem.outputs.path().join("b.out"), [0xff, 0xfe, b'\n']).unwrap();

    let report = problem.job().run().await.unwrap();
    let verdicts: Vec<(&str, Verdict)> = report
        .testcases
        .iter()
        .map(|t| (t.name.as_str(), t.verdict))
        .collect();
    assert_eq!(verdicts, vec![("a", Verdict::Passed), ("b", Verdict::Failed)]);
}

#[test]
fn missing_outputs_directory_is_an_error() {
    let problem = Problem::new(r#"{"handler": "std"}"#);
    problem.testcase("sample-1", "1\n");
    let missing = problem.outputs.path().join("not-there");

    let err = CheckingJob::from_directories(Some(&problem.handler), problem.testcases.path(), &missing)
        .unwrap_err();
    assert!(matches!(
        err,
        CheckerError::Problem(UtilError::MissingDirectory(path)) if path == missing
    ));
}

#[test]
fn missing_testcase_directory_is_an_error() {
    let outputs = TempDir::new().unwrap();
    let missing = outputs.path().join("does-not-exist");
    let err = CheckingJob::from_directories(None, &missing, outputs.path()).unwrap_err();
    assert!(matches!(
        err,
        CheckerError::Problem(UtilError::MissingDirectory(_))
    ));
}

#[test]
fn graphic_handler_is_not_checked_locally() {
    let handler = ProblemHandler::from_json_str(r#"{"handler": "graphic"}"#).unwrap();
    assert!(!handler.supports_local_testcases());
}
