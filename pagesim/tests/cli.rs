//! Tests for the `pagesim` binary.

use {
	pagesim::{data::Data, PolicyKind},
	std::{fs, path::Path, process::Command},
	tempfile::TempDir,
};

/// Creates a temporary directory with the trace `1 2 3 4 1 2 5 1 2 3 4 5`
fn create_trace_dir() -> TempDir {
	let dir = tempfile::tempdir().expect("Unable to create temporary directory");
	fs::write(dir.path().join("input.trace"), "1 2 3 4\n1 2 5 1\n2 3 4 5\n").expect("Unable to write trace");
	dir
}

/// Runs `pagesim` with `args`, returning its exit code
fn run(args: &[&str]) -> Option<i32> {
	Command::new(env!("CARGO_BIN_EXE_pagesim"))
		.args(args)
		.env("RUST_LOG", "warn")
		.output()
		.expect("Unable to run pagesim")
		.status
		.code()
}

fn path_str(path: &Path) -> &str {
	path.to_str().expect("Temporary path should be utf-8")
}

#[test]
fn usage_errors_exit_with_1() {
	let dir = create_trace_dir();
	let input = dir.path().join("input.trace");
	let output = dir.path().join("report.txt");
	let (input, output) = (path_str(&input), path_str(&output));

	assert_eq!(run(&[]), Some(1));
	assert_eq!(run(&["3", input]), Some(1));
	assert_eq!(run(&["3", input, output, "extra"]), Some(1));
	assert_eq!(run(&["0", input, output]), Some(1));
	assert_eq!(run(&["abc", input, output]), Some(1));
	assert!(!Path::new(output).exists());
}

#[test]
fn help_exits_with_0() {
	assert_eq!(run(&["--help"]), Some(0));
}

#[test]
fn writes_report_and_data() {
	let dir = create_trace_dir();
	let input = dir.path().join("input.trace");
	let output = dir.path().join("report.txt");
	let data_output = dir.path().join("data.json");

	let data_output_arg = format!("--data-output={}", path_str(&data_output));
	assert_eq!(
		run(&["3", path_str(&input), path_str(&output), &data_output_arg]),
		Some(0)
	);

	let report = fs::read_to_string(&output).expect("Report should be written");
	for policy in PolicyKind::ALL {
		assert!(
			report.lines().any(|line| line.starts_with(policy.name())),
			"Missing {policy}:\n{report}"
		);
	}

	let data = fs::read(&data_output).expect("Data should be written");
	let data = serde_json::from_slice::<Data>(&data).expect("Data should parse");
	assert_eq!(data.trace_len, 12);
	assert_eq!(data.distinct_pages, 5);
	let faults = |policy| data.policy(policy).map(|data| data.faults);
	assert_eq!(faults(PolicyKind::Fifo), Some(9));
	assert_eq!(faults(PolicyKind::Lru), Some(10));
	assert_eq!(faults(PolicyKind::Lfu), Some(10));
	assert_eq!(faults(PolicyKind::Optimal), Some(7));
}

#[test]
fn policy_flag_overrides_config() {
	let dir = create_trace_dir();
	let input = dir.path().join("input.trace");
	let output = dir.path().join("report.txt");
	let config = dir.path().join("config.json");
	fs::write(&config, r#"{ "policies": ["fifo", "optimal"] }"#).expect("Unable to write config");

	let config_arg = format!("--config={}", path_str(&config));
	assert_eq!(
		run(&["4", path_str(&input), path_str(&output), &config_arg, "--policy", "lru"]),
		Some(0)
	);

	let report = fs::read_to_string(&output).expect("Report should be written");
	let rows = report.lines().skip(6).collect::<Vec<_>>();
	assert_eq!(rows, ["LRU         8                   0.6667"]);
}

#[test]
fn config_selects_policies() {
	let dir = create_trace_dir();
	let input = dir.path().join("input.trace");
	let output = dir.path().join("report.txt");
	let config = dir.path().join("config.json");
	fs::write(&config, r#"{ "policies": ["optimal", "fifo"] }"#).expect("Unable to write config");

	let config_arg = format!("--config={}", path_str(&config));
	assert_eq!(
		run(&["4", path_str(&input), path_str(&output), &config_arg]),
		Some(0)
	);

	let report = fs::read_to_string(&output).expect("Report should be written");
	let policies = report
		.lines()
		.skip(6)
		.filter_map(|line| line.split_whitespace().next())
		.collect::<Vec<_>>();
	assert_eq!(policies, ["Optimal", "FIFO"]);
}
