use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_iveria"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to launch iveria binary")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("stdout is utf-8")
        .lines()
        .map(str::to_owned)
        .collect()
}

const SESSION: [&str; 10] = [
    "--seed",
    "7",
    "--width",
    "60",
    "--height",
    "24",
    "--max-passes",
    "300",
    "--script",
    "RRDDLG",
];

#[test]
fn seeded_session_prints_grid_and_status() {
    let output = run(&SESSION);
    assert!(output.status.success(), "iveria exited with {:?}", output.status);

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 25);
    let (grid, status) = lines.split_at(24);
    assert!(grid.iter().all(|row| row.chars().count() == 60));
    assert!(grid
        .iter()
        .flat_map(|row| row.chars())
        .all(|glyph| matches!(glyph, '#' | '-' | '@')));
    assert_eq!(
        grid.iter()
            .map(|row| row.matches('@').count())
            .sum::<usize>(),
        1
    );
    assert!(status[0].contains("rooms="), "unexpected status: {}", status[0]);
    assert!(status[0].ends_with("/5"), "five step intents: {}", status[0]);
}

#[test]
fn default_start_places_the_player_on_ground() {
    let output = run(&["--seed", "7", "--width", "60", "--height", "24", "--max-passes", "300"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    let first_ground = lines
        .iter()
        .take(24)
        .enumerate()
        .find_map(|(row, line)| line.find(|glyph| glyph != '#').map(|column| (column, row)))
        .expect("map has an open cell");
    assert_eq!(lines[first_ground.1].as_bytes()[first_ground.0], b'@');
    assert!(lines[24].contains(&format!(
        "player=({}, {})",
        first_ground.0, first_ground.1
    )));
}

#[test]
fn identical_arguments_replay_identically() {
    let first = run(&SESSION);
    let second = run(&SESSION);
    assert!(first.status.success() && second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn unknown_intent_fails_with_context() {
    let output = run(&["--seed", "1", "--max-passes", "50", "--script", "RX"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid intent script"), "stderr: {stderr}");
}
