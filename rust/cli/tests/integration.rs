use holdem_cli::run;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn help_exits_zero() {
    let (code, out, _err) = run_cli(&["holdem", "--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("holdem"));
    assert!(out.contains("play"));
    assert!(out.contains("sim"));
    assert!(out.contains("deal"));
}

#[test]
fn unknown_subcommand_exits_two() {
    let (code, _out, err) = run_cli(&["holdem", "shuffle"]);
    assert_eq!(code, 2);
    assert!(!err.is_empty());
}

#[test]
fn deal_is_deterministic_for_a_seed() {
    let (code_a, out_a, _) = run_cli(&["holdem", "deal", "--seed", "42"]);
    let (code_b, out_b, _) = run_cli(&["holdem", "deal", "--seed", "42"]);
    assert_eq!(code_a, 0);
    assert_eq!(code_b, 0);
    assert_eq!(out_a, out_b);
    assert!(out_a.contains("Board:"));
    assert!(out_a.contains("Seat 1"));
    assert!(out_a.contains("Seat 3"));
}

#[test]
fn deal_json_is_well_formed() {
    let (code, out, _) = run_cli(&["holdem", "deal", "--seed", "7", "--seats", "4", "--json"]);
    assert_eq!(code, 0);

    let report: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(report["seed"], 7);
    assert_eq!(report["board"].as_array().unwrap().len(), 5);
    let seats = report["seats"].as_array().unwrap();
    assert_eq!(seats.len(), 4);
    for seat in seats {
        assert_eq!(seat["hole"].as_array().unwrap().len(), 2);
        assert!(seat["category"].is_string());
    }
}

#[test]
fn deal_rejects_impossible_seat_counts() {
    let (code, _out, err) = run_cli(&["holdem", "deal", "--seats", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("seats"));

    let (code, _out, _err) = run_cli(&["holdem", "deal", "--seats", "40"]);
    assert_eq!(code, 2);
}

#[test]
fn sim_reports_a_win_tally() {
    let (code, out, _) = run_cli(&[
        "holdem",
        "sim",
        "--matchup",
        "minimax-vs-alphabeta",
        "--hands",
        "3",
        "--seed",
        "5",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Out of 3 hands"));
    assert!(out.contains("minimax"));
    assert!(out.contains("alphabeta"));
}

#[test]
fn sim_is_deterministic_for_a_seed() {
    let args = [
        "holdem",
        "sim",
        "--matchup",
        "random-vs-minimax",
        "--hands",
        "5",
        "--seed",
        "11",
    ];
    let (code_a, out_a, _) = run_cli(&args);
    let (code_b, out_b, _) = run_cli(&args);
    assert_eq!(code_a, 0);
    assert_eq!(code_b, 0);
    assert_eq!(out_a, out_b);
}

#[test]
fn sim_rejects_zero_hands() {
    let (code, _out, err) = run_cli(&["holdem", "sim", "--hands", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("hands must be >= 1"));
}

#[test]
fn play_rejects_bad_configuration_without_prompting() {
    let (code, _out, err) = run_cli(&["holdem", "play", "--hands", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("hands must be >= 1"));

    let (code, _out, err) = run_cli(&["holdem", "play", "--seats", "1"]);
    assert_eq!(code, 2);
    assert!(err.contains("seats"));
}
