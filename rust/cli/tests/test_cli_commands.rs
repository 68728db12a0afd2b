use holdem_engine::logger::HandRecord;

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = holdem_cli::run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn rank_reports_the_best_category() {
    let (code, out, _) = run(&["holdem", "rank", "5h", "4d", "3c", "2s", "Ah", "Kd", "9c"]);
    assert_eq!(code, 0);
    assert!(out.contains("Hand: Straight"), "{}", out);

    let (code, out, _) = run(&[
        "holdem", "rank", "Kh", "Kd", "Ks", "9c", "9d", "2s", "3h",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Hand: Full House"));
}

#[test]
fn rank_with_kickers_orders_ranks() {
    let (code, out, _) = run(&[
        "holdem", "rank", "Qh", "Qd", "7s", "7c", "Ad", "3s", "2h", "--kickers",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Hand: Two Pair"));
    assert!(out.contains("Kickers: Q 7 A"), "{}", out);
}

#[test]
fn rank_rejects_bad_cards() {
    let (code, _, err) = run(&["holdem", "rank", "As", "Ks", "Qs", "Js", "Ts", "2c", "1x"]);
    assert_eq!(code, 2);
    assert!(err.contains("unrecognized card '1x'"), "{}", err);
}

#[test]
fn rank_needs_seven_cards() {
    let (code, _, err) = run(&["holdem", "rank", "As", "Ks"]);
    assert_eq!(code, 2);
    assert!(err.contains("Usage: holdem"));
}

#[test]
fn deal_is_deterministic_per_seed() {
    let a = run(&["holdem", "deal", "--seed", "2024", "--players", "5"]);
    let b = run(&["holdem", "deal", "--seed", "2024", "--players", "5"]);
    assert_eq!(a.0, 0);
    assert_eq!(a, b);
    assert_eq!(a.1.lines().count(), 7);
}

#[test]
fn deal_rejects_tables_that_do_not_fit_the_deck() {
    let (code, _, _) = run(&["holdem", "deal", "--players", "24"]);
    assert_eq!(code, 2);
}

#[test]
fn sim_writes_one_record_per_hand() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands").join("sim.jsonl");
    let path_str = path.to_string_lossy().to_string();

    let (code, out, err) = run(&[
        "holdem", "sim", "--hands", "6", "--seed", "42", "--players", "3", "--output", &path_str,
    ]);
    assert_eq!(code, 0, "{}", err);
    assert!(out.starts_with("Simulated: 6 hands (seed 42)"));

    let contents = std::fs::read_to_string(&path).unwrap();
    let records: Vec<HandRecord> = contents
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 6);
    for (i, rec) in records.iter().enumerate() {
        assert!(rec.hand_id.ends_with(&format!("-{:06}", i + 1)));
        assert_eq!(rec.seed, Some(42));
        assert!(rec.winner.is_some());
        assert!(rec.winning_hand.is_some());
        assert_eq!(rec.board.len(), 5);
        assert!(rec.ts.is_some());
        assert!(!rec.actions.is_empty());
    }
}

#[test]
fn sim_needs_hands() {
    let (code, _, _) = run(&["holdem", "sim"]);
    assert_eq!(code, 2);
    let (code, _, err) = run(&["holdem", "sim", "--hands", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("hands must be >= 1"));
}
