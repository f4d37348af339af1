use holdem_engine::logger::HandRecord;
use std::fs;
use tempfile::TempDir;

fn sim(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let argv = ["holdem", "sim"].into_iter().chain(args.iter().copied());
    let code = holdem_cli::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn writes_one_record_per_hand() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("hands.jsonl");
    let path_str = path.to_string_lossy().into_owned();

    let (code, out, err) = sim(&["--hands", "6", "--seed", "11", "--output", &path_str]);
    assert_eq!(code, 0, "stderr: {err}");
    assert!(out.contains("Hand history written to"));

    let contents = fs::read_to_string(&path).unwrap();
    assert!(!contents.contains('\r'));
    let records: Vec<HandRecord> = contents
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let played: usize = out
        .split_whitespace()
        .nth(1)
        .and_then(|n| n.parse().ok())
        .unwrap();
    assert_eq!(records.len(), played);

    for (i, rec) in records.iter().enumerate() {
        assert!(rec.hand_id.ends_with(&format!("-{:06}", i + 1)));
        assert_eq!(rec.seed, Some(11 + i as u64));
        assert!(rec.showdown.is_some());
        assert!(rec.ts.is_some());
        let total: u32 = rec.players.iter().map(|p| p.chips).sum();
        assert_eq!(total, 3000);
    }
}

#[test]
fn same_seed_same_summary() {
    let args = ["--hands", "20", "--seed", "5", "--bots", "4", "--difficulty", "hard"];
    let (code, first, _) = sim(&args);
    assert_eq!(code, 0);
    let (_, second, _) = sim(&args);
    assert_eq!(first, second);
    assert!(first.contains("difficulty hard"));
}

#[test]
fn zero_hands_is_rejected() {
    let (code, _, err) = sim(&["--hands", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("hands must be >= 1"));
}

#[test]
fn unwritable_output_is_reported_once() {
    let dir = TempDir::new().unwrap();
    let path_str = dir.path().to_string_lossy().into_owned();

    let (code, out, err) = sim(&["--hands", "1", "--seed", "1", "--output", &path_str]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert_eq!(err.lines().count(), 1, "{err}");
    assert!(err.starts_with("Error: I/O error:"), "{err}");
}
