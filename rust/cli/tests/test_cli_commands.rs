use holdem_cli::run;

fn holdem(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let argv = std::iter::once("holdem").chain(args.iter().copied());
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn help_goes_to_stdout() {
    let (code, out, err) = holdem(&["--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("deal"));
    assert!(out.contains("sim"));
    assert!(err.is_empty());
}

#[test]
fn unknown_command_lists_commands() {
    let (code, out, err) = holdem(&["shuffle"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Commands:"));
    assert!(err.contains("  eval"));
}

#[test]
fn eval_text_and_json() {
    let (code, out, _) = holdem(&["eval", "Kh", "Kd", "--board", "Ks 2c 2d 9h 4s"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("Full House (713)"), "{out}");

    let (code, out, _) = holdem(&["eval", "5c 4d 3h 2s Ac", "--json"]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(v["rank"], "Straight");
    assert_eq!(v["score"], 505);
    assert_eq!(v["cards"][0], "5♣");
    assert_eq!(v["cards"][4], "A♣");
}

#[test]
fn eval_rejects_bad_cards() {
    let (code, _, err) = holdem(&["eval", "As", "Kx", "Qs", "Js", "10s"]);
    assert_eq!(code, 2);
    assert!(err.starts_with("Error: Engine error: Invalid card"), "{err}");

    let (code, _, err) = holdem(&["eval", "As Ks Qs"]);
    assert_eq!(code, 2);
    assert!(err.contains("needs 5 cards"), "{err}");
}

#[test]
fn deal_is_seeded() {
    let (code, first, _) = holdem(&["deal", "--seed", "42", "--bots", "6"]);
    assert_eq!(code, 0);
    let (_, second, _) = holdem(&["deal", "--seed", "42", "--bots", "6"]);
    assert_eq!(first, second);
    assert_eq!(first.lines().filter(|l| l.starts_with("Seat ")).count(), 6);
    assert!(first.contains("Blinds: 10/20  Pot: 30"));
}

#[test]
fn deal_with_custom_blinds() {
    let (code, out, _) = holdem(&[
        "deal",
        "--seed",
        "3",
        "--small-blind",
        "25",
        "--big-blind",
        "50",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Blinds: 25/50  Pot: 75  To call: 50"), "{out}");
}

#[test]
fn invalid_table_is_a_config_error() {
    let (code, _, err) = holdem(&["deal", "--bots", "9"]);
    assert_eq!(code, 2);
    assert!(err.contains("num_bots must be between 2 and 8"), "{err}");

    let (code, _, err) = holdem(&["deal", "--small-blind", "40", "--big-blind", "20"]);
    assert_eq!(code, 2);
    assert!(err.contains("must not be below small_blind"), "{err}");
}
