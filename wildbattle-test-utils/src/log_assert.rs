use wildbattle::BattleSession;

/// Asserts that new logs in the session are equal to the given logs.
#[track_caller]
pub fn assert_new_logs_eq(session: &mut BattleSession, want: &[&str]) {
    let got = session.new_logs().collect::<Vec<&str>>();
    pretty_assertions::assert_eq!(got, want)
}
