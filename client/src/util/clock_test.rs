use super::*;

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000);
}

#[test]
fn now_ms_does_not_go_backwards() {
    let first = now_ms();
    assert!(now_ms() >= first);
}
