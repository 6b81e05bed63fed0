use super::*;

#[test]
fn every_locale_has_a_distinct_label() {
    let labels = Locale::ALL.map(locale_label);
    assert_eq!(labels, ["中文", "日本語", "EN"]);
}
