#![no_main]

use libfuzzer_sys::fuzz_target;
use tabsift_text::parse_filter;

fuzz_target!(|data: &str| {
    let state = parse_filter(data);

    // Every constraint comes from one `;` group with both sides non-empty.
    let groups = data.split(';').count();
    assert!(state.constraints().len() <= groups);
    for constraint in state.constraints() {
        assert!(!constraint.column.is_empty());
        assert!(!constraint.term.is_empty());
        assert!(!constraint.column.contains(';'));
    }
    if let Some(term) = state.global_term() {
        assert!(!term.contains(';'));
        assert!(!term.contains(':'));
    }
});
