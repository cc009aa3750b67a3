#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tabsift_text::{Item, MatchScore, rank_scored, score_match};

#[derive(Arbitrary, Debug)]
struct Input {
    probe: String,
    names: Vec<String>,
}

fuzz_target!(|input: Input| {
    for name in &input.names {
        let score = score_match(name, &input.probe);
        assert_eq!(score == MatchScore::Equal, *name == input.probe);
        if name.chars().count() < input.probe.chars().count() {
            assert_eq!(score, MatchScore::NoMatch);
        }
    }

    let items: Vec<Item> = input
        .names
        .iter()
        .enumerate()
        .map(|(i, name)| Item::new(i.to_string(), name.clone()))
        .collect();
    let ranked = rank_scored(&items, &input.probe);
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(ranked.iter().all(|r| r.score.is_match()));
});
