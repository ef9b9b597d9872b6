use std::ops::RangeInclusive;

use lorem_autotyper::{plan_word_counts, ChunkPlan, Config, FallbackVocabulary};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn counts_sum_to_budget() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        for budget in [1, 29, 30, 71, 100, 1_000, 12_345] {
            let counts = plan_word_counts(&mut rng, budget, 30..=70);
            assert_eq!(counts.iter().sum::<usize>(), budget);

            let (last, rest) = counts.split_last().unwrap();
            assert!(rest.iter().all(|c| (30..=70).contains(c)), "{:?}", counts);
            assert!(*last >= 1 && *last <= 70);
        }
    }
}

#[test]
fn hundred_words_in_two_or_three_paragraphs() {
    let mut rng = StdRng::seed_from_u64(9);
    let counts = plan_word_counts(&mut rng, 100, Config::default().paragraph_range());

    assert_eq!(counts.iter().sum::<usize>(), 100);
    assert!((2..=4).contains(&counts.len()), "{:?}", counts);
    assert!(counts[0] >= 30 && counts[0] <= 70);
}

#[test]
fn zero_budget_plans_nothing() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(plan_word_counts(&mut rng, 0, 30..=70).is_empty());
}

#[test]
fn small_budget_is_one_clamped_paragraph() {
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(plan_word_counts(&mut rng, 12, 30..=70), vec![12]);
}

#[test]
fn one_word_paragraphs_terminate() {
    let mut rng = StdRng::seed_from_u64(5);
    let counts = plan_word_counts(&mut rng, 25, 1..=1);
    assert_eq!(counts, vec![1; 25]);
}

#[test]
fn reversed_range_is_reordered() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let counts = plan_word_counts(&mut rng, 10, RangeInclusive::new(5, 3));
        assert_eq!(counts.iter().sum::<usize>(), 10);
        let (_, rest) = counts.split_last().unwrap();
        assert!(rest.iter().all(|c| (3..=5).contains(c)), "{:?}", counts);
    }
}

#[test]
fn zero_word_floor_still_fills_budget() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let counts = plan_word_counts(&mut rng, 40, 0..=4);
        assert_eq!(counts.iter().sum::<usize>(), 40);
        assert!(counts.iter().all(|c| (1..=4).contains(c)));
    }
}

#[test]
fn plan_generates_paragraphs_and_counts_breaks() {
    let config = Config {
        total_words: 500,
        ..Config::default()
    };
    let mut generator = FallbackVocabulary::new(StdRng::seed_from_u64(11));
    let mut rng = StdRng::seed_from_u64(12);

    let plan = ChunkPlan::generate(&config, &mut generator, &mut rng);
    assert!(!plan.is_empty());

    let words: usize = plan
        .chunks()
        .iter()
        .map(|chunk| chunk.split(' ').count())
        .sum();
    assert_eq!(words, 500);

    let expected: usize = plan.chunks().iter().map(|c| c.len() + 2).sum();
    assert_eq!(plan.total_chars(), expected);
    assert_eq!(plan.chars_through(1), plan.chunks()[0].len() + 2);
    assert_eq!(plan.chars_through(0), 0);
}

#[test]
fn empty_plan_has_no_chars() {
    let plan = ChunkPlan::default();
    assert!(plan.is_empty());
    assert_eq!(plan.total_chars(), 0);
}
