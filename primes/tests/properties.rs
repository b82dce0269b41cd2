use primes::{
    bounded_trial_division, naive_trial_division, runner, sieve_of_eratosthenes, Algorithm,
    PrimesError,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PRIMES_TO_100: [usize; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Independent oracle: smallest divisor above 1, found by plain search
fn smallest_factor(n: usize) -> Option<usize> {
    (2..n).find(|d| n % d == 0)
}

fn all_variants(bound: usize) -> [Result<Vec<usize>, PrimesError>; 3] {
    [
        naive_trial_division(bound),
        bounded_trial_division(bound),
        sieve_of_eratosthenes(bound),
    ]
}

fn assert_primes_valid(bound: usize, primes: &[usize]) {
    // Strictly ascending, hence no duplicates
    assert!(primes.windows(2).all(|pair| pair[0] < pair[1]), "bound {bound}");

    for &p in primes {
        assert!((2..=bound).contains(&p), "{p} outside 2..={bound}");
        assert_eq!(smallest_factor(p), None, "{p} is composite");
    }

    for n in 2..=bound {
        if primes.binary_search(&n).is_err() {
            assert!(smallest_factor(n).is_some(), "{n} is prime but missing");
        }
    }
}

#[test]
fn zero_is_rejected_by_every_variant() {
    for result in all_variants(0) {
        assert_eq!(result, Err(PrimesError::InvalidInput));
    }
}

#[test]
fn one_yields_no_primes() {
    for result in all_variants(1) {
        assert_eq!(result, Ok(vec![]));
    }
}

#[test]
fn concrete_scenarios() {
    let cases: [(usize, &[usize]); 4] = [
        (2, &[2]),
        (10, &[2, 3, 5, 7]),
        (20, &[2, 3, 5, 7, 11, 13, 17, 19]),
        (100, &PRIMES_TO_100),
    ];

    for (bound, expected) in cases {
        for result in all_variants(bound) {
            assert_eq!(result.as_deref(), Ok(expected), "bound {bound}");
        }
    }
}

#[test]
fn small_bounds_agree_and_are_exact() {
    for bound in 1..=500 {
        let [naive, bounded, sieve] = all_variants(bound);
        let naive = naive.unwrap();
        assert_eq!(naive, bounded.unwrap(), "bound {bound}");
        assert_eq!(naive, sieve.unwrap(), "bound {bound}");
        assert_primes_valid(bound, &naive);
    }
}

#[test]
fn random_bounds_agree_and_are_exact() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..25 {
        let bound = rng.gen_range(1..=3_000);
        let reference = sieve_of_eratosthenes(bound).unwrap();
        assert_eq!(bounded_trial_division(bound).unwrap(), reference, "bound {bound}");
        assert_eq!(naive_trial_division(bound).unwrap(), reference, "bound {bound}");
        assert_primes_valid(bound, &reference);
    }
}

#[test]
fn larger_bounds_match_known_counts() {
    // π(n) for n = 10^3, 10^4, 10^5
    let known = [(1_000, 168), (10_000, 1_229), (100_000, 9_592)];

    for (bound, count) in known {
        assert_eq!(sieve_of_eratosthenes(bound).unwrap().len(), count);
        assert_eq!(bounded_trial_division(bound).unwrap().len(), count);
    }
    assert_eq!(naive_trial_division(10_000).unwrap().len(), 1_229);
}

#[test]
fn perfect_squares_of_primes_are_composite() {
    let primes = bounded_trial_division(10_000).unwrap();
    for &p in primes.iter().take_while(|&&p| p * p <= 10_000) {
        assert!(primes.binary_search(&(p * p)).is_err(), "{} listed as prime", p * p);
    }
}

#[test]
fn runner_verifies_random_bounds() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..10 {
        let bound = rng.gen_range(1..=2_000);
        let shared = runner::verify_agreement(bound).unwrap();
        for algorithm in Algorithm::ALL {
            let report = runner::run(algorithm, bound).unwrap();
            assert_eq!(report.primes, shared);
            assert_eq!(report.count, shared.len());
        }
    }
}
