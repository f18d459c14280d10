// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Synthetic instance generators, ported from `instanceGen.c`. Each family
//! produces a `GeneratedInstance` bundling the interval multiset with a
//! `name` (used as the report filename stem) and `metadata` (the group
//! sizes used to build it, echoed back into the JSON report).
//!
//! The original drew randomness from `srand(time(NULL))`; here every
//! generator takes an explicit `rand::Rng`, so a caller wanting
//! reproducible instances seeds a `StdRng` once (`--seed` on the CLI) and
//! every family built from it is deterministic.

use rand::Rng;

use crate::interval::Interval;
use crate::multiset::IntervalMultiset;

/// A generated instance, ready to feed to a solver.
pub struct GeneratedInstance {
    pub name: &'static str,
    pub instance: IntervalMultiset,
    pub metadata: Vec<i64>,
}

fn interval_containing(i: u32, n: u32, rng: &mut impl Rng) -> Interval {
    let bottom = rng.gen_range(1..=i);
    let top = rng.gen_range(i..=n);
    Interval::new(bottom, top, 1)
}

/// Splits `n` into a sequence of positive group sizes summing to `n`,
/// mirroring `getRandomGroups`.
fn random_groups(n: u32, rng: &mut impl Rng) -> Vec<u32> {
    let mut groups = Vec::new();
    let mut remaining = n;
    while remaining > 0 {
        let size = rng.gen_range(1..=remaining);
        groups.push(size);
        remaining -= size;
    }
    groups
}

fn intervals_for_groups(groups: &[u32], n: u32, rng: &mut impl Rng) -> Vec<Interval> {
    let mut next_value = 1u32;
    let mut intervals = Vec::new();
    for &g in groups {
        for _ in 0..g {
            intervals.push(interval_containing(next_value.min(n), n, rng));
        }
        next_value += 1;
    }
    intervals
}

/// A YES instance built from a random partition of `n` into group sizes,
/// each backed by exactly that many intervals containing the group value.
pub fn simple_yes(n: u32, rng: &mut impl Rng) -> GeneratedInstance {
    let groups = random_groups(n, rng);
    let intervals = intervals_for_groups(&groups, n, rng);
    GeneratedInstance {
        name: "simple_yes",
        instance: IntervalMultiset::new(intervals, None),
        metadata: groups.iter().map(|&g| g as i64).collect(),
    }
}

/// A NO instance: a `simple_yes` instance with one unsatisfiable singleton
/// interval appended, mirroring `addImpossibleGroup`.
pub fn simple_no(n: u32, rng: &mut impl Rng) -> GeneratedInstance {
    let mut yes = simple_yes(n, rng);
    let impossible_value = n + 1;
    let mut intervals = yes.instance.intervals().to_vec();
    intervals.push(Interval::new(impossible_value.max(1), impossible_value.max(1), 1));
    yes.instance = IntervalMultiset::new(intervals, None);
    yes.name = "simple_no";
    yes
}

/// Splits `n` evenly into `k` witness groups, rounding the remainder into
/// the first groups, mirroring `getMaxNumWhitnesses`'s equal-split case.
fn even_split(n: u32, k: u32) -> Vec<u32> {
    let base = n / k;
    let extra = n % k;
    (0..k)
        .map(|idx| if idx < extra { base + 1 } else { base })
        .filter(|&size| size > 0)
        .collect()
}

/// A YES instance that maximises the number of distinct witness groups for
/// a fixed `n`, by splitting as evenly as possible into `sqrt(n)` groups.
pub fn max_witnesses_yes(n: u32, rng: &mut impl Rng) -> GeneratedInstance {
    let k = (n as f64).sqrt().round().max(1.0) as u32;
    let groups = even_split(n, k);
    let intervals = intervals_for_groups(&groups, n, rng);
    GeneratedInstance {
        name: "max_witnesses_yes",
        instance: IntervalMultiset::new(intervals, None),
        metadata: groups.iter().map(|&g| g as i64).collect(),
    }
}

pub fn max_witnesses_no(n: u32, rng: &mut impl Rng) -> GeneratedInstance {
    let mut yes = max_witnesses_yes(n, rng);
    let mut intervals = yes.instance.intervals().to_vec();
    intervals.push(Interval::new(n + 1, n + 1, 1));
    yes.instance = IntervalMultiset::new(intervals, None);
    yes.name = "max_witnesses_no";
    yes
}

/// A YES instance built to maximise the number of distinct groups *and*
/// the reuse of identical group sizes, mirroring `getMaxGroupWhitnesses`.
pub fn max_group_witnesses_yes(n: u32, rng: &mut impl Rng) -> GeneratedInstance {
    let mut groups = Vec::new();
    let mut remaining = n;
    let mut size = 1;
    while remaining > 0 {
        let take = size.min(remaining);
        groups.push(take);
        remaining -= take;
        size += 1;
    }
    let intervals = intervals_for_groups(&groups, n, rng);
    GeneratedInstance {
        name: "max_group_witnesses_yes",
        instance: IntervalMultiset::new(intervals, None),
        metadata: groups.iter().map(|&g| g as i64).collect(),
    }
}

pub fn max_group_witnesses_no(n: u32, rng: &mut impl Rng) -> GeneratedInstance {
    let mut yes = max_group_witnesses_yes(n, rng);
    let mut intervals = yes.instance.intervals().to_vec();
    intervals.push(Interval::new(n + 1, n + 1, 1));
    yes.instance = IntervalMultiset::new(intervals, None);
    yes.name = "max_group_witnesses_no";
    yes
}

/// A YES instance exploiting the run-length `amount` field: few distinct
/// entries, each with a large multiplicity, mirroring
/// `instanceHardYesAmountVersion`.
pub fn hard_yes_amount_version(n: u32, rng: &mut impl Rng) -> GeneratedInstance {
    let groups = random_groups(n, rng);
    let mut intervals = Vec::new();
    let mut next_value = 1u32;
    for &g in &groups {
        let iv = interval_containing(next_value.min(n), n, rng);
        intervals.push(Interval::new(iv.bottom, iv.top, g));
        next_value += 1;
    }
    GeneratedInstance {
        name: "hard_yes_amount_version",
        instance: IntervalMultiset::new(intervals, None),
        metadata: groups.iter().map(|&g| g as i64).collect(),
    }
}

pub fn hard_no_amount_version(n: u32, rng: &mut impl Rng) -> GeneratedInstance {
    let mut yes = hard_yes_amount_version(n, rng);
    let mut intervals = yes.instance.intervals().to_vec();
    intervals.push(Interval::new(n + 1, n + 1, 1));
    yes.instance = IntervalMultiset::new(intervals, None);
    yes.name = "hard_no_amount_version";
    yes
}

/// `n` copies of the single interval `[1, n]`: always a YES instance
/// (every group size can be carved from the shared pool), mirroring
/// `instanceAllFull`.
pub fn all_full(n: u32) -> GeneratedInstance {
    let instance = if n == 0 {
        IntervalMultiset::new(Vec::new(), None)
    } else {
        IntervalMultiset::new(vec![Interval::new(1, n, n)], None)
    };
    GeneratedInstance {
        name: "all_full",
        instance,
        metadata: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> rand::rngs::StdRng {
        rand::rngs::StdRng::seed_from_u64(42)
    }

    #[test]
    fn simple_yes_cardinality_matches_n() {
        let gen = simple_yes(10, &mut rng());
        assert_eq!(10, gen.instance.count_intervals());
    }

    #[test]
    fn simple_no_has_one_more_interval_than_simple_yes_would() {
        let mut r1 = rand::rngs::StdRng::seed_from_u64(7);
        let mut r2 = rand::rngs::StdRng::seed_from_u64(7);
        let yes = simple_yes(6, &mut r1);
        let no = simple_no(6, &mut r2);
        assert_eq!(yes.instance.count_intervals() + 1, no.instance.count_intervals());
    }

    #[test]
    fn all_full_is_a_single_run_of_n_copies() {
        let gen = all_full(5);
        assert_eq!(1, gen.instance.intervals().len());
        assert_eq!(5, gen.instance.count_intervals());
    }

    #[test]
    fn all_full_of_zero_is_empty() {
        let gen = all_full(0);
        assert!(gen.instance.is_empty());
    }

    #[test]
    fn same_seed_produces_same_instance() {
        let a = simple_yes(20, &mut rand::rngs::StdRng::seed_from_u64(99));
        let b = simple_yes(20, &mut rand::rngs::StdRng::seed_from_u64(99));
        assert_eq!(a.instance, b.instance);
    }

    #[test]
    fn max_group_witnesses_yes_cardinality_matches_n() {
        let gen = max_group_witnesses_yes(15, &mut rng());
        assert_eq!(15, gen.instance.count_intervals());
    }

    #[test]
    fn hard_yes_amount_version_cardinality_matches_n() {
        let gen = hard_yes_amount_version(12, &mut rng());
        assert_eq!(12, gen.instance.count_intervals());
    }
}
