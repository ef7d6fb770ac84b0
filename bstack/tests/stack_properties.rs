//! Property tests for `BoundedStack` invariants.

use bstack::{BoundedStack, SilentSink};
use proptest::prelude::*;

fn quiet(capacity: Option<usize>) -> BoundedStack<i32> {
    let mut builder = BoundedStack::builder().sink(SilentSink);
    if let Some(limit) = capacity {
        builder = builder.capacity(limit);
    }
    builder.build().unwrap()
}

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![any::<i32>().prop_map(Op::Push), Just(Op::Pop)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn pushes_within_capacity_count_exactly(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut stack = quiet(None);
        for value in &values {
            stack.push(*value);
        }
        prop_assert_eq!(stack.size(), values.len());
    }

    #[test]
    fn pop_after_push_returns_pushed_value(
        initial in prop::collection::vec(any::<i32>(), 0..16),
        value in any::<i32>(),
    ) {
        let mut stack = BoundedStack::from_initial(initial.clone(), None);
        let before = stack.size();
        stack.push(value);
        prop_assert_eq!(stack.pop(), Some(value));
        prop_assert_eq!(stack.size(), before);
    }

    #[test]
    fn size_never_exceeds_capacity(
        limit in 1usize..8,
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let mut stack = quiet(Some(limit));
        for op in ops {
            match op {
                Op::Push(value) => {
                    let was_full = stack.full();
                    let before = stack.size();
                    stack.push(value);
                    if was_full {
                        prop_assert_eq!(stack.size(), before);
                    } else {
                        prop_assert_eq!(stack.size(), before + 1);
                    }
                }
                Op::Pop => {
                    let before = stack.size();
                    let popped = stack.pop();
                    prop_assert_eq!(popped.is_none(), before == 0);
                    prop_assert_eq!(stack.size(), before.saturating_sub(1));
                }
            }
            prop_assert!(stack.size() <= limit);
            prop_assert_eq!(stack.full(), stack.size() == limit);
        }
    }

    #[test]
    fn search_matches_bottom_up_position(
        values in prop::collection::vec(0i32..8, 0..32),
        probe in 0i32..8,
    ) {
        let stack = BoundedStack::from_initial(values.clone(), None);
        let expected = values
            .iter()
            .position(|v| *v == probe)
            .map_or(-1, |index| (values.len() - 1 - index) as isize);
        prop_assert_eq!(stack.search(&probe), expected);
        prop_assert_eq!(stack.search(&probe) == -1, !values.contains(&probe));
    }

    #[test]
    fn most_recent_unique_push_is_at_distance_zero(
        values in prop::collection::vec(0i32..100, 0..16),
    ) {
        let mut stack = BoundedStack::from_initial(values, None);
        stack.push(1_000);
        prop_assert_eq!(stack.search(&1_000), 0);
    }
}
