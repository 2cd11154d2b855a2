//! Property-based tests: `Seq` against a `VecDeque` oracle, and the algebraic laws of the
//! push/pop/front/back operations.

use std::collections::VecDeque;

use proptest::prelude::*;
use tylist_seq::{Seq, SeqConfig};

#[derive(Debug, Clone)]
enum Op {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::PushFront),
        any::<i32>().prop_map(Op::PushBack),
        Just(Op::PopFront),
        Just(Op::PopBack),
    ]
}

fn seq_strategy() -> impl Strategy<Value = Seq<i32>> {
    (1..4_usize, prop::collection::vec(op_strategy(), 0..64)).prop_map(|(factor, ops)| {
        let config = SeqConfig::new(factor).expect("factor is in range");
        let seq = Seq::with_config(config).expect("factor is in range");
        ops.into_iter().fold(seq, apply)
    })
}

fn apply(seq: Seq<i32>, op: Op) -> Seq<i32> {
    match op {
        Op::PushFront(item) => seq.push_front(item),
        Op::PushBack(item) => seq.push_back(item),
        Op::PopFront => seq.pop_front(),
        Op::PopBack => seq.pop_back(),
    }
}

fn apply_oracle(oracle: &mut VecDeque<i32>, op: Op) {
    match op {
        Op::PushFront(item) => oracle.push_front(item),
        Op::PushBack(item) => oracle.push_back(item),
        Op::PopFront => {
            oracle.pop_front();
        },
        Op::PopBack => {
            oracle.pop_back();
        },
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn matches_oracle(factor in 1..4_usize, ops in prop::collection::vec(op_strategy(), 0..200)) {
        let _ = pretty_env_logger::try_init_timed();

        let config = SeqConfig::new(factor).expect("factor is in range");
        let mut seq = Seq::with_config(config).expect("factor is in range");
        let mut oracle = VecDeque::new();

        for op in ops {
            let before = seq.clone();
            let before_items = before.iter().copied().collect::<Vec<_>>();

            seq = apply(seq, op.clone());
            apply_oracle(&mut oracle, op);

            prop_assert_eq!(seq.len(), oracle.len());
            prop_assert_eq!(seq.front(), oracle.front());
            prop_assert_eq!(seq.back(), oracle.back());
            prop_assert!(seq.iter().eq(oracle.iter()));
            prop_assert!(seq.iter().rev().eq(oracle.iter().rev()));

            // the previous version is not affected
            prop_assert_eq!(before.iter().copied().collect::<Vec<_>>(), before_items);
        }
    }

    #[test]
    fn push_grows_by_one(seq in seq_strategy(), x: i32) {
        prop_assert_eq!(seq.push_front(x).len(), seq.len() + 1);
        prop_assert_eq!(seq.push_back(x).len(), seq.len() + 1);
    }

    #[test]
    fn pop_shrinks_by_one_unless_empty(seq in seq_strategy()) {
        if seq.is_empty() {
            prop_assert_eq!(seq.pop_front(), seq.clone());
            prop_assert_eq!(seq.pop_back(), seq.clone());
        } else {
            prop_assert_eq!(seq.pop_front().len(), seq.len() - 1);
            prop_assert_eq!(seq.pop_back().len(), seq.len() - 1);
        }
    }

    #[test]
    fn pushed_item_is_at_its_end(seq in seq_strategy(), x: i32) {
        prop_assert_eq!(seq.push_front(x).front().copied(), Some(x));
        prop_assert_eq!(seq.push_back(x).back().copied(), Some(x));
        prop_assert_eq!(seq.push_front(x).pop_front(), seq.clone());
        prop_assert_eq!(seq.push_back(x).pop_back(), seq.clone());
    }

    #[test]
    fn emptiness_is_zero_size(seq in seq_strategy()) {
        prop_assert_eq!(seq.is_empty(), seq.len() == 0);
        prop_assert_eq!(seq.is_empty(), seq.front().is_none());
        prop_assert_eq!(seq.is_empty(), seq.back().is_none());
    }

    #[test]
    fn collect_matches_items(items in prop::collection::vec(any::<i32>(), 0..100)) {
        let seq: Seq<i32> = items.iter().copied().collect();

        prop_assert_eq!(seq.len(), items.len());
        prop_assert_eq!(seq.front(), items.first());
        prop_assert_eq!(seq.back(), items.last());
        prop_assert_eq!(seq.iter().copied().collect::<Vec<_>>(), items);
    }
}
