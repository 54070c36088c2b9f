//! Property tests: the list is checked against a `Vec` model.

use proptest::prelude::*;
use seq_list::SequentialList;

fn check(list: &SequentialList<i32>) {
    #[cfg(debug_assertions)]
    list.check_invariants();
    #[cfg(not(debug_assertions))]
    let _ = list;
}

#[derive(Debug, Clone)]
enum Op {
    PushFront(i32),
    PushBack(i32),
    InsertAt(usize, i32),
    InsertAfter(i32, i32),
    InsertBefore(i32, i32),
    PopFront,
    PopBack,
    RemoveAt(usize),
    RemoveIf(i32),
    Reverse,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::PushFront),
        any::<i32>().prop_map(Op::PushBack),
        (0usize..12, any::<i32>()).prop_map(|(i, v)| Op::InsertAt(i, v)),
        (-3i32..3, any::<i32>()).prop_map(|(k, v)| Op::InsertAfter(k, v)),
        (-3i32..3, any::<i32>()).prop_map(|(k, v)| Op::InsertBefore(k, v)),
        Just(Op::PopFront),
        Just(Op::PopBack),
        (0usize..12).prop_map(Op::RemoveAt),
        (-3i32..3).prop_map(Op::RemoveIf),
        Just(Op::Reverse),
    ]
}

fn apply(list: &mut SequentialList<i32>, model: &mut Vec<i32>, op: &Op) {
    match *op {
        Op::PushFront(v) => {
            list.push_front(v);
            model.insert(0, v);
        }
        Op::PushBack(v) => {
            list.push_back(v);
            model.push(v);
        }
        Op::InsertAt(i, v) => {
            let res = list.insert_at(i, v);
            if i <= model.len() {
                assert!(res.is_ok());
                model.insert(i, v);
            } else {
                assert!(res.is_err());
            }
        }
        Op::InsertAfter(k, v) => {
            let hit = model.iter().position(|x| x % 3 == k);
            assert_eq!(list.insert_after(|x| x % 3 == k, v), hit.is_some());
            if let Some(i) = hit {
                model.insert(i + 1, v);
            }
        }
        Op::InsertBefore(k, v) => {
            let hit = model.iter().position(|x| x % 3 == k);
            assert_eq!(list.insert_before(|x| x % 3 == k, v), hit.is_some());
            if let Some(i) = hit {
                model.insert(i, v);
            }
        }
        Op::PopFront => {
            let expected = if model.is_empty() {
                None
            } else {
                Some(model.remove(0))
            };
            assert_eq!(list.pop_front().ok(), expected);
        }
        Op::PopBack => {
            assert_eq!(list.pop_back().ok(), model.pop());
        }
        Op::RemoveAt(i) => {
            let res = list.remove_at(i);
            if i < model.len() {
                assert_eq!(res, Ok(model.remove(i)));
            } else {
                assert!(res.is_err());
            }
        }
        Op::RemoveIf(k) => {
            let expected = model
                .iter()
                .position(|x| x % 3 == k)
                .map(|i| model.remove(i));
            assert_eq!(list.remove_if(|x| x % 3 == k), expected);
        }
        Op::Reverse => {
            let res = list.reverse();
            assert_eq!(res.is_ok(), !model.is_empty());
            model.reverse();
        }
    }
}

proptest! {
    #[test]
    fn matches_vec_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut list = SequentialList::new();
        let mut model = Vec::new();

        for op in &ops {
            apply(&mut list, &mut model, op);
            check(&list);
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.to_vec(), model.clone());
            prop_assert_eq!(list.back().ok(), model.first());
            prop_assert_eq!(list.front().ok(), model.last());
        }
    }

    #[test]
    fn push_back_then_get_at(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let mut list = SequentialList::new();
        for v in &values {
            list.push_back(*v);
        }

        prop_assert_eq!(list.len(), values.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(list.get_at(i), Ok(v));
        }
    }

    #[test]
    fn push_front_pop_front_restores_len(
        values in prop::collection::vec(any::<i32>(), 0..20),
        v in any::<i32>(),
    ) {
        let mut list: SequentialList<i32> = values.iter().copied().collect();
        let before = list.len();

        list.push_front(v);
        prop_assert_eq!(list.pop_front(), Ok(v));
        prop_assert_eq!(list.len(), before);
        prop_assert_eq!(list.to_vec(), values);
    }

    #[test]
    fn back_and_front_are_ends(values in prop::collection::vec(any::<i32>(), 1..30)) {
        let list: SequentialList<i32> = values.iter().copied().collect();

        prop_assert_eq!(list.back(), list.get_at(0));
        prop_assert_eq!(list.front(), list.get_at(list.len() - 1));
    }

    #[test]
    fn reverse_is_an_involution(values in prop::collection::vec(any::<i32>(), 1..30)) {
        let mut list: SequentialList<i32> = values.iter().copied().collect();

        list.reverse().unwrap();
        list.reverse().unwrap();

        prop_assert_eq!(list.to_vec(), values);
        check(&list);
    }

    #[test]
    fn insert_at_ends_match_pushes(
        values in prop::collection::vec(any::<i32>(), 0..20),
        v in any::<i32>(),
    ) {
        let mut by_index: SequentialList<i32> = values.iter().copied().collect();
        let mut by_push = by_index.clone();

        by_index.insert_at(0, v).unwrap();
        by_push.push_front(v);
        prop_assert_eq!(&by_index, &by_push);

        let end = by_index.len();
        by_index.insert_at(end, v).unwrap();
        by_push.push_back(v);
        prop_assert_eq!(&by_index, &by_push);
    }

    #[test]
    fn remove_at_then_insert_at_restores(
        values in prop::collection::vec(any::<i32>(), 1..30),
        seed in any::<prop::sample::Index>(),
    ) {
        let mut list: SequentialList<i32> = values.iter().copied().collect();
        let i = seed.index(values.len());

        let removed = list.remove_at(i).unwrap();
        list.insert_at(i, removed).unwrap();

        prop_assert_eq!(list.to_vec(), values);
        check(&list);
    }

    #[test]
    fn iteration_is_restartable(
        values in prop::collection::vec(any::<i32>(), 0..30),
        cut in 0usize..30,
    ) {
        let list: SequentialList<i32> = values.iter().copied().collect();

        let partial: Vec<i32> = list.iter().take(cut).copied().collect();
        prop_assert_eq!(&partial[..], &values[..cut.min(values.len())]);

        let first: Vec<i32> = list.iter().copied().collect();
        let second: Vec<i32> = list.iter().copied().collect();
        prop_assert_eq!(&first, &values);
        prop_assert_eq!(&second, &values);
    }
}
