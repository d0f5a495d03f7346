//! Drives both lists and a `Vec` with the same random operations and checks
//! they never disagree.

use klist_collections::{ArrayList, LinkedList, List, ListError};
use klist_test_log::test;
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

const STEPS: usize = 5_000;
const VALUES: i32 = 16;

/// Applies one random operation to both `list` and `model` and compares the
/// answers.
fn step<L: List>(rng: &mut StdRng, list: &mut L, model: &mut Vec<i32>) {
    let value = rng.gen_range(0..VALUES);
    // Sometimes probe one past the valid range.
    let index = rng.gen_range(0..=model.len() + 1);

    match rng.gen_range(0..10) {
        0 | 1 => {
            let expected = if index <= model.len() {
                model.insert(index, value);
                Ok(())
            } else {
                Err(out_of_bounds(index, model.len()))
            };
            assert_eq!(list.add(index, value), expected);
        }
        2 => {
            model.insert(0, value);
            assert_eq!(list.add_first(value), Ok(()));
        }
        3 => {
            model.push(value);
            assert_eq!(list.add_last(value), Ok(()));
        }
        4 => {
            let expected = if index < model.len() {
                Ok(model.remove(index))
            } else {
                Err(out_of_bounds(index, model.len()))
            };
            assert_eq!(list.remove(index), expected);
        }
        5 => {
            let expected = if model.is_empty() {
                Err(ListError::Empty)
            } else {
                Ok(model.remove(0))
            };
            assert_eq!(list.remove_first(), expected);
        }
        6 => {
            let expected = model.pop().ok_or(ListError::Empty);
            assert_eq!(list.remove_last(), expected);
        }
        7 => {
            let expected = match model.get_mut(index) {
                Some(slot) => Ok(std::mem::replace(slot, value)),
                None => Err(out_of_bounds(index, model.len())),
            };
            assert_eq!(list.set(index, value), expected);
        }
        8 => {
            assert_eq!(list.contains(value), model.contains(&value));
            assert_eq!(list.get_first(), model.first().copied().ok_or(ListError::Empty));
            assert_eq!(list.get_last(), model.last().copied().ok_or(ListError::Empty));
        }
        _ => {
            if rng.gen_ratio(1, 20) {
                model.clear();
                list.clear();
            } else {
                let expected = model
                    .get(index)
                    .copied()
                    .ok_or(out_of_bounds(index, model.len()));
                assert_eq!(list.get(index), expected);
            }
        }
    }

    assert_eq!(list.len(), model.len());
    assert_eq!(list.is_empty(), model.is_empty());
}

fn out_of_bounds(index: usize, size: usize) -> ListError {
    ListError::IndexOutOfBounds { index, size }
}

fn run_model<L: List + Default>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut list = L::default();
    let mut model = vec![];

    for _ in 0..STEPS {
        step(&mut rng, &mut list, &mut model);
    }

    let elements: Vec<i32> = (0..list.len()).map(|i| list.get(i).unwrap()).collect();
    assert_eq!(elements, model);
    debug!(seed, len = model.len(), "Model run finished");
}

#[test]
fn array_list_matches_vec() {
    for seed in 0..8 {
        run_model::<ArrayList>(seed);
    }
}

#[test]
fn linked_list_matches_vec() {
    for seed in 0..8 {
        run_model::<LinkedList>(seed);
    }
}
