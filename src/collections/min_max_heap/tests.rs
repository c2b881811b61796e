use super::*;
use crate::test_helpers::test_rng;
use crate::CmpFn;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;
use rand::seq::SliceRandom;
use rand::Rng;

/// Panics unless every item dominates its descendants as its level requires.
fn check_invariants<T: fmt::Debug, O>(heap: &MinMaxHeap<T, O>)
where
    O: TotalOrder,
    T: SortableBy<O>,
{
    let len = heap.len();
    for pos in 0..len {
        let polarity = Polarity::of(pos);
        let mut pending = vec![2 * pos + 1, 2 * pos + 2];
        while let Some(desc) = pending.pop() {
            if desc >= len {
                continue;
            }
            assert!(
                !heap.precedes(polarity, desc, pos),
                "{:?} at {} should not sit below {:?} at {} ({:?}-level) in {:?}",
                heap.data[desc],
                desc,
                heap.data[pos],
                pos,
                polarity,
                heap
            );
            pending.push(2 * desc + 1);
            pending.push(2 * desc + 2);
        }
    }
}

fn random_vec(rng: &mut impl Rng, len: usize, range: i32) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(-range..range)).collect()
}

#[test]
fn test_level_and_parent() {
    assert_eq!(level(0), 0);
    assert_eq!(level(1), 1);
    assert_eq!(level(2), 1);
    assert_eq!(level(3), 2);
    assert_eq!(level(6), 2);
    assert_eq!(level(7), 3);
    assert_eq!(level(14), 3);
    assert_eq!(level(15), 4);

    assert_eq!(parent(0), 0);
    assert_eq!(parent(1), 0);
    assert_eq!(parent(2), 0);
    assert_eq!(parent(5), 2);
    assert_eq!(parent(6), 2);
    assert_eq!(parent(13), 6);
    for pos in 1..1000 {
        assert_eq!(level(parent(pos)) + 1, level(pos));
        assert!([2 * parent(pos) + 1, 2 * parent(pos) + 2].contains(&pos));
    }
}

#[test]
fn test_polarity() {
    assert_eq!(Polarity::of(0), Polarity::Min);
    assert_eq!(Polarity::of(2), Polarity::Max);
    assert_eq!(Polarity::of(5), Polarity::Min);
    assert_eq!(Polarity::of(9), Polarity::Max);
    assert_eq!(Polarity::Min.opposite(), Polarity::Max);
    assert!(Polarity::Min.precedes(Ordering::Less));
    assert!(!Polarity::Min.precedes(Ordering::Equal));
    assert!(Polarity::Max.precedes(Ordering::Greater));
    assert!(!Polarity::Max.precedes(Ordering::Less));
}

#[test]
fn test_scenario() {
    let mut heap: MinMaxHeap<i32> = MinMaxHeap::from(vec![1, 2, 3, 4, 5, 6, 7, 8]);
    check_invariants(&heap);
    heap.push(10);
    heap.push(0);
    check_invariants(&heap);

    assert_eq!(heap.pop_max(), Ok(10));
    assert_eq!(heap.pop_min(), Ok(0));
    assert_eq!(heap.pop_max(), Ok(8));
    assert_eq!(heap.pop_min(), Ok(1));
    assert_eq!(heap.len(), 6);
    check_invariants(&heap);
}

#[test]
fn test_single_element() {
    let heap: MinMaxHeap<i32> = MinMaxHeap::from([5]);

    let mut a = heap.clone();
    assert_eq!(a.pop_max(), Ok(5));
    assert!(a.is_empty());

    let mut b = heap.clone();
    assert_eq!(b.pop_min(), Ok(5));
    assert!(b.is_empty());
}

#[test]
fn test_two_elements() {
    let mut heap: MinMaxHeap<i32> = MinMaxHeap::from([9, 4]);
    assert_eq!(heap.peek_min(), Some(&4));
    assert_eq!(heap.peek_max(), Some(&9));
    assert_eq!(heap.pop_max(), Ok(9));
    assert_eq!(heap.peek_max(), Some(&4));
    assert_eq!(heap.pop_max(), Ok(4));
}

#[test]
fn test_empty_errors() {
    let mut heap: MinMaxHeap<i32> = MinMaxHeap::default();

    let err = heap.pop_min().unwrap_err();
    assert_eq!(err.kind(), EmptyHeapErrorKind::Min);
    assert_eq!(err.to_string(), "cannot take the minimum of an empty heap");

    let err = heap.pop_max().unwrap_err();
    assert_eq!(err.kind(), EmptyHeapErrorKind::Max);
    assert_eq!(err.to_string(), "cannot take the maximum of an empty heap");

    assert!(heap.is_empty());
    assert_eq!(heap.peek_min(), None);
    assert_eq!(heap.peek_max(), None);

    heap.push(3);
    heap.push(1);
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.pop_max(), Ok(3));
    assert_eq!(heap.pop_min(), Ok(1));
    assert!(heap.pop_min().is_err());
}

#[test]
fn test_from_vec_any_shape() {
    let mut rng = test_rng();
    for len in 0..130 {
        let data = random_vec(&mut rng, len, 50);
        let heap: MinMaxHeap<i32> = MinMaxHeap::from(data.clone());
        assert_eq!(heap.len(), len);
        check_invariants(&heap);

        let mut expected = data;
        expected.sort();
        assert_eq!(heap.peek_min(), expected.first());
        assert_eq!(heap.peek_max(), expected.last());
        assert_eq!(heap.into_sorted_vec(), expected);
    }
}

#[test]
fn test_from_sorted_input() {
    let ascending: MinMaxHeap<i32> = (0..100).collect();
    check_invariants(&ascending);
    let descending: MinMaxHeap<i32> = (0..100).rev().collect();
    check_invariants(&descending);
    assert_eq!(ascending.into_sorted_vec(), descending.into_sorted_vec());
}

#[test]
fn test_push_keeps_invariants() {
    let mut rng = test_rng();
    let mut heap: MinMaxHeap<i32> = MinMaxHeap::default();
    for i in 0..300 {
        heap.push(rng.gen_range(-1000..1000));
        assert_eq!(heap.len(), i + 1);
        check_invariants(&heap);
    }
}

#[test]
fn test_pop_min_ascending() {
    let mut rng = test_rng();
    let mut data: Vec<i32> = (0..256).collect();
    data.shuffle(&mut rng);

    let mut heap: MinMaxHeap<i32> = MinMaxHeap::default();
    heap.extend(data.iter());

    let mut last = i32::MIN;
    while let Ok(item) = heap.pop_min() {
        assert!(item >= last);
        last = item;
        check_invariants(&heap);
    }
    assert_eq!(last, 255);
}

#[test]
fn test_pop_min_settles_below_grandchild() {
    // Four full levels, so the item moved to the root after a removal has to
    // sink past the first grandchild it swaps with.
    for n in 15..40 {
        let mut heap: MinMaxHeap<i32> = (0..n).collect();
        for expected in 0..n {
            assert_eq!(heap.pop_min(), Ok(expected));
            check_invariants(&heap);
        }
    }
}

#[test]
fn test_pop_max_descending() {
    let mut rng = test_rng();
    let data = random_vec(&mut rng, 257, 20);
    let mut heap: MinMaxHeap<i32> = MinMaxHeap::from(data.clone());

    let mut popped = Vec::new();
    while let Ok(item) = heap.pop_max() {
        popped.push(item);
        check_invariants(&heap);
    }

    let mut expected = data;
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(popped, expected);
}

#[test]
fn test_round_trip() {
    let mut rng = test_rng();
    let data = random_vec(&mut rng, 500, 1000);

    let mut heap: MinMaxHeap<i32> = MinMaxHeap::default();
    for &x in &data {
        heap.push(x);
    }
    let popped: Vec<i32> = (0..data.len()).map(|_| heap.pop_min().unwrap()).collect();

    let mut expected = data;
    expected.sort();
    assert_eq!(popped, expected);
    assert!(heap.is_empty());
}

#[test]
fn test_mixed_operations_against_model() {
    let mut rng = test_rng();
    for _ in 0..20 {
        let mut heap: MinMaxHeap<i32> = MinMaxHeap::from(random_vec(&mut rng, 40, 30));
        let mut model = heap.clone().into_vec();
        model.sort();
        let (mut pushes, mut pops) = (model.len(), 0);

        for _ in 0..400 {
            match rng.gen_range(0..5) {
                0 | 1 => {
                    let x = rng.gen_range(-30..30);
                    heap.push(x);
                    let at = model.partition_point(|&y| y < x);
                    model.insert(at, x);
                    pushes += 1;
                }
                2 => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    assert_eq!(heap.pop_min().ok(), expected);
                    pops += expected.is_some() as usize;
                }
                _ => {
                    let expected = model.pop();
                    assert_eq!(heap.pop_max().ok(), expected);
                    pops += expected.is_some() as usize;
                }
            }
            check_invariants(&heap);
            assert_eq!(heap.len(), pushes - pops);
            assert_eq!(heap.peek_min(), model.first());
            assert_eq!(heap.peek_max(), model.last());
        }
    }
}

#[test]
fn test_duplicates() {
    let mut heap: MinMaxHeap<i32> = MinMaxHeap::from(vec![3; 20]);
    heap.extend([1, 1, 5, 5, 3]);
    check_invariants(&heap);
    assert_eq!(heap.pop_max(), Ok(5));
    assert_eq!(heap.pop_max(), Ok(5));
    assert_eq!(heap.pop_min(), Ok(1));
    assert_eq!(heap.pop_min(), Ok(1));
    while let Ok(x) = heap.pop_max() {
        assert_eq!(x, 3);
        check_invariants(&heap);
    }
}

#[test]
fn test_descending_closure_order() {
    let descending = CmpFn::new(|a: &i32, b: &i32| b.cmp(a));
    let mut heap = MinMaxHeap::from_vec(descending, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    heap.push(10);
    heap.push(0);
    check_invariants(&heap);

    // The order is reversed, so each end yields the other extreme.
    assert_eq!(heap.pop_max(), Ok(0));
    assert_eq!(heap.pop_min(), Ok(10));
    assert_eq!(heap.pop_max(), Ok(1));
    assert_eq!(heap.pop_min(), Ok(8));
}

#[derive(Debug, Clone, PartialEq)]
struct Task {
    name: String,
    priority: u8,
}

struct ByPriority;

impl TotalOrder for ByPriority {
    type OrderedType = u8;

    fn cmp(&self, this: &u8, that: &u8) -> Ordering {
        this.cmp(that)
    }
}

impl SortableBy<ByPriority> for Task {
    fn key(&self) -> &u8 {
        &self.priority
    }
}

fn task(name: &str, priority: u8) -> Task {
    Task { name: name.to_string(), priority }
}

#[test]
fn test_key_extraction() {
    let mut heap = MinMaxHeap::new(ByPriority);
    heap.push(task("write", 4));
    heap.push(task("review", 9));
    heap.push(task("lunch", 1));
    heap.push(task("deploy", 7));
    check_invariants(&heap);

    assert_eq!(heap.pop_max().unwrap().name, "review");
    assert_eq!(heap.pop_min().unwrap().name, "lunch");
    assert_eq!(heap.peek_max().map(|t| t.priority), Some(7));
    assert_eq!(heap.peek_min().map(|t| t.priority), Some(4));
}

#[test]
fn test_borrowed_keys() {
    let words = ["oak", "ash", "elm", "yew", "fir"].map(String::from);
    let mut heap: MinMaxHeap<String, OrdTotalOrder<str>> = words.into_iter().collect();
    assert_eq!(heap.pop_min().as_deref(), Ok("ash"));
    assert_eq!(heap.pop_max().as_deref(), Ok("yew"));
}

struct Flippable(bool);

impl TotalOrder for Flippable {
    type OrderedType = i32;

    fn cmp(&self, this: &i32, that: &i32) -> Ordering {
        if self.0 {
            that.cmp(this)
        } else {
            this.cmp(that)
        }
    }
}

impl SortableBy<Flippable> for i32 {
    fn key(&self) -> &i32 {
        self
    }
}

#[test]
fn test_order_mut_rebuilds() {
    let mut rng = test_rng();
    let mut heap = MinMaxHeap::from_vec(Flippable(false), random_vec(&mut rng, 100, 100));
    check_invariants(&heap);

    (*heap.order_mut()).0 = true;
    assert!(heap.order().0);
    check_invariants(&heap);

    let mut last = i32::MAX;
    while let Ok(x) = heap.pop_min() {
        assert!(x <= last);
        last = x;
    }
}

#[test]
fn test_order_mut_unchecked() {
    let mut heap = MinMaxHeap::from_vec(Flippable(false), vec![1, 2, 3]);
    // Flipping an order over a heap of equal items leaves it valid.
    heap.retain(|&x| x == 2);
    heap.order_mut_unchecked().0 = true;
    check_invariants(&heap);
    assert_eq!(heap.pop_min(), Ok(2));
}

#[test]
fn test_append() {
    let mut rng = test_rng();
    let a_data = random_vec(&mut rng, 37, 100);
    let b_data = random_vec(&mut rng, 90, 100);

    let mut a: MinMaxHeap<i32> = MinMaxHeap::from(a_data.clone());
    let mut b: MinMaxHeap<i32> = MinMaxHeap::from(b_data.clone());
    a.append(&mut b);
    check_invariants(&a);
    assert!(b.is_empty());

    let mut expected = a_data;
    expected.extend(b_data);
    expected.sort();
    assert_eq!(a.into_sorted_vec(), expected);
}

#[test]
fn test_append_to_empty() {
    let mut a: MinMaxHeap<i32> = MinMaxHeap::default();
    let mut b: MinMaxHeap<i32> = MinMaxHeap::from([-20, 5, 43]);
    a.append(&mut b);
    assert_eq!(a.into_sorted_vec(), [-20, 5, 43]);
    assert!(b.is_empty());
}

#[test]
fn test_retain() {
    let mut rng = test_rng();
    let data = random_vec(&mut rng, 200, 500);
    let mut heap: MinMaxHeap<i32> = MinMaxHeap::from(data.clone());

    heap.retain(|x| x % 3 != 0);
    check_invariants(&heap);

    let mut expected: Vec<i32> = data.into_iter().filter(|x| x % 3 != 0).collect();
    expected.sort();
    assert_eq!(heap.into_sorted_vec(), expected);
}

#[test]
fn test_iter_and_drain() {
    let data = vec![5, 9, 1, 7, 3, 8];
    let mut heap: MinMaxHeap<i32> = MinMaxHeap::from(data.clone());

    let mut seen: Vec<i32> = heap.iter().copied().collect();
    seen.sort();
    let mut expected = data.clone();
    expected.sort();
    assert_eq!(seen, expected);
    assert_eq!(heap.iter().len(), data.len());
    assert_eq!((&heap).into_iter().count(), data.len());
    assert_eq!(heap.as_slice().len(), data.len());

    let mut drained: Vec<i32> = heap.drain().collect();
    drained.sort();
    assert_eq!(drained, expected);
    assert!(heap.is_empty());

    heap.push(4);
    check_invariants(&heap);
    assert_eq!(heap.pop_max(), Ok(4));
}

#[test]
fn test_into_iter() {
    let heap: MinMaxHeap<i32> = MinMaxHeap::from([2, 4, 6, 8]);
    let mut items: Vec<i32> = heap.clone().into_iter().collect();
    items.sort();
    assert_eq!(items, [2, 4, 6, 8]);

    let mut back: Vec<i32> = heap.into_iter().rev().collect();
    back.sort();
    assert_eq!(back, [2, 4, 6, 8]);
}

#[test]
fn test_clear_and_capacity() {
    let mut heap: MinMaxHeap<i32> = MinMaxHeap::with_capacity(Default::default(), 16);
    assert!(heap.capacity() >= 16);
    heap.extend(0..10);
    heap.clear();
    assert!(heap.is_empty());
    assert!(heap.pop_min().is_err());

    heap.reserve(32);
    assert!(heap.capacity() >= 32);
    heap.reserve_exact(40);
    assert!(heap.capacity() >= 40);
    heap.push(1);
    heap.shrink_to_fit();
    assert!(heap.capacity() >= 1);
    assert_eq!(heap.pop_min(), Ok(1));
}

#[test]
fn test_debug() {
    let heap: MinMaxHeap<i32> = MinMaxHeap::from([1]);
    assert_eq!(format!("{:?}", heap), "[1]");
    let empty: MinMaxHeap<i32> = MinMaxHeap::default();
    assert_eq!(format!("{:?}", empty), "[]");
}

#[test]
fn test_clone_is_independent() {
    let mut a: MinMaxHeap<i32> = MinMaxHeap::from([3, 1, 2]);
    let mut b = a.clone();
    assert_eq!(a.pop_min(), Ok(1));
    assert_eq!(b.len(), 3);
    b.clone_from(&a);
    assert_eq!(b.len(), 2);
    assert_eq!(b.pop_max(), Ok(3));
}

#[test]
fn test_vec_conversion() {
    let heap: MinMaxHeap<i32> = MinMaxHeap::from(vec![4, 8, 2]);
    let mut vec: Vec<i32> = heap.into();
    vec.sort();
    assert_eq!(vec, [2, 4, 8]);
}
