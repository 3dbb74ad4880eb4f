use lazy_stream::{unfold, List, PullSource, Stream, UtilityStreamExt};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_unfold_finite() {
    let stream = unfold(0, |n| if n < 5 { Some((n, n + 1)) } else { None });
    assert_eq!(stream.to_vec(), vec![0, 1, 2, 3, 4]);
    assert_eq!(stream.to_list(), List::from(vec![0, 1, 2, 3, 4]));
}

#[test]
fn test_unfold_empty() {
    let stream: Stream<i32> = Stream::unfold(0, |_| None);
    assert!(stream.is_empty());
}

#[test]
fn test_unfold_steps_on_demand() {
    let steps = Rc::new(Cell::new(0));
    let c = steps.clone();
    let stream = Stream::unfold(1u32, move |n| {
        c.set(c.get() + 1);
        Some((n, n * 3))
    });

    assert_eq!(steps.get(), 1);
    assert_eq!(stream.nth(3), Some(&27));
    assert_eq!(steps.get(), 4);

    // Walking the same prefix again reuses the forced nodes
    assert_eq!(stream.take(4).to_vec(), vec![1, 3, 9, 27]);
    assert_eq!(steps.get(), 4);
}

#[test]
fn test_naturals_from() {
    assert_eq!(Stream::naturals_from(1).take(5).to_vec(), vec![1, 2, 3, 4, 5]);
    assert_eq!(Stream::naturals_from(-2).take(3).to_vec(), vec![-2, -1, 0]);
}

#[test]
fn test_fibs() {
    assert_eq!(
        Stream::fibs().take(10).to_vec(),
        vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
    );
    // F(0) through F(93) fit in a u64
    assert_eq!(Stream::fibs().count(), 94);
    assert_eq!(Stream::fibs().last(), Some(&12_200_160_415_121_876_738));
}

#[test]
fn test_iterate() {
    let powers = Stream::iterate(1u64, |x| x * 2);
    assert_eq!(powers.take(5).to_vec(), vec![1, 2, 4, 8, 16]);
}

#[test]
fn test_constant_variants_agree() {
    let by_unfold = Stream::constant_unfold('x').take(4).to_vec();
    let by_cycle = Stream::constant('x').take(4).to_vec();
    assert_eq!(by_unfold, vec!['x'; 4]);
    assert_eq!(by_unfold, by_cycle);
}

#[test]
fn test_from_iterator_pulls_on_demand() {
    let pulls = Rc::new(Cell::new(0));
    let c = pulls.clone();
    let stream = Stream::from_iterator((0..).inspect(move |_| c.set(c.get() + 1)));

    assert_eq!(pulls.get(), 1);
    assert_eq!(stream.take(3).to_vec(), vec![0, 1, 2]);
    assert_eq!(pulls.get(), 3);
}

// Counts down to one, then stops
struct Countdown(u32);

impl PullSource for Countdown {
    type Item = u32;

    fn pull(self) -> Option<(u32, Self)> {
        if self.0 == 0 {
            None
        } else {
            Some((self.0, Countdown(self.0 - 1)))
        }
    }
}

#[test]
fn test_from_source() {
    assert_eq!(Stream::from_source(Countdown(3)).to_vec(), vec![3, 2, 1]);
    assert!(Stream::from_source(Countdown(0)).is_empty());
}

#[test]
fn test_collect_and_from_conversions() {
    let collected: Stream<i32> = (1..=3).collect();
    assert_eq!(collected.to_vec(), vec![1, 2, 3]);

    let from_vec = Stream::from(vec!["a", "b"]);
    assert_eq!(from_vec.to_vec(), vec!["a", "b"]);

    let list = List::from(vec![4, 5, 6]);
    assert_eq!(Stream::from(&list).to_vec(), vec![4, 5, 6]);

    let nothing: Stream<i32> = Stream::of(Vec::new());
    assert!(nothing.is_empty());
}

#[test]
fn test_of_accepts_borrowing_iterators() {
    let words = vec![String::from("lazy"), String::from("stream")];
    let stream = Stream::of(words.iter().cloned());
    drop(words);
    assert_eq!(stream.to_vec(), vec!["lazy".to_string(), "stream".to_string()]);
}
