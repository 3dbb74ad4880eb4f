use lazy_stream::{Stream, UtilityStreamExt};
use std::cell::Cell;
use std::rc::Rc;

// Wraps `value` in a producer that bumps `counter` when it runs
fn counted<T: 'static>(counter: &Rc<Cell<usize>>, value: T) -> impl FnOnce() -> T {
    let counter = counter.clone();
    move || {
        counter.set(counter.get() + 1);
        value
    }
}

#[test]
fn test_cons_is_lazy_and_memoized() {
    let counter = Rc::new(Cell::new(0));
    let stream = Stream::cons(counted(&counter, 1), Stream::empty);

    assert_eq!(counter.get(), 0);
    assert_eq!(stream.head_option(), Some(&1));
    assert_eq!(stream.head_option(), Some(&1));
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_shared_tail_is_forced_once() {
    let counter = Rc::new(Cell::new(0));
    let stream = Stream::cons(|| 1, counted(&counter, Stream::of([2, 3])));

    let a = stream.clone();
    let b = stream.clone();
    assert_eq!(a.to_vec(), vec![1, 2, 3]);
    assert_eq!(b.to_vec(), vec![1, 2, 3]);
    assert_eq!(counter.get(), 1);
    assert!(a.tail().ptr_eq(&b.tail()));
}

#[test]
fn test_match_with() {
    let empty: Stream<i32> = Stream::empty();
    assert_eq!(empty.match_with(|| "empty", |_, _| "cons"), "empty");

    let stream = Stream::of([5, 6]);
    let head = stream.match_with(|| 0, |head, _| *head.force());
    assert_eq!(head, 5);
}

#[test]
fn test_empty_queries() {
    let empty: Stream<i32> = Stream::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.head_option(), None);
    assert!(empty.uncons().is_none());
    assert!(empty.tail().is_empty());
    assert!(empty.take(3).is_empty());
    assert!(empty.skip(3).is_empty());
    assert!(empty.map(|x| x + 1).is_empty());
    assert!(empty.filter(|_| true).is_empty());
}

#[test]
fn test_take_lengths() {
    assert_eq!(Stream::of([1, 2, 3]).take(5).to_vec(), vec![1, 2, 3]);
    assert_eq!(Stream::of([1, 2, 3]).take(2).to_vec(), vec![1, 2]);
    assert!(Stream::of([1, 2, 3]).take(0).is_empty());
    assert_eq!(Stream::naturals_from(0).take(10).count(), 10);
}

#[test]
fn test_take_does_not_force_heads() {
    let counter = Rc::new(Cell::new(0));
    let stream = Stream::cons(counted(&counter, 1), || Stream::of([2]));

    let prefix = stream.take(2);
    assert_eq!(counter.get(), 0);
    assert_eq!(prefix.count(), 2);
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_take_stops_at_the_last_requested_node() {
    let steps = Rc::new(Cell::new(0));
    let c = steps.clone();
    let stream = Stream::unfold(0, move |n| {
        c.set(c.get() + 1);
        Some((n, n + 1))
    });

    // The first step runs when the stream is built
    assert_eq!(steps.get(), 1);
    assert_eq!(stream.take(3).to_vec(), vec![0, 1, 2]);
    assert_eq!(steps.get(), 3);
}

#[test]
fn test_skip() {
    let stream = Stream::of([1, 2, 3, 4, 5]);
    assert_eq!(stream.skip(2).to_vec(), vec![3, 4, 5]);
    assert!(stream.skip(0).ptr_eq(&stream));
    assert!(stream.skip(10).is_empty());
}

#[test]
fn test_skip_after_take() {
    let result = Stream::naturals_from(10).take(5).skip(2).to_vec();
    assert_eq!(result, vec![12, 13, 14]);
}

#[test]
fn test_skip_leaves_remainder_unevaluated() {
    let counter = Rc::new(Cell::new(0));
    let c = counter.clone();
    let stream = Stream::of([1, 2, 3, 4]).map(move |x| {
        c.set(c.get() + 1);
        x * 10
    });

    let rest = stream.skip(2);
    assert_eq!(counter.get(), 0);
    assert_eq!(rest.head_option(), Some(&30));
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_take_while_variants() {
    let stream = Stream::of([1, 2, 3, 10, 4]);
    assert_eq!(stream.take_while(|x| *x < 5).to_vec(), vec![1, 2, 3]);
    assert_eq!(stream.take_while_lazy(|x| *x < 5).to_vec(), vec![1, 2, 3]);
    assert!(stream.take_while(|x| *x > 5).is_empty());

    let naturals = Stream::naturals_from(0);
    assert_eq!(naturals.take_while(|n| *n < 4).to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(naturals.take_while_lazy(|n| *n < 4).to_vec(), vec![0, 1, 2, 3]);
}

#[test]
fn test_map_filter_flat_map() {
    let stream = Stream::of([1, 2, 3, 4, 5]);
    assert_eq!(stream.map(|x| x * 2).to_vec(), vec![2, 4, 6, 8, 10]);
    assert_eq!(stream.filter(|x| x % 2 == 0).to_vec(), vec![2, 4]);
    assert_eq!(
        Stream::of([1, 2]).flat_map(|x| Stream::of([*x, *x])).to_vec(),
        vec![1, 1, 2, 2]
    );

    // All three stay productive on infinite input
    let naturals = Stream::naturals_from(0);
    assert_eq!(naturals.map(|n| n * n).take(4).to_vec(), vec![0, 1, 4, 9]);
    assert_eq!(naturals.filter(|n| n % 3 == 0).take(3).to_vec(), vec![0, 3, 6]);
    assert_eq!(
        naturals.flat_map(|n| Stream::of([*n, -*n])).take(5).to_vec(),
        vec![0, 0, 1, -1, 2]
    );
}

#[test]
fn test_flat_map_skips_empty_inner_streams() {
    let result = Stream::of([1, 2, 3, 4])
        .flat_map(|x| if x % 2 == 0 { Stream::of([*x]) } else { Stream::empty() })
        .to_vec();
    assert_eq!(result, vec![2, 4]);
}

#[test]
fn test_map_is_demand_driven() {
    let counter = Rc::new(Cell::new(0));
    let c = counter.clone();
    let mapped = Stream::naturals_from(0).map(move |n| {
        c.set(c.get() + 1);
        n + 1
    });

    assert_eq!(counter.get(), 0);
    assert_eq!(mapped.take(3).to_vec(), vec![1, 2, 3]);
    assert_eq!(counter.get(), 3);

    // Already forced heads are reused
    assert_eq!(mapped.take(3).to_vec(), vec![1, 2, 3]);
    assert_eq!(counter.get(), 3);
}

#[test]
fn test_filter_skips_long_runs() {
    let first = Stream::naturals_from(0)
        .filter(|n| *n > 100_000)
        .head_option()
        .copied();
    assert_eq!(first, Some(100_001));
}

#[test]
fn test_flat_map_skips_long_runs_of_empty_inner_streams() {
    let first = Stream::naturals_from(0)
        .flat_map(|n| {
            if *n > 200_000 {
                Stream::of([*n, -*n])
            } else {
                Stream::empty()
            }
        })
        .take(4)
        .to_vec();
    assert_eq!(first, vec![200_001, -200_001, 200_002, -200_002]);
}

fn total_len<T: AsRef<str>>(stream: &Stream<T>) -> usize {
    let mut total = 0;
    for word in stream {
        total += word.as_ref().len();
    }
    total
}

#[test]
fn test_borrowing_iteration_without_static_bound() {
    let words = Stream::of([String::from("lazy"), String::from("stream")]);
    assert_eq!(total_len(&words), 10);

    let local = String::from("borrowed");
    let fallback: &str = &local;
    let empty: Stream<&str> = Stream::Empty;
    assert_eq!(total_len(&empty), 0);
    assert!(empty.is_empty());
    assert_eq!(empty.head_option().copied().unwrap_or(fallback), "borrowed");
    assert_eq!(empty.iter().count(), 0);
}

#[test]
fn test_fold_right_short_circuits_on_infinite_input() {
    let found = Stream::naturals_from(0).fold_right(|| false, |n, rest| *n == 10 || rest());
    assert!(found);

    let sum = Stream::of([1, 2, 3]).fold_right(|| 0, |n, rest| n + rest());
    assert_eq!(sum, 6);
}

#[test]
fn test_append_is_lazy() {
    let counter = Rc::new(Cell::new(0));
    let joined = Stream::of([1, 2]).append(counted(&counter, Stream::of([3])));

    assert_eq!(joined.take(2).to_vec(), vec![1, 2]);
    assert_eq!(counter.get(), 0);
    assert_eq!(joined.to_vec(), vec![1, 2, 3]);
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_constant_is_self_referential() {
    let sevens = Stream::constant(7);
    assert_eq!(sevens.take(1000).to_vec(), vec![7; 1000]);
    assert!(sevens.tail().ptr_eq(&sevens));
}

#[test]
fn test_cyclic_alternating_stream() {
    let alternating = Stream::cyclic(|| 1, |this| Stream::cons(|| 2, move || this));
    assert_eq!(alternating.take(5).to_vec(), vec![1, 2, 1, 2, 1]);
    assert!(alternating.skip(2).ptr_eq(&alternating));
}

#[test]
fn test_debug_shows_only_forced_prefix() {
    let stream = Stream::of([1, 2, 3]);
    assert_eq!(format!("{:?}", stream), "Stream(1, ..)");

    stream.to_vec();
    assert_eq!(format!("{:?}", stream), "Stream(1, 2, 3)");

    let unforced = Stream::cons(|| 1, Stream::empty);
    assert_eq!(format!("{:?}", unforced), "Stream(?, ..)");
    assert_eq!(format!("{:?}", Stream::<i32>::empty()), "Stream()");
}

#[test]
fn test_iterators() {
    let values: Vec<i64> = Stream::naturals_from(1).take(3).into_iter().collect();
    assert_eq!(values, vec![1, 2, 3]);

    let stream = Stream::of(["a", "b"]);
    let mut seen = Vec::new();
    for item in &stream {
        seen.push(*item);
    }
    assert_eq!(seen, vec!["a", "b"]);
}

#[test]
fn test_dropping_a_long_forced_stream() {
    let stream = Stream::naturals_from(0);
    assert_eq!(stream.nth(200_000), Some(&200_000));
    drop(stream);
}
