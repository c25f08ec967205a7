use gx_collections::{slice, Slice};
use gx_test_utils::{DropTracker, Tracked};

fn tracked_slice(tracker: &DropTracker, values: &[i32]) -> Slice<Tracked<i32>> {
    values.iter().map(|&v| tracker.track(v)).collect()
}

fn values(s: &Slice<Tracked<i32>>) -> Vec<i32> {
    s.iter().map(|t| *t.value()).collect()
}

#[test]
fn literal_round_trip() {
    let literal = [4, 8, 15, 16, 23, 42];
    let s = Slice::from_literal(&literal);
    assert_eq!(s.len(), literal.len());
    for (k, expected) in literal.iter().enumerate() {
        assert_eq!(s[k], *expected);
    }
}

#[test]
fn insert_then_remove_scenario() {
    let mut s = slice![1, 2, 3];
    s.insert(1, 99);
    assert_eq!(s, [1, 99, 2, 3]);
    assert_eq!(s.len(), 4);
    s.remove(0);
    assert_eq!(s, [99, 2, 3]);
    assert_eq!(s.len(), 3);
}

#[test]
fn appends_never_corrupt_earlier_elements() {
    const L: usize = 1000;
    let mut s = Slice::new();
    let mut reallocations = 0;
    let mut capacity = s.capacity();
    for i in 0..L {
        s.append(i * 3);
        if s.capacity() != capacity {
            reallocations += 1;
            capacity = s.capacity();
        }
        for k in 0..=i {
            assert_eq!(*s.get(k), k * 3);
        }
    }
    assert_eq!(s.len(), L);
    // ceil(log2(1000)) = 10
    assert!(reallocations <= 11, "{reallocations} reallocations");
}

#[test]
fn copy_is_independent() {
    let mut a = slice![String::from("x"), String::from("y")];
    let mut b = a.clone();
    a.append("z".into());
    a[0].push('!');
    assert_eq!(b.len(), 2);
    assert_eq!(b, [String::from("x"), String::from("y")]);
    b.remove(1);
    assert_eq!(a.len(), 3);
    assert_eq!(a[1], "y");
}

#[test]
fn copy_assign_replaces_contents() {
    let tracker = DropTracker::new();
    let source = tracked_slice(&tracker, &[1, 2, 3]);
    let mut dest = tracked_slice(&tracker, &[9, 9, 9, 9, 9]);
    dest.clone_from(&source);
    assert_eq!(values(&dest), [1, 2, 3]);
    assert_eq!(dest.capacity(), 3);
    // 3 + 5 originals, 3 clones; the 5 old elements are gone.
    assert_eq!(tracker.created(), 11);
    assert_eq!(tracker.live(), 6);
    drop(source);
    drop(dest);
    tracker.assert_all_dropped();
}

#[test]
fn move_empties_source_which_stays_usable() {
    let mut a = slice![1, 2, 3];
    let b = a.take();
    assert_eq!(a.len(), 0);
    assert!(a.as_ptr().is_null());
    assert_eq!(b, [1, 2, 3]);
    a.append(7);
    assert_eq!(a, [7]);
    assert_eq!(b.len(), 3);
}

#[test]
fn mem_take_is_a_move() {
    let mut a = slice![5, 6];
    let b = std::mem::take(&mut a);
    assert!(a.is_empty());
    assert_eq!(b, [5, 6]);
}

#[test]
fn move_does_not_touch_elements() {
    let tracker = DropTracker::new();
    let mut a = tracked_slice(&tracker, &[1, 2, 3]);
    let created = tracker.created();
    let mut b = a.take();
    let mut c = Slice::new();
    c.move_from(&mut b);
    assert_eq!(tracker.created(), created);
    assert_eq!(tracker.dropped(), 0);
    assert_eq!(values(&c), [1, 2, 3]);
    assert!(a.is_empty() && b.is_empty());
    drop(c);
    tracker.assert_all_dropped();
}

#[test]
fn move_assign_releases_destination() {
    let tracker = DropTracker::new();
    let mut src = tracked_slice(&tracker, &[1]);
    let mut dest = tracked_slice(&tracker, &[7, 8]);
    dest.move_from(&mut src);
    assert_eq!(tracker.dropped(), 2);
    assert_eq!(values(&dest), [1]);
    drop(dest);
    drop(src);
    tracker.assert_all_dropped();
}

#[test]
fn every_element_dropped_once_across_growth_and_removal() {
    let tracker = DropTracker::new();
    {
        let mut s = Slice::new();
        for i in 0..37 {
            s.insert(i / 2, tracker.track(i));
        }
        let removed = s.remove(10);
        drop(removed);
        assert_eq!(tracker.dropped(), 1);
        s.remove(0);
        s.remove(s.len() - 1);
        assert_eq!(tracker.live(), 34);
    }
    tracker.assert_all_dropped();
}

#[test]
fn partial_owned_iteration_drops_the_rest() {
    let tracker = DropTracker::new();
    let s = tracked_slice(&tracker, &[1, 2, 3, 4, 5]);
    let mut it = s.into_iter();
    let first = it.next().expect("five elements");
    assert_eq!(*first.value(), 1);
    drop(it);
    assert_eq!(tracker.live(), 1);
    drop(first);
    tracker.assert_all_dropped();
}

#[test]
fn clear_drops_elements_and_keeps_buffer() {
    let tracker = DropTracker::new();
    let mut s = tracked_slice(&tracker, &[1, 2, 3]);
    let capacity = s.capacity();
    s.clear();
    tracker.assert_all_dropped();
    assert_eq!(s.capacity(), capacity);
}

#[test]
fn iteration_follows_index_order() {
    let mut s = slice![1, 2, 3];
    let mut sum = 0;
    for (i, elem) in s.iter().enumerate() {
        assert_eq!(i + 1, *elem);
        sum += elem;
    }
    assert_eq!(sum, 6);
    for elem in &mut s {
        *elem *= 10;
    }
    assert_eq!(s, [10, 20, 30]);
    let empty: Slice<i32> = Slice::new();
    assert_eq!(empty.iter().count(), 0);
}

#[test]
fn append_through_mutable_reference() {
    fn append_forty_two(s: &mut Slice<i32>) {
        s.append(42);
    }
    let mut s = Slice::new();
    s.append(1);
    s.append(2);
    append_forty_two(&mut s);
    assert_eq!(s, [1, 2, 42]);
}

#[test]
fn nested_slices_copy_deeply() {
    let outer = slice![slice![1], Slice::new(), slice![3, 4]];
    assert_eq!(outer.len(), 3);
    assert_eq!(outer[0][0], 1);
    assert_eq!(outer[1].len(), 0);
    assert_eq!(outer[2][1], 4);

    let mut copy = outer.clone();
    copy[2].append(5);
    assert_eq!(outer[2].len(), 2);
    assert_eq!(copy[2], [3, 4, 5]);
    assert_ne!(copy[2].as_ptr(), outer[2].as_ptr());
}

#[test]
fn equality_is_elementwise() {
    assert_eq!(slice![1, 2], Slice::from_literal(&[1, 2]));
    assert_ne!(slice![1, 2], slice![1, 2, 3]);
    assert_ne!(slice![1, 2], slice![2, 1]);
    assert_eq!(Slice::<u8>::new(), Slice::with_capacity(8));
}
