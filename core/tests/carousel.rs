use epicfolio_core::rand::rand_index;
use epicfolio_core::Carousel;

fn settle(carousel: &mut Carousel) {
    assert!(carousel.settle().is_some());
}

#[test]
fn starts_on_first_entry_viewed() {
    let carousel = Carousel::new(6);
    assert_eq!(carousel.current(), 0);
    assert!(carousel.is_viewed(0));
    assert_eq!(carousel.viewed_count(), 1);
    assert!(!carousel.is_transitioning());
    assert!(!carousel.all_viewed());
}

#[test]
fn three_advances_view_first_four_entries() {
    let mut carousel = Carousel::new(6);
    for _ in 0..3 {
        assert!(carousel.advance().is_some());
        settle(&mut carousel);
    }
    assert_eq!(carousel.current(), 3);
    assert_eq!(carousel.viewed_count(), 4);
    for index in 0..4 {
        assert!(carousel.is_viewed(index));
    }
    assert!(!carousel.all_viewed());
}

#[test]
fn advance_wraps_around() {
    let mut carousel = Carousel::new(3);
    for expected in [1, 2, 0, 1] {
        assert_eq!(carousel.advance(), Some(expected));
        settle(&mut carousel);
        assert_eq!(carousel.current(), expected);
    }
}

#[test]
fn retreat_wraps_from_zero() {
    let mut carousel = Carousel::new(6);
    assert_eq!(carousel.retreat(), Some(5));
    settle(&mut carousel);
    assert_eq!(carousel.current(), 5);
    assert!(carousel.is_viewed(5));
}

#[test]
fn calls_during_transition_are_dropped() {
    let mut carousel = Carousel::new(6);
    assert_eq!(carousel.advance(), Some(1));
    assert!(carousel.is_transitioning());
    assert_eq!(carousel.advance(), None);
    assert_eq!(carousel.retreat(), None);
    assert_eq!(carousel.go_to(4), None);
    assert_eq!(carousel.current(), 0);
    assert_eq!(carousel.viewed_count(), 1);
    settle(&mut carousel);
    assert_eq!(carousel.current(), 1);
    assert!(!carousel.is_transitioning());
}

#[test]
fn go_to_rejects_current_and_out_of_range() {
    let mut carousel = Carousel::new(6);
    assert_eq!(carousel.go_to(0), None);
    assert_eq!(carousel.go_to(6), None);
    assert_eq!(carousel.go_to(4), Some(4));
    settle(&mut carousel);
    assert_eq!(carousel.current(), 4);
    assert!(carousel.is_viewed(4));
    assert!(!carousel.is_viewed(3));
}

#[test]
fn settle_on_idle_carousel_is_noop() {
    let mut carousel = Carousel::new(4);
    assert_eq!(carousel.settle(), None);
    assert_eq!(carousel.current(), 0);
}

#[test]
fn all_viewed_after_full_lap_and_stays() {
    let mut carousel = Carousel::new(4);
    for _ in 0..4 {
        carousel.advance();
        settle(&mut carousel);
    }
    assert!(carousel.all_viewed());
    carousel.retreat();
    settle(&mut carousel);
    assert!(carousel.all_viewed());
    assert_eq!(carousel.viewed_count(), 4);
}

#[test]
fn index_stays_in_range_under_random_ops() {
    for len in 1..8usize {
        let mut carousel = Carousel::new(len);
        let mut visited = vec![false; len];
        visited[0] = true;
        for step in 0..400u32 {
            match rand_index(0xC0FF_EE00 ^ len as u32, step, 4) {
                0 => {
                    carousel.advance();
                }
                1 => {
                    carousel.retreat();
                }
                2 => {
                    carousel.go_to(rand_index(0xBEEF, step, len));
                }
                _ => {
                    carousel.settle();
                }
            }
            assert!(carousel.current() < len);
            visited[carousel.current()] = true;
            // Every index ever current must be in the viewed set.
            for (index, seen) in visited.iter().enumerate() {
                if *seen {
                    assert!(carousel.is_viewed(index));
                }
            }
        }
    }
}

#[test]
fn viewed_count_is_monotone() {
    let mut carousel = Carousel::new(6);
    let mut last = carousel.viewed_count();
    for step in 0..200u32 {
        match step % 3 {
            0 => {
                carousel.advance();
            }
            1 => {
                carousel.go_to(rand_index(7, step, 6));
            }
            _ => {
                carousel.settle();
            }
        }
        let count = carousel.viewed_count();
        assert!(count >= last);
        last = count;
    }
}
