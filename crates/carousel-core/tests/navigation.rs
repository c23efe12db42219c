use carousel_core::carousel::{pagination, Carousel, HeadlessViewport, IndexTranslator};
use carousel_core::CarouselConfig;

fn config(show: usize, scroll: usize, infinite: bool) -> CarouselConfig {
    CarouselConfig {
        slides_to_show: show,
        slides_to_scroll: scroll,
        infinite,
        animation_duration_ms: 500,
    }
}

fn mount(
    total: usize,
    show: usize,
    scroll: usize,
    infinite: bool,
) -> Carousel<usize, HeadlessViewport> {
    Carousel::new(
        (0..total).collect(),
        config(show, scroll, infinite),
        HeadlessViewport,
    )
    .unwrap()
}

fn settle(carousel: &mut Carousel<usize, HeadlessViewport>) {
    if let Some(deadline) = carousel.settle_deadline() {
        carousel.poll(deadline);
    }
}

#[test]
fn wraparound_in_both_directions_for_many_sizes() {
    for total in 2..30 {
        for show in 1..total {
            for scroll in 1..=show + 2 {
                let mut c = mount(total, show, scroll, true);
                let max = c.max_logical_index();

                // walk to the end, then step once more
                while c.logical_index() != max {
                    assert!(c.request_next());
                    settle(&mut c);
                }
                assert!(c.request_next());
                settle(&mut c);
                assert_eq!(
                    c.logical_index(),
                    0,
                    "next wrap total={total} show={show} scroll={scroll}"
                );

                assert!(c.request_prev());
                settle(&mut c);
                assert_eq!(
                    c.logical_index(),
                    max,
                    "prev wrap total={total} show={show} scroll={scroll}"
                );

                assert!(!c.is_at_start());
                assert!(!c.is_at_end());
                assert!(c.visible().iter().all(|s| !s.is_clone));
            }
        }
    }
}

#[test]
fn finite_mode_stays_in_range_for_many_sizes() {
    for total in 0..25 {
        for show in 1..8 {
            for scroll in 1..=show + 2 {
                let mut c = mount(total, show, scroll, false);
                let max = c.max_logical_index();
                assert_eq!(max, total.saturating_sub(show));

                // forward past the end, then back past the start
                let walk = max / scroll + 2;
                for direction in [true, false] {
                    for _ in 0..walk {
                        if direction {
                            c.request_next();
                        } else {
                            c.request_prev();
                        }
                        settle(&mut c);

                        let logical = c.logical_index();
                        let ctx = format!("total={total} show={show} scroll={scroll}");
                        assert!(logical <= max, "{ctx}");
                        assert!(c.physical_index() + show <= c.track().len().max(show), "{ctx}");
                        assert_eq!(c.is_at_start(), logical == 0, "{ctx}");
                        assert_eq!(c.is_at_end(), logical == max, "{ctx}");
                    }
                    if direction {
                        assert!(c.is_at_end());
                        assert!(!c.request_next());
                    } else {
                        assert!(c.is_at_start());
                        assert!(!c.request_prev());
                    }
                }
            }
        }
    }
}

#[test]
fn scenario_ten_items_six_visible() {
    let mut c = mount(10, 6, 6, true);
    assert_eq!(c.logical_index(), 0);

    c.request_next();
    settle(&mut c);
    assert_eq!(c.logical_index(), 4);

    c.request_next();
    settle(&mut c);
    assert_eq!(c.logical_index(), 0);

    let mut c = mount(10, 6, 6, false);
    c.request_next();
    settle(&mut c);
    assert!(c.is_at_end());
    assert!(!c.request_next());
    assert_eq!(c.logical_index(), 4);
}

#[test]
fn second_request_while_animating_has_no_effect() {
    let mut once = mount(25, 4, 3, true);
    let mut twice = mount(25, 4, 3, true);

    once.request_next();
    settle(&mut once);

    twice.request_next();
    twice.request_next();
    settle(&mut twice);

    assert_eq!(once.status(), twice.status());
}

#[test]
fn pagination_example() {
    let c = mount(20, 6, 6, true);
    assert_eq!(c.max_logical_index(), 14);
    assert_eq!(c.pages(), &[0, 6, 12, 14]);
    assert_eq!(pagination::pages(14, 6), vec![0, 6, 12, 14]);
}

#[test]
fn round_trip_logical_physical() {
    for total in 1..20 {
        for show in 1..8 {
            let t = IndexTranslator::new(total, show, true);
            for x in 0..=t.max_logical() {
                assert_eq!(t.to_logical(t.to_physical(x)), x as isize);
            }
        }
    }
}

#[test]
fn resize_mid_animation_recovers() {
    let mut c = mount(12, 4, 4, true);
    c.request_prev();
    let deadline = c.settle_deadline().unwrap();

    c.resize(2).unwrap();
    c.resize(5).unwrap();
    assert!(c.is_transitioning());

    c.poll(deadline);
    assert!(!c.is_transitioning());
    assert!(c.logical_index() <= c.max_logical_index());
    assert_eq!(c.logical_index(), 7);
}
