use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use slide_countdown::action::Action;
use slide_countdown::core::{CountdownConfig, DigitPair, Slide, TimeUnit};
use slide_countdown::presentation::components::{Component, CountdownSlide};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 8, 27, 12, 0, 0).unwrap()
}

fn mounted(config: CountdownConfig) -> (CountdownSlide, UnboundedReceiver<Action>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut slide = CountdownSlide::new(config).with_clock(now);
    slide.register_action_handler(tx).expect("register");
    slide.mount().expect("mount");
    (slide, rx)
}

/// Drive the slide from its own timer until `pred` holds or the channel closes.
async fn run_until(
    slide: &mut CountdownSlide,
    rx: &mut UnboundedReceiver<Action>,
    pred: impl Fn(&Action) -> bool,
) -> Vec<Action> {
    let mut seen = vec![];
    while let Some(action) = rx.recv().await {
        if let Action::TimerTick(generation) = action {
            slide.handle_tick(generation).expect("tick");
        }
        let done = pred(&action);
        seen.push(action);
        if done {
            break;
        }
    }
    seen
}

#[rstest]
#[case::ninety_minutes("2030-08-27T13:30:00Z", (0, 1, 30, 0))]
#[case::thirty_hours("2030-08-28T18:00:00Z", (1, 6, 0, 0))]
#[case::with_offset("2030-08-28T00:00:00+09:00", (0, 3, 0, 0))]
#[case::past_falls_back("2030-08-27T11:00:00Z", (0, 0, 2, 0))]
#[case::garbage_falls_back("next tuesday", (0, 0, 2, 0))]
#[tokio::test]
async fn test_mount_from_until(#[case] until: &str, #[case] expected: (i64, i64, i64, i64)) {
    let (slide, _rx) = mounted(CountdownConfig::new(0, 0, 2, 0).until(until));
    let countdown = slide.countdown();
    assert_eq!(
        (
            countdown.days(),
            countdown.hours(),
            countdown.minutes(),
            countdown.seconds()
        ),
        expected
    );
}

#[tokio::test(start_paused = true)]
async fn test_deck_drives_slide_to_expiry() {
    let (mut slide, mut rx) = mounted(CountdownConfig::new(0, 0, 1, 5));

    let seen = run_until(&mut slide, &mut rx, |a| *a == Action::CountdownExpired).await;

    let ticks = seen
        .iter()
        .filter(|a| matches!(a, Action::TimerTick(_)))
        .count();
    assert_eq!(ticks, 65);
    assert_eq!(seen.iter().filter(|a| **a == Action::SlideDidLoad).count(), 1);
    assert!(!slide.is_running());
    assert_eq!(slide.countdown().total_seconds(), 0);
    assert_eq!(
        slide.visible_figures().map(|f| f.digits),
        [DigitPair::from((0, 0)); 3]
    );
}

#[tokio::test(start_paused = true)]
async fn test_navigating_away_stops_the_timer() {
    let (mut slide, mut rx) = mounted(CountdownConfig::new(0, 0, 0, 30));
    run_until(&mut slide, &mut rx, |a| matches!(a, Action::TimerTick(_))).await;
    assert_eq!(slide.countdown().total_seconds(), 29);

    let deck: &mut dyn Slide = &mut slide;
    assert!(deck.before_transition(false, false));
    deck.after_transition().expect("after transition");

    tokio::time::sleep(Duration::from_secs(10)).await;
    while let Ok(action) = rx.try_recv() {
        if let Action::TimerTick(generation) = action {
            slide.handle_tick(generation).expect("tick");
        }
    }
    assert!(!slide.is_running());
    assert_eq!(slide.countdown().total_seconds(), 29);
}

#[tokio::test(start_paused = true)]
async fn test_reconfigure_while_running() {
    let (mut slide, mut rx) = mounted(CountdownConfig::new(0, 0, 0, 30));
    run_until(&mut slide, &mut rx, |a| matches!(a, Action::TimerTick(_))).await;

    slide.set_days(2).expect("set days");
    assert_eq!(
        slide.visible_figures().map(|f| f.unit),
        [TimeUnit::Days, TimeUnit::Hours, TimeUnit::Minutes]
    );

    run_until(&mut slide, &mut rx, |a| matches!(a, Action::TimerTick(_))).await;
    assert_eq!(slide.countdown().total_seconds(), 2 * 86400 + 30 - 1);
    assert!(slide.is_running());
}
