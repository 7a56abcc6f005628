use tokio::time::{sleep, Duration};

use tidewalk::navigation::{AutoAdvanceTimer, ChangeCause};
use tidewalk::persistence::SiteConfig;
use tidewalk::widgets::HeroSlideshow;

const PERIOD: Duration = Duration::from_millis(5000);

#[tokio::test(start_paused = true)]
async fn hero_cycles_back_to_first_slide() {
    let slides = SiteConfig::default().content.hero;
    assert_eq!(slides.len(), 9);
    let mut hero = HeroSlideshow::mount(slides, PERIOD).unwrap();

    sleep(Duration::from_millis(5001)).await;
    let changes = hero.poll();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].cause, ChangeCause::Tick);
    assert_eq!(hero.index(), 1);

    sleep(Duration::from_millis(40000)).await;
    assert_eq!(hero.poll().len(), 8);
    assert_eq!(hero.index(), 0);

    hero.unmount();
}

#[tokio::test(start_paused = true)]
async fn nothing_advances_before_first_period() {
    let mut hero = HeroSlideshow::mount(SiteConfig::default().content.hero, PERIOD).unwrap();

    sleep(Duration::from_millis(4999)).await;
    assert!(hero.poll().is_empty());
    assert_eq!(hero.index(), 0);
}

#[tokio::test(start_paused = true)]
async fn stopped_timer_stays_silent() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let running = AutoAdvanceTimer::create(PERIOD)
        .unwrap()
        .start(move |tick| {
            let _ = tx.send(tick);
        })
        .unwrap();

    sleep(Duration::from_millis(10001)).await;
    let idle = running.stop();
    assert!(idle.is_cancelled());

    sleep(Duration::from_millis(30000)).await;
    let mut ticks = Vec::new();
    while let Ok(tick) = rx.try_recv() {
        ticks.push(tick);
    }
    assert_eq!(ticks.len(), 2);
}

#[test]
fn timer_needs_a_runtime() {
    let idle = AutoAdvanceTimer::create(PERIOD).unwrap();
    assert!(idle.start(|_| {}).is_err());
}
