mod tests {
    use ambient_strip::{
        AnimationScheduler, CompositorConfig, Duration, Instant, LiveListener, MemorySink, Mode,
        PatternLibrary, PermutationTable, Rgb, compose,
    };

    const LEDS: usize = 60;

    static CATALOG: [Mode; 2] = [Mode::Chaser, Mode::XmasStatic];

    type Pair = (
        AnimationScheduler<MemorySink<LEDS>, LEDS>,
        LiveListener<MemorySink<LEDS>, LEDS>,
    );

    fn setup() -> Pair {
        let config = CompositorConfig {
            tick_interval: Duration::from_millis(10),
            idle_threshold: Duration::from_millis(1000),
            fade_window: 0,
            mode_period: 100,
            catalog: &CATALOG,
        };
        let library = PatternLibrary::new(PermutationTable::identity());
        compose(MemorySink::new(), library, &config).unwrap()
    }

    fn lit_pixel(scheduler: &AnimationScheduler<MemorySink<LEDS>, LEDS>) -> Option<usize> {
        scheduler
            .strip()
            .with_sink(|sink| sink.pixels().iter().position(|&p| p == Rgb::new(255, 255, 255)))
    }

    #[test_log::test]
    fn test_animation_paints_while_idle() {
        let (mut scheduler, _listener) = setup();

        for tick in 0..5 {
            let result = scheduler.tick(Instant::from_millis(tick * 10)).unwrap();
            assert!(result.painted);
            assert_eq!(lit_pixel(&scheduler), Some(usize::try_from(tick).unwrap()));
        }
        assert_eq!(scheduler.driver().clock(), 5);
        assert_eq!(scheduler.strip().with_sink(MemorySink::shows), 5);
    }

    #[test]
    fn test_tick_reports_sleep_until_next_frame() {
        let (mut scheduler, _listener) = setup();
        let result = scheduler.tick(Instant::from_millis(1000)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(1010));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        let result = scheduler.tick(Instant::from_millis(1013)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(1020));
        assert_eq!(result.sleep_duration, Duration::from_millis(7));
    }

    #[test_log::test]
    fn test_live_input_suppresses_and_freezes_animation() {
        let (mut scheduler, listener) = setup();
        assert!(scheduler.tick(Instant::from_millis(0)).unwrap().painted);
        assert_eq!(scheduler.driver().clock(), 1);

        listener
            .handle_message("[[1,2,3]]", Instant::from_millis(5))
            .unwrap();

        for ms in (10..=1000).step_by(10) {
            let result = scheduler.tick(Instant::from_millis(ms)).unwrap();
            assert!(!result.painted, "painted at {ms} ms");
        }
        // Exactly at the threshold the strip still belongs to live input
        assert!(!scheduler.tick(Instant::from_millis(1005)).unwrap().painted);

        assert_eq!(scheduler.driver().clock(), 1);
        assert_eq!(scheduler.strip().with_sink(MemorySink::shows), 2);
        assert_eq!(
            scheduler.strip().with_sink(|sink| sink.pixels()[0]),
            Rgb::new(1, 2, 3)
        );

        // Resumes where it stopped
        assert!(scheduler.tick(Instant::from_millis(1006)).unwrap().painted);
        assert_eq!(lit_pixel(&scheduler), Some(1));
        assert_eq!(scheduler.driver().clock(), 2);
        assert_eq!(scheduler.strip().with_sink(MemorySink::shows), 3);
    }

    #[test]
    fn test_animation_switches_modes_after_period() {
        let (mut scheduler, _listener) = setup();
        for n in 0..100 {
            scheduler.tick(Instant::from_millis(n * 10)).unwrap();
        }
        assert_eq!(scheduler.driver().mode(), Mode::XmasStatic);
        assert_eq!(scheduler.driver().clock(), 0);

        scheduler.tick(Instant::from_millis(1000)).unwrap();
        let pixels = scheduler.strip().with_sink(|sink| *sink.pixels());
        assert_eq!(pixels[0], Rgb::new(255, 0, 0));
        assert_eq!(pixels[5], Rgb::new(0, 255, 0));
    }
}
