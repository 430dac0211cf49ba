mod tests {
    use ambient_strip::config::{DEFAULT_FADE_WINDOW, DEFAULT_MODE_PERIOD};
    use ambient_strip::{Color, Mode, PatternLibrary, PermutationTable, Rgb};

    const LEDS: usize = 600;

    fn library() -> PatternLibrary<LEDS> {
        PatternLibrary::new(PermutationTable::from_seed(7))
    }

    fn rgb_at(library: &PatternLibrary<LEDS>, mode: Mode, t: u32, i: usize) -> Rgb {
        library.color_at(mode, t, i).to_rgb()
    }

    #[test]
    fn test_every_mode_is_finite() {
        let library = library();
        let max_t = DEFAULT_MODE_PERIOD + DEFAULT_FADE_WINDOW;
        for mode in Mode::CATALOG {
            for t in (0..max_t).step_by(37).chain([max_t - 1]) {
                for i in (0..LEDS).step_by(7).chain([LEDS - 1]) {
                    let color = library.color_at(mode, t, i);
                    assert!(color.is_finite(), "{mode} at t={t}, i={i}: {color:?}");
                }
            }
        }
    }

    #[test]
    fn test_xmas_static_bands() {
        let library = library();
        assert_eq!(rgb_at(&library, Mode::XmasStatic, 0, 0), Rgb::new(255, 0, 0));
        assert_eq!(rgb_at(&library, Mode::XmasStatic, 0, 5), Rgb::new(0, 255, 0));
        assert_eq!(rgb_at(&library, Mode::XmasStatic, 0, 7), Rgb::new(0, 0, 0));
        // Static means static
        assert_eq!(rgb_at(&library, Mode::XmasStatic, 1234, 10), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_xmas_switching_swaps_colors() {
        let library = library();
        assert_eq!(rgb_at(&library, Mode::XmasSwitching, 0, 0), Rgb::new(255, 0, 0));
        assert_eq!(rgb_at(&library, Mode::XmasSwitching, 150, 0), Rgb::new(0, 255, 0));
        assert_eq!(rgb_at(&library, Mode::XmasSwitching, 150, 5), Rgb::new(255, 0, 0));
        assert_eq!(rgb_at(&library, Mode::XmasSwitching, 300, 0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_xmas_left_and_right_move_opposite_ways() {
        let library = library();
        // One pixel of shift after 8 ticks
        assert_eq!(rgb_at(&library, Mode::XmasLeft, 8, 9), Rgb::new(255, 0, 0));
        assert_eq!(rgb_at(&library, Mode::XmasRight, 8, 0), Rgb::new(0, 0, 0));
        assert_eq!(rgb_at(&library, Mode::XmasRight, 8, 1), Rgb::new(255, 0, 0));
        // Negative positions wrap around the band period
        assert_eq!(rgb_at(&library, Mode::XmasRight, 80, 0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_banded_modes_only_use_band_colors() {
        let library = library();
        let allowed = [Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 0)];
        for mode in [Mode::XmasCross, Mode::XmasMomentum] {
            for t in (0..3000).step_by(13) {
                for i in 0..40 {
                    assert!(allowed.contains(&rgb_at(&library, mode, t, i)));
                }
            }
        }
    }

    #[test]
    fn test_sharp_waves_are_narrower() {
        let library = library();
        let lit = |mode: Mode| {
            (0..LEDS)
                .filter(|&i| library.color_at(mode, 100, i).r > 128.0)
                .count()
        };
        assert!(lit(Mode::SharpWaves) < lit(Mode::Waves));
    }

    #[test]
    fn test_tennis_margins_stay_dark() {
        let library = library();
        for t in (0..3000).step_by(11) {
            for i in (0..30).chain(LEDS - 30..LEDS) {
                assert_eq!(rgb_at(&library, Mode::Tennis, t, i), Rgb::new(0, 0, 0));
            }
        }
    }

    #[test]
    fn test_tennis_balls_light_the_playfield() {
        let library = library();
        for t in [0, 50, 777, 2999] {
            let lit = (30..LEDS - 30)
                .filter(|&i| rgb_at(&library, Mode::Tennis, t, i) != Rgb::new(0, 0, 0))
                .count();
            assert!(lit > 0, "no ball visible at t={t}");
        }
    }

    #[test]
    fn test_tennis_short_strip_is_dark() {
        let library = PatternLibrary::<40>::new(PermutationTable::identity());
        for i in 0..40 {
            assert_eq!(library.color_at(Mode::Tennis, 10, i), Color::BLACK);
        }
    }

    #[test]
    fn test_flame_outer_regions_mirror() {
        let library = library();
        for t in [0, 100, 2500] {
            for i in 0..LEDS / 3 {
                assert_eq!(
                    library.color_at(Mode::Flame, t, i),
                    library.color_at(Mode::Flame, t, LEDS - 1 - i),
                );
            }
        }
    }

    #[test]
    fn test_chaser_walks_one_pixel_per_tick() {
        let library = library();
        for t in [0, 1, 599, 600, 601] {
            let lit: Vec<usize> = (0..LEDS)
                .filter(|&i| rgb_at(&library, Mode::Chaser, t, i) == Rgb::new(255, 255, 255))
                .collect();
            assert_eq!(lit, vec![t as usize % LEDS]);
        }
    }

    #[test]
    fn test_starry_night_is_mostly_dark() {
        let library = library();
        let bright = (0..LEDS)
            .filter(|&i| library.color_at(Mode::StarryNight, 1000, i).r > 128.0)
            .count();
        assert!(bright < LEDS / 10, "{bright} bright pixels");
    }

    #[test]
    fn test_rainbow_is_symmetric_around_center() {
        let library = library();
        // Center of an even strip is pixel 300
        for d in 1..250 {
            assert_eq!(
                library.color_at(Mode::Rainbow, 42, 300 - d),
                library.color_at(Mode::Rainbow, 42, 300 + d),
            );
        }
    }

    #[test]
    fn test_permutation_is_a_bijection() {
        let table = PermutationTable::<LEDS>::from_seed(99);
        let mut seen = [false; LEDS];
        for i in 0..LEDS {
            let j = table.get(i);
            assert!(!seen[j]);
            seen[j] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_permutation_seed_is_reproducible() {
        let a = PermutationTable::<LEDS>::from_seed(3);
        let b = PermutationTable::<LEDS>::from_seed(3);
        assert_eq!(a.as_slice(), b.as_slice());
        let library = PatternLibrary::new(a);
        assert_eq!(library.permutation().as_slice(), b.as_slice());
        assert_eq!(PermutationTable::<4>::identity().as_slice(), &[0, 1, 2, 3]);
    }
}
