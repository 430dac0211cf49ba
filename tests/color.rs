mod tests {
    use ambient_strip::color::{Color, Rgb, mirror_index, quantize, rgb_from_u32};

    #[test]
    fn test_quantize_clamps() {
        assert_eq!(quantize(-50.0), 0);
        assert_eq!(quantize(400.0), 255);
        assert_eq!(quantize(127.4), 127);
        assert_eq!(quantize(127.5), 128);
        assert_eq!(quantize(f32::NAN), 0);
        assert_eq!(quantize(f32::INFINITY), 255);
        assert_eq!(quantize(f32::NEG_INFINITY), 0);
    }

    #[test]
    fn test_color_to_rgb() {
        assert_eq!(
            Color::new(-50.0, 400.0, 12.6).to_rgb(),
            Rgb::new(0, 255, 13)
        );
    }

    #[test]
    fn test_color_lerp() {
        let red = Color::new(255.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 255.0);
        assert_eq!(red.lerp(blue, 0.0), red);
        assert_eq!(red.lerp(blue, 1.0), blue);
        assert_eq!(red.lerp(blue, 0.5).to_rgb(), Rgb::new(128, 0, 128));
    }

    #[test]
    fn test_mirror_index() {
        assert_eq!(mirror_index(0, 4), 0);
        assert_eq!(mirror_index(1, 4), 1);
        assert_eq!(mirror_index(2, 4), 1);
        assert_eq!(mirror_index(3, 4), 0);

        assert_eq!(mirror_index(2, 5), 2);
        assert_eq!(mirror_index(3, 5), 1);
        assert_eq!(mirror_index(4, 5), 0);
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFF6A00), Rgb::new(255, 106, 0));
        assert_eq!(Color::from_rgb(rgb_from_u32(0x0026FF)), Color::new(0.0, 38.0, 255.0));
    }
}
