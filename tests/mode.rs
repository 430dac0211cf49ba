mod tests {
    use ambient_strip::Mode;

    #[test]
    fn test_mode_catalog_order() {
        assert_eq!(Mode::CATALOG[0], Mode::XmasStatic);
        assert_eq!(Mode::CATALOG[1], Mode::XmasSwitching);
        assert_eq!(Mode::CATALOG[14], Mode::StarryNight);
        assert_eq!(Mode::CATALOG[15], Mode::Inigo);
    }

    #[test]
    fn test_mode_ids_follow_catalog() {
        for (index, mode) in Mode::CATALOG.into_iter().enumerate() {
            let id = u8::try_from(index).unwrap();
            assert_eq!(mode as u8, id);
            assert_eq!(Mode::from_raw(id), Some(mode));
        }
        assert_eq!(Mode::from_raw(16), None);
    }

    #[test]
    fn test_mode_parse_names() {
        assert_eq!(Mode::parse_from_str("xmas static"), Some(Mode::XmasStatic));
        assert_eq!(Mode::parse_from_str("starry night"), Some(Mode::StarryNight));
        assert_eq!(Mode::parse_from_str("inigo"), Some(Mode::Inigo));
        assert_eq!(Mode::parse_from_str("xmas_static"), None);
        assert_eq!(Mode::parse_from_str(""), None);
    }

    #[test]
    fn test_mode_names_are_unique() {
        for mode in Mode::CATALOG {
            assert_eq!(Mode::parse_from_str(mode.as_str()), Some(mode));
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }
}
