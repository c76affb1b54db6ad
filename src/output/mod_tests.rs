use super::*;

#[test]
fn output_level_from_str() {
    assert_eq!("none".parse::<OutputLevel>().unwrap(), OutputLevel::None);
    assert_eq!(
        "commits".parse::<OutputLevel>().unwrap(),
        OutputLevel::Commits
    );
    assert_eq!("RULES".parse::<OutputLevel>().unwrap(), OutputLevel::Rules);
}

#[test]
fn output_level_unknown() {
    let err = "verbose".parse::<OutputLevel>().unwrap_err();
    assert!(err.contains("verbose"));
}

#[test]
fn output_level_defaults_to_commits() {
    assert_eq!(OutputLevel::default(), OutputLevel::Commits);
}

#[test]
fn explicit_color_modes_ignore_terminal() {
    assert!(ColorMode::Always.use_colors(false));
    assert!(!ColorMode::Never.use_colors(true));
}

#[test]
fn auto_color_mode_needs_terminal() {
    assert!(!ColorMode::Auto.use_colors(false));
}
