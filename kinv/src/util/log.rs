// Logs from dependencies are filtered out; only `kinv*` targets are shown.
pub fn init_simple_logger(l: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    use simplelog::*;

    let config = ConfigBuilder::new()
        .add_filter_allow_str("kinv")
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_level_color(Level::Debug, Some(Color::Cyan))
        .set_level_color(Level::Trace, Some(Color::Green))
        .build();

    TermLogger::init(
        l,
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto
    )
}
