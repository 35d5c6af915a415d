/// Stat Roller entry point for native builds.
///
/// Replays a short interaction session against the stats panel and logs what
/// the inputs display after every step.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use stat_roller::{AppConfig, logging};

    // The log level lives in the config, so the load outcome is reported
    // only once the logger is up
    let path = AppConfig::default_path();
    let loaded = path.as_deref().map(AppConfig::load);
    let config = match &loaded {
        Some(Ok(Some(config))) => config.clone(),
        _ => AppConfig::default(),
    };
    logging::init(config.preferences.log_level);
    session::report_config(path.as_deref(), loaded, &config);
    log::info!("{} starting", config.app_name);

    if let Err(e) = session::run(&config) {
        log::error!("Session failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod session {
    use std::path::Path;

    use roll_ui::prelude::*;
    use stat_roller::{AppConfig, ConfigError, Message, StatKind, StatsPanel};
    use web_time::Instant;

    /// One scripted step.
    enum Step {
        /// Host event, routed by the panel
        Event(Event),
        /// Message sent by something other than an input (buttons)
        Message(Message),
        /// Advance one animation frame
        Frame,
    }

    fn key(key: KeyCode) -> Step {
        Step::Event(Event::KeyPress {
            key,
            modifiers: KeyModifiers::default(),
        })
    }

    fn center(bounds: Bounds) -> Point {
        Point::new(bounds.x + bounds.width / 2.0, bounds.y + bounds.height / 2.0)
    }

    fn script(panel: &StatsPanel) -> Vec<Step> {
        let level = center(panel.bounds(StatKind::Level));
        let refinement = center(panel.bounds(StatKind::Refinement));
        let dragged = Point::new(level.x, level.y - 60.0);

        vec![
            // Click the level input, then step it with the keyboard
            Step::Event(Event::MousePress {
                button: MouseButton::Left,
                position: level,
                modifiers: KeyModifiers::default(),
            }),
            Step::Event(Event::MouseRelease {
                button: MouseButton::Left,
                position: level,
            }),
            key(KeyCode::Up),
            Step::Frame,
            key(KeyCode::PageUp),
            Step::Frame,
            // Drag it three steps up
            Step::Event(Event::MousePress {
                button: MouseButton::Left,
                position: level,
                modifiers: KeyModifiers::default(),
            }),
            Step::Event(Event::MouseMove { position: dragged }),
            Step::Event(Event::MouseRelease {
                button: MouseButton::Left,
                position: dragged,
            }),
            Step::Frame,
            // Wheel over refinement without focusing it first
            Step::Event(Event::MouseScroll {
                delta: (0.0, -1.0),
                position: refinement,
            }),
            Step::Frame,
            // Max buttons
            Step::Message(Message::MaxStat(StatKind::Refinement)),
            Step::Message(Message::MaxStat(StatKind::Level)),
            Step::Frame,
            // Window loses focus
            Step::Event(Event::FocusLost),
            Step::Frame,
        ]
    }

    /// Log where the config came from, writing defaults when there was none.
    pub fn report_config(
        path: Option<&Path>,
        loaded: Option<Result<Option<AppConfig>, ConfigError>>,
        config: &AppConfig,
    ) {
        match (path, loaded) {
            (Some(path), Some(Ok(Some(_)))) => {
                log::info!("Loaded configuration from {:?}", path);
            }
            (Some(path), Some(Ok(None))) => match config.save(path) {
                Ok(()) => log::info!("No config file found, wrote defaults to {:?}", path),
                Err(e) => log::warn!("Failed to write default config {:?}: {}", path, e),
            },
            (Some(path), Some(Err(e))) => {
                log::warn!("Failed to load config file {:?}: {}, using defaults", path, e);
            }
            _ => log::warn!("Could not determine config directory, using defaults"),
        }
    }

    pub fn run(config: &AppConfig) -> Result<(), ConfigError> {
        let mut cx = Context::new();
        let mut panel = StatsPanel::new(config)?;
        panel.render(&mut cx);
        log::info!("Start: {}", panel.summary());

        for (index, step) in script(&panel).into_iter().enumerate() {
            match step {
                Step::Event(event) => {
                    let prevented = panel.handle_event(&event, &mut cx);
                    log::debug!("Step {}: {:?} (default prevented = {})", index, event, prevented);
                }
                Step::Message(message) => {
                    log::debug!("Step {}: {:?}", index, message);
                    panel.update(message);
                    panel.render(&mut cx);
                }
                Step::Frame => {
                    let ran = panel.frame(&mut cx);
                    log::trace!("Step {}: frame ran {} callbacks", index, ran);
                }
            }

            let now = Instant::now();
            for kind in StatKind::all() {
                let animation = panel.input(*kind).animation();
                log::debug!(
                    "  {}: {} (epoch {}, {:?}, {:.0}% rolled in)",
                    kind.label(),
                    panel.input(*kind).display_text(),
                    animation.epoch,
                    animation.direction,
                    animation.progress(now) * 100.0
                );
            }
        }

        log::info!("End: {}", panel.summary());
        panel.unmount(&mut cx);
        Ok(())
    }
}
