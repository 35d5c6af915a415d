//! The stats panel: owner of the confirmed stat values.
//!
//! Every rolling input in the panel is controlled. Change requests arrive as
//! [`Message`]s, [`StatsPanel::update`] applies them, and [`StatsPanel::render`]
//! pushes the confirmed values back into the widgets.

use roll_ui::prelude::*;

use crate::config::{AppConfig, ConfigError, StatRange};
use crate::constants::{PANEL_WIDTH, ROW_HEIGHT};
use crate::message::{Message, StatKind};

/// One stat row: confirmed value, range and its input.
struct Stat {
    kind: StatKind,
    range: StepBounds,
    value: f64,
    bounds: Bounds,
    input: RollingInput<Message>,
}

impl Stat {
    fn new(kind: StatKind, range: &StatRange, config: &AppConfig) -> Result<Self, ConfigError> {
        let bounds = range.step_bounds()?;
        let input = RollingInput::new(WidgetId::new(kind.widget_id()), range.initial)
            .label(kind.label())
            .bounds(bounds)
            .config(config.rolling_input.to_widget_config())
            .on_change(move |value| Message::StatChanged(kind, value));

        Ok(Self {
            kind,
            range: bounds,
            value: range.initial,
            bounds: Bounds::default(),
            input,
        })
    }
}

/// Character stats editor.
pub struct StatsPanel {
    level: Stat,
    refinement: Stat,
}

impl StatsPanel {
    /// Build the panel from configuration and lay it out.
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut panel = Self {
            level: Stat::new(StatKind::Level, &config.stats.level, config)?,
            refinement: Stat::new(StatKind::Refinement, &config.stats.refinement, config)?,
        };
        panel.layout();
        Ok(panel)
    }

    /// Stack the rows vertically.
    pub fn layout(&mut self) {
        let mut y = 0.0;
        for stat in self.rows_mut() {
            let size = stat.input.layout(Size::new(PANEL_WIDTH, ROW_HEIGHT));
            stat.bounds = Bounds::from_size(Point::new(0.0, y), size);
            y += ROW_HEIGHT;
        }
    }

    fn stat(&self, kind: StatKind) -> &Stat {
        match kind {
            StatKind::Level => &self.level,
            StatKind::Refinement => &self.refinement,
        }
    }

    fn stat_mut(&mut self, kind: StatKind) -> &mut Stat {
        match kind {
            StatKind::Level => &mut self.level,
            StatKind::Refinement => &mut self.refinement,
        }
    }

    /// Rows in display order
    fn rows(&self) -> [&Stat; 2] {
        [&self.level, &self.refinement]
    }

    fn rows_mut(&mut self) -> [&mut Stat; 2] {
        [&mut self.level, &mut self.refinement]
    }

    /// Confirmed value of a stat
    pub fn value(&self, kind: StatKind) -> f64 {
        self.stat(kind).value
    }

    /// The input widget of a stat
    pub fn input(&self, kind: StatKind) -> &RollingInput<Message> {
        &self.stat(kind).input
    }

    /// Screen bounds of a stat's input
    pub fn bounds(&self, kind: StatKind) -> Bounds {
        self.stat(kind).bounds
    }

    /// Apply a message to the confirmed values.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::StatChanged(kind, requested) => {
                let stat = self.stat_mut(kind);
                let value = stat.range.clamp(requested);
                log::debug!("{} changed: {} -> {}", kind.label(), stat.value, value);
                stat.value = value;
            }
            Message::MaxStat(kind) => {
                let stat = self.stat_mut(kind);
                let max = stat.range.max();
                if max.is_finite() {
                    log::info!("{} set to max {}", kind.label(), max);
                    stat.value = max;
                } else {
                    log::warn!("{} has no upper limit, ignoring Max", kind.label());
                }
            }
        }
    }

    /// Push the confirmed values into the widgets.
    pub fn render(&mut self, cx: &mut Context) {
        for stat in self.rows_mut() {
            stat.input.render(stat.value, cx);
        }
    }

    /// Deliver an event to one stat's input and apply whatever it asks for.
    pub fn dispatch(&mut self, kind: StatKind, event: &Event, cx: &mut Context) -> EventResult<Message> {
        let stat = self.stat_mut(kind);
        let result = stat.input.on_event(event, stat.bounds, cx);
        if let Some(message) = result.message {
            self.update(message);
            self.render(cx);
        }
        self.flush_focus(cx);
        result
    }

    /// Route a host event to the inputs it concerns. Returns true if any
    /// input suppressed the default action.
    pub fn handle_event(&mut self, event: &Event, cx: &mut Context) -> bool {
        let mut default_prevented = false;
        for kind in self.route(event, cx) {
            default_prevented |= self.dispatch(kind, event, cx).default_prevented;
        }
        default_prevented
    }

    /// Inputs that should see `event`.
    ///
    /// Moves and releases follow the pointer capture, wherever the pointer
    /// is. Keys go to the focused input, and other pointer events are hit
    /// tested. Window focus loss reaches every input.
    fn route(&self, event: &Event, cx: &Context) -> Vec<StatKind> {
        match event {
            Event::MouseMove { .. }
            | Event::MouseRelease { .. }
            | Event::TouchMove { .. }
            | Event::TouchEnd
            | Event::TouchCancel
            | Event::PointerCancel => {
                let captured = cx.captures.captured();
                self.kinds_where(|stat| captured.contains(stat.input.id()))
            }
            Event::KeyPress { .. } => {
                self.kinds_where(|stat| cx.focus.is_focused(stat.input.id()))
            }
            Event::FocusLost | Event::Focus { .. } | Event::Blur { .. } => StatKind::all().to_vec(),
            _ => match event.position() {
                Some(position) => self.kinds_where(|stat| stat.bounds.contains(position)),
                None => Vec::new(),
            },
        }
    }

    fn kinds_where(&self, mut predicate: impl FnMut(&Stat) -> bool) -> Vec<StatKind> {
        self.rows()
            .into_iter()
            .filter(|stat| predicate(*stat))
            .map(|stat| stat.kind)
            .collect()
    }

    /// Run one animation frame, then deliver the focus changes it caused.
    pub fn frame(&mut self, cx: &mut Context) -> usize {
        let ran = cx.run_frame();
        self.flush_focus(cx);
        ran
    }

    /// Deliver recorded focus transitions as focus and blur events.
    fn flush_focus(&mut self, cx: &mut Context) {
        for event in cx.drain_focus_events() {
            for stat in self.rows_mut() {
                let result = stat.input.on_event(&event, stat.bounds, cx);
                debug_assert!(result.message.is_none());
            }
        }
    }

    /// Tear down every input.
    pub fn unmount(&mut self, cx: &mut Context) {
        for stat in self.rows_mut() {
            stat.input.unmount(cx);
        }
    }

    /// One line describing the current values.
    pub fn summary(&self) -> String {
        self.rows()
            .iter()
            .map(|stat| format!("{} {}", stat.kind.label(), stat.input.display_text()))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roll_ui::{AnimationDirection, FocusOptions};

    fn panel_with(level: f64, refinement: f64) -> (StatsPanel, Context) {
        let mut config = AppConfig::default();
        config.stats.level.initial = level;
        config.stats.refinement.initial = refinement;
        (StatsPanel::new(&config).unwrap(), Context::new())
    }

    fn key(key: KeyCode) -> Event {
        Event::KeyPress {
            key,
            modifiers: KeyModifiers::default(),
        }
    }

    fn press_at(point: Point) -> Event {
        Event::MousePress {
            button: MouseButton::Left,
            position: point,
            modifiers: KeyModifiers::default(),
        }
    }

    fn center(bounds: Bounds) -> Point {
        Point::new(
            bounds.x + bounds.width / 2.0,
            bounds.y + bounds.height / 2.0,
        )
    }

    fn focus(panel: &StatsPanel, kind: StatKind, cx: &mut Context) {
        let id = panel.input(kind).id().clone();
        cx.focus.focus(&id, FocusOptions::default());
        cx.drain_focus_events();
    }

    #[test]
    fn test_defaults_from_config() {
        let panel = StatsPanel::new(&AppConfig::default()).unwrap();
        assert_eq!(panel.value(StatKind::Level), 1.0);
        assert_eq!(panel.value(StatKind::Refinement), 1.0);
        assert_eq!(panel.summary(), "Level 1 | Refinement 1");
        assert_eq!(panel.input(StatKind::Level).id().as_str(), "level");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = AppConfig::default();
        config.stats.refinement.step = -1.0;
        assert!(matches!(
            StatsPanel::new(&config),
            Err(ConfigError::InvalidBounds(_))
        ));
    }

    #[test]
    fn test_rows_do_not_overlap() {
        let panel = StatsPanel::new(&AppConfig::default()).unwrap();
        let level = panel.bounds(StatKind::Level);
        let refinement = panel.bounds(StatKind::Refinement);
        assert!(level.y + level.height < refinement.y);
    }

    #[test]
    fn test_keyboard_session() {
        let (mut panel, mut cx) = panel_with(50.0, 1.0);
        focus(&panel, StatKind::Level, &mut cx);

        assert!(panel.handle_event(&key(KeyCode::Up), &mut cx));
        assert_eq!(panel.value(StatKind::Level), 51.0);
        assert_eq!(panel.input(StatKind::Level).value(), 51.0);

        panel.handle_event(&key(KeyCode::PageDown), &mut cx);
        assert_eq!(panel.value(StatKind::Level), 46.0);
        assert_eq!(panel.input(StatKind::Level).animation().epoch, 2);

        panel.frame(&mut cx);
        assert!(panel.input(StatKind::Level).pending_change().is_none());
        assert!(cx.focus.is_focused(panel.input(StatKind::Level).id()));
        assert_eq!(panel.value(StatKind::Refinement), 1.0);
    }

    #[test]
    fn test_refinement_at_max_stays_quiet() {
        let (mut panel, mut cx) = panel_with(1.0, 5.0);
        focus(&panel, StatKind::Refinement, &mut cx);

        let result = panel.dispatch(StatKind::Refinement, &key(KeyCode::Up), &mut cx);
        assert_eq!(result.message, None);
        assert!(result.default_prevented);
        assert_eq!(panel.input(StatKind::Refinement).animation().epoch, 0);
        assert!(panel.input(StatKind::Refinement).pending_change().is_none());
    }

    #[test]
    fn test_wheel_then_focus_restored() {
        let (mut panel, mut cx) = panel_with(50.0, 1.0);
        let wheel = Event::MouseScroll {
            delta: (0.0, -40.0),
            position: center(panel.bounds(StatKind::Level)),
        };

        assert!(panel.handle_event(&wheel, &mut cx));
        assert_eq!(panel.value(StatKind::Level), 51.0);
        assert_eq!(panel.value(StatKind::Refinement), 1.0);

        assert_eq!(panel.frame(&mut cx), 1);
        assert!(cx.focus.is_focused(panel.input(StatKind::Level).id()));
        assert_eq!(cx.focus.take_scroll_target(), None);
    }

    #[test]
    fn test_drag_level_up() {
        let (mut panel, mut cx) = panel_with(10.0, 1.0);
        let start = center(panel.bounds(StatKind::Level));

        panel.handle_event(&press_at(start), &mut cx);
        panel.handle_event(
            &Event::MouseMove {
                position: Point::new(start.x, start.y - 60.0),
            },
            &mut cx,
        );
        panel.handle_event(
            &Event::MouseRelease {
                button: MouseButton::Left,
                position: Point::new(start.x, start.y - 60.0),
            },
            &mut cx,
        );

        assert_eq!(panel.value(StatKind::Level), 13.0);
        assert!(cx.captures.is_empty());
    }

    #[test]
    fn test_pointer_moves_follow_capture() {
        let (mut panel, mut cx) = panel_with(10.0, 1.0);
        let start = center(panel.bounds(StatKind::Level));
        let over_refinement = center(panel.bounds(StatKind::Refinement));
        let moved = Event::MouseMove {
            position: over_refinement,
        };

        assert!(panel.route(&moved, &cx).is_empty());

        panel.handle_event(&press_at(start), &mut cx);
        assert_eq!(panel.route(&moved, &cx), vec![StatKind::Level]);

        // Pointer ends over the refinement input; only level moves
        panel.handle_event(&moved, &mut cx);
        assert_eq!(panel.value(StatKind::Level), 8.0);
        assert_eq!(panel.value(StatKind::Refinement), 1.0);

        panel.handle_event(&Event::PointerCancel, &mut cx);
        assert!(cx.captures.is_empty());
        assert!(!panel.input(StatKind::Level).is_dragging());
        assert!(panel.route(&moved, &cx).is_empty());
    }

    #[test]
    fn test_keys_and_presses_are_routed() {
        let (panel, mut cx) = panel_with(10.0, 1.0);
        assert!(panel.route(&key(KeyCode::Up), &cx).is_empty());

        focus(&panel, StatKind::Refinement, &mut cx);
        assert_eq!(panel.route(&key(KeyCode::Up), &cx), vec![StatKind::Refinement]);

        let press = press_at(center(panel.bounds(StatKind::Level)));
        assert_eq!(panel.route(&press, &cx), vec![StatKind::Level]);
        assert!(panel.route(&press_at(Point::new(500.0, 500.0)), &cx).is_empty());
        assert_eq!(panel.route(&Event::FocusLost, &cx).len(), 2);
    }

    #[test]
    fn test_max_button_is_external_change() {
        let (mut panel, mut cx) = panel_with(1.0, 1.0);

        panel.update(Message::MaxStat(StatKind::Level));
        panel.render(&mut cx);

        let input = panel.input(StatKind::Level);
        assert_eq!(input.value(), 90.0);
        assert_eq!(input.animation().epoch, 1);
        assert_eq!(input.animation().direction, AnimationDirection::FromBelow);
        assert_eq!(cx.frames.pending_count(), 0);
        assert!(cx.focus.focused().is_none());
    }

    #[test]
    fn test_container_clamps_requests() {
        let (mut panel, mut cx) = panel_with(1.0, 1.0);
        panel.update(Message::StatChanged(StatKind::Refinement, 42.0));
        panel.render(&mut cx);
        assert_eq!(panel.value(StatKind::Refinement), 5.0);
    }

    #[test]
    fn test_clicking_other_stat_blurs_first() {
        let (mut panel, mut cx) = panel_with(50.0, 1.0);
        focus(&panel, StatKind::Level, &mut cx);
        panel.handle_event(&key(KeyCode::Up), &mut cx);
        assert!(panel.input(StatKind::Level).pending_change().is_some());

        let refinement = center(panel.bounds(StatKind::Refinement));
        panel.handle_event(&press_at(refinement), &mut cx);

        assert!(panel.input(StatKind::Level).pending_change().is_none());
        assert!(cx.focus.is_focused(panel.input(StatKind::Refinement).id()));

        // The cancelled check must not steal focus back
        panel.frame(&mut cx);
        assert!(cx.focus.is_focused(panel.input(StatKind::Refinement).id()));
    }

    #[test]
    fn test_unmount_leaves_nothing_scheduled() {
        let (mut panel, mut cx) = panel_with(50.0, 1.0);
        focus(&panel, StatKind::Level, &mut cx);
        panel.handle_event(&key(KeyCode::Up), &mut cx);
        panel.unmount(&mut cx);
        assert_eq!(cx.frames.pending_count(), 0);
    }
}
