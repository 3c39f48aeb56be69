// SPDX-License-Identifier: MPL-2.0
//! Application root state: a product form hosting one gallery editor.
//!
//! The `App` struct wires together localization, settings and the editor, and
//! translates editor effects into side effects like opening the native file
//! picker or recording a submission.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::gallery::FormSubmission;
use crate::i18n::fluent::I18n;
use crate::ui::gallery_editor::{self, Options as EditorOptions};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    editor: gallery_editor::State,
    /// Effective theme, resolved once at startup.
    theme: Theme,
    /// Most recent submission, shown below the form.
    last_submission: Option<FormSubmission>,
    /// Translation key of a startup warning, if any.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("flow", &self.editor.flow())
            .field("images", &self.editor.collection().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Runs the application until the window closes.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires `Fn` for boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            editor: gallery_editor::State::for_create(EditorOptions::default()),
            theme: ThemeMode::default().iced_theme(),
            last_submission: None,
            warning: None,
        }
    }
}

impl App {
    /// Loads settings and opens the editor in the flow selected by `flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        (Self::with_config(flags, &config, config_warning), Task::none())
    }

    fn with_config(flags: Flags, config: &config::Config, warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang, config);
        let options = EditorOptions::from_config(&config.gallery);

        let editor = match flags.existing.as_deref() {
            Some(images_field) => gallery_editor::State::for_edit(images_field, options),
            None => gallery_editor::State::for_create(options),
        };

        tracing::info!(
            locale = %i18n.current_locale(),
            flow = ?editor.flow(),
            images = editor.collection().len(),
            "application started"
        );

        Self {
            i18n,
            editor,
            theme: config.general.theme_mode.iced_theme(),
            last_submission: None,
            warning,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            editor: &mut self.editor,
            last_submission: &mut self.last_submission,
            warning: &mut self.warning,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            editor: &self.editor,
            last_submission: self.last_submission.as_ref(),
            warning: self.warning.as_deref(),
        })
    }
}
