use crate::config::{Config, ConfigThemeStorage};
use crate::entry::SelectedFile;
use crate::io::worker::{spawn_worker, ReadOutcome, ReadRequest};
use crate::theme::{ThemeMode, ThemeStore};
use crate::view::preview::PreviewCache;
use crate::widget::{FilePreviewWidget, SelectOrigin, UNREADABLE_MESSAGE};
use eframe::egui;
use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;

pub struct PreviewApp {
    pub(crate) widget: FilePreviewWidget<ConfigThemeStorage>,
    pub(crate) syntax_set: SyntaxSet,
    pub(crate) theme_set: ThemeSet,
    pub(crate) preview_cache: RefCell<PreviewCache>,
    read_tx: Sender<ReadRequest>,
    read_rx: Receiver<ReadOutcome>,
}

impl PreviewApp {
    /// `config_intact` is false when the config file exists but failed to
    /// load; theme changes then leave it untouched.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        config_intact: bool,
        initial: Option<PathBuf>,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let system = cc.egui_ctx.system_theme().map(ThemeMode::from_system);
        let timeout = config.preview.message_timeout_secs;
        let limit = config.preview.max_preview_size;
        let mut storage = ConfigThemeStorage::new(config, Config::config_path());
        if !config_intact {
            storage = storage.preserving_file();
        }
        let theme = ThemeStore::initialize(storage, system);
        cc.egui_ctx.set_theme(theme.get().egui_theme());

        let (read_tx, read_rx) = spawn_worker(cc.egui_ctx.clone(), limit);

        let mut app = Self {
            widget: FilePreviewWidget::new(theme, timeout),
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            preview_cache: RefCell::new(PreviewCache::default()),
            read_tx,
            read_rx,
        };

        if let Some(path) = initial {
            app.widget.ui.path_input = path.display().to_string();
            app.open_path(&cc.egui_ctx, path);
        }
        app
    }

    fn select(&mut self, ctx: &egui::Context, file: Option<SelectedFile>, origin: SelectOrigin) {
        if file.is_none() {
            return;
        }
        // Only one preview image is alive at a time.
        ctx.forget_all_images();
        let request = match origin {
            SelectOrigin::Picker => self.widget.select_file(file, origin),
            SelectOrigin::Drop => self.widget.select_dropped(file),
        };
        if let Some(request) = request {
            if self.read_tx.send(request).is_err() {
                log::error!("Reader worker is gone");
                self.widget.show_message("File reader stopped unexpectedly", true);
            }
        }
    }

    pub(crate) fn open_path(&mut self, ctx: &egui::Context, path: PathBuf) {
        if !path.exists() {
            self.widget.show_message("Path does not exist", true);
            return;
        }
        match SelectedFile::from_path(path) {
            Some(file) => self.select(ctx, Some(file), SelectOrigin::Picker),
            None => self.widget.show_message(UNREADABLE_MESSAGE, true),
        }
    }

    pub(crate) fn remove_file(&mut self, ctx: &egui::Context) {
        self.widget.remove_file();
        self.widget.ui.path_input.clear();
        ctx.forget_all_images();
    }

    pub(crate) fn toggle_theme(&mut self, ctx: &egui::Context) {
        let mode = self.widget.toggle_theme();
        ctx.set_theme(mode.egui_theme());
    }

    fn handle_drops(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.first().cloned(),
            )
        });
        self.widget.ui.drop_active = hovering;

        if let Some(dropped) = dropped {
            match SelectedFile::from_dropped(&dropped) {
                Some(file) => {
                    if let Some(path) = file.path() {
                        self.widget.ui.path_input = path.display().to_string();
                    }
                    self.select(ctx, Some(file), SelectOrigin::Drop);
                }
                None => {
                    self.widget.select_dropped(None);
                }
            }
        }
    }

    fn poll_reads(&mut self) {
        while let Ok(outcome) = self.read_rx.try_recv() {
            self.widget.complete_read(outcome);
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.widget.info_visible() {
            self.remove_file(ctx);
        }
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::T)) {
            self.toggle_theme(ctx);
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_reads();
        self.handle_drops(ctx);
        self.handle_keys(ctx);

        self.render_top_bar(ctx);
        self.render_info_panel(ctx);
        self.render_drop_zone(ctx);
        self.render_toast(ctx);
    }
}
