use eframe::egui;
use gopad_core::{
    cmd::Cmd,
    config::editor::Editor,
    engine::Engine,
    keymap::{self, Key},
    theme::ThemeVariant,
};

use crate::{input, shell::EguiShell};

const FILE_MENU: &[Option<Cmd>] = &[
    Some(Cmd::New),
    Some(Cmd::Open),
    None,
    Some(Cmd::Save),
    Some(Cmd::SaveAs),
    None,
    Some(Cmd::ToggleTheme),
    None,
    Some(Cmd::Quit),
];

fn egui_theme(theme: ThemeVariant) -> egui::Theme {
    match theme {
        ThemeVariant::Light => egui::Theme::Light,
        ThemeVariant::Dark => egui::Theme::Dark,
    }
}

pub struct GopadApp {
    engine: Engine,
    shell: EguiShell,
    mappings: Vec<(Key, Cmd)>,
    placeholder: String,
}

impl GopadApp {
    pub fn new(config: Editor) -> Self {
        let mut engine = Engine::new(config.theme);
        let mut shell = EguiShell::default();
        engine.attach(&mut shell);
        Self {
            engine,
            shell,
            mappings: keymap::get_default_mappings(),
            placeholder: config.placeholder,
        }
    }

    fn run_command(&mut self, cmd: Cmd) {
        self.engine.handle_command(cmd, &mut self.shell);
    }

    fn show_menu_bar(&mut self, ctx: &egui::Context) -> Option<Cmd> {
        let mut triggered = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    for entry in FILE_MENU {
                        let Some(cmd) = entry else {
                            ui.separator();
                            continue;
                        };
                        let mut button = egui::Button::new(cmd.label());
                        if let Some(key) = keymap::get_shortcut_for(*cmd, &self.mappings) {
                            button = button.shortcut_text(key.to_string());
                        }
                        if ui.add(button).clicked() {
                            triggered = Some(*cmd);
                            ui.close_menu();
                        }
                    }
                });
            });
        });
        triggered
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) -> Option<Cmd> {
        let mut triggered = None;
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for cmd in [Cmd::New, Cmd::Open, Cmd::Save] {
                    let label = cmd.label().trim_end_matches("...");
                    if ui.button(label).clicked() {
                        triggered = Some(cmd);
                    }
                }
                ui.separator();
                let theme_label = match self.engine.theme() {
                    ThemeVariant::Light => "Dark Mode",
                    ThemeVariant::Dark => "Light Mode",
                };
                if ui.button(theme_label).clicked() {
                    triggered = Some(Cmd::ToggleTheme);
                }

                if self.engine.session.is_dirty() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.weak("modified");
                    });
                }
            });
        });
        triggered
    }

    fn show_editor(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let response = ui.add_sized(
                    ui.available_size(),
                    egui::TextEdit::multiline(&mut self.shell.text)
                        .hint_text(self.placeholder.as_str())
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    self.engine.session.edit(self.shell.text.as_str());
                }
            });
        });
    }

    fn show_errors(&mut self, ctx: &egui::Context) {
        let Some(message) = self.shell.errors.front() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message.as_str());
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.shell.errors.pop_front();
        }
    }

    /// Applies what the core pushed into the shell since the last frame.
    fn flush_shell(&mut self, ctx: &egui::Context) {
        if let Some(title) = self.shell.pending_title.take() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        }

        if let Some(theme) = self.shell.pending_theme.take() {
            ctx.set_theme(egui_theme(theme));
        }

        if self.shell.quit_requested {
            self.shell.quit_requested = false;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for GopadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.flush_shell(ctx);

        let events = ctx.input(|i| i.events.clone());
        let mut commands = input::commands_from_events(&events, &self.mappings);
        commands.extend(self.show_menu_bar(ctx));
        commands.extend(self.show_toolbar(ctx));
        self.show_editor(ctx);
        self.show_errors(ctx);

        for cmd in commands {
            self.run_command(cmd);
        }

        if ctx.input(|i| i.viewport().close_requested()) && self.engine.session.is_dirty() {
            tracing::warn!("window closed with unsaved changes");
        }

        self.flush_shell(ctx);
    }
}
