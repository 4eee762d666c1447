use crate::reorder::{DragItem, DropIndicator, DropPlacement};
use crate::{Clipboard, Document, EditorConfig, Id, Notice, Result, Session, statics};
use eframe::egui;

pub fn run_gui(config: EditorConfig) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 900.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let theme_dark = config.dark_theme;
            cc.egui_ctx.set_visuals(if theme_dark {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Ok(Box::new(StyleOrganizerApp {
                session: Session::new(config),
                theme_dark,
            }))
        }),
    )
}

/// Writes through egui's platform output; the host platform performs the copy.
struct EguiClipboard<'a>(&'a egui::Context);

impl Clipboard for EguiClipboard<'_> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.0.copy_text(text.to_string());
        Ok(())
    }
}

struct StyleOrganizerApp {
    session: Session,
    theme_dark: bool,
}

/// Edits collected while rendering and applied once the frame's UI is built.
#[derive(Clone, Debug, PartialEq)]
enum EditorAction {
    AddTarget,
    RenameTarget(Id, String),
    DeleteTarget(Id),
    DuplicateTarget(Id),
    AddStyle(Id),
    UpdateStyle(Id, Id, String),
    DeleteStyle(Id, Id),
    DuplicateStyle(Id, Id),
    StartDrag(DragItem),
}

/// Per-frame drag bookkeeping: what is being dragged, where the pointer is, and the row
/// under it.
struct DragFrame {
    source: Option<DragItem>,
    pointer: Option<egui::Pos2>,
    hovered: Option<(DragItem, DropPlacement)>,
}

impl DragFrame {
    /// Report a rendered row. Style rows sit inside target rows, so a target row only takes
    /// the hover when nothing inside it did, or when a target is being dragged.
    fn offer(&mut self, item: DragItem, rect: egui::Rect) {
        let Some(source) = self.source else {
            return;
        };
        let Some(pointer) = self.pointer.filter(|p| rect.contains(*p)) else {
            return;
        };
        let take = match item {
            DragItem::Style { .. } => true,
            DragItem::Target { .. } => {
                self.hovered.is_none() || matches!(source, DragItem::Target { .. })
            }
        };
        if take {
            let placement = DropPlacement::from_pointer(rect.top(), rect.height(), pointer.y);
            self.hovered = Some((item, placement));
        }
    }
}

impl StyleOrganizerApp {
    fn apply_action(session: &mut Session, action: EditorAction) {
        match action {
            EditorAction::AddTarget => session.add_target(),
            EditorAction::RenameTarget(id, name) => session.update_target_name(id, &name),
            EditorAction::DeleteTarget(id) => session.delete_target(id),
            EditorAction::DuplicateTarget(id) => session.duplicate_target(id),
            EditorAction::AddStyle(id) => session.add_style(id),
            EditorAction::UpdateStyle(t, s, value) => session.update_style_value(t, s, &value),
            EditorAction::DeleteStyle(t, s) => session.delete_style(t, s),
            EditorAction::DuplicateStyle(t, s) => session.duplicate_style(t, s),
            EditorAction::StartDrag(item) => session.drag_start(item),
        }
    }

    fn paint_indicator(
        ui: &egui::Ui,
        indicator: Option<DropIndicator>,
        item: DragItem,
        rect: egui::Rect,
    ) {
        let Some(indicator) = indicator else {
            return;
        };
        if indicator.item != item {
            return;
        }
        let y = match indicator.placement {
            DropPlacement::Before => rect.top() - 2.0,
            DropPlacement::After => rect.bottom() + 2.0,
        };
        let stroke = egui::Stroke::new(3.0, ui.visuals().selection.bg_fill);
        ui.painter().hline(rect.x_range(), y, stroke);
    }

    fn drag_handle(ui: &mut egui::Ui) -> egui::Response {
        ui.add(egui::Label::new(statics::EN_GLYPH_DRAG_HANDLE).sense(egui::Sense::drag()))
            .on_hover_cursor(egui::CursorIcon::Grab)
    }

    fn render_style_row(
        ui: &mut egui::Ui,
        target_id: Id,
        style: &crate::Style,
        indicator: Option<DropIndicator>,
        actions: &mut Vec<EditorAction>,
        drag: &mut DragFrame,
    ) {
        let item = DragItem::Style {
            target: target_id,
            id: style.id,
        };
        let row = ui.horizontal(|ui| {
            if Self::drag_handle(ui).drag_started() {
                actions.push(EditorAction::StartDrag(item));
            }
            let mut value = style.value.clone();
            let edit = ui.add(
                egui::TextEdit::singleline(&mut value)
                    .hint_text(statics::EN_HINT_STYLE_VALUE)
                    .desired_width((ui.available_width() - 150.0).max(80.0)),
            );
            if edit.changed() {
                actions.push(EditorAction::UpdateStyle(target_id, style.id, value));
            }
            if ui.small_button(statics::EN_BTN_DUPLICATE).clicked() {
                actions.push(EditorAction::DuplicateStyle(target_id, style.id));
            }
            if ui.small_button(statics::EN_BTN_DELETE).clicked() {
                actions.push(EditorAction::DeleteStyle(target_id, style.id));
            }
        });
        let rect = row.response.rect;
        drag.offer(item, rect);
        Self::paint_indicator(ui, indicator, item, rect);
    }

    fn render_target(
        ui: &mut egui::Ui,
        target: &crate::Target,
        indicator: Option<DropIndicator>,
        actions: &mut Vec<EditorAction>,
        drag: &mut DragFrame,
    ) {
        let item = DragItem::Target { id: target.id };
        let frame = egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                if Self::drag_handle(ui).drag_started() {
                    actions.push(EditorAction::StartDrag(item));
                }
                let mut name = target.name.clone();
                let edit = ui.add(
                    egui::TextEdit::singleline(&mut name)
                        .hint_text(statics::EN_HINT_TARGET_NAME)
                        .desired_width(240.0),
                );
                if edit.changed() {
                    actions.push(EditorAction::RenameTarget(target.id, name));
                }
                if ui.small_button(statics::EN_BTN_ADD_STYLE).clicked() {
                    actions.push(EditorAction::AddStyle(target.id));
                }
                if ui.small_button(statics::EN_BTN_DUPLICATE_TARGET).clicked() {
                    actions.push(EditorAction::DuplicateTarget(target.id));
                }
                if ui.small_button(statics::EN_BTN_DELETE_TARGET).clicked() {
                    actions.push(EditorAction::DeleteTarget(target.id));
                }
            });
            ui.indent(("styles", target.id), |ui| {
                for style in &target.styles {
                    Self::render_style_row(ui, target.id, style, indicator, actions, drag);
                }
            });
        });
        let rect = frame.response.rect;
        drag.offer(item, rect);
        Self::paint_indicator(ui, indicator, item, rect);
    }

    fn render_editor(
        ui: &mut egui::Ui,
        doc: &Document,
        indicator: Option<DropIndicator>,
        actions: &mut Vec<EditorAction>,
        drag: &mut DragFrame,
    ) {
        ui.heading(statics::EN_HEADING_EDITOR);
        if ui.button(statics::EN_BTN_ADD_TARGET).clicked() {
            actions.push(EditorAction::AddTarget);
        }
        if doc.is_empty() {
            ui.weak(statics::EN_EDITOR_EMPTY);
        }
        for target in doc.targets() {
            ui.push_id(target.id, |ui| {
                Self::render_target(ui, target, indicator, actions, drag);
            });
            ui.add_space(4.0);
        }
    }
}

impl eframe::App for StyleOrganizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong(statics::EN_APP_TITLE);
                ui.separator();
                if ui.button(statics::EN_BTN_TOGGLE_THEME).clicked() {
                    self.theme_dark = !self.theme_dark;
                    if self.theme_dark {
                        ctx.set_visuals(egui::Visuals::dark());
                    } else {
                        ctx.set_visuals(egui::Visuals::light());
                    }
                }
            });
        });

        if let Some(notice) = self.session.notice().cloned() {
            egui::TopBottomPanel::top("notice_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    match notice {
                        Notice::Error(msg) => ui.colored_label(egui::Color32::RED, msg),
                        Notice::Success(msg) => {
                            ui.colored_label(egui::Color32::from_rgb(0, 160, 0), msg)
                        }
                    };
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(statics::EN_BTN_CLEAR).clicked() {
                            self.session.clear_notice();
                        }
                    });
                });
            });
        }

        let (pointer, released) =
            ctx.input(|i| (i.pointer.latest_pos(), i.pointer.any_released()));
        let mut drag = DragFrame {
            source: self.session.gesture().source(),
            pointer,
            hovered: None,
        };
        let mut actions = Vec::new();
        let mut load = false;
        let mut generate = false;
        let doc = self.session.document().clone();
        let indicator = self.session.drop_indicator();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(statics::EN_HEADING_INPUT);
                ui.add(
                    egui::TextEdit::multiline(&mut self.session.input_text)
                        .hint_text(statics::EN_HINT_INPUT)
                        .code_editor()
                        .desired_rows(8)
                        .desired_width(f32::INFINITY),
                );
                if ui.button(statics::EN_BTN_LOAD).clicked() {
                    load = true;
                }
                ui.separator();

                Self::render_editor(ui, &doc, indicator, &mut actions, &mut drag);
                ui.separator();

                ui.heading(statics::EN_HEADING_OUTPUT);
                if ui.button(statics::EN_BTN_GENERATE).clicked() {
                    generate = true;
                }
                let mut output = self.session.output_text.clone();
                ui.add(
                    egui::TextEdit::multiline(&mut output)
                        .hint_text(statics::EN_HINT_OUTPUT)
                        .code_editor()
                        .interactive(false)
                        .desired_rows(8)
                        .desired_width(f32::INFINITY),
                );
            });
        });

        for action in actions {
            Self::apply_action(&mut self.session, action);
        }

        if self.session.gesture().is_dragging() {
            match drag.hovered {
                Some((item, placement)) => self.session.drag_over(item, placement),
                None => self.session.drag_leave(),
            }
            if released {
                if drag.hovered.is_some() {
                    self.session.drop_dragged();
                } else {
                    self.session.drag_end();
                }
            }
            ctx.request_repaint();
        }

        if load {
            self.session.load_input();
        }
        if generate {
            self.session.generate_output(&mut EguiClipboard(ctx));
        }
    }
}
