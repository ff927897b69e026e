#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use star_board::{
    info_panel_by_count, new_star_button_view, show_info_panel, BoardInput, InfoPanelView,
    MemoView, NewStarButton, PartialEqProps, StarBoard, StarTiles,
};

const STARS: &str = r#"[
    {"id": "sol", "age": 46},
    {"id": "vega", "age": 4, "offset": {"x": -160.0, "y": -90.0}},
    {"id": "rigel", "age": 8, "offset": {"x": 140.0, "y": 60.0}},
    {"id": "deneb", "age": 10, "offset": {"x": -60.0, "y": 120.0}}
]"#;

const TILE_SIZE: egui::Vec2 = egui::vec2(56.0, 24.0);

struct App {
    board: StarBoard,
    info: InfoPanelView,
    tiles: StarTiles,
    button: MemoView<(), NewStarButton, PartialEqProps>,
    add_open: bool,
    new_age: String,
}

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_title("star_board demo"),
        ..Default::default()
    };

    eframe::run_native(
        "star_board demo",
        options,
        Box::new(|_cc| Ok(Box::new(App::default()))),
    )
}

impl Default for App {
    fn default() -> Self {
        let records = star_board::parse_records(STARS).unwrap_or_else(|err| {
            log::error!("{err}");
            Vec::new()
        });

        Self {
            // The board is measured on the first frame.
            board: StarBoard::initialize(records, 0.0, 0.0),
            info: info_panel_by_count(),
            tiles: StarTiles::default(),
            button: new_star_button_view(),
            add_open: false,
            new_age: String::new(),
        }
    }
}

impl App {
    fn board_ui(&mut self, ui: &mut egui::Ui) {
        let board_rect = ui.max_rect();
        let origin = board_rect.min.to_vec2();
        self.board.handle(BoardInput::Resized {
            width: board_rect.width(),
            height: board_rect.height(),
        });

        self.tiles.update(self.board.snapshot());

        let mut inputs = Vec::new();
        for tile in self.tiles.tiles() {
            let star_position = egui::pos2(tile.left, tile.top);
            let rect = egui::Rect::from_min_size(star_position + origin, TILE_SIZE);
            let response = ui.put(
                rect,
                egui::Label::new(tile.label.as_str())
                    .selectable(false)
                    .sense(egui::Sense::click_and_drag()),
            );

            if response.double_clicked() {
                inputs.push(BoardInput::DoubleClick {
                    star: tile.id.clone(),
                });
            } else if response.drag_started()
                && let Some(pointer) = response.interact_pointer_pos()
            {
                inputs.push(BoardInput::PointerDown {
                    star: tile.id.clone(),
                    pointer: pointer - origin,
                    star_position,
                });
            }
            if response.drag_stopped() {
                inputs.push(BoardInput::PointerUp);
            }
        }

        if self.board.is_dragging()
            && let Some(pointer) = ui.ctx().input(|i| i.pointer.latest_pos())
        {
            inputs.push(BoardInput::PointerMove {
                pointer: pointer - origin,
            });
        }

        self.board.handle_all(inputs);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("star_board_info").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let panel = show_info_panel(&mut self.info, self.board.snapshot());
                ui.vertical(|ui| {
                    for line in panel.lines() {
                        ui.label(line);
                    }
                });

                let button = self.button.show((), |_| NewStarButton::default());
                if ui.button(button.label).clicked() {
                    self.add_open = true;
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| self.board_ui(ui));

        if self.add_open {
            let mut open = true;
            egui::Window::new("New star")
                .open(&mut open)
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label("Age:");
                    ui.text_edit_singleline(&mut self.new_age);
                    if ui.button("Add").clicked() {
                        let age = std::mem::take(&mut self.new_age);
                        self.board.handle(BoardInput::AddStar { age: age.into() });
                        self.add_open = false;
                    }
                });
            self.add_open &= open;
        }
    }
}
