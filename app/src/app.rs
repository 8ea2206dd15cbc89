//! Application state and UI for the generator window.

use std::path::Path;

use anyhow::Context as _;
use eframe::egui::{self, Button, Color32, DragValue, TextureHandle, TextureOptions};
use label_engine::image::RgbImage;
use label_engine::{
    save_image, LabelRequest, PhysicalSize, MAX_DIMENSION_MM, MIN_DIMENSION_MM,
};
use tracing::{error, info};

use crate::defaults::{DEFAULT_DIMENSION_MM, DEFAULT_FILE_NAME};
use crate::preview;

/// Outcome of the most recent action, shown under the buttons.
enum Status {
    Info(String),
    Error(String),
}

pub struct StudioApp {
    text: String,
    width_mm: f64,
    height_mm: f64,
    /// Last successfully generated image; replaced wholesale on each
    /// generation and read by the save action.
    rendered: Option<RgbImage>,
    texture: Option<TextureHandle>,
    status: Option<Status>,
}

impl Default for StudioApp {
    fn default() -> Self {
        Self {
            text: String::new(),
            width_mm: DEFAULT_DIMENSION_MM,
            height_mm: DEFAULT_DIMENSION_MM,
            rendered: None,
            texture: None,
            status: None,
        }
    }
}

impl StudioApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn can_save(&self) -> bool {
        self.rendered.is_some()
    }

    /// Render the current inputs into a new "last generated image".
    ///
    /// On failure the previous image (if any) is retained and the error is
    /// surfaced to the user.
    fn generate(&mut self, ctx: &egui::Context) {
        let size = PhysicalSize::new(self.width_mm, self.height_mm);
        let request = LabelRequest::new(self.text.clone(), size);

        match request.render() {
            Ok(img) => {
                info!(width = img.width(), height = img.height(), "QR label generated");
                // Nearest filtering keeps module edges crisp in the preview.
                let texture = ctx.load_texture(
                    "label-preview",
                    preview::color_image(&img),
                    TextureOptions::NEAREST,
                );
                self.status = Some(Status::Info(format!(
                    "Generated {}x{} px",
                    img.width(),
                    img.height()
                )));
                self.texture = Some(texture);
                self.rendered = Some(img);
            }
            Err(e) => {
                error!("Generation failed: {e}");
                self.status = Some(Status::Error(format!("Failed to generate QR code: {e}")));
            }
        }
    }

    /// Write the last generated image to `path`.
    ///
    /// Fails without touching the filesystem when nothing has been generated.
    fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let img = self
            .rendered
            .as_ref()
            .context("No QR code has been generated yet")?;
        save_image(img, path)?;
        Ok(())
    }

    fn save(&mut self) {
        if !self.can_save() {
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title("Warning")
                .set_description("Please generate a QR code first.")
                .show();
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .add_filter("BMP image", &["bmp"])
            .set_file_name(DEFAULT_FILE_NAME)
            .save_file()
        else {
            return;
        };

        match self.save_to(&path) {
            Ok(()) => {
                self.status = Some(Status::Info(format!("Saved to {}", path.display())));
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Info)
                    .set_title("Success")
                    .set_description(format!(
                        "QR code saved successfully to {}",
                        path.display()
                    ))
                    .show();
            }
            Err(e) => {
                error!("Save failed: {e:#}");
                self.status = Some(Status::Error(format!("Failed to save: {e}")));
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Error)
                    .set_title("Error")
                    .set_description("Failed to save the QR code.")
                    .show();
            }
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("QR Code Generator");
            ui.add_space(8.0);

            egui::Grid::new("inputs")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Text or URL:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.text).desired_width(f32::INFINITY),
                    );
                    ui.end_row();

                    ui.label("Width (mm):");
                    ui.add(
                        DragValue::new(&mut self.width_mm)
                            .range(MIN_DIMENSION_MM..=MAX_DIMENSION_MM)
                            .speed(1.0),
                    );
                    ui.end_row();

                    ui.label("Height (mm):");
                    ui.add(
                        DragValue::new(&mut self.height_mm)
                            .range(MIN_DIMENSION_MM..=MAX_DIMENSION_MM)
                            .speed(1.0),
                    );
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Generate QR Code").clicked() {
                    self.generate(ctx);
                }
                if ui
                    .add_enabled(self.can_save(), Button::new("Save QR Code"))
                    .clicked()
                {
                    self.save();
                }
            });

            if let Some(status) = &self.status {
                ui.add_space(4.0);
                match status {
                    Status::Info(msg) => ui.label(msg.as_str()),
                    Status::Error(msg) => ui.colored_label(Color32::RED, msg.as_str()),
                };
            }

            ui.separator();
            if let (Some(texture), Some(img)) = (&self.texture, &self.rendered) {
                let size = preview::fit_size(img.width(), img.height(), ui.available_size());
                ui.centered_and_justified(|ui| {
                    ui.image((texture.id(), size));
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_is_disabled_before_first_generation() {
        let app = StudioApp::default();
        assert!(!app.can_save());
    }

    #[test]
    fn save_with_no_image_writes_nothing() {
        let app = StudioApp::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qr.png");

        assert!(app.save_to(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn generated_image_can_be_saved() {
        let mut app = StudioApp::default();
        app.rendered = Some(
            LabelRequest::new("HELLO", PhysicalSize::new(30.0, 30.0))
                .render()
                .unwrap(),
        );
        assert!(app.can_save());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qr.png");
        app.save_to(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn defaults_match_the_input_ranges() {
        let app = StudioApp::default();
        assert!(app.width_mm >= MIN_DIMENSION_MM && app.width_mm <= MAX_DIMENSION_MM);
        assert!(app.height_mm >= MIN_DIMENSION_MM && app.height_mm <= MAX_DIMENSION_MM);
    }
}
